pub mod assert;
pub mod collision;
pub mod linalg;
pub mod log;

pub mod gg_err {
    use anyhow::Result;
    use tracing::error;

    fn log_error(e: &anyhow::Error) {
        error!("{}", e);
        e.chain()
            .skip(1)
            .for_each(|cause| error!("caused by: {}", cause));
    }

    pub fn log_err_and_ignore<T>(result: Result<T>) {
        if let Err(e) = result {
            log_error(&e);
        }
    }
}

pub mod gg_float {
    use crate::util::linalg::Vec2;
    use num_traits::Zero;
    use std::num::FpCategory;

    pub trait GgFloat {
        fn is_finite(&self) -> bool;
    }

    impl GgFloat for f64 {
        fn is_finite(&self) -> bool {
            is_finite(*self)
        }
    }

    impl GgFloat for Vec2 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y)
        }
    }

    /// Unlike [`f64::is_finite`], rejects subnormals as well as NaN and infinities.
    pub fn is_finite(x: f64) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }
}

pub mod gg_range {
    use std::ops::Range;

    /// Length of the intersection of two closed intervals. Negative when they are disjoint.
    pub fn overlap_len_f64(r1: &Range<f64>, r2: &Range<f64>) -> f64 {
        f64::min(r1.end, r2.end) - f64::max(r1.start, r2.start)
    }
}

#[derive(
    Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct UnorderedPair<T: Copy + Clone + Ord + PartialOrd + Eq + PartialEq>(T, T);

impl<T: Copy + Clone + Ord + PartialOrd + Eq + PartialEq> UnorderedPair<T> {
    pub fn new(a: T, b: T) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
    pub fn new_distinct(a: T, b: T) -> Option<Self> {
        if a == b { None } else { Some(Self::new(a, b)) }
    }

    pub fn fst(&self) -> T {
        self.0
    }
    pub fn snd(&self) -> T {
        self.1
    }
    pub fn contains(&self, value: T) -> bool {
        self.fst() == value || self.snd() == value
    }
}

impl<T: Copy + Clone + Ord + PartialOrd + Eq + PartialEq> From<(T, T)> for UnorderedPair<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}
