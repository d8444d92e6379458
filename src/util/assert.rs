pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if lhs > rhs {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
            );
        }
    }};
    ($lhs:expr, $rhs:expr, $extra:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if lhs > rhs {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
                $extra
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_le;

#[cfg(test)]
mod tests {
    #[test]
    fn check_le_passes_when_ordered() {
        check_le!(1.0, 1.0);
        check_le!(-2.5, 0.0, "ordered");
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn check_le_panics_when_greater() {
        check_le!(2.0, 1.0, "min must not exceed max");
    }
}
