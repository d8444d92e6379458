use crate::core::config::EPSILON;
use crate::util::gg_float;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector of `f64` coordinates, in screen orientation (y increases downward).
///
/// Every operation returns a new value; nothing mutates in place except the `*Assign` operators.
///
/// # Examples
///
/// ```
/// use dungeon::util::linalg::Vec2;
///
/// let v = Vec2 { x: 3.0, y: 4.0 };
/// assert_eq!(v.len(), 5.0);
/// assert_eq!(v + Vec2::one(), Vec2 { x: 4.0, y: 5.0 });
/// ```
#[derive(Default, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn right() -> Vec2 {
        Vec2 { x: 1., y: 0. }
    }
    pub fn up() -> Vec2 {
        Vec2 { x: 0., y: -1. }
    }
    pub fn left() -> Vec2 {
        Vec2 { x: -1., y: 0. }
    }
    pub fn down() -> Vec2 {
        Vec2 { x: 0., y: 1. }
    }
    pub fn one() -> Vec2 {
        Vec2 { x: 1., y: 1. }
    }
    pub fn zero() -> Vec2 {
        Vec2 { x: 0., y: 0. }
    }
    pub fn splat(v: f64) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    pub fn len_squared(&self) -> f64 {
        self.dot(*self)
    }
    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// There is no special case for the zero vector: its components come out as NaN. Use
    /// [`try_normed`](Vec2::try_normed) where a zero-length input is possible.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        *self / self.len()
    }

    /// Like [`normed`](Vec2::normed), but returns `None` instead of a non-finite vector.
    #[must_use]
    pub fn try_normed(&self) -> Option<Vec2> {
        let rv = self.normed();
        if gg_float::is_finite(rv.x) && gg_float::is_finite(rv.y) {
            Some(Vec2 {
                x: gg_float::force_positive_zero(rv.x),
                y: gg_float::force_positive_zero(rv.y),
            })
        } else {
            None
        }
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
    #[must_use]
    pub fn component_max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
    #[must_use]
    pub fn component_min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Angle between this vector and the positive x-axis, in radians, in `(-π, π]`.
    /// Positive angles are clockwise on screen, since y points down.
    pub fn x_axis_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "vec({0:.2$}, {1:.2$})", self.x, self.y, p)
        } else {
            write!(f, "vec({}, {})", self.x, self.y)
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3x3 matrix acting on 2D points in homogeneous coordinates.
///
/// Composition reads right to left: `b * a` applies `a` first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat3x3 {
    pub xx: f64,
    pub xy: f64,
    pub xw: f64,
    pub yx: f64,
    pub yy: f64,
    pub yw: f64,
    pub wx: f64,
    pub wy: f64,
    pub ww: f64,
}

impl Mat3x3 {
    pub fn translation(dx: f64, dy: f64) -> Mat3x3 {
        Mat3x3 {
            xw: dx,
            yw: dy,
            ..Mat3x3::one()
        }
    }
    pub fn translation_vec2(vec2: Vec2) -> Mat3x3 {
        Self::translation(vec2.x, vec2.y)
    }
    pub fn scale(sx: f64, sy: f64) -> Mat3x3 {
        Mat3x3 {
            xx: sx,
            yy: sy,
            ..Mat3x3::one()
        }
    }
    /// Clockwise on screen, since y points down.
    pub fn rotation(radians: f64) -> Mat3x3 {
        Mat3x3 {
            xx: f64::cos(radians),
            xy: -f64::sin(radians),
            yx: f64::sin(radians),
            yy: f64::cos(radians),
            ..Mat3x3::one()
        }
    }

    pub fn det(&self) -> f64 {
        self.xx * (self.yy * self.ww - self.yw * self.wy)
            - self.xy * (self.yx * self.ww - self.yw * self.wx)
            + self.xw * (self.yx * self.wy - self.yy * self.wx)
    }

    /// Returns `None` if the determinant is zero or not finite.
    pub fn inverse(&self) -> Option<Mat3x3> {
        let det = self.det();
        if det.is_zero() || !det.is_finite() {
            return None;
        }
        let adjugate = Mat3x3 {
            xx: self.yy * self.ww - self.yw * self.wy,
            xy: self.xw * self.wy - self.xy * self.ww,
            xw: self.xy * self.yw - self.xw * self.yy,
            yx: self.yw * self.wx - self.yx * self.ww,
            yy: self.xx * self.ww - self.xw * self.wx,
            yw: self.xw * self.yx - self.xx * self.yw,
            wx: self.yx * self.wy - self.yy * self.wx,
            wy: self.xy * self.wx - self.xx * self.wy,
            ww: self.xx * self.yy - self.xy * self.yx,
        };
        Some(adjugate * (1. / det))
    }

    pub fn almost_eq(&self, rhs: Mat3x3) -> bool {
        [
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.xw - rhs.xw,
            self.yx - rhs.yx,
            self.yy - rhs.yy,
            self.yw - rhs.yw,
            self.wx - rhs.wx,
            self.wy - rhs.wy,
            self.ww - rhs.ww,
        ]
        .into_iter()
        .all(|d| d.abs() < EPSILON)
    }
}

impl One for Mat3x3 {
    fn one() -> Self {
        Mat3x3 {
            xx: 1.,
            xy: 0.,
            xw: 0.,
            yx: 0.,
            yy: 1.,
            yw: 0.,
            wx: 0.,
            wy: 0.,
            ww: 1.,
        }
    }
}

impl Mul<f64> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: f64) -> Self::Output {
        Mat3x3 {
            xx: self.xx * rhs,
            xy: self.xy * rhs,
            xw: self.xw * rhs,
            yx: self.yx * rhs,
            yy: self.yy * rhs,
            yw: self.yw * rhs,
            wx: self.wx * rhs,
            wy: self.wy * rhs,
            ww: self.ww * rhs,
        }
    }
}

impl Mul<Vec2> for Mat3x3 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.xx * rhs.x + self.xy * rhs.y + self.xw,
            y: self.yx * rhs.x + self.yy * rhs.y + self.yw,
        }
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            xx: self.xx * rhs.xx + self.xy * rhs.yx + self.xw * rhs.wx,
            xy: self.xx * rhs.xy + self.xy * rhs.yy + self.xw * rhs.wy,
            xw: self.xx * rhs.xw + self.xy * rhs.yw + self.xw * rhs.ww,
            yx: self.yx * rhs.xx + self.yy * rhs.yx + self.yw * rhs.wx,
            yy: self.yx * rhs.xy + self.yy * rhs.yy + self.yw * rhs.wy,
            yw: self.yx * rhs.xw + self.yy * rhs.yw + self.yw * rhs.ww,
            wx: self.wx * rhs.xx + self.wy * rhs.yx + self.ww * rhs.wx,
            wy: self.wx * rhs.xy + self.wy * rhs.yy + self.ww * rhs.wy,
            ww: self.wx * rhs.xw + self.wy * rhs.yw + self.ww * rhs.ww,
        }
    }
}
