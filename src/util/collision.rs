use crate::core::prelude::*;
use crate::util::gg_range;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Which axes of motion are blocked. The two flags are independent: a box touching
/// several others can end up blocked along both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionDirection {
    pub x: bool,
    pub y: bool,
}

impl CollisionDirection {
    pub fn blocking(axis: Axis) -> Self {
        let mut rv = Self::default();
        rv.block(axis);
        rv
    }

    pub fn block(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
        }
    }
    pub fn is_blocked(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
    pub fn is_empty(&self) -> bool {
        !self.x && !self.y
    }

    /// Zeroes the components of `delta` along blocked axes.
    #[must_use]
    pub fn restrict(&self, delta: Vec2) -> Vec2 {
        Vec2 {
            x: if self.x { 0. } else { delta.x },
            y: if self.y { 0. } else { delta.y },
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionState {
    pub is_colliding: bool,
    pub direction: CollisionDirection,
}

/// An axis-aligned bounding box given by its top-left (`min`) and bottom-right (`max`) corners.
///
/// Besides its bounds, an [`Aabb`] carries the collision state computed for it during the
/// current tick. The state is only ever written through [`OverlapResult::apply_to`],
/// [`ContainmentResult::apply_to`] and [`Aabb::reset_collision_state`]; the overlap queries
/// themselves are pure.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
    state: CollisionState,
}

impl Aabb {
    /// # Panics
    /// If `min` exceeds `max` along either axis.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        check_le!(min.x, max.x, "Aabb: inverted x bounds");
        check_le!(min.y, max.y, "Aabb: inverted y bounds");
        Self {
            min,
            max,
            state: CollisionState::default(),
        }
    }
    pub fn from_top_left(top_left: Vec2, extent: Vec2) -> Self {
        Self::new(top_left, top_left + extent)
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }
    pub fn max(&self) -> Vec2 {
        self.max
    }
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }
    pub fn centre(&self) -> Vec2 {
        self.min + self.extent() / 2.
    }

    pub fn update_position(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }
    /// A copy moved by `delta`, keeping the current collision state.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Aabb {
        let mut rv = *self;
        rv.update_position(delta);
        rv
    }

    pub fn is_colliding(&self) -> bool {
        self.state.is_colliding
    }
    pub fn collision_direction(&self) -> CollisionDirection {
        self.state.direction
    }
    pub fn collision_state(&self) -> CollisionState {
        self.state
    }

    pub fn reset_collision_state(&mut self) {
        self.state = CollisionState::default();
    }
    pub(crate) fn set_collision_state(&mut self, state: CollisionState) {
        self.state = state;
    }
}

impl Display for Aabb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Min: ({:.2}, {:.2}), Max: ({:.2}, {:.2})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapResult {
    pub overlaps: bool,
    /// The axis along which further motion is blocked. `None` when the boxes only touch.
    pub axis: Option<Axis>,
}

impl OverlapResult {
    pub fn apply_to(&self, aabb: &mut Aabb) {
        if self.overlaps {
            aabb.state.is_colliding = true;
            if let Some(axis) = self.axis {
                aabb.state.direction.block(axis);
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainmentResult {
    /// True while the inner box lies entirely within the outer one.
    pub contained: bool,
}

impl ContainmentResult {
    pub fn apply_to(&self, aabb: &mut Aabb) {
        if self.contained {
            aabb.state.is_colliding = true;
        }
    }
}

/// Tests whether `a`, which is outside `b`, has come into contact with it.
///
/// Edges that exactly touch count as overlapping. When the boxes interpenetrate on both axes,
/// the axis to block is the one with the *smaller* penetration: a box that is deeper along x
/// than along y gets stopped in y. Equal penetration blocks y.
pub fn external_overlap(a: &Aabb, b: &Aabb) -> OverlapResult {
    if a.max.x < b.min.x || a.min.x > b.max.x {
        return OverlapResult::default();
    }
    if a.max.y < b.min.y || a.min.y > b.max.y {
        return OverlapResult::default();
    }

    let overlap_x = gg_range::overlap_len_f64(&(a.min.x..a.max.x), &(b.min.x..b.max.x));
    let overlap_y = gg_range::overlap_len_f64(&(a.min.y..a.max.y), &(b.min.y..b.max.y));
    let axis = if overlap_x > 0. && overlap_y > 0. {
        if overlap_y > overlap_x {
            Some(Axis::X)
        } else {
            Some(Axis::Y)
        }
    } else {
        None
    };
    OverlapResult {
        overlaps: true,
        axis,
    }
}

/// Tests whether `a`, which is expected to stay inside `b`, still does.
///
/// Note the polarity: this returns `contained: true` while `a` is inside `b` (edges touching
/// included), and `false` once any edge of `a` has crossed the matching edge of `b`.
pub fn internal_overlap(a: &Aabb, b: &Aabb) -> ContainmentResult {
    let broken = a.min.x < b.min.x || a.max.x > b.max.x || a.min.y < b.min.y || a.max.y > b.max.y;
    ContainmentResult { contained: !broken }
}

/// Anything with a bounding box that takes part in collision checks.
pub trait Collidable {
    fn bounding_box(&self) -> &Aabb;

    /// See [`internal_overlap`].
    fn is_colliding_internal<C: Collidable + ?Sized>(&self, other: &C) -> ContainmentResult {
        internal_overlap(self.bounding_box(), other.bounding_box())
    }
    /// See [`external_overlap`].
    fn is_colliding_external<C: Collidable + ?Sized>(&self, other: &C) -> OverlapResult {
        external_overlap(self.bounding_box(), other.bounding_box())
    }
}

impl Collidable for Aabb {
    fn bounding_box(&self) -> &Aabb {
        self
    }
}
