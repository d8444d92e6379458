use crate::core::prelude::*;
use crate::resource::sprite::{FrameSpec, SpriteSet};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Front,
    Back,
    Left,
    Right,
    /// Used for sprites that look the same from every direction.
    All,
}

impl Orientation {
    /// Screen-space angle: positive y points down, so 90 degrees faces the viewer.
    pub fn from_angle_degrees(degrees: f64) -> Self {
        if (-45.0..=45.0).contains(&degrees) {
            Orientation::Right
        } else if (45.0..=135.0).contains(&degrees) {
            Orientation::Front
        } else if degrees >= 135.0 || degrees <= -135.0 {
            Orientation::Left
        } else {
            Orientation::Back
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Front => write!(f, "Front"),
            Orientation::Back => write!(f, "Back"),
            Orientation::Left => write!(f, "Left"),
            Orientation::Right => write!(f, "Right"),
            Orientation::All => write!(f, "All"),
        }
    }
}

/// A positioned entity with a bounding box.
///
/// `position` is the top-left corner of the box. Position, centre and box only ever move
/// together, through [`Object::update_position`].
#[derive(Clone, Debug)]
pub struct Object {
    id: ObjectId,
    position: Vec2,
    centre: Vec2,
    /// Per-axis speed multiplier.
    pub velocity: Vec2,
    /// Radians.
    pub rotation: f64,
    count: u32,
    orientation: Orientation,
    aabb: Aabb,
    sprites: SpriteSet,
}

impl Object {
    pub fn new(position: Vec2, sprites: SpriteSet) -> Result<Self> {
        let extent = sprites.reference_frame()?.extent();
        let orientation = if sprites.has_all() {
            Orientation::All
        } else {
            Orientation::Front
        };
        Ok(Self {
            id: ObjectId::next(),
            position,
            centre: position + extent / 2.,
            velocity: Vec2::one(),
            rotation: 0.,
            count: 0,
            orientation,
            aabb: Aabb::from_top_left(position, extent),
            sprites,
        })
    }
    /// An object drawn with the same frames from every direction.
    pub fn single(position: Vec2, frames: FrameSpec) -> Self {
        let extent = frames.extent();
        Self {
            id: ObjectId::next(),
            position,
            centre: position + extent / 2.,
            velocity: Vec2::one(),
            rotation: 0.,
            count: 0,
            orientation: Orientation::All,
            aabb: Aabb::from_top_left(position, extent),
            sprites: SpriteSet::single(frames),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn centre(&self) -> Vec2 {
        self.centre
    }
    pub fn extent(&self) -> Vec2 {
        self.aabb.extent()
    }
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
    pub(crate) fn aabb_mut(&mut self) -> &mut Aabb {
        &mut self.aabb
    }
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }
    /// Animation frame counter; reset whenever the object stands still.
    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn current_frame(&self) -> Option<FrameSpec> {
        self.sprites.get(self.orientation)
    }
    pub fn current_frame_origin(&self) -> Option<[u32; 2]> {
        self.current_frame().map(|frames| frames.frame_origin(self.count))
    }

    pub fn update_position(&mut self, delta: Vec2) {
        self.position += delta;
        self.centre += delta;
        self.aabb.update_position(delta);
    }

    pub fn advance_animation(&mut self, delta: Vec2) {
        if delta == Vec2::zero() {
            self.count = 0;
        } else {
            self.count = self.count.wrapping_add(1);
        }
    }

    /// Turns to face along `direction`. Directions without a defined angle (zero or NaN)
    /// leave the orientation unchanged.
    pub fn face_towards(&mut self, direction: Vec2) {
        if self.sprites.has_all() {
            return;
        }
        let Some(direction) = direction.try_normed() else {
            crate::warn_every_seconds!(
                NAN_WARNING_INTERVAL_SECONDS,
                "{}: ignoring facing direction {direction}",
                self.id
            );
            return;
        };
        self.orientation = Orientation::from_angle_degrees(direction.x_axis_angle().to_degrees());
    }
}

impl Collidable for Object {
    fn bounding_box(&self) -> &Aabb {
        &self.aabb
    }
}
