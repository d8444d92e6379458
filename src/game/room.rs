use crate::core::prelude::*;
use crate::game::level::RoomId;
use crate::game::object::Object;
use crate::resource::{AssetRegistry, CRATE, DOOR};
use crate::util::collision;

/// A passage to another room. Takes part in collision checks like any other object.
#[derive(Clone, Debug)]
pub struct Door {
    object: Object,
    to: RoomId,
}

impl Door {
    pub fn new(position: Vec2, to: RoomId, assets: &AssetRegistry) -> Result<Self> {
        Ok(Self {
            object: Object::single(position, assets.get(DOOR)?),
            to,
        })
    }

    pub fn to(&self) -> RoomId {
        self.to
    }
    pub fn object(&self) -> &Object {
        &self.object
    }
    pub(crate) fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}

impl Collidable for Door {
    fn bounding_box(&self) -> &Aabb {
        self.object.aabb()
    }
}

/// A rectangular room enclosed by walls of thickness `stroke_width`.
///
/// The walls are centred on the room's outline, so the playable interior starts half a wall
/// in from each edge.
#[derive(Clone, Debug)]
pub struct Room {
    position: Vec2,
    dimensions: Vec2,
    stroke_width: f64,
    is_boss: bool,
    doors: Vec<Door>,
    obstacles: Vec<Object>,
}

impl Room {
    pub fn new(position: Vec2, dimensions: Vec2) -> Self {
        Self {
            position,
            dimensions,
            stroke_width: DEFAULT_STROKE_WIDTH,
            is_boss: false,
            doors: Vec::new(),
            obstacles: Vec::new(),
        }
    }
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
    #[must_use]
    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }
    pub fn is_boss(&self) -> bool {
        self.is_boss
    }

    /// The outline of the room, walls included.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.position, self.position + self.dimensions)
    }
    /// [`Room::bounds`] as a box. Negative dimensions are measured back from `position`.
    pub fn outline(&self) -> Aabb {
        let (start, end) = self.bounds();
        Aabb::new(start.component_min(end), start.component_max(end))
    }

    /// The range of top-left positions an object of the given extent may occupy.
    /// In a room too small for the object, `end` collapses onto `start`.
    pub fn interior(&self, extent: Vec2) -> (Vec2, Vec2) {
        let (start, end) = self.bounds();
        let half_stroke = Vec2::splat(self.stroke_width / 2.);
        let start = start + half_stroke;
        let end = (end - half_stroke - extent).component_max(start);
        (start, end)
    }

    /// Returns the part of `delta` that keeps `object` inside the room.
    pub fn clamp_to_room(&self, object: &Object, delta: Vec2) -> Vec2 {
        let (start, end) = self.interior(object.extent());
        let mut next = object.position() + delta;
        if next.x < start.x {
            next.x = start.x;
        } else if next.x >= end.x {
            next.x = end.x;
        }
        if next.y < start.y {
            next.y = start.y;
        } else if next.y >= end.y {
            next.y = end.y;
        }
        next - object.position()
    }

    /// Whether `object` lies within the walls.
    pub fn contains(&self, object: &Object) -> bool {
        let (start, end) = self.interior(object.extent());
        let inner = Aabb::new(start, end + object.extent());
        collision::internal_overlap(object.aabb(), &inner).contained
    }

    pub fn add_door(&mut self, door: Door) {
        self.doors.push(door);
    }
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn add_obstacle(&mut self, position: Vec2, assets: &AssetRegistry) -> Result<ObjectId> {
        let obstacle = Object::single(position, assets.get(CRATE)?);
        let id = obstacle.id();
        self.obstacles.push(obstacle);
        Ok(id)
    }
    pub fn obstacles(&self) -> &[Object] {
        &self.obstacles
    }

    /// Everything in the room that blocks movement.
    pub fn collidables(&self) -> impl Iterator<Item = &Object> {
        self.doors
            .iter()
            .map(Door::object)
            .chain(self.obstacles.iter())
    }
    pub(crate) fn collidables_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.doors
            .iter_mut()
            .map(Door::object_mut)
            .chain(self.obstacles.iter_mut())
    }
}
