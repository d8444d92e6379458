use crate::core::prelude::*;
use crate::game::object::Object;
use crate::resource::sprite::FrameSpec;

/// Travels in a straight line until it leaves the room. Does not take part in collision
/// checks.
#[derive(Clone, Debug)]
pub struct Projectile {
    object: Object,
    direction: Vec2,
}

impl Projectile {
    /// `direction` should be a unit vector.
    pub fn new(position: Vec2, direction: Vec2, frames: FrameSpec) -> Self {
        let mut object = Object::single(position, frames);
        object.velocity = Vec2::splat(PROJECTILE_SPEED);
        Self { object, direction }
    }

    pub fn object(&self) -> &Object {
        &self.object
    }
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn step(&mut self) {
        let delta = self.direction.component_wise(self.object.velocity);
        self.object.update_position(delta);
        self.object.advance_animation(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_along_direction() {
        let fireball = FrameSpec::new(1, [0, 0], 8, 8);
        let mut proj = Projectile::new(Vec2::splat(10.), Vec2::right(), fireball);
        proj.step();
        proj.step();
        assert_eq!(proj.object().position(), Vec2 { x: 14., y: 10. });
        assert_eq!(proj.object().centre(), Vec2 { x: 18., y: 14. });
        assert_eq!(proj.object().count(), 2);
    }
}
