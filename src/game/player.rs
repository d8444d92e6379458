use crate::core::prelude::*;
use crate::core::update;
use crate::game::object::{Object, Orientation};
use crate::game::projectile::Projectile;
use crate::game::room::Room;
use crate::resource::sprite::{FrameSpec, SpriteSet};
use crate::resource::{AssetRegistry, WIZARD_FRONT, WIZARD_SIDE};

#[derive(Clone, Debug)]
pub struct PlayerCharacter {
    object: Object,
}

impl PlayerCharacter {
    pub fn new(position: Vec2, assets: &AssetRegistry) -> Result<Self> {
        let front = assets.get(WIZARD_FRONT)?;
        let side = assets.get(WIZARD_SIDE)?;
        let sprites = SpriteSet::default()
            .with(Orientation::Front, front)
            .with(Orientation::Back, front)
            .with(Orientation::Left, side)
            .with(Orientation::Right, side);
        Ok(Self {
            object: Object::new(position, sprites)?,
        })
    }

    pub fn object(&self) -> &Object {
        &self.object
    }
    pub(crate) fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }

    /// Moves according to `intent`, staying inside `room` and out of `others`, and returns
    /// the displacement actually applied.
    ///
    /// Relies on this tick's collision pass having already run.
    pub fn move_with(
        &mut self,
        intent: &MovementIntent,
        camera: &Camera,
        room: &Room,
        others: &[Aabb],
    ) -> Vec2 {
        self.object.velocity = intent.velocity();
        let delta = intent.direction().component_wise(self.object.velocity);
        let delta = update::resolve_movement(&mut self.object, delta, room, others);
        self.object.advance_animation(delta);

        if let Some(cursor) = intent.cursor {
            let facing = camera.screen_to_world(cursor) - self.object.centre();
            self.object.face_towards(facing);
        } else if delta != Vec2::zero() {
            self.object.face_towards(delta);
        }
        delta
    }

    /// Fires from the player's position along `direction`. Returns `None` if `direction`
    /// cannot be normalised.
    pub fn fire_projectile(&self, direction: Vec2, frames: FrameSpec) -> Option<Projectile> {
        let Some(direction) = direction.try_normed() else {
            crate::warn_every_seconds!(
                NAN_WARNING_INTERVAL_SECONDS,
                "{}: not firing along {direction}",
                self.object.id()
            );
            return None;
        };
        Some(Projectile::new(self.object.position(), direction, frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::object::tests::square;
    use crate::resource::FIREBALL;

    fn setup(position: Vec2) -> (PlayerCharacter, Camera, AssetRegistry) {
        let assets = AssetRegistry::with_builtin().unwrap();
        let player = PlayerCharacter::new(position, &assets).unwrap();
        let camera = Camera::new(Vec2 {
            x: SCREEN_WIDTH,
            y: SCREEN_HEIGHT,
        });
        (player, camera, assets)
    }

    #[test]
    fn walks_and_sprints() {
        let (mut player, camera, _) = setup(Vec2::splat(200.));
        let room = Room::new(Vec2::zero(), Vec2::splat(1000.));
        let delta = player.move_with(&MovementIntent::towards(Vec2::right()), &camera, &room, &[]);
        assert_eq!(delta, Vec2::right());
        assert_eq!(player.object().orientation(), Orientation::Right);

        let intent = MovementIntent::towards(Vec2 { x: -1., y: 1. }).sprinting();
        let delta = player.move_with(&intent, &camera, &room, &[]);
        assert_eq!(delta, Vec2 { x: -2., y: 2. });
        assert_eq!(player.object().position(), Vec2 { x: 199., y: 202. });
        assert_eq!(player.object().count(), 2);

        player.move_with(&MovementIntent::idle(), &camera, &room, &[]);
        assert_eq!(player.object().count(), 0);
        assert_eq!(player.object().velocity, Vec2::one());
    }

    #[test]
    fn faces_the_cursor() {
        let (mut player, mut camera, _) = setup(Vec2::splat(500.));
        camera.follow(player.object().centre());
        let room = Room::new(Vec2::zero(), Vec2::splat(1000.));
        let above = camera.world_to_screen(player.object().centre() + Vec2::up() * 100.);
        let intent = MovementIntent::idle().firing_at(above);
        player.move_with(&intent, &camera, &room, &[]);
        assert_eq!(player.object().orientation(), Orientation::Back);
    }

    #[test]
    fn blocked_by_obstacle_on_tagged_axis() {
        let (mut player, camera, _) = setup(Vec2::splat(100.));
        let room = Room::new(Vec2::zero(), Vec2::splat(1000.));
        // Player is 24x24: overlaps the crate by 1 along x and 12 along y.
        let mut obstacle = square(Vec2 { x: 123., y: 112. }, 24);
        let result = player.object().is_colliding_external(&obstacle);
        result.apply_to(player.object_mut().aabb_mut());
        result.apply_to(obstacle.aabb_mut());
        assert!(player.object().aabb().collision_direction().x);

        let others = [*obstacle.aabb()];
        let right = MovementIntent::towards(Vec2::right());
        let delta = player.move_with(&right, &camera, &room, &others);
        assert_eq!(delta, Vec2::zero());
        let down = MovementIntent::towards(Vec2::down());
        let delta = player.move_with(&down, &camera, &room, &others);
        assert_eq!(delta, Vec2::down());
    }

    #[test]
    fn fire_projectile() {
        let (player, _, assets) = setup(Vec2::splat(30.));
        let fireball = assets.get(FIREBALL).unwrap();
        let proj = player.fire_projectile(Vec2 { x: 0., y: 3. }, fireball).unwrap();
        assert_eq!(proj.direction(), Vec2::down());
        assert_eq!(proj.object().position(), Vec2::splat(30.));
        assert!(player.fire_projectile(Vec2::zero(), fireball).is_none());
    }
}
