use crate::core::prelude::*;
use crate::game::object::Object;
use crate::game::room::Room;
use crate::util::collision::external_overlap;

pub mod collision;

/// Works out how far `object` may actually move along `delta` and moves it that far.
///
/// The delta is first clamped to the room. If the collision pass tagged `object` as colliding,
/// the clamped move is tried against every box in `others`; if it would overlap any of them,
/// the blocked axes are zeroed. The result is applied once and returned.
pub fn resolve_movement(object: &mut Object, delta: Vec2, room: &Room, others: &[Aabb]) -> Vec2 {
    let mut delta = room.clamp_to_room(object, delta);
    if object.aabb().is_colliding() {
        let moved = object.aabb().translated(delta);
        if others
            .iter()
            .any(|other| external_overlap(&moved, other).overlaps)
        {
            delta = object.aabb().collision_direction().restrict(delta);
        }
    }
    object.update_position(delta);
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::object::tests::square;
    use crate::util::collision::CollisionState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn unobstructed_move_is_applied() {
        let room = Room::new(Vec2::zero(), Vec2::splat(100.)).with_stroke_width(0.);
        let mut obj = square(Vec2::splat(45.), 10);
        let delta = resolve_movement(&mut obj, Vec2::splat(10.), &room, &[]);
        assert_eq!(delta, Vec2::splat(10.));
        assert_eq!(obj.position(), Vec2::splat(55.));
        assert_eq!(obj.aabb().min(), obj.position());

        let delta = resolve_movement(&mut obj, Vec2::splat(100.), &room, &[]);
        assert_eq!(delta, Vec2::splat(35.));
        assert_eq!(obj.position(), Vec2::splat(90.));
        assert_eq!(obj.aabb().max(), Vec2::splat(100.));
    }

    #[test]
    fn colliding_object_is_restricted_only_when_move_still_overlaps() {
        let room = Room::new(Vec2::zero(), Vec2::splat(200.)).with_stroke_width(0.);
        let mut obj = square(Vec2::splat(50.), 10);
        let wall = square(Vec2 { x: 60., y: 40. }, 30);
        external_overlap(obj.aabb(), wall.aabb()).apply_to(obj.aabb_mut());
        // Touching along x only: colliding, but nothing blocked.
        assert!(obj.aabb().is_colliding());
        assert!(obj.aabb().collision_direction().is_empty());

        let mut blocked = obj.clone();
        blocked
            .aabb_mut()
            .set_collision_state(CollisionState {
                is_colliding: true,
                direction: CollisionDirection::blocking(Axis::X),
            });
        let delta = resolve_movement(&mut blocked, Vec2 { x: 1., y: 1. }, &room, &[*wall.aabb()]);
        assert_eq!(delta, Vec2 { x: 0., y: 1. });

        // Moving away no longer overlaps, so the tag is ignored.
        let mut blocked = obj.clone();
        blocked
            .aabb_mut()
            .set_collision_state(CollisionState {
                is_colliding: true,
                direction: CollisionDirection::blocking(Axis::X),
            });
        let delta = resolve_movement(&mut blocked, Vec2 { x: -1., y: 0. }, &room, &[*wall.aabb()]);
        assert_eq!(delta, Vec2 { x: -1., y: 0. });
    }

    #[test]
    fn never_produces_degenerate_box() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let room = Room::new(
                Vec2 {
                    x: rng.gen_range(-100.0..100.0),
                    y: rng.gen_range(-100.0..100.0),
                },
                Vec2 {
                    x: rng.gen_range(1.0..400.0),
                    y: rng.gen_range(1.0..400.0),
                },
            );
            let mut obj = square(Vec2::zero(), rng.gen_range(1..40));
            for _ in 0..20 {
                let delta = Vec2 {
                    x: rng.gen_range(-50.0..50.0),
                    y: rng.gen_range(-50.0..50.0),
                };
                resolve_movement(&mut obj, delta, &room, &[]);
                let extent = obj.aabb().extent();
                assert!(extent.x > 0. && extent.y > 0.);
                assert_eq!(obj.aabb().min(), obj.position());
            }
        }
    }
}
