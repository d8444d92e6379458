use crate::core::prelude::*;
use crate::game::object::Object;
use crate::util::collision;
use crate::util::UnorderedPair;
use std::collections::BTreeSet;

/// Runs the once-per-tick pairwise collision pass and remembers which pairs touched.
#[derive(Clone, Debug, Default)]
pub struct CollisionHandler {
    colliding_pairs: BTreeSet<UnorderedPair<ObjectId>>,
}

impl CollisionHandler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Clears the collision state of every object, then tags every overlapping pair.
    ///
    /// All resets happen before any test, so a tag set early in the pass is never lost.
    pub(crate) fn run(&mut self, objects: &mut [&mut Object]) {
        self.colliding_pairs.clear();
        for obj in objects.iter_mut() {
            obj.aabb_mut().reset_collision_state();
        }

        for (i, j) in (0..objects.len()).tuple_combinations() {
            let (left, right) = objects.split_at_mut(j);
            let a = &mut *left[i];
            let b = &mut *right[0];
            let result = collision::external_overlap(a.aabb(), b.aabb());
            if result.overlaps {
                result.apply_to(a.aabb_mut());
                collision::external_overlap(b.aabb(), a.aabb()).apply_to(b.aabb_mut());
                self.colliding_pairs.insert(UnorderedPair::new(a.id(), b.id()));
            }
        }
    }

    pub fn colliding_pairs(&self) -> impl Iterator<Item = UnorderedPair<ObjectId>> + '_ {
        self.colliding_pairs.iter().copied()
    }
    pub fn are_colliding(&self, a: ObjectId, b: ObjectId) -> bool {
        self.colliding_pairs.contains(&UnorderedPair::new(a, b))
    }
    pub fn colliding_with(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        self.colliding_pairs
            .iter()
            .filter(move |pair| pair.contains(id))
            .map(move |pair| if pair.fst() == id { pair.snd() } else { pair.fst() })
    }
}
