use crate::core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, VecDeque};
use std::ops::RangeInclusive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    ShiftLeft,
    MouseLeft,
}

/// What the player wants to do this tick, independent of how it was produced.
///
/// Opposing directions are resolved by priority rather than cancelling out: up beats down,
/// left beats right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MovementIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub fire: bool,
    /// Cursor position in screen space, if there is a cursor.
    pub cursor: Option<Vec2>,
}

impl MovementIntent {
    pub fn idle() -> Self {
        Self::default()
    }
    pub fn towards(direction: Vec2) -> Self {
        Self {
            up: direction.y < 0.,
            down: direction.y > 0.,
            left: direction.x < 0.,
            right: direction.x > 0.,
            ..Self::default()
        }
    }
    #[must_use]
    pub fn sprinting(mut self) -> Self {
        self.sprint = true;
        self
    }
    #[must_use]
    pub fn firing_at(mut self, cursor: Vec2) -> Self {
        self.fire = true;
        self.cursor = Some(cursor);
        self
    }

    /// Unit steps per axis, each in {-1, 0, 1}.
    pub fn direction(&self) -> Vec2 {
        let y = if self.up {
            -1.
        } else if self.down {
            1.
        } else {
            0.
        };
        let x = if self.left {
            -1.
        } else if self.right {
            1.
        } else {
            0.
        };
        Vec2 { x, y }
    }
    pub fn velocity(&self) -> Vec2 {
        if self.sprint {
            Vec2::splat(SPRINT_MULTIPLIER)
        } else {
            Vec2::one()
        }
    }
    pub fn displacement(&self) -> Vec2 {
        self.direction().component_wise(self.velocity())
    }
}

pub trait InputSource {
    fn next_intent(&mut self) -> MovementIntent;
}

/// Tracks which keys are held and where the cursor is, as reported by the windowing layer.
#[derive(Clone, Debug, Default)]
pub struct InputHandler {
    held: BTreeSet<KeyCode>,
    mouse_pos: Option<Vec2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
    pub fn down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
    pub fn set_mouse_pos(&mut self, pos: Vec2) {
        self.mouse_pos = Some(pos);
    }
    pub fn screen_mouse_pos(&self) -> Option<Vec2> {
        self.mouse_pos
    }

    pub fn intent(&self) -> MovementIntent {
        MovementIntent {
            up: self.down(KeyCode::KeyW) || self.down(KeyCode::ArrowUp),
            down: self.down(KeyCode::KeyS) || self.down(KeyCode::ArrowDown),
            left: self.down(KeyCode::KeyA) || self.down(KeyCode::ArrowLeft),
            right: self.down(KeyCode::KeyD) || self.down(KeyCode::ArrowRight),
            sprint: self.down(KeyCode::ShiftLeft),
            fire: self.down(KeyCode::MouseLeft),
            cursor: self.mouse_pos,
        }
    }
}

impl InputSource for InputHandler {
    fn next_intent(&mut self) -> MovementIntent {
        self.intent()
    }
}

/// Replays a fixed sequence of intents, then stays idle.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    intents: VecDeque<MovementIntent>,
}

impl ScriptedInput {
    pub fn new(intents: impl IntoIterator<Item = MovementIntent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }
    /// Appends `intent` repeated for `ticks` ticks.
    #[must_use]
    pub fn then(mut self, intent: MovementIntent, ticks: usize) -> Self {
        self.intents.extend(std::iter::repeat(intent).take(ticks));
        self
    }
    pub fn remaining(&self) -> usize {
        self.intents.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_intent(&mut self) -> MovementIntent {
        self.intents.pop_front().unwrap_or_default()
    }
}

/// Wanders in a random direction, picking a new one after a random number of ticks.
pub struct RandomWalkInput {
    rng: StdRng,
    hold_ticks: RangeInclusive<u32>,
    current: MovementIntent,
    ticks_left: u32,
}

impl RandomWalkInput {
    pub fn new(seed: u64, hold_ticks: RangeInclusive<u32>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hold_ticks,
            current: MovementIntent::idle(),
            ticks_left: 0,
        }
    }

    fn pick(&mut self) {
        let direction = Vec2 {
            x: f64::from(self.rng.gen_range(-1_i32..=1)),
            y: f64::from(self.rng.gen_range(-1_i32..=1)),
        };
        self.current = MovementIntent::towards(direction);
        self.current.sprint = self.rng.gen_bool(0.25);
        self.ticks_left = self.rng.gen_range(self.hold_ticks.clone());
    }
}

impl InputSource for RandomWalkInput {
    fn next_intent(&mut self) -> MovementIntent {
        if self.ticks_left == 0 {
            self.pick();
        }
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.current
    }
}
