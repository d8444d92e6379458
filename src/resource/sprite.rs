use crate::core::prelude::*;
use crate::game::object::Orientation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where the frames of one animation sit on a sprite sheet. Frames are laid out vertically,
/// starting at `origin`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub count: u32,
    pub origin: [u32; 2],
    pub width: u32,
    pub height: u32,
}

impl FrameSpec {
    pub fn new(count: u32, origin: [u32; 2], width: u32, height: u32) -> Self {
        Self {
            count,
            origin,
            width,
            height,
        }
    }

    pub fn extent(&self) -> Vec2 {
        Vec2 {
            x: f64::from(self.width),
            y: f64::from(self.height),
        }
    }

    /// Top-left corner on the sheet of the frame shown after `count` ticks of movement.
    pub fn frame_origin(&self, count: u32) -> [u32; 2] {
        let index = (count / ANIMATION_FRAME_DIVISOR) % self.count.max(1);
        [self.origin[0], self.origin[1] + index * self.height]
    }
}

/// The frames an object is drawn with, per orientation.
///
/// An [`Orientation::All`] entry, if present, is used regardless of orientation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpriteSet {
    frames: BTreeMap<Orientation, FrameSpec>,
}

impl SpriteSet {
    pub fn single(frames: FrameSpec) -> Self {
        Self::default().with(Orientation::All, frames)
    }

    #[must_use]
    pub fn with(mut self, orientation: Orientation, frames: FrameSpec) -> Self {
        self.frames.insert(orientation, frames);
        self
    }

    pub fn has_all(&self) -> bool {
        self.frames.contains_key(&Orientation::All)
    }

    pub fn get(&self, orientation: Orientation) -> Option<FrameSpec> {
        self.frames
            .get(&Orientation::All)
            .or_else(|| self.frames.get(&orientation))
            .copied()
    }

    /// The frame used for collision bounds: `All` if present, otherwise `Front`.
    pub fn reference_frame(&self) -> Result<FrameSpec> {
        self.get(Orientation::Front)
            .context("sprite set has neither an `All` nor a `Front` frame")
    }
}
