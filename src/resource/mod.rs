use crate::core::prelude::*;
use crate::resource::sprite::FrameSpec;
use std::collections::BTreeMap;

pub mod sprite;

pub const WIZARD_FRONT: &str = "wizard_front";
pub const WIZARD_SIDE: &str = "wizard_side";
pub const DOOR: &str = "door";
pub const FIREBALL: &str = "fireball";
pub const CRATE: &str = "crate";

/// Frame metadata for every sprite the game uses, keyed by name.
///
/// Built once at startup and passed by reference to whatever creates objects.
#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    frames: BTreeMap<String, FrameSpec>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sprite sheets bundled with the game.
    pub fn with_builtin() -> Result<Self> {
        let mut rv = Self::new();
        rv.register(WIZARD_FRONT, FrameSpec::new(3, [0, 24], 24, 24))?;
        rv.register(WIZARD_SIDE, FrameSpec::new(3, [24, 24], 24, 24))?;
        rv.register(DOOR, FrameSpec::new(1, [0, 0], 16, 32))?;
        rv.register(FIREBALL, FrameSpec::new(1, [0, 0], 8, 8))?;
        rv.register(CRATE, FrameSpec::new(1, [0, 0], 32, 32))?;
        info!("registered {} builtin sprites", rv.frames.len());
        Ok(rv)
    }

    pub fn register(&mut self, name: impl Into<String>, frames: FrameSpec) -> Result<()> {
        let name = name.into();
        if frames.width == 0 || frames.height == 0 || frames.count == 0 {
            bail!("sprite {name}: degenerate frames: {frames:?}");
        }
        if self.frames.contains_key(&name) {
            bail!("sprite {name}: already registered");
        }
        self.frames.insert(name, frames);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<FrameSpec> {
        self.frames
            .get(name)
            .copied()
            .with_context(|| format!("sprite {name}: not registered"))
    }
}
