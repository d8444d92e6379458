#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        camera::Camera,
        config::*,
        input::{InputSource, KeyCode, MovementIntent},
        scene::Scene,
        ObjectId,
    },
    util::{
        assert::*,
        collision::{Aabb, Axis, Collidable, CollisionDirection},
        gg_float::GgFloat,
        linalg,
        linalg::{Mat3x3, Vec2},
    },
};
