use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod camera;
pub mod config;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod update;

static NEXT_OBJECT_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for objects that take part in a scene's collision pass.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub(crate) fn next() -> Self {
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
