pub mod core;
pub mod game;
pub mod resource;
pub mod util;
