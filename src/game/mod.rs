pub mod level;
pub mod object;
pub mod player;
pub mod projectile;
pub mod room;
