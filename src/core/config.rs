pub const EPSILON: f64 = 1e-5;

pub const SCREEN_WIDTH: f64 = 1920.;
pub const SCREEN_HEIGHT: f64 = 1080.;

/// Wall thickness of a newly created room.
pub const DEFAULT_STROKE_WIDTH: f64 = 50.;
/// Per-axis speed multiplier while sprinting.
pub const SPRINT_MULTIPLIER: f64 = 2.;
pub const PROJECTILE_SPEED: f64 = 2.;
/// The camera scales by `CAMERA_ZOOM_BASE.powf(zoom_factor)`.
pub const CAMERA_ZOOM_BASE: f64 = 1.01;

pub const TICKS_PER_SECOND: u32 = 60;
/// Ticks of movement per animation frame.
pub const ANIMATION_FRAME_DIVISOR: u32 = 10;
pub const NAN_WARNING_INTERVAL_SECONDS: u64 = 1;
