// Build-time knobs. There is no runtime configuration: change these and rebuild.

pub const NUM_BALLS: usize = 10;
/// Milliseconds of frame time per radian of spirograph travel at full speed.
pub const TIME_DILATION: f64 = 2000.0;
pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 500;
/// Pixels whose accumulated alpha is above this fraction turn solid.
pub const ALPHA_THRESHOLD: f64 = 0.5;
pub const SPIROGRAPH_RADIUS: f64 = 10.0;
/// Pixels per user-space unit.
pub const SCALE_FACTOR: f64 = 20.0;
pub const METABALL_INNER_RADIUS_MIN: f64 = 0.0;
pub const METABALL_INNER_RADIUS_MAX: f64 = 1.0;
pub const METABALL_OUTER_RADIUS_MIN: f64 = 2.0;
pub const METABALL_OUTER_RADIUS_MAX: f64 = 4.0;

pub const WINDOW_TITLE: &str = "Metaballs";
pub const TARGET_FPS: usize = 60;

/// Everything the scene needs at startup, gathered in one place.
/// `Default` is the shipped demo; tests shrink it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub num_balls: usize,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub alpha_threshold: f64,
    pub time_dilation: f64,
    pub spirograph_radius: f64,
    pub inner_radius: (f64, f64), // [min, max)
    pub outer_radius: (f64, f64), // [min, max)
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            num_balls: NUM_BALLS,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            scale: SCALE_FACTOR,
            alpha_threshold: ALPHA_THRESHOLD,
            time_dilation: TIME_DILATION,
            spirograph_radius: SPIROGRAPH_RADIUS,
            inner_radius: (METABALL_INNER_RADIUS_MIN, METABALL_INNER_RADIUS_MAX),
            outer_radius: (METABALL_OUTER_RADIUS_MIN, METABALL_OUTER_RADIUS_MAX),
        }
    }
}
