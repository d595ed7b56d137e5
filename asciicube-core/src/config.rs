/// Rendering defaults and per-instance configuration
use std::time::Duration;

/// Default terminal window width in character cells
pub const DEFAULT_WINDOW_WIDTH: usize = 80;
/// Default terminal window height in character cells
pub const DEFAULT_WINDOW_HEIGHT: usize = 22;
pub const MIN_WINDOW_WIDTH: usize = 10;
pub const MIN_WINDOW_HEIGHT: usize = 5;
pub const MAX_WINDOW_WIDTH: usize = 200;
pub const MAX_WINDOW_HEIGHT: usize = 100;

/// Half-width of the cube; the cube spans -W..W on every axis
pub const DEFAULT_CUBE_HALF_WIDTH: f32 = 10.0;
/// Distance between neighbouring surface samples
pub const DEFAULT_SAMPLE_STEP: f32 = 1.0;

pub const DEFAULT_VIEWER_DISTANCE: f32 = 60.0;
pub const DEFAULT_PROJECTION_SCALE: f32 = 40.0;
pub const BACKGROUND_CHAR: u8 = b' ';

/// Radians added to the X and Y angles every frame
pub const ROTATION_INCREMENT: f32 = 0.005;
pub const FRAME_DELAY_MICROS: u64 = 1000;
pub const EXIT_KEY: char = '1';

/// Everything a `CubeRenderer` needs to size its buffers and project the cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub half_width: f32,
    pub sample_step: f32,
    pub viewer_distance: f32,
    pub projection_scale: f32,
    pub background: u8,
    pub rotation_increment: f32,
}

impl RenderConfig {
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            half_width: DEFAULT_CUBE_HALF_WIDTH,
            sample_step: DEFAULT_SAMPLE_STEP,
            viewer_distance: DEFAULT_VIEWER_DISTANCE,
            projection_scale: DEFAULT_PROJECTION_SCALE,
            background: BACKGROUND_CHAR,
            rotation_increment: ROTATION_INCREMENT,
        }
    }
}

/// Frame pacing and input settings for the interactive driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub frame_delay: Duration,
    pub exit_key: char,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_micros(FRAME_DELAY_MICROS),
            exit_key: EXIT_KEY,
        }
    }
}

/// Check a window size against the supported range
pub fn dimensions_supported(width: usize, height: usize) -> bool {
    (MIN_WINDOW_WIDTH..=MAX_WINDOW_WIDTH).contains(&width)
        && (MIN_WINDOW_HEIGHT..=MAX_WINDOW_HEIGHT).contains(&height)
}
