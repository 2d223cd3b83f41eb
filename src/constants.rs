// Scene units: one shell = one unit before radius scaling.
pub const SHELL_RADIUS_SCALE: f64 = 1.5;

// Plot bounds are -AXIS_HALF_EXTENT..AXIS_HALF_EXTENT on both axes.
pub const AXIS_HALF_EXTENT: f32 = 4.0;

pub const NUCLEUS_RADIUS: f32 = 0.3;
pub const SHELL_GUIDE_RADII: [f32; 2] = [1.5, 3.0];
pub const ELECTRON_MARKER_RADIUS: f32 = 0.08;

// Animation cadence
pub const DEFAULT_FRAMES: usize = 600;
pub const DEFAULT_INTERVAL_MS: u64 = 50;
pub const DEFAULT_TIME_STEP: f64 = 1.0;

pub const WINDOW_SIZE: u32 = 600;
