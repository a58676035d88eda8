// Default option set and calibration constants shared by the core and the web frontend.

// Value domain
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

// Sweep, degrees clockwise from 12 o'clock
pub const DEFAULT_START_ANGLE: f64 = 225.0; // bottom-left
pub const DEFAULT_END_ANGLE: f64 = 135.0; // bottom-right, 270 degree sweep

// Layout
pub const DEFAULT_SIZE: f64 = 56.0; // side of the bounding square in px
pub const MIN_STROKE_WIDTH: f64 = 3.0;
pub const STROKE_SIZE_FRACTION: f64 = 0.08; // stroke grows with size above the minimum
pub const ARC_INSET: f64 = 2.0; // keeps round line caps inside the box

// Indicator and backdrop
pub const INDICATOR_RADIUS_FRACTION: f64 = 0.55; // dot sits at this fraction of the arc radius
pub const INDICATOR_DOT_STROKE_FRACTION: f64 = 0.7; // dot radius relative to stroke width

// Interaction
pub const DEFAULT_SENSITIVITY: f64 = 200.0; // px of vertical drag per full range
pub const GAP_SPLIT_FRACTION: f64 = 0.5; // gap offsets below this share of the sweep go to max

// Snap rounding absorbs binary drift like 0.1 + 0.2
pub const SNAP_DECIMALS: i32 = 10;
