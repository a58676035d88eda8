// DOM-side constants for the SVG the knob renders into.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Class hooks for the page's stylesheet; colors live there, not here
pub const CLASS_ROOT: &str = "knob";
pub const CLASS_BACKDROP: &str = "knob-backdrop";
pub const CLASS_TRACK: &str = "knob-track";
pub const CLASS_ACTIVE: &str = "knob-active";
pub const CLASS_INDICATOR: &str = "knob-indicator";

pub const BACKDROP_STROKE_WIDTH: f64 = 1.0;
