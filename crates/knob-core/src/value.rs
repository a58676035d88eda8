//! Clamp and snap arithmetic over the knob's bounded numeric domain.

use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, SNAP_DECIMALS};

/// Bounded numeric domain and its quantization grid.
///
/// Callers are expected to keep `min < max` and `step > 0`; see
/// [`crate::KnobConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

impl Range {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Bound `v` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        self.max.min(self.min.max(v))
    }

    /// Quantize `v` to the nearest multiple of `step` from `min`, then clamp.
    pub fn snap(&self, v: f64) -> f64 {
        let steps = ((v - self.min) / self.step).round();
        let snapped = steps * self.step + self.min;
        self.clamp(round_to_decimals(snapped, SNAP_DECIMALS))
    }

    /// Position of `v` within the range as a fraction; 0 at `min`, 1 at `max`.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }

    /// Inverse of [`Range::normalize`].
    #[inline]
    pub fn denormalize(&self, fraction: f64) -> f64 {
        self.min + fraction * self.span()
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Round to a fixed number of decimal places.
#[inline]
pub fn round_to_decimals(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (v * scale).round() / scale;
    // very large magnitudes overflow the scale; they carry no fractional drift anyway
    if rounded.is_finite() {
        rounded
    } else {
        v
    }
}
