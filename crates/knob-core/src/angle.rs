//! Value ↔ angle mapping over a clockwise sweep.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, matching the
//! screen's Y-down convention used by [`crate::geometry`].

use crate::constants::{DEFAULT_END_ANGLE, DEFAULT_START_ANGLE, GAP_SPLIT_FRACTION};
use crate::value::Range;

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// The arc a knob travels, from `start_angle` clockwise to `end_angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
        }
    }
}

impl SweepConfig {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    /// Clockwise span from start to end in `(0, 360]`.
    ///
    /// Equal start and end angles describe a full circle, not an empty arc.
    pub fn total_sweep(&self) -> f64 {
        let sweep = wrap_degrees(self.end_angle - self.start_angle);
        if sweep == 0.0 {
            360.0
        } else {
            sweep
        }
    }

    /// True when the sweep leaves no gap.
    pub fn is_full_circle(&self) -> bool {
        self.total_sweep() >= 360.0
    }

    /// Clockwise distance travelled from the start angle for `value`.
    #[inline]
    pub fn sweep_for_value(&self, range: &Range, value: f64) -> f64 {
        range.normalize(value) * self.total_sweep()
    }

    /// Absolute angle of `value` on the dial, in `[0, 360)`.
    pub fn value_to_angle(&self, range: &Range, value: f64) -> f64 {
        wrap_degrees(self.start_angle + self.sweep_for_value(range, value))
    }

    /// Clockwise offset of `angle` from the start, with gap angles resolved
    /// onto the nearer endpoint.
    ///
    /// Offsets past the end of the sweep land in the gap. Those within
    /// [`GAP_SPLIT_FRACTION`] of the sweep beyond the end resolve to the end
    /// (max); the rest resolve to the start (min).
    pub fn offset_for_angle(&self, angle: f64) -> f64 {
        let total = self.total_sweep();
        let offset = wrap_degrees(angle - self.start_angle);
        if offset > total {
            if offset - total < total * GAP_SPLIT_FRACTION {
                total
            } else {
                0.0
            }
        } else {
            offset
        }
    }

    /// Unsnapped value at `angle`. Callers snap before emitting.
    pub fn angle_to_value(&self, range: &Range, angle: f64) -> f64 {
        range.denormalize(self.offset_for_angle(angle) / self.total_sweep())
    }
}
