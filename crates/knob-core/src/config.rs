//! Knob configuration and the accessibility surface derived from it.

use crate::angle::SweepConfig;
use crate::constants::{DEFAULT_SENSITIVITY, DEFAULT_SIZE};
use crate::error::ConfigError;
use crate::geometry::ArcGeometry;
use crate::value::Range;

/// The recognized option set for one knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobConfig {
    pub range: Range,
    pub sweep: SweepConfig,
    /// Side of the bounding square in px.
    pub size: f64,
    /// Vertical drag distance in px that traverses the whole range.
    pub sensitivity: f64,
    pub disabled: bool,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            range: Range::default(),
            sweep: SweepConfig::default(),
            size: DEFAULT_SIZE,
            sensitivity: DEFAULT_SENSITIVITY,
            disabled: false,
        }
    }
}

/// Slider semantics exposed to assistive technology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderAria {
    pub value_now: f64,
    pub value_min: f64,
    pub value_max: f64,
    pub disabled: bool,
    /// `-1` removes a disabled knob from the tab order.
    pub tab_index: i32,
}

impl KnobConfig {
    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.range = Range::new(min, max, step);
        self
    }

    pub fn with_sweep(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.sweep = SweepConfig::new(start_angle, end_angle);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Check every precondition the arithmetic relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min", self.range.min),
            ("max", self.range.max),
            ("step", self.range.step),
            ("size", self.size),
            ("sensitivity", self.sensitivity),
            ("start_angle", self.sweep.start_angle),
            ("end_angle", self.sweep.end_angle),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        if self.range.max <= self.range.min {
            return Err(ConfigError::InvalidRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        if self.range.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.range.step));
        }
        if self.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        if self.size <= 0.0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        for angle in [self.sweep.start_angle, self.sweep.end_angle] {
            if !(0.0..=360.0).contains(&angle) {
                return Err(ConfigError::InvalidAngle(angle));
            }
        }
        Ok(())
    }

    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry::new(self.size)
    }

    pub fn aria(&self, value: f64) -> SliderAria {
        SliderAria {
            value_now: value,
            value_min: self.range.min,
            value_max: self.range.max,
            disabled: self.disabled,
            tab_index: if self.disabled { -1 } else { 0 },
        }
    }
}
