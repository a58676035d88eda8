use knob_core::{
    KnobConfig, DEFAULT_END_ANGLE, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SENSITIVITY, DEFAULT_SIZE,
    DEFAULT_START_ANGLE, DEFAULT_STEP,
};
use wasm_bindgen::prelude::*;

/// Knob options as seen from JavaScript. Every field starts at its default.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct KnobOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub size: f64,
    #[wasm_bindgen(js_name = startAngle)]
    pub start_angle: f64,
    #[wasm_bindgen(js_name = endAngle)]
    pub end_angle: f64,
    pub sensitivity: f64,
    pub disabled: bool,
}

impl Default for KnobOptions {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            size: DEFAULT_SIZE,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            sensitivity: DEFAULT_SENSITIVITY,
            disabled: false,
        }
    }
}

#[wasm_bindgen]
impl KnobOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&KnobOptions> for KnobConfig {
    fn from(o: &KnobOptions) -> Self {
        KnobConfig::default()
            .with_range(o.min, o.max, o.step)
            .with_sweep(o.start_angle, o.end_angle)
            .with_size(o.size)
            .with_sensitivity(o.sensitivity)
            .with_disabled(o.disabled)
    }
}
