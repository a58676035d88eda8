use thiserror::Error;

/// Precondition violations in a [`crate::KnobConfig`].
///
/// The arithmetic in this crate does not guard against these; a config that
/// fails [`crate::KnobConfig::validate`] produces degenerate output (NaN,
/// infinities) rather than an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },
    #[error("invalid step {0}: must be greater than zero")]
    InvalidStep(f64),
    #[error("invalid sensitivity {0}: must be greater than zero")]
    InvalidSensitivity(f64),
    #[error("invalid size {0}: must be greater than zero")]
    InvalidSize(f64),
    #[error("invalid angle {0}: must lie within [0, 360]")]
    InvalidAngle(f64),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}
