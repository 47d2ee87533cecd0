//! Errors reported when validating slider configuration.

use thiserror::Error;

/// Configuration problems reported by
/// [`SliderConfig::validate`](crate::SliderConfig::validate).
///
/// The model itself accepts any configuration; hosts call `validate` before
/// applying settings they did not write themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min_value` or `max_value` is NaN or infinite.
    #[error("slider bounds must be finite, got [{min}, {max}]")]
    NonFiniteBound { min: f32, max: f32 },
    /// `max_value` is not greater than `min_value`.
    #[error("slider max value {max} must be greater than min value {min}")]
    EmptyRange { min: f32, max: f32 },
    /// A snap point is NaN or infinite.
    #[error("snap point {0} is not finite")]
    NonFiniteSnap(f32),
    /// `max_thumbs` is set to zero.
    #[error("max thumbs must be at least 1 when set")]
    ZeroMaxThumbs,
    /// The hit region side is zero, negative or not finite.
    #[error("thumb hit size must be positive and finite, got {0}")]
    InvalidHitSize(f32),
}
