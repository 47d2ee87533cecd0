//! Slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] with its setter methods and hand it to
//! [`SliderModel::with_config`](crate::SliderModel::with_config).
//!
//! ```
//! use tessera_multi_slider::SliderConfig;
//!
//! let config = SliderConfig::default()
//!     .snaps(vec![1.0, 0.0, 0.5])
//!     .can_thumbs_cross(false)
//!     .max_thumbs(3);
//! assert!(config.validate().is_ok());
//! ```

use derive_setters::Setters;

use crate::{
    error::ConfigError,
    geometry::{DEFAULT_HIT_SIZE, HitRegion, ValueRange},
};

/// Settings of a multi-thumb slider.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderConfig {
    /// Lowest value of the domain.
    pub min_value: f32,
    /// Highest value of the domain. Expected to be greater than `min_value`.
    pub max_value: f32,
    /// Values thumbs snap to when a drag is committed. Sorted by the model.
    #[setters(into)]
    pub snaps: Vec<f32>,
    /// Whether a dragged thumb may pass its neighbours.
    pub can_thumbs_cross: bool,
    /// Upper bound on the number of thumbs; `None` means unbounded.
    #[setters(strip_option)]
    pub max_thumbs: Option<usize>,
    /// Notify on every drag movement instead of only when a drag ends.
    pub is_continuous: bool,
    /// Side of the square grab area centered on each thumb.
    pub hit_size: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            snaps: Vec::new(),
            can_thumbs_cross: true,
            max_thumbs: None,
            is_continuous: false,
            hit_size: DEFAULT_HIT_SIZE,
        }
    }
}

impl SliderConfig {
    /// The configured value domain.
    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    /// The configured hit region.
    pub fn hit_region(&self) -> HitRegion {
        HitRegion::new(self.hit_size)
    }

    /// Checks the configuration for values the model cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_value, self.max_value);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBound { min, max });
        }
        if max <= min {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if let Some(&snap) = self.snaps.iter().find(|snap| !snap.is_finite()) {
            return Err(ConfigError::NonFiniteSnap(snap));
        }
        if self.max_thumbs == Some(0) {
            return Err(ConfigError::ZeroMaxThumbs);
        }
        if !self.hit_size.is_finite() || self.hit_size <= 0.0 {
            return Err(ConfigError::InvalidHitSize(self.hit_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SliderConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.value_range(), ValueRange::UNIT);
        assert!(config.can_thumbs_cross);
        assert_eq!(config.max_thumbs, None);
    }

    #[test]
    fn test_setters() {
        let config = SliderConfig::default()
            .min_value(-1.0)
            .max_value(1.0)
            .snaps(vec![0.0, -1.0])
            .max_thumbs(2)
            .is_continuous(true)
            .hit_size(24.0);
        assert_eq!(config.value_range(), ValueRange::new(-1.0, 1.0));
        assert_eq!(config.snaps, vec![0.0, -1.0]);
        assert_eq!(config.max_thumbs, Some(2));
        assert!(config.is_continuous);
        assert_eq!(config.hit_region(), HitRegion::new(24.0));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = SliderConfig::default().min_value(2.0).max_value(2.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange { min: 2.0, max: 2.0 })
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let config = SliderConfig::default().max_value(f32::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteBound { .. })
        ));

        let config = SliderConfig::default().snaps(vec![0.5, f32::INFINITY]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteSnap(f32::INFINITY))
        );
    }

    #[test]
    fn test_rejects_zero_capacity_and_bad_hit_size() {
        let config = SliderConfig::default().max_thumbs(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxThumbs));

        let config = SliderConfig::default().hit_size(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidHitSize(0.0)));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::EmptyRange { min: 1.0, max: 0.0 };
        assert_eq!(
            err.to_string(),
            "slider max value 0 must be greater than min value 1"
        );
    }
}
