//! Window Settings
//!
//! The two scalar settings sharing the persistence lifecycle of the item
//! list: always-on-top pin and window opacity.

use serde::{Deserialize, Serialize};

/// Slider floor for window opacity, in percent
pub const OPACITY_MIN: u8 = 80;
/// Fully opaque
pub const OPACITY_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Always-on-top window behavior
    pub pin: bool,
    /// Window opacity percentage, 80-100 in UI terms
    pub opacity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pin: true,
            opacity: OPACITY_MAX,
        }
    }
}

impl Settings {
    /// Clamp a requested opacity percentage to the supported range
    pub fn clamp_opacity(percent: u8) -> u8 {
        percent.clamp(OPACITY_MIN, OPACITY_MAX)
    }

    /// The 0.8-1.0 fraction sent over the host signal channel
    pub fn opacity_fraction(&self) -> f64 {
        f64::from(self.opacity) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.pin);
        assert_eq!(settings.opacity, 100);
    }

    #[test]
    fn test_clamp_to_floor() {
        assert_eq!(Settings::clamp_opacity(70), 80);
        assert_eq!(Settings::clamp_opacity(80), 80);
        assert_eq!(Settings::clamp_opacity(92), 92);
        assert_eq!(Settings::clamp_opacity(255), 100);
    }

    #[test]
    fn test_opacity_fraction_at_floor() {
        let settings = Settings {
            pin: true,
            opacity: Settings::clamp_opacity(70),
        };
        assert!((settings.opacity_fraction() - 0.8).abs() < f64::EPSILON);
    }
}
