//! Session settings

use serde::{Deserialize, Serialize};

/// Tunable parameters for a turnstile session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSettings {
    /// Lower bound of the angle range, in degrees
    pub angle_min: f64,
    /// Upper bound of the angle range, in degrees
    pub angle_max: f64,
    /// Slider step, in degrees
    pub slider_step: f64,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            angle_min: -180.0,
            angle_max: 180.0,
            slider_step: 1.0,
        }
    }
}

impl WizardSettings {
    /// Clamp an angle to the configured range
    pub fn clamp_angle(&self, degrees: f64) -> f64 {
        degrees.clamp(self.angle_min, self.angle_max)
    }

    /// Whether an angle lies inside the configured range
    pub fn angle_in_range(&self, degrees: f64) -> bool {
        (self.angle_min..=self.angle_max).contains(&degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let settings = WizardSettings::default();
        assert_eq!(settings.angle_min, -180.0);
        assert_eq!(settings.angle_max, 180.0);
    }

    #[test]
    fn test_clamping() {
        let settings = WizardSettings::default();
        assert_eq!(settings.clamp_angle(200.0), 180.0);
        assert_eq!(settings.clamp_angle(-181.0), -180.0);
        assert_eq!(settings.clamp_angle(45.0), 45.0);
        assert!(settings.angle_in_range(-180.0));
        assert!(!settings.angle_in_range(180.5));
    }
}
