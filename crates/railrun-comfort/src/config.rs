//! Comfort configuration.

use railrun_errors::ConfigResult;
use railrun_errors::config::{require_finite, require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

/// Penalty rates and thresholds for [`ComfortAccumulator`](crate::ComfortAccumulator).
///
/// Rates are comfort points per second per unit of excess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortConfig {
    /// Full comfort.
    pub max_comfort: f64,
    /// Recovery per second on penalty-free ticks.
    pub regen_rate: f64,
    /// Penalty per m/s above the safe speed.
    pub overspeed_rate: f64,
    /// Accelerations below this (m/s², negative) count as hard braking.
    pub hard_brake_threshold: f64,
    /// Penalty per m/s² of braking beyond the threshold.
    pub hard_brake_rate: f64,
    /// Jerk magnitudes above this (m/s³) are penalized.
    pub jerk_threshold: f64,
    /// Penalty per m/s³ of jerk beyond the threshold.
    pub jerk_rate: f64,
}

impl ComfortConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive maximum, negative rates or
    /// thresholds, or a non-finite hard-brake threshold.
    pub fn validate(&self) -> ConfigResult {
        require_positive("comfort.max_comfort", self.max_comfort)?;
        require_non_negative("comfort.regen_rate", self.regen_rate)?;
        require_non_negative("comfort.overspeed_rate", self.overspeed_rate)?;
        require_finite("comfort.hard_brake_threshold", self.hard_brake_threshold)?;
        require_non_negative("comfort.hard_brake_rate", self.hard_brake_rate)?;
        require_non_negative("comfort.jerk_threshold", self.jerk_threshold)?;
        require_non_negative("comfort.jerk_rate", self.jerk_rate)?;
        Ok(())
    }
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            max_comfort: 100.0,
            regen_rate: 5.0,
            overspeed_rate: 4.0,
            hard_brake_threshold: -2.5,
            hard_brake_rate: 10.0,
            jerk_threshold: 3.0,
            jerk_rate: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railrun_errors::ConfigError;

    #[test]
    fn test_default_is_valid() {
        assert!(ComfortConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_rejected() {
        let config = ComfortConfig {
            max_comfort: 0.0,
            ..ComfortConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = ComfortConfig {
            jerk_rate: -1.0,
            ..ComfortConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
