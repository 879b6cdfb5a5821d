//! Rules configuration.

use railrun_errors::ConfigResult;
use railrun_errors::config::require_non_negative;
use serde::{Deserialize, Serialize};

/// Thresholds used by the transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Speeds at or below this (m/s) count as stopped.
    pub stop_speed_threshold: f64,
}

impl RulesConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop threshold is negative or not finite.
    pub fn validate(&self) -> ConfigResult {
        require_non_negative("rules.stop_speed_threshold", self.stop_speed_threshold)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            stop_speed_threshold: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = RulesConfig {
            stop_speed_threshold: -0.1,
        };
        assert!(config.validate().is_err());
    }
}
