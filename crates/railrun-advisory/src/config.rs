//! Advisory configuration.

use railrun_errors::config::{require_non_negative, require_positive};
use railrun_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Tuning for [`SpeedAdvisory`](crate::SpeedAdvisory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Distances ahead of the train to sample, in metres.
    pub lookahead: Vec<f64>,
    /// Numerator of the inverse-square-root law.
    pub gain: f64,
    /// Added to `|k|` so straight track does not divide by zero.
    pub epsilon: f64,
    /// Lower bound on any advised speed, in m/s.
    pub min_safe_speed: f64,
    /// Upper bound on any advised speed, in m/s.
    pub max_safe_speed: f64,
    /// Deceleration assumed for terminal guidance, in m/s².
    pub terminal_deceleration: f64,
    /// Tangent probe length for curvature estimation, in metres.
    pub curvature_probe: f64,
    /// Lower bound on the curvature probe.
    pub min_curvature_probe: f64,
}

impl AdvisoryConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or non-finite lookahead list, negative
    /// lookahead distances, non-positive tuning values, or a minimum safe
    /// speed above the maximum.
    pub fn validate(&self) -> ConfigResult {
        if self.lookahead.is_empty() {
            return Err(ConfigError::empty("advisory.lookahead"));
        }
        for (i, ahead) in self.lookahead.iter().enumerate() {
            require_non_negative(&format!("advisory.lookahead[{i}]"), *ahead)?;
        }
        require_positive("advisory.gain", self.gain)?;
        require_positive("advisory.epsilon", self.epsilon)?;
        require_non_negative("advisory.min_safe_speed", self.min_safe_speed)?;
        require_positive("advisory.max_safe_speed", self.max_safe_speed)?;
        if self.min_safe_speed > self.max_safe_speed {
            return Err(ConfigError::ordering(
                "advisory.min_safe_speed",
                self.min_safe_speed,
                "advisory.max_safe_speed",
                self.max_safe_speed,
            ));
        }
        require_positive("advisory.terminal_deceleration", self.terminal_deceleration)?;
        require_positive("advisory.curvature_probe", self.curvature_probe)?;
        require_positive("advisory.min_curvature_probe", self.min_curvature_probe)?;
        Ok(())
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            lookahead: vec![0.0, 20.0, 40.0, 60.0, 80.0],
            gain: 1.1,
            epsilon: 1e-4,
            min_safe_speed: 3.0,
            max_safe_speed: 30.0,
            terminal_deceleration: 1.0,
            curvature_probe: 2.0,
            min_curvature_probe: 0.05,
        }
    }
}
