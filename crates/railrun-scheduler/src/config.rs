//! Scheduler configuration.

use railrun_errors::config::require_positive;
use railrun_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Timing parameters for [`FixedStepScheduler`](crate::FixedStepScheduler).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Simulation step `h` in seconds.
    pub step_seconds: f64,
    /// Upper bound on the elapsed time a single frame may contribute.
    pub max_frame_seconds: f64,
}

impl SchedulerConfig {
    /// Configuration for a given tick rate in Hz.
    pub fn with_rate_hz(rate_hz: f64) -> Self {
        Self {
            step_seconds: 1.0 / rate_hz.max(1.0),
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either duration is not positive, or if the frame
    /// clamp is shorter than one step (which would stall the simulation).
    pub fn validate(&self) -> ConfigResult {
        require_positive("scheduler.step_seconds", self.step_seconds)?;
        require_positive("scheduler.max_frame_seconds", self.max_frame_seconds)?;
        if self.max_frame_seconds < self.step_seconds {
            return Err(ConfigError::ordering(
                "scheduler.step_seconds",
                self.step_seconds,
                "scheduler.max_frame_seconds",
                self.max_frame_seconds,
            ));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            step_seconds: crate::DEFAULT_STEP_SECONDS,
            max_frame_seconds: crate::MAX_FRAME_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_rate_hz() {
        let config = SchedulerConfig::with_rate_hz(120.0);
        assert!((config.step_seconds - 1.0 / 120.0).abs() < 1e-12);
        assert!((config.max_frame_seconds - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_step_rejected() {
        let config = SchedulerConfig {
            step_seconds: 0.0,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_frame_clamp_shorter_than_step_rejected() {
        let config = SchedulerConfig {
            step_seconds: 0.5,
            max_frame_seconds: 0.25,
        };
        assert!(matches!(config.validate(), Err(ConfigError::Ordering { .. })));
    }

    #[test]
    fn test_partial_json_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config: SchedulerConfig = serde_json::from_str(r#"{"step_seconds": 0.01}"#)?;
        assert!((config.step_seconds - 0.01).abs() < 1e-12);
        assert!((config.max_frame_seconds - 0.25).abs() < 1e-12);
        Ok(())
    }
}
