//! Aggregate simulation configuration.

use railrun_advisory::AdvisoryConfig;
use railrun_comfort::ComfortConfig;
use railrun_dynamics::VehicleParams;
use railrun_errors::ConfigResult;
use railrun_rules::RulesConfig;
use railrun_scheduler::SchedulerConfig;
use railrun_track::TerminalConfig;
use serde::{Deserialize, Serialize};

/// Configuration for every component of a simulation.
///
/// Each component is constructed from its own section; nothing reads this
/// aggregate during a tick. Missing sections and fields take their defaults.
///
/// # Example
///
/// ```
/// use railrun_engine::SimulationConfig;
///
/// let config: SimulationConfig = serde_json::from_str(
///     r#"{ "vehicle": { "max_speed": 25.0 }, "rules": { "stop_speed_threshold": 0.5 } }"#,
/// )?;
/// assert!((config.vehicle.max_speed - 25.0).abs() < 1e-12);
/// assert!((config.vehicle.mass - 30_000.0).abs() < 1e-9);
/// assert!(config.validate().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed step and frame clamp.
    pub scheduler: SchedulerConfig,
    /// Train parameters.
    pub vehicle: VehicleParams,
    /// Safe-speed advisory tuning.
    pub advisory: AdvisoryConfig,
    /// Comfort penalties and regeneration.
    pub comfort: ComfortConfig,
    /// Bumper and platform placement.
    pub terminal: TerminalConfig,
    /// Run rule thresholds.
    pub rules: RulesConfig,
}

impl SimulationConfig {
    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error found.
    pub fn validate(&self) -> ConfigResult {
        self.scheduler.validate()?;
        self.vehicle.validate()?;
        self.advisory.validate()?;
        self.comfort.validate()?;
        self.terminal.validate()?;
        self.rules.validate()?;
        Ok(())
    }
}
