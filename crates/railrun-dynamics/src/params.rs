//! Vehicle parameters.

use railrun_errors::config::{require_non_negative, require_positive};
use railrun_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Physical parameters of the train.
///
/// All values are SI: kilograms, metres per second and newtons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    /// Total mass in kg.
    pub mass: f64,
    /// Speed ceiling in m/s.
    pub max_speed: f64,
    /// Tractive force at full throttle from standstill, in N.
    pub traction_force_max: f64,
    /// Braking force at full brake, in N.
    pub brake_force_max: f64,
    /// Aerodynamic drag coefficient in N/(m/s)².
    pub drag_coefficient: f64,
    /// Constant rolling resistance in N.
    pub rolling_resistance: f64,
    /// Traction reaches zero at `traction_taper_ratio * max_speed`.
    pub traction_taper_ratio: f64,
}

impl VehicleParams {
    /// Speed at which traction has fully tapered off.
    #[inline]
    pub fn traction_cutoff_speed(&self) -> f64 {
        self.traction_taper_ratio * self.max_speed
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if mass, max speed or traction are not positive, if a
    /// resistive force is negative, or if the taper ratio is below 1 (which
    /// would cut traction before the speed ceiling).
    pub fn validate(&self) -> ConfigResult {
        require_positive("vehicle.mass", self.mass)?;
        require_positive("vehicle.max_speed", self.max_speed)?;
        require_positive("vehicle.traction_force_max", self.traction_force_max)?;
        require_non_negative("vehicle.brake_force_max", self.brake_force_max)?;
        require_non_negative("vehicle.drag_coefficient", self.drag_coefficient)?;
        require_non_negative("vehicle.rolling_resistance", self.rolling_resistance)?;
        if !(self.traction_taper_ratio.is_finite() && self.traction_taper_ratio >= 1.0) {
            return Err(ConfigError::out_of_range(
                "vehicle.traction_taper_ratio",
                self.traction_taper_ratio,
                1.0,
                f64::INFINITY,
            ));
        }
        Ok(())
    }
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass: 30_000.0,
            max_speed: 30.0,
            traction_force_max: 90_000.0,
            brake_force_max: 150_000.0,
            drag_coefficient: 12.0,
            rolling_resistance: 1_500.0,
            traction_taper_ratio: 1.15,
        }
    }
}
