//! Driver control inputs.

use serde::{Deserialize, Serialize};

/// Throttle and brake positions, each in `[0, 1]`.
///
/// The two are independent; both may be applied at once. Values are clamped
/// when written, and NaN is read as released.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleControls {
    throttle: f64,
    brake: f64,
}

impl VehicleControls {
    /// Fully released controls.
    pub const RELEASED: Self = Self {
        throttle: 0.0,
        brake: 0.0,
    };

    /// Create clamped controls.
    ///
    /// ```
    /// use railrun_dynamics::VehicleControls;
    ///
    /// let controls = VehicleControls::new(1.7, f64::NAN);
    /// assert!((controls.throttle() - 1.0).abs() < 1e-12);
    /// assert!(controls.brake().abs() < 1e-12);
    /// ```
    pub fn new(throttle: f64, brake: f64) -> Self {
        Self {
            throttle: clamp_unit(throttle),
            brake: clamp_unit(brake),
        }
    }

    /// Throttle position in `[0, 1]`.
    #[inline]
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// Brake position in `[0, 1]`.
    #[inline]
    pub fn brake(&self) -> f64 {
        self.brake
    }
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
