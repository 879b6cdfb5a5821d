//! Kinematic state snapshot.

use serde::{Deserialize, Serialize};

/// Speed, distance, acceleration and jerk after the latest step.
///
/// Owned by [`LongitudinalDynamics`](crate::LongitudinalDynamics) and handed
/// out by value; readers can never write back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleKinematicState {
    /// Speed in m/s, within `[0, max_speed]`
    pub speed: f64,
    /// Distance travelled along the track in m, never decreasing
    pub distance: f64,
    /// Realized acceleration in m/s² over the last step
    pub acceleration: f64,
    /// Rate of change of acceleration in m/s³ over the last step
    pub jerk: f64,
}

impl VehicleKinematicState {
    /// Whether the train is effectively standing still.
    #[inline]
    pub fn is_stationary(&self, threshold: f64) -> bool {
        self.speed <= threshold
    }
}
