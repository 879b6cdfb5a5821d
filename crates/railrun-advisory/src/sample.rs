//! Lookahead samples.

use serde::{Deserialize, Serialize};

/// Safe speed at one lookahead distance.
///
/// Offsets are in the vehicle frame at the time of sampling: `forward_offset`
/// along the direction of travel and `lateral_offset` to the right. Samples
/// are rebuilt on every call and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeSpeedSample {
    /// Distance ahead of the train, in metres.
    pub distance_ahead: f64,
    /// Estimated curvature at that point, in 1/m.
    pub curvature: f64,
    /// Curvature-limited safe speed, in m/s.
    pub safe_speed: f64,
    /// Sideways offset from the train, positive to the right.
    pub lateral_offset: f64,
    /// Offset along the train's direction of travel.
    pub forward_offset: f64,
}
