//! Finite-difference curvature estimation.

use serde::{Deserialize, Serialize};

use crate::geometry::TrackGeometry;

/// Estimates local curvature `|dT/ds|` from two tangent samples.
///
/// The estimator is a pure function of the track and the query distance. The
/// probe length is bounded below so near-coincident samples cannot blow up
/// the division.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use railrun_track::{CurvatureEstimator, TrackGeometry};
///
/// // Quarter circles of radius 50 m approximated by a closed loop.
/// let r = 50.0_f64;
/// let points = (0..32)
///     .map(|i| {
///         let a = f64::from(i) / 32.0 * std::f64::consts::TAU;
///         DVec3::new(r * a.cos(), 0.0, r * a.sin())
///     })
///     .collect();
/// let track = TrackGeometry::new(points, true)?;
///
/// let k = CurvatureEstimator::default().curvature_at(&track, 40.0);
/// assert!((k - 1.0 / r).abs() < 0.002);
/// # Ok::<(), railrun_errors::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatureEstimator {
    /// Forward offset between the two tangent samples, in metres.
    pub probe: f64,
    /// Lower bound on the effective offset.
    pub min_probe: f64,
}

impl CurvatureEstimator {
    /// Default probe length.
    pub const DEFAULT_PROBE: f64 = 2.0;

    /// Default lower bound on the probe length.
    pub const DEFAULT_MIN_PROBE: f64 = 0.05;

    /// Create an estimator with the given probe lengths.
    pub fn new(probe: f64, min_probe: f64) -> Self {
        let min_probe = if min_probe.is_finite() && min_probe > 0.0 {
            min_probe
        } else {
            Self::DEFAULT_MIN_PROBE
        };
        let probe = if probe.is_finite() { probe.max(min_probe) } else { min_probe };
        Self { probe, min_probe }
    }

    /// Curvature (1/m) at `distance` along `track`.
    ///
    /// On open tracks the probe window is shifted back near the end so both
    /// samples lie on the track. Returns 0 when the track is too short for a
    /// window of at least `min_probe`.
    pub fn curvature_at(&self, track: &TrackGeometry, distance: f64) -> f64 {
        let probe = self.probe.max(self.min_probe);
        let (a, b) = if track.is_closed() {
            let a = track.resolve_distance(distance);
            (a, a + probe)
        } else {
            let length = track.total_length();
            let start = track.resolve_distance(distance).min(length - probe).max(0.0);
            (start, (start + probe).min(length))
        };

        let span = b - a;
        if span < self.min_probe {
            return 0.0;
        }

        let ta = track.tangent_at_distance(a);
        let tb = track.tangent_at_distance(b);
        let k = (tb - ta).length() / span;
        if k.is_finite() { k } else { 0.0 }
    }
}

impl Default for CurvatureEstimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROBE, Self::DEFAULT_MIN_PROBE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn circle(radius: f64, points: u32) -> Result<TrackGeometry, railrun_errors::ConfigError> {
        let pts = (0..points)
            .map(|i| {
                let a = f64::from(i) / f64::from(points) * std::f64::consts::TAU;
                DVec3::new(radius * a.cos(), 0.0, radius * a.sin())
            })
            .collect();
        TrackGeometry::new(pts, true)
    }

    #[test]
    fn test_straight_track_has_zero_curvature() -> Result<(), Box<dyn std::error::Error>> {
        let track = TrackGeometry::new(vec![DVec3::ZERO, DVec3::new(500.0, 0.0, 0.0)], false)?;
        let estimator = CurvatureEstimator::default();
        for d in [0.0, 100.0, 499.5, 500.0, 900.0] {
            assert!(estimator.curvature_at(&track, d).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_circle_curvature_matches_radius() -> Result<(), Box<dyn std::error::Error>> {
        let estimator = CurvatureEstimator::default();
        for radius in [30.0, 100.0, 400.0] {
            let track = circle(radius, 48)?;
            let k = estimator.curvature_at(&track, track.total_length() * 0.3);
            assert_relative_eq!(k, 1.0 / radius, max_relative = 0.05);
        }
        Ok(())
    }

    #[test]
    fn test_tighter_curve_has_higher_curvature() -> Result<(), Box<dyn std::error::Error>> {
        let estimator = CurvatureEstimator::default();
        let tight = circle(40.0, 48)?;
        let wide = circle(200.0, 48)?;
        assert!(estimator.curvature_at(&tight, 10.0) > estimator.curvature_at(&wide, 10.0));
        Ok(())
    }

    #[test]
    fn test_open_end_window_shifts_back() -> Result<(), Box<dyn std::error::Error>> {
        let track = circle(50.0, 48)?;
        let open = TrackGeometry::new(track.preview_points(0.0, 5.0, 30), false)?;
        let k = CurvatureEstimator::default().curvature_at(&open, open.total_length());
        assert!(k > 0.002, "curvature at the open end should not collapse, got {k}");
        Ok(())
    }

    #[test]
    fn test_short_track_returns_zero() -> Result<(), Box<dyn std::error::Error>> {
        let track = TrackGeometry::new(vec![DVec3::ZERO, DVec3::new(0.01, 0.0, 0.0)], false)?;
        assert_relative_eq!(CurvatureEstimator::default().curvature_at(&track, 0.0), 0.0);
        Ok(())
    }

    #[test]
    fn test_new_guards_probe() {
        let estimator = CurvatureEstimator::new(0.0, -1.0);
        assert!(estimator.min_probe > 0.0);
        assert!(estimator.probe >= estimator.min_probe);
    }
}
