//! Safe-speed computation.

use glam::DVec3;
use railrun_track::{CurvatureEstimator, TerminalLayout, TrackGeometry};
use serde::{Deserialize, Serialize};

use crate::config::AdvisoryConfig;
use crate::sample::SafeSpeedSample;

/// Full advice at one distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// One sample per configured lookahead distance.
    pub samples: Vec<SafeSpeedSample>,
    /// Lowest curvature-limited speed across the samples.
    pub curvature_limit: f64,
    /// Speed that still allows stopping by the end of the platform.
    pub terminal_limit: f64,
    /// `min(curvature_limit, terminal_limit)`.
    pub safe_speed: f64,
}

impl Advisory {
    /// Whether the terminal guidance is the binding limit.
    pub fn terminal_governs(&self) -> bool {
        self.terminal_limit < self.curvature_limit
    }
}

/// Stateless safe-speed advisor.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use railrun_advisory::{AdvisoryConfig, SpeedAdvisory};
/// use railrun_track::{TerminalConfig, TerminalLayout, TrackGeometry};
///
/// let track = TrackGeometry::new(
///     vec![DVec3::ZERO, DVec3::new(500.0, 0.0, 0.0), DVec3::new(1000.0, 0.0, 0.0)],
///     false,
/// )?;
/// let layout = TerminalLayout::from_track_length(track.total_length(), &TerminalConfig::default());
/// let advisory = SpeedAdvisory::from_config(AdvisoryConfig::default());
///
/// // Straight track far from the terminal: the maximum applies.
/// let advice = advisory.advise(&track, &layout, 0.0);
/// assert!((advice.safe_speed - 30.0).abs() < 1e-9);
/// # Ok::<(), railrun_errors::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpeedAdvisory {
    config: AdvisoryConfig,
    estimator: CurvatureEstimator,
}

impl SpeedAdvisory {
    /// Create an advisor with an explicit curvature estimator.
    pub fn new(config: AdvisoryConfig, estimator: CurvatureEstimator) -> Self {
        Self { config, estimator }
    }

    /// Create an advisor whose estimator uses the probe lengths in `config`.
    pub fn from_config(config: AdvisoryConfig) -> Self {
        let estimator = CurvatureEstimator::new(config.curvature_probe, config.min_curvature_probe);
        Self::new(config, estimator)
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    /// Curvature estimator in use.
    #[inline]
    pub fn estimator(&self) -> &CurvatureEstimator {
        &self.estimator
    }

    fn clamp_speed(&self, speed: f64) -> f64 {
        let min = self.config.min_safe_speed;
        let max = self.config.max_safe_speed.max(min);
        if speed.is_nan() {
            return min;
        }
        speed.max(min).min(max)
    }

    /// Safe speed for a curvature `k` in 1/m.
    ///
    /// Straight track (`k = 0`) saturates at the configured maximum.
    pub fn curvature_safe_speed(&self, curvature: f64) -> f64 {
        let epsilon = self.config.epsilon.max(f64::MIN_POSITIVE);
        let k = if curvature.is_finite() { curvature.abs() } else { 0.0 };
        self.clamp_speed(self.config.gain / (k + epsilon).sqrt())
    }

    /// Speed from which the train can still stop at the platform end.
    ///
    /// Past the platform end the remaining distance is zero and the limit
    /// falls to the configured minimum.
    pub fn terminal_safe_speed(&self, distance: f64, layout: &TerminalLayout) -> f64 {
        let remaining = layout.remaining_to_station_end(distance);
        let decel = self.config.terminal_deceleration.max(0.0);
        self.clamp_speed((2.0 * decel * remaining).sqrt())
    }

    /// Curvature samples at each lookahead distance.
    pub fn samples(&self, track: &TrackGeometry, distance: f64) -> Vec<SafeSpeedSample> {
        let origin = track.position_at_distance(distance);
        let forward = track.tangent_at_distance(distance);
        let right = forward
            .cross(DVec3::Y)
            .try_normalize()
            .unwrap_or(DVec3::X);

        self.config
            .lookahead
            .iter()
            .map(|&ahead| {
                let at = distance + ahead;
                let curvature = self.estimator.curvature_at(track, at);
                let offset = track.position_at_distance(at) - origin;
                SafeSpeedSample {
                    distance_ahead: ahead,
                    curvature,
                    safe_speed: self.curvature_safe_speed(curvature),
                    lateral_offset: offset.dot(right),
                    forward_offset: offset.dot(forward),
                }
            })
            .collect()
    }

    /// Full advice at `distance`.
    pub fn advise(
        &self,
        track: &TrackGeometry,
        layout: &TerminalLayout,
        distance: f64,
    ) -> Advisory {
        let samples = self.samples(track, distance);
        let curvature_limit = samples
            .iter()
            .map(|s| s.safe_speed)
            .fold(self.clamp_speed(self.config.max_safe_speed), f64::min);
        let terminal_limit = self.terminal_safe_speed(distance, layout);

        Advisory {
            samples,
            curvature_limit,
            terminal_limit,
            safe_speed: curvature_limit.min(terminal_limit),
        }
    }
}

impl Default for SpeedAdvisory {
    fn default() -> Self {
        Self::from_config(AdvisoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railrun_test_helpers::fixtures::{circle_points, straight_points};
    use railrun_test_helpers::{assert_approx_eq, must};
    use railrun_track::TerminalConfig;

    fn straight(length: f64) -> (TrackGeometry, TerminalLayout) {
        let track = must(TrackGeometry::new(straight_points(length), false));
        let layout = TerminalLayout::from_track_length(track.total_length(), &TerminalConfig::default());
        (track, layout)
    }

    #[test]
    fn test_zero_curvature_gives_max() {
        let advisory = SpeedAdvisory::default();
        assert_approx_eq!(advisory.curvature_safe_speed(0.0), 30.0, 1e-12);
    }

    #[test]
    fn test_sharper_curve_is_slower() {
        let advisory = SpeedAdvisory::default();
        let gentle = advisory.curvature_safe_speed(0.002);
        let sharp = advisory.curvature_safe_speed(0.02);
        assert!(sharp < gentle);
        // 1.1 / sqrt(0.0201)
        assert_approx_eq!(sharp, 7.7588, 1e-3);
    }

    #[test]
    fn test_extreme_curvature_hits_floor() {
        let advisory = SpeedAdvisory::default();
        assert_approx_eq!(advisory.curvature_safe_speed(1e6), 3.0, 1e-12);
        assert_approx_eq!(advisory.curvature_safe_speed(f64::NAN), 30.0, 1e-12);
        assert_approx_eq!(
            advisory.curvature_safe_speed(-0.02),
            advisory.curvature_safe_speed(0.02),
            1e-12
        );
    }

    #[test]
    fn test_terminal_guidance() {
        let (_, layout) = straight(1000.0);
        let advisory = SpeedAdvisory::default();

        // 50 m short of the platform end: sqrt(2 * 1.0 * 50) = 10 m/s.
        let d = layout.station_end_distance - 50.0;
        assert_approx_eq!(advisory.terminal_safe_speed(d, &layout), 10.0, 1e-9);

        // Far away it saturates; past the end it floors.
        assert_approx_eq!(advisory.terminal_safe_speed(0.0, &layout), 30.0, 1e-12);
        let past = layout.station_end_distance + 1.0;
        assert_approx_eq!(advisory.terminal_safe_speed(past, &layout), 3.0, 1e-12);
    }

    #[test]
    fn test_advice_takes_more_restrictive_limit() {
        let (track, layout) = straight(1000.0);
        let advisory = SpeedAdvisory::default();

        let advice = advisory.advise(&track, &layout, layout.station_end_distance - 50.0);
        assert!(advice.terminal_governs());
        assert_approx_eq!(advice.curvature_limit, 30.0, 1e-9);
        assert_approx_eq!(advice.safe_speed, 10.0, 1e-9);
        assert_eq!(advice.samples.len(), 5);
    }

    #[test]
    fn test_sample_offsets_in_vehicle_frame() {
        let (track, layout) = straight(1000.0);
        let advisory = SpeedAdvisory::default();
        let advice = advisory.advise(&track, &layout, 100.0);

        for sample in &advice.samples {
            assert_approx_eq!(sample.forward_offset, sample.distance_ahead, 1e-6);
            assert_approx_eq!(sample.lateral_offset, 0.0, 1e-6);
        }
    }

    #[test]
    fn test_loop_curvature_limits_speed() {
        let track = must(TrackGeometry::new(circle_points(50.0, 32), true));
        let layout = TerminalLayout::from_track_length(track.total_length(), &TerminalConfig::default());
        let advisory = SpeedAdvisory::default();
        let advice = advisory.advise(&track, &layout, 10.0);

        // k ≈ 0.02 on a 50 m loop.
        assert!(advice.curvature_limit < 9.0, "{}", advice.curvature_limit);
        assert!(advice.curvature_limit > 6.5, "{}", advice.curvature_limit);
        for sample in &advice.samples {
            assert!(sample.lateral_offset.abs() <= 100.0 + 1e-6);
        }
    }

    #[test]
    fn test_lookahead_beyond_open_end_clamps() {
        let (track, layout) = straight(100.0);
        let advisory = SpeedAdvisory::default();
        let advice = advisory.advise(&track, &layout, 90.0);
        let last = advice.samples.last().map(|s| s.forward_offset);
        assert!(last.is_some_and(|f| (f - 10.0).abs() < 1e-6));
    }
}
