//! Terminal layout: where a run can be won or lost.

use railrun_errors::ConfigResult;
use railrun_errors::config::{require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

/// Level configuration for the terminal at the end of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Distance from the end of the track back to the bumper, in metres.
    pub bumper_offset: f64,
    /// Gap between the end of the platform and the bumper.
    pub station_gap: f64,
    /// Platform length.
    pub station_length: f64,
}

impl TerminalConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for negative offsets or a non-positive platform length.
    pub fn validate(&self) -> ConfigResult {
        require_non_negative("terminal.bumper_offset", self.bumper_offset)?;
        require_non_negative("terminal.station_gap", self.station_gap)?;
        require_positive("terminal.station_length", self.station_length)?;
        Ok(())
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            bumper_offset: 5.0,
            station_gap: 10.0,
            station_length: 60.0,
        }
    }
}

/// Bumper and platform bounds, as distances along the track.
///
/// Derived once when the track is built. Always satisfies
/// `0 <= station_start_distance <= station_end_distance <= bumper_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalLayout {
    /// Reaching this distance fails the run.
    pub bumper_distance: f64,
    /// First distance that counts as inside the platform.
    pub station_start_distance: f64,
    /// Last distance that counts as inside the platform.
    pub station_end_distance: f64,
}

impl TerminalLayout {
    /// Lay out the terminal at the end of a track of `track_length` metres.
    ///
    /// Bounds that would fall before the start of the track are clamped to 0.
    ///
    /// # Example
    ///
    /// ```
    /// use railrun_track::{TerminalConfig, TerminalLayout};
    ///
    /// let layout = TerminalLayout::from_track_length(1000.0, &TerminalConfig::default());
    /// assert!((layout.bumper_distance - 995.0).abs() < 1e-9);
    /// assert!((layout.station_end_distance - 985.0).abs() < 1e-9);
    /// assert!((layout.station_start_distance - 925.0).abs() < 1e-9);
    /// ```
    pub fn from_track_length(track_length: f64, config: &TerminalConfig) -> Self {
        let length = if track_length.is_finite() { track_length.max(0.0) } else { 0.0 };
        let bumper_distance = (length - config.bumper_offset.max(0.0)).max(0.0);
        let station_end_distance = (bumper_distance - config.station_gap.max(0.0)).max(0.0);
        let station_start_distance =
            (station_end_distance - config.station_length.max(0.0)).max(0.0);

        Self {
            bumper_distance,
            station_start_distance,
            station_end_distance,
        }
    }

    /// Whether `distance` lies within the platform (bounds inclusive).
    #[inline]
    pub fn in_station(&self, distance: f64) -> bool {
        (self.station_start_distance..=self.station_end_distance).contains(&distance)
    }

    /// Distance left to the end of the platform, never negative.
    #[inline]
    pub fn remaining_to_station_end(&self, distance: f64) -> f64 {
        (self.station_end_distance - distance).max(0.0)
    }

    /// Distance left to the start of the platform, never negative.
    #[inline]
    pub fn remaining_to_station_start(&self, distance: f64) -> f64 {
        (self.station_start_distance - distance).max(0.0)
    }

    /// Distance left to the bumper, never negative.
    #[inline]
    pub fn remaining_to_bumper(&self, distance: f64) -> f64 {
        (self.bumper_distance - distance).max(0.0)
    }

    /// Platform length after clamping.
    #[inline]
    pub fn station_length(&self) -> f64 {
        self.station_end_distance - self.station_start_distance
    }
}
