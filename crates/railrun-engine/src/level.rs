//! Levels: a track and the terminal laid out on it.

use glam::DVec3;
use railrun_errors::{ConfigError, ConfigResult};
use railrun_track::{TerminalConfig, TerminalLayout, TrackGeometry};
use serde::{Deserialize, Serialize};

/// Serializable description of a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDefinition {
    /// Display name.
    pub name: String,
    /// Whether the track loops back on itself.
    pub closed: bool,
    /// Track control points `[x, y, z]` in metres, in path order.
    pub control_points: Vec<[f64; 3]>,
}

impl LevelDefinition {
    /// Control points as vectors.
    pub fn points(&self) -> Vec<DVec3> {
        self.control_points.iter().copied().map(DVec3::from_array).collect()
    }

    /// Check the control points without building the track.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPoints`] or
    /// [`ConfigError::NonFinitePoint`].
    pub fn validate(&self) -> ConfigResult {
        if self.control_points.len() < TrackGeometry::MIN_POINTS {
            return Err(ConfigError::TooFewPoints {
                actual: self.control_points.len(),
                min: TrackGeometry::MIN_POINTS,
            });
        }
        if let Some(index) = self
            .control_points
            .iter()
            .position(|p| p.iter().any(|c| !c.is_finite()))
        {
            return Err(ConfigError::NonFinitePoint { index });
        }
        Ok(())
    }
}

impl Default for LevelDefinition {
    /// The built-in level: about 1.3 km of gentle S-bends into a terminal.
    fn default() -> Self {
        Self {
            name: "Valley Line".to_string(),
            closed: false,
            control_points: vec![
                [0.0, 0.0, 0.0],
                [150.0, 0.0, 0.0],
                [300.0, 1.0, 40.0],
                [450.0, 2.0, 60.0],
                [600.0, 2.0, 30.0],
                [750.0, 1.0, -20.0],
                [900.0, 0.0, -30.0],
                [1050.0, 0.0, -10.0],
                [1200.0, 0.0, 0.0],
                [1300.0, 0.0, 0.0],
            ],
        }
    }
}

/// A built level: immutable track geometry plus its terminal layout.
///
/// Built in two phases. The definition is fully validated and the geometry
/// and layout are derived together before any component sees them, so a
/// simulation never observes a half-built level.
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    track: TrackGeometry,
    layout: TerminalLayout,
}

impl Level {
    /// Build a level from its definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the control points or terminal configuration are
    /// invalid.
    pub fn build(definition: &LevelDefinition, terminal: &TerminalConfig) -> ConfigResult<Self> {
        definition.validate()?;
        terminal.validate()?;

        let track = TrackGeometry::new(definition.points(), definition.closed)?;
        let layout = TerminalLayout::from_track_length(track.total_length(), terminal);

        Ok(Self {
            name: definition.name.clone(),
            track,
            layout,
        })
    }

    /// Assemble a level from already built parts.
    pub fn from_parts(name: impl Into<String>, track: TrackGeometry, terminal: &TerminalConfig) -> Self {
        let layout = TerminalLayout::from_track_length(track.total_length(), terminal);
        Self {
            name: name.into(),
            track,
            layout,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Track geometry.
    #[inline]
    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// Terminal layout.
    #[inline]
    pub fn layout(&self) -> &TerminalLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_builds() -> Result<(), Box<dyn std::error::Error>> {
        let level = Level::build(&LevelDefinition::default(), &TerminalConfig::default())?;
        assert_eq!(level.name(), "Valley Line");
        assert!(level.track().total_length() > 1300.0);
        let layout = level.layout();
        assert!(layout.station_start_distance <= layout.station_end_distance);
        assert!(layout.station_end_distance <= layout.bumper_distance);
        Ok(())
    }

    #[test]
    fn test_too_few_points() {
        let definition = LevelDefinition {
            control_points: vec![[0.0, 0.0, 0.0]],
            ..LevelDefinition::default()
        };
        assert_eq!(
            definition.validate(),
            Err(ConfigError::TooFewPoints { actual: 1, min: 2 })
        );
    }

    #[test]
    fn test_non_finite_point_reports_index() {
        let mut definition = LevelDefinition::default();
        definition.control_points[3][1] = f64::NAN;
        assert_eq!(
            definition.validate(),
            Err(ConfigError::NonFinitePoint { index: 3 })
        );
    }

    #[test]
    fn test_invalid_terminal_rejected() {
        let terminal = TerminalConfig {
            station_length: 0.0,
            ..TerminalConfig::default()
        };
        assert!(Level::build(&LevelDefinition::default(), &terminal).is_err());
    }
}
