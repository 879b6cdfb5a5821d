//! Level files on disk.
//!
//! A level file holds a [`LevelDefinition`] and, optionally, simulation
//! settings overriding the defaults. YAML and JSON are both accepted and are
//! told apart by file extension.
//!
//! ```yaml
//! level:
//!   name: Short Hop
//!   control_points:
//!     - [0.0, 0.0, 0.0]
//!     - [300.0, 0.0, 0.0]
//! simulation:
//!   vehicle:
//!     max_speed: 20.0
//! ```

use std::path::Path;

use railrun_errors::{ConfigResult, LevelError, LevelResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::level::{Level, LevelDefinition};

/// Contents of a level file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelFile {
    /// The track.
    pub level: LevelDefinition,
    /// Simulation settings for this level.
    pub simulation: SimulationConfig,
}

impl LevelFile {
    /// Read and validate a level file.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnsupportedFormat`] for extensions other than
    /// `.yaml`, `.yml` and `.json`, an I/O or parse error, or
    /// [`LevelError::Invalid`] if the contents fail validation.
    pub fn load(path: impl AsRef<Path>) -> LevelResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)
            .ok_or_else(|| LevelError::UnsupportedFormat(path.to_path_buf()))?;

        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read level file");

        match format {
            Format::Yaml => Self::from_yaml_str(&text),
            Format::Json => Self::from_json_str(&text),
        }
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a parse error or [`LevelError::Invalid`].
    pub fn from_yaml_str(text: &str) -> LevelResult<Self> {
        let file: Self = serde_yaml::from_str(text)?;
        file.validate()?;
        Ok(file)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a parse error or [`LevelError::Invalid`].
    pub fn from_json_str(text: &str) -> LevelResult<Self> {
        let file: Self = serde_json::from_str(text)?;
        file.validate()?;
        Ok(file)
    }

    /// Serialize as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml_string(&self) -> LevelResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the level and every simulation section.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> ConfigResult {
        self.level.validate()?;
        self.simulation.validate()
    }

    /// Build the level described by this file.
    ///
    /// # Errors
    ///
    /// Returns an error if the track cannot be built.
    pub fn build_level(&self) -> ConfigResult<Level> {
        Level::build(&self.level, &self.simulation.terminal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
