//! Level loading errors.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Error raised while loading a level file.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The file could not be read.
    #[error("failed to read level file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML document did not match the level schema.
    #[error("invalid YAML level: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document did not match the level schema.
    #[error("invalid JSON level: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON.
    #[error("unsupported level file extension for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Document parsed but failed validation.
    #[error("invalid level configuration: {0}")]
    Invalid(#[from] ConfigError),
}

impl LevelError {
    /// Whether the error is a content problem rather than an I/O failure.
    pub fn is_invalid_content(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
