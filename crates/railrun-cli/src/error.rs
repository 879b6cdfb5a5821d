//! Error types for the railrun CLI

use railrun_errors::{ConfigError, LevelError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Process exit code: 2 for a bad level or configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Level(err) if err.is_invalid_content() => 2,
            Self::Config(_) | Self::InvalidArgument(_) => 2,
            Self::Level(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let invalid: CliError = ConfigError::empty("advisory.lookahead").into();
        assert_eq!(invalid.exit_code(), 2);

        let io: CliError = LevelError::Io {
            path: PathBuf::from("x.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(io.exit_code(), 1);

        let format: CliError = LevelError::UnsupportedFormat(PathBuf::from("x.txt")).into();
        assert_eq!(format.exit_code(), 2);
    }
}
