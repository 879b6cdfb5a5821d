//! Command implementations for the railrun CLI

pub mod advise;
pub mod layout;
pub mod run;
pub mod validate;

use std::path::Path;

use railrun_engine::{Level, LevelDefinition, LevelFile, SimulationConfig};
use tracing::debug;

use crate::error::CliError;

/// Level and configuration a command works on.
#[derive(Debug)]
pub struct LoadedLevel {
    pub level: Level,
    pub config: SimulationConfig,
}

/// Load `path`, or the built-in level with default configuration.
pub fn load_level(path: Option<&Path>) -> Result<LoadedLevel, CliError> {
    let (definition, config) = match path {
        Some(path) => {
            let file = LevelFile::load(path)?;
            (file.level, file.simulation)
        }
        None => {
            debug!("using built-in level");
            (LevelDefinition::default(), SimulationConfig::default())
        }
    };

    let level = Level::build(&definition, &config.terminal)?;
    Ok(LoadedLevel { level, config })
}
