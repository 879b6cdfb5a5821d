//! Level file validation

use std::path::Path;

use anyhow::Result;
use colored::*;
use railrun_engine::LevelFile;
use serde::Serialize;

use crate::error::CliError;
use crate::output;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub path: String,
    pub name: String,
    pub closed: bool,
    pub control_points: usize,
    pub track_length: f64,
}

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let file = LevelFile::load(path).map_err(CliError::from)?;
    let level = file.build_level().map_err(CliError::from)?;

    let report = ValidationReport {
        path: path.display().to_string(),
        name: level.name().to_string(),
        closed: level.track().is_closed(),
        control_points: file.level.control_points.len(),
        track_length: level.track().total_length(),
    };

    if json {
        output::print_json("level", &report);
    } else {
        println!("{} {}", "✓".green(), format!("{} is valid", report.path).bold());
        output::print_field("Name", &report.name);
        output::print_field("Closed", report.closed);
        output::print_field("Control points", report.control_points);
        output::print_field("Track length", output::metres(report.track_length));
    }
    Ok(())
}
