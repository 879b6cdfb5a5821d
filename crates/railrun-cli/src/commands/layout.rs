//! Track and terminal layout

use std::path::Path;

use anyhow::Result;
use colored::*;
use railrun_engine::Level;
use railrun_track::TerminalLayout;
use serde::Serialize;

use crate::commands::load_level;
use crate::output;

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub name: String,
    pub closed: bool,
    pub track_length: f64,
    pub layout: TerminalLayout,
}

impl LayoutReport {
    pub fn from_level(level: &Level) -> Self {
        Self {
            name: level.name().to_string(),
            closed: level.track().is_closed(),
            track_length: level.track().total_length(),
            layout: *level.layout(),
        }
    }
}

pub fn execute(level: Option<&Path>, json: bool) -> Result<()> {
    let loaded = load_level(level)?;
    let report = LayoutReport::from_level(&loaded.level);

    if json {
        output::print_json("layout", &report);
    } else {
        println!("{} {}", "Level:".bold(), report.name);
        output::print_field("Closed", report.closed);
        output::print_field("Track length", output::metres(report.track_length));
        output::print_field("Station start", output::metres(report.layout.station_start_distance));
        output::print_field("Station end", output::metres(report.layout.station_end_distance));
        output::print_field("Bumper", output::metres(report.layout.bumper_distance).red());
    }
    Ok(())
}
