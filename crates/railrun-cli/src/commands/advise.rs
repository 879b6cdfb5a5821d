//! Safe-speed advisory inspection

use std::path::Path;

use anyhow::Result;
use colored::*;
use railrun_advisory::Advisory;
use railrun_engine::Simulation;

use crate::commands::load_level;
use crate::error::CliError;
use crate::output;

pub fn execute(level: Option<&Path>, distance: f64, json: bool) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "distance must be a non-negative number of metres, got {distance}"
        ))
        .into());
    }

    let loaded = load_level(level)?;
    let simulation = Simulation::new(loaded.config, loaded.level);
    let advice = simulation.advisory_at(distance);

    if json {
        output::print_json("advisory", &advice);
    } else {
        print_advice(distance, &advice);
    }
    Ok(())
}

fn print_advice(distance: f64, advice: &Advisory) {
    println!("{} {}", "Advisory at".bold(), output::metres(distance));
    output::print_field("Safe speed", output::speed(advice.safe_speed).green());
    output::print_field("Curvature limit", output::speed(advice.curvature_limit));
    output::print_field("Terminal limit", output::speed(advice.terminal_limit));
    if advice.terminal_governs() {
        output::print_field("Governed by", "terminal".yellow());
    } else {
        output::print_field("Governed by", "curvature");
    }

    println!();
    println!(
        "  {:>8}  {:>10}  {:>12}  {:>9}  {:>9}",
        "ahead", "curvature", "safe speed", "forward", "lateral"
    );
    for sample in &advice.samples {
        println!(
            "  {:>8.1}  {:>10.5}  {:>12.2}  {:>9.1}  {:>9.1}",
            sample.distance_ahead,
            sample.curvature,
            sample.safe_speed,
            sample.forward_offset,
            sample.lateral_offset
        );
    }
}
