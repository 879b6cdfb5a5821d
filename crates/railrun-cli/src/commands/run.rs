//! Autopilot runs

use std::path::Path;

use anyhow::Result;
use colored::*;
use railrun_dynamics::VehicleControls;
use railrun_engine::{Session, Simulation};
use railrun_rules::{FailureReason, RunState};
use serde::Serialize;
use tracing::info;

use crate::autopilot::Autopilot;
use crate::commands::load_level;
use crate::error::CliError;
use crate::output;

/// Result of one autopilot run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub level: String,
    pub outcome: String,
    pub failure_reason: Option<FailureReason>,
    pub status: String,
    pub timed_out: bool,
    pub ticks: u64,
    pub simulated_seconds: f64,
    pub distance: f64,
    pub speed: f64,
    pub comfort: f64,
    pub min_comfort: f64,
    pub top_speed: f64,
}

pub fn execute(level: Option<&Path>, frame_rate: f64, max_seconds: f64, json: bool) -> Result<()> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "frame rate must be positive, got {frame_rate}"
        ))
        .into());
    }
    if !max_seconds.is_finite() || max_seconds <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "max seconds must be positive, got {max_seconds}"
        ))
        .into());
    }

    let loaded = load_level(level)?;
    let session = Session::new(Simulation::new(loaded.config, loaded.level));
    let summary = drive(session, frame_rate, max_seconds);

    if json {
        output::print_json("run", &summary);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Drive `session` with the autopilot at a steady frame rate.
pub fn drive(mut session: Session, frame_rate: f64, max_seconds: f64) -> RunSummary {
    let autopilot = Autopilot::default();
    let layout = *session.simulation().level().layout();
    let frame_interval = 1.0 / frame_rate;

    session.start();
    let mut timestamp = 0.0;
    session.frame(timestamp, VehicleControls::RELEASED);

    let mut snapshot = session.snapshot();
    let mut min_comfort = snapshot.comfort.comfort;
    let mut top_speed = snapshot.kinematics.speed;

    while !snapshot.run_state.is_terminal() && timestamp < max_seconds {
        let controls = autopilot.controls(&snapshot, &layout);
        timestamp += frame_interval;
        snapshot = session.frame(timestamp, controls).snapshot;
        min_comfort = min_comfort.min(snapshot.comfort.comfort);
        top_speed = top_speed.max(snapshot.kinematics.speed);
    }

    let timed_out = !snapshot.run_state.is_terminal();
    let step = session.scheduler().step();
    info!(
        outcome = %snapshot.run_state,
        ticks = snapshot.tick,
        timed_out,
        "run finished"
    );

    RunSummary {
        level: session.simulation().level().name().to_string(),
        outcome: snapshot.run_state.to_string(),
        failure_reason: snapshot.failure_reason,
        status: snapshot.status.to_string(),
        timed_out,
        ticks: snapshot.tick,
        simulated_seconds: snapshot.tick as f64 * step,
        distance: snapshot.kinematics.distance,
        speed: snapshot.kinematics.speed,
        comfort: snapshot.comfort.comfort,
        min_comfort,
        top_speed,
    }
}

fn print_summary(summary: &RunSummary) {
    let outcome = if is_won(summary) {
        summary.outcome.green().bold()
    } else if summary.timed_out {
        summary.outcome.yellow().bold()
    } else {
        summary.outcome.red().bold()
    };

    println!("{} {}", "Run:".bold(), summary.level);
    output::print_field("Outcome", outcome);
    output::print_field("Status", &summary.status);
    if summary.timed_out {
        output::print_field("Timed out", "yes".yellow());
    }
    output::print_field("Ticks", summary.ticks);
    output::print_field("Simulated time", format!("{:.2} s", summary.simulated_seconds));
    output::print_field("Distance", output::metres(summary.distance));
    output::print_field("Final speed", output::speed(summary.speed));
    output::print_field("Top speed", output::speed(summary.top_speed));
    output::print_field("Comfort", format!("{:.1}", summary.comfort));
    output::print_field("Lowest comfort", format!("{:.1}", summary.min_comfort));
}

/// Whether a summary describes a completed run.
pub fn is_won(summary: &RunSummary) -> bool {
    summary.outcome == RunState::Won.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use railrun_engine::{Level, LevelDefinition, SimulationConfig};
    use railrun_test_helpers::must;

    fn default_session() -> Session {
        let config = SimulationConfig::default();
        let level = must(Level::build(&LevelDefinition::default(), &config.terminal));
        Session::new(Simulation::new(config, level))
    }

    #[test]
    fn test_autopilot_wins_default_level() {
        let summary = drive(default_session(), 60.0, 600.0);
        assert!(is_won(&summary), "outcome {}", summary.outcome);
        assert!(!summary.timed_out);
        assert!(summary.failure_reason.is_none());
        assert!(summary.min_comfort > 0.0);
        assert!(summary.speed < 0.3);
    }

    #[test]
    fn test_short_limit_times_out() {
        let summary = drive(default_session(), 60.0, 5.0);
        assert!(summary.timed_out);
        assert_eq!(summary.outcome, "running");
        assert!(summary.distance > 0.0);
    }

    #[test]
    fn test_rejects_bad_frame_rate() {
        let result = execute(None, 0.0, 10.0, true);
        let code = result
            .err()
            .and_then(|e| e.downcast_ref::<CliError>().map(CliError::exit_code));
        assert_eq!(code, Some(2));
    }
}
