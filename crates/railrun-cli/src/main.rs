//! railrun - headless driver for the railrun simulation
//!
//! Runs levels on autopilot, validates level files and inspects the speed
//! advisory and terminal layout of a track.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod autopilot;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "railrun")]
#[command(about = "Railrun CLI - Drive, validate and inspect railrun levels")]
#[command(version)]
#[command(long_about = "
railrun drives the train simulation without a renderer. It can run a level
to completion on autopilot, validate YAML or JSON level files, and print the
safe-speed advisory and terminal layout of a track.

Without --level the built-in Valley Line level is used.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Level file to load (YAML or JSON)
    #[arg(long, global = true, env = "RAILRUN_LEVEL")]
    level: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the level on autopilot until the run ends
    Run {
        /// Render frames per second fed to the scheduler
        #[arg(long, default_value_t = 60.0)]
        frame_rate: f64,

        /// Give up after this much simulated time, in seconds
        #[arg(long, default_value_t = 600.0)]
        max_seconds: f64,
    },

    /// Check a level file without running it
    Validate {
        /// Level file to check
        path: PathBuf,
    },

    /// Print the safe-speed advisory at a distance along the track
    Advise {
        /// Distance along the track, in metres
        #[arg(default_value_t = 0.0)]
        distance: f64,
    },

    /// Print the track length and terminal layout
    Layout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("railrun={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let level = cli.level.as_deref();
    match &cli.command {
        Commands::Run {
            frame_rate,
            max_seconds,
        } => commands::run::execute(level, *frame_rate, *max_seconds, cli.json),
        Commands::Validate { path } => commands::validate::execute(path, cli.json),
        Commands::Advise { distance } => commands::advise::execute(level, *distance, cli.json),
        Commands::Layout => commands::layout::execute(level, cli.json),
    }
}
