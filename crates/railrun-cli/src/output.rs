//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print a successful JSON response wrapping `value` under `key`.
pub fn print_json<T: Serialize>(key: &str, value: &T) {
    let output = json!({
        "success": true,
        key: value,
    });
    match serde_json::to_string_pretty(&output) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {key} as JSON: {e}"),
    }
}

/// Print a `label: value` line.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<22} {}", format!("{label}:").dimmed(), value);
}

/// Format metres.
pub fn metres(value: f64) -> String {
    format!("{value:.1} m")
}

/// Format a speed in m/s with km/h alongside.
pub fn speed(value: f64) -> String {
    format!("{value:.2} m/s ({:.0} km/h)", value * 3.6)
}
