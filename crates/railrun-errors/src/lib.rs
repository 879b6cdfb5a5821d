//! Centralized error types for railrun
//!
//! The simulation tick path is total: it clamps and guards instead of
//! returning errors. Everything that can go wrong does so once, at level-load
//! time, and is reported through the types in this crate.
//!
//! - [`config`]: validation failures for simulation and level configuration
//! - [`level`]: failures while reading a level file from disk or a string
//!
//! # Example
//!
//! ```
//! use railrun_errors::{ConfigError, ConfigResult};
//!
//! fn check_mass(mass: f64) -> ConfigResult<f64> {
//!     if mass <= 0.0 {
//!         return Err(ConfigError::not_positive("vehicle.mass", mass));
//!     }
//!     Ok(mass)
//! }
//!
//! assert!(check_mass(-1.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod level;

pub use config::ConfigError;
pub use level::LevelError;

/// A specialized `Result` type for configuration validation.
pub type ConfigResult<T = ()> = std::result::Result<T, ConfigError>;

/// A specialized `Result` type for level loading.
pub type LevelResult<T> = std::result::Result<T, LevelError>;
