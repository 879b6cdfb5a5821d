//! Shared test utilities for railrun.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Float and sequence assertion macros
//! - [`fixtures`] - Control-point sets for common track shapes
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! railrun-test-helpers = { workspace = true }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

pub mod assertions;
pub mod fixtures;
pub mod must;

pub use must::*;
