//! Track geometry for railrun
//!
//! A track is built once from an ordered list of 3D control points and is
//! immutable afterwards. All queries are by distance travelled along the
//! track, never by raw curve parameter:
//!
//! - [`TrackGeometry`]: centripetal Catmull-Rom spline with a cached arc-length
//!   table, answering position/tangent queries and closest-point searches
//! - [`CurvatureEstimator`]: finite-difference curvature `|dT/ds|`
//! - [`TerminalLayout`]: bumper and station bounds derived from track length
//!
//! # Total queries
//!
//! Queries never fail. Out-of-range distances are clamped on open tracks and
//! wrapped on closed ones; a zero-length track resolves every query to its
//! start.
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use railrun_track::{CurvatureEstimator, TrackGeometry};
//!
//! let track = TrackGeometry::new(
//!     vec![DVec3::ZERO, DVec3::new(100.0, 0.0, 0.0), DVec3::new(200.0, 0.0, 0.0)],
//!     false,
//! )?;
//!
//! assert!((track.total_length() - 200.0).abs() < 1e-6);
//! let p = track.position_at_distance(50.0);
//! assert!((p.x - 50.0).abs() < 1e-6);
//!
//! let curvature = CurvatureEstimator::default().curvature_at(&track, 50.0);
//! assert!(curvature.abs() < 1e-9);
//! # Ok::<(), railrun_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curvature;
pub mod geometry;
pub mod prelude;
pub mod spline;
pub mod terminal;

pub use curvature::CurvatureEstimator;
pub use geometry::TrackGeometry;
pub use spline::HermiteSegment;
pub use terminal::{TerminalConfig, TerminalLayout};

/// Track lengths below this are treated as zero.
pub const MIN_TRACK_LENGTH: f64 = 1e-9;
