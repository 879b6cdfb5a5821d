//! Prelude for the track crate.

pub use crate::curvature::CurvatureEstimator;
pub use crate::geometry::TrackGeometry;
pub use crate::terminal::{TerminalConfig, TerminalLayout};
pub use glam::DVec3;
