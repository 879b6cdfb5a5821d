//! Longitudinal vehicle dynamics for railrun.
//!
//! The train only moves along the track, so its motion reduces to a single
//! axis: speed and distance travelled. [`LongitudinalDynamics`] advances that
//! state by one fixed step from the driver's throttle and brake.
//!
//! # Force model
//!
//! - Traction `throttle * F_max * taper`, where the taper falls linearly to
//!   zero at `taper_ratio * max_speed`
//! - Braking `brake * B_max`, opposing motion
//! - Quadratic drag `c_d * v²` and constant rolling resistance
//!
//! Speed is clamped to `[0, max_speed]` and distance never decreases.
//!
//! # Example
//!
//! ```
//! use railrun_dynamics::{LongitudinalDynamics, VehicleParams};
//!
//! let mut train = LongitudinalDynamics::new(VehicleParams::default());
//! train.set_controls(1.0, 0.0);
//! for _ in 0..60 {
//!     train.step(1.0 / 60.0);
//! }
//!
//! let state = train.state();
//! assert!(state.speed > 2.0);
//! assert!(state.distance > 0.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod controls;
pub mod dynamics;
pub mod params;
pub mod prelude;
pub mod state;

pub use controls::VehicleControls;
pub use dynamics::LongitudinalDynamics;
pub use params::VehicleParams;
pub use state::VehicleKinematicState;
