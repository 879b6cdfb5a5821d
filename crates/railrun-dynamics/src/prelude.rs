//! Prelude for convenient imports.
//!
//! ```
//! use railrun_dynamics::prelude::*;
//! ```

pub use crate::controls::VehicleControls;
pub use crate::dynamics::LongitudinalDynamics;
pub use crate::params::VehicleParams;
pub use crate::state::VehicleKinematicState;
