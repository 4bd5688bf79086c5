#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]

//! # Projectile Studs
//!
//! Drag-free projectile motion formulas for a game engine that measures
//! distance in studs.
//!
//! Projectile Studs provides:
//! - **Angle conversion**: [`degrees_to_radians`] and [`radians_to_degrees`]
//! - **Rounding**: [`round_to_precision`] for stable, comparable results
//! - **Unit conversion**: [`meters_to_studs`] and [`studs_to_meters`]
//! - **Gravity**: [`standard_gravity`], 196.2 studs/s², computed once
//! - **Formulas**: [`max_distance`], [`time_of_flight`] and [`max_height`]
//! - **Aggregate**: [`trajectory()`], all three at once
//!
//! Every function returns a [`Result`]; bad input is reported as
//! [`Error::InvalidArgument`] and never panics.
//!
//! ## Example
//!
//! ```rust
//! use projectile_studs::{degrees_to_radians, trajectory};
//!
//! // 300 studs/s at the default 45 degrees
//! let shot = trajectory(300.0, None).unwrap();
//! assert_eq!(shot.distance, 458.72);
//!
//! // Angles are always given in radians
//! let lob = trajectory(300.0, degrees_to_radians(60.0).unwrap()).unwrap();
//! assert!(lob.height > shot.height);
//! ```
//!
//! ## Rounding
//!
//! The formulas round to two decimals. [`meters_to_studs`] rounds to two
//! decimals while [`studs_to_meters`] rounds to one, so converting studs to
//! meters and back can drift by up to about half a stud.
//!
//! ## Features
//!
//! - `json` (default): the [`boundary`] module, which validates untyped JSON
//!   arguments before they reach the formulas.

mod angle;
#[cfg(feature = "json")]
pub mod boundary;
mod error;
mod physics;
mod precision;
mod trajectory;
mod units;

pub use angle::{DEFAULT_LAUNCH_ANGLE, LaunchAngle, degrees_to_radians, radians_to_degrees};
pub use error::{Error, Result};
pub use physics::{max_distance, max_height, time_of_flight};
pub use precision::{DEFAULT_DECIMALS, round_to_precision};
pub use trajectory::{Trajectory, trajectory};
pub use units::{EARTH_GRAVITY, meters_to_studs, standard_gravity, studs_to_meters};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::angle::{DEFAULT_LAUNCH_ANGLE, LaunchAngle, degrees_to_radians, radians_to_degrees};
    pub use crate::error::{Error, Result};
    pub use crate::physics::{max_distance, max_height, time_of_flight};
    pub use crate::precision::{DEFAULT_DECIMALS, round_to_precision};
    pub use crate::trajectory::{Trajectory, trajectory};
    pub use crate::units::{EARTH_GRAVITY, meters_to_studs, standard_gravity, studs_to_meters};
}
