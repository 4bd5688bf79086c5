//! Meter/stud conversion and the engine's gravity constant.
//!
//! A stud is the engine's distance unit. Conversion scales by Earth's
//! gravity, so 20 meters is 196.2 studs, which is also the engine's default
//! `workspace.Gravity`.
//!
//! The two conversions round differently: [`meters_to_studs`] keeps two
//! decimals, [`studs_to_meters`] keeps one. Round trips are only
//! approximate as a result.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::precision::round_to_precision;

/// Earth's gravitational acceleration in meters per second squared.
pub const EARTH_GRAVITY: f64 = 9.81;

static STANDARD_GRAVITY: LazyLock<f64> = LazyLock::new(|| {
    let gravity = meters_to_studs(20.0)
        .and_then(|studs| round_to_precision(studs, 2))
        .expect("20 meters converts to a finite stud value");
    debug!(standard_gravity = gravity, "Standard gravity initialized");
    gravity
});

/// Returns the engine's gravitational acceleration in studs per second squared.
///
/// Derived once per process as `round(meters_to_studs(20), 2)` and shared by
/// [`max_distance`](crate::max_distance), [`time_of_flight`](crate::time_of_flight)
/// and [`max_height`](crate::max_height).
///
/// # Example
///
/// ```rust
/// use projectile_studs::{meters_to_studs, standard_gravity};
///
/// assert_eq!(standard_gravity(), 196.2);
/// assert_eq!(standard_gravity(), meters_to_studs(20.0).unwrap());
/// ```
#[inline]
pub fn standard_gravity() -> f64 {
    *STANDARD_GRAVITY
}

/// Converts meters to studs, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `meters` is NaN or infinite, or so
/// large that the stud value overflows.
///
/// # Example
///
/// ```rust
/// use projectile_studs::meters_to_studs;
///
/// assert_eq!(meters_to_studs(20.0).unwrap(), 196.2);
/// ```
pub fn meters_to_studs(meters: f64) -> Result<f64> {
    if !meters.is_finite() {
        return Err(Error::non_finite("meters", meters));
    }
    let studs = meters * EARTH_GRAVITY;
    if studs.is_infinite() {
        return Err(Error::overflow("meters", meters));
    }
    round_to_precision(studs, 2)
}

/// Converts studs to meters, rounded to one decimal.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `studs` is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use projectile_studs::studs_to_meters;
///
/// assert_eq!(studs_to_meters(196.2).unwrap(), 20.0);
/// ```
pub fn studs_to_meters(studs: f64) -> Result<f64> {
    if !studs.is_finite() {
        return Err(Error::non_finite("studs", studs));
    }
    round_to_precision(studs / EARTH_GRAVITY, None)
}
