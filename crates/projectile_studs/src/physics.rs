//! Closed-form projectile formulas.
//!
//! Every formula takes a muzzle velocity in studs per second and a launch
//! angle in **radians**. Passing `None` for the angle uses
//! [`DEFAULT_LAUNCH_ANGLE`] (45 degrees). Gravity is always
//! [`standard_gravity`], and every result is rounded to two decimals.
//!
//! Velocity is not clamped: a negative velocity produces the mirrored value
//! the formula gives, physically meaningful or not. The angle is not
//! validated on its own; a non-finite angle poisons the result, and the
//! final rounding step reports it. A finite velocity too large for the
//! result to fit in an `f64` is reported against `velocity`.
//!
//! # Example
//!
//! ```rust
//! use projectile_studs::{max_distance, max_height, time_of_flight};
//!
//! assert_eq!(max_distance(300.0, None).unwrap(), 458.72);
//! assert_eq!(max_height(300.0, None).unwrap(), 114.68);
//! assert_eq!(time_of_flight(300.0, None).unwrap(), 2.16);
//! ```

use crate::angle::DEFAULT_LAUNCH_ANGLE;
use crate::error::{Error, Result};
use crate::precision::round_to_precision;
use crate::units::standard_gravity;

/// Horizontal range of a projectile landing at launch height, in studs.
///
/// `R = v² · sin(2θ) / g`
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] on `velocity` if it is not finite or
/// is too large for the result to fit in an `f64`.
pub fn max_distance(velocity: f64, angle: impl Into<Option<f64>>) -> Result<f64> {
    if !velocity.is_finite() {
        return Err(Error::non_finite("velocity", velocity));
    }
    let angle = angle.into().unwrap_or(DEFAULT_LAUNCH_ANGLE);

    let vel = velocity.powi(2);
    if vel.is_infinite() {
        return Err(Error::overflow("velocity", velocity));
    }
    let sin = (2.0 * angle).sin() / standard_gravity();
    round_to_precision(vel * sin, 2)
}

/// Time until the projectile returns to launch height, in seconds.
///
/// `T = 2v · sin(θ) / g`
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] on `velocity` if it is not finite or
/// is too large for the result to fit in an `f64`.
pub fn time_of_flight(velocity: f64, angle: impl Into<Option<f64>>) -> Result<f64> {
    if !velocity.is_finite() {
        return Err(Error::non_finite("velocity", velocity));
    }
    let angle = angle.into().unwrap_or(DEFAULT_LAUNCH_ANGLE);

    let vel = 2.0 * velocity;
    if vel.is_infinite() {
        return Err(Error::overflow("velocity", velocity));
    }
    let sin = angle.sin() / standard_gravity();
    round_to_precision(vel * sin, 2)
}

/// Peak height above the launch point, in studs.
///
/// `H = v² · sin²(θ) / 2g`
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] on `velocity` if it is not finite or
/// is too large for the result to fit in an `f64`.
pub fn max_height(velocity: f64, angle: impl Into<Option<f64>>) -> Result<f64> {
    if !velocity.is_finite() {
        return Err(Error::non_finite("velocity", velocity));
    }
    let angle = angle.into().unwrap_or(DEFAULT_LAUNCH_ANGLE);

    let sq = velocity.powi(2);
    if sq.is_infinite() {
        return Err(Error::overflow("velocity", velocity));
    }
    let sin = angle.sin().powi(2);
    let g = 2.0 * standard_gravity();
    round_to_precision(sq * sin / g, 2)
}
