//! Degree/radian conversion.
//!
//! Neither conversion rounds its result, so a round trip returns the input
//! up to floating point epsilon.
//!
//! # Example
//!
//! ```rust
//! use projectile_studs::{degrees_to_radians, radians_to_degrees};
//!
//! let rad = degrees_to_radians(45.0).unwrap();
//! assert!((rad - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
//! assert_eq!(radians_to_degrees(rad).unwrap(), 45.0);
//! ```

use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Launch angle used when a formula is called without one: 45 degrees, in radians.
///
/// Evaluates the same expression as [`degrees_to_radians`], so the two agree
/// bit for bit.
pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0 * (PI / 180.0);

/// Converts an angle in degrees to radians.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `degree` is NaN or infinite.
#[inline]
pub fn degrees_to_radians(degree: f64) -> Result<f64> {
    if !degree.is_finite() {
        return Err(Error::non_finite("degree", degree));
    }
    Ok(degree * (PI / 180.0))
}

/// Converts an angle in radians to degrees.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `radian` is NaN or infinite.
#[inline]
pub fn radians_to_degrees(radian: f64) -> Result<f64> {
    if !radian.is_finite() {
        return Err(Error::non_finite("radian", radian));
    }
    Ok(radian * (180.0 / PI))
}

/// A launch angle carried in both units.
///
/// Serializes as `{ "rad": .., "deg": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchAngle {
    /// Angle in radians.
    #[serde(rename = "rad")]
    pub radians: f64,
    /// Angle in degrees.
    #[serde(rename = "deg")]
    pub degrees: f64,
}

impl LaunchAngle {
    /// Builds the pair from an angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `radians` is not finite.
    pub fn from_radians(radians: f64) -> Result<Self> {
        Ok(Self {
            radians,
            degrees: radians_to_degrees(radians)?,
        })
    }

    /// Builds the pair from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `degrees` is not finite.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        Ok(Self {
            radians: degrees_to_radians(degrees)?,
            degrees,
        })
    }
}

impl Default for LaunchAngle {
    fn default() -> Self {
        Self {
            radians: DEFAULT_LAUNCH_ANGLE,
            degrees: 45.0,
        }
    }
}
