//! All three projectile quantities in one call.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::angle::{DEFAULT_LAUNCH_ANGLE, LaunchAngle};
use crate::error::Result;
use crate::physics::{max_distance, max_height, time_of_flight};

/// Snapshot of a launch: its inputs and the derived range, peak and flight time.
///
/// Serializes with the keys `muzzleVelocity`, `launchAngle`, `distance`,
/// `height` and `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    /// Muzzle velocity as supplied, in studs per second.
    pub muzzle_velocity: f64,
    /// Launch angle in both units.
    pub launch_angle: LaunchAngle,
    /// Horizontal range in studs (see [`max_distance`]).
    pub distance: f64,
    /// Peak height in studs (see [`max_height`]).
    pub height: f64,
    /// Time of flight in seconds (see [`time_of_flight`]).
    pub time: f64,
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v={} @ {}° -> distance {}, height {}, time {}",
            self.muzzle_velocity, self.launch_angle.degrees, self.distance, self.height, self.time
        )
    }
}

/// Computes range, peak height and time of flight for one launch.
///
/// `angle` is in radians; `None` means 45 degrees. No validation happens
/// here beyond what the individual formulas do, and the first error they
/// return is passed through untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) from
/// whichever underlying calculation rejects its input first.
///
/// # Example
///
/// ```rust
/// use projectile_studs::trajectory;
///
/// let t = trajectory(300.0, None).unwrap();
/// assert_eq!(t.distance, 458.72);
/// assert_eq!(t.height, 114.68);
/// assert_eq!(t.time, 2.16);
/// assert_eq!(t.launch_angle.degrees, 45.0);
/// ```
pub fn trajectory(velocity: f64, angle: impl Into<Option<f64>>) -> Result<Trajectory> {
    let angle = angle.into().unwrap_or(DEFAULT_LAUNCH_ANGLE);
    trace!(velocity, angle, "Evaluating trajectory");

    let launch_angle = LaunchAngle::from_radians(angle)?;
    let distance = max_distance(velocity, angle)?;
    let height = max_height(velocity, angle)?;
    let time = time_of_flight(velocity, angle)?;

    Ok(Trajectory {
        muzzle_velocity: velocity,
        launch_angle,
        distance,
        height,
        time,
    })
}
