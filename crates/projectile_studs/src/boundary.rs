//! Validation of untyped input from a scripting host.
//!
//! The typed API only needs to reject non-finite floats. Hosts that pass
//! arguments as JSON can hand over anything, so this module checks that each
//! argument really is a number before calling into the formulas.
//!
//! # Example
//!
//! ```rust
//! use projectile_studs::boundary::TrajectoryRequest;
//!
//! let request = TrajectoryRequest::from_json(r#"{ "velocity": 300 }"#).unwrap();
//! assert_eq!(request.evaluate().unwrap().distance, 458.72);
//!
//! let request = TrajectoryRequest::from_json(r#"{ "velocity": "fast" }"#).unwrap();
//! assert!(request.evaluate().is_err());
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::trajectory::{Trajectory, trajectory};

/// Extracts a number from a JSON value.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming `parameter` when the value is
/// missing (`null`), or is a string, boolean, array or object.
///
/// # Example
///
/// ```rust
/// use projectile_studs::boundary::number;
/// use serde_json::json;
///
/// assert_eq!(number(&json!(12.5), "velocity").unwrap(), 12.5);
/// let err = number(&json!("12.5"), "velocity").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "velocity parameter must be a finite number, found string \"12.5\""
/// );
/// ```
pub fn number(value: &Value, parameter: &'static str) -> Result<f64> {
    if let Some(n) = value.as_f64() {
        return Ok(n);
    }

    let found = match value {
        Value::Null => "nothing".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
        // Numbers outside f64 range (arbitrary precision builds only).
        Value::Number(n) => format!("unrepresentable number {n}"),
    };
    tracing::debug!(parameter, found = %found, "Rejected non-numeric argument");
    Err(Error::InvalidArgument { parameter, found })
}

/// A trajectory call as received from a host, before validation.
///
/// `velocity` is required. `angle` is in radians; omitting it or passing
/// `null` selects the 45 degree default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrajectoryRequest {
    /// Muzzle velocity, expected to be a number.
    #[serde(default)]
    pub velocity: Value,
    /// Optional launch angle in radians.
    #[serde(default)]
    pub angle: Option<Value>,
}

impl TrajectoryRequest {
    /// Parses a request from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] on parameter `request` if the text
    /// is not a JSON object with the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed trajectory request");
            Error::InvalidArgument {
                parameter: "request",
                found: format!("malformed JSON ({e})"),
            }
        })
    }

    /// Validates the arguments and computes the trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `velocity` or `angle` is not a
    /// number, or whatever [`trajectory`] returns.
    pub fn evaluate(&self) -> Result<Trajectory> {
        let velocity = number(&self.velocity, "velocity")?;
        let angle = self
            .angle
            .as_ref()
            .map(|angle| number(angle, "angle"))
            .transpose()?;
        trajectory(velocity, angle)
    }
}
