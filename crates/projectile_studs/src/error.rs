//! Error types for projectile calculations.

use thiserror::Error;

/// Errors returned by the projectile functions.
///
/// Every function in this crate reports bad input by returning this value;
/// nothing panics. Composite functions such as [`trajectory`](fn@crate::trajectory)
/// hand back the first error raised by the formula they delegate to.
///
/// # Example
///
/// ```rust
/// use projectile_studs::{degrees_to_radians, Error};
///
/// let err = degrees_to_radians(f64::NAN).unwrap_err();
/// assert!(matches!(err, Error::InvalidArgument { parameter: "degree", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required numeric argument was not a real number.
    #[error("{parameter} parameter must be a finite number, found {found}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Description of what was supplied instead.
        found: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for a non-finite float.
    pub(crate) fn non_finite(parameter: &'static str, value: f64) -> Self {
        tracing::debug!(parameter, %value, "Rejected non-finite argument");
        Self::InvalidArgument {
            parameter,
            found: value.to_string(),
        }
    }

    /// Builds an [`Error::InvalidArgument`] for a finite argument whose
    /// derived value no longer fits in an `f64`.
    pub(crate) fn overflow(parameter: &'static str, value: f64) -> Self {
        tracing::debug!(parameter, %value, "Rejected argument that overflows");
        Self::InvalidArgument {
            parameter,
            found: format!("{value} (result overflows)"),
        }
    }

    /// Returns the name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => *parameter,
        }
    }
}

/// A specialized [`Result`](std::result::Result) for projectile calculations.
pub type Result<T> = std::result::Result<T, Error>;
