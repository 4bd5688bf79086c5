//! Decimal rounding for stable, comparable results.

use crate::error::{Error, Result};

/// Decimal places used by [`round_to_precision`] when none are given.
pub const DEFAULT_DECIMALS: u8 = 1;

/// Magnitude from which every `f64` is an integer (2^52).
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Rounds `value` to `decimals` decimal places.
///
/// Pass `None` to round to [`DEFAULT_DECIMALS`]. The result is always a
/// number, which strips floating point noise such as `196.20000000000002`.
///
/// Rounding is half away from zero, applied to the scaled product
/// `value * 10^decimals` rather than to the exact binary value. A stored
/// `8.345` (really `8.34499...`) scales to `834.5000000000001` and so rounds
/// up to `8.35`.
///
/// If the scaled product overflows or reaches 2^52, where every float is
/// already an integer, `value` has no more decimals than requested and is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use projectile_studs::round_to_precision;
///
/// assert_eq!(round_to_precision(196.20000000000002, 1).unwrap(), 196.2);
/// assert_eq!(round_to_precision(2.25, 1).unwrap(), 2.3);
/// assert_eq!(round_to_precision(-2.25, 1).unwrap(), -2.3);
/// assert_eq!(round_to_precision(3.14159, None).unwrap(), 3.1);
/// ```
pub fn round_to_precision(value: f64, decimals: impl Into<Option<u8>>) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::non_finite("value", value));
    }

    let decimals = decimals.into().unwrap_or(DEFAULT_DECIMALS);
    let factor = 10f64.powi(i32::from(decimals));
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return Ok(value);
    }

    Ok(scaled.round() / factor)
}
