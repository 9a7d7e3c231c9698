use crate::error::DomainError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Number of decimal places kept by [`round_to_places`] callers throughout the
/// crate.
pub const DECIMAL_PLACES: i32 = 5;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns `DomainError::InvalidArgument` naming `operator` for non-finite,
/// negative, out-of-range, or fractional values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `operator`: Operator name used in the error message.
/// - `step`: Index of the operation being executed.
///
/// ## Example
/// ```
/// use mathqa::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0, "factorial", 0).unwrap(), 7);
/// assert!(f64_to_u64_checked(-5.0, "factorial", 0).is_err());
/// assert!(f64_to_u64_checked(1.5, "factorial", 0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, operator: &'static str, step: usize) -> Result<u64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::InvalidArgument { operator,
                                                  details: format!("{value} is not finite"),
                                                  step });
    }
    if value < 0.0 {
        return Err(DomainError::InvalidArgument { operator,
                                                  details: format!("{value} is negative"),
                                                  step });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(DomainError::InvalidArgument { operator,
                                                  details: format!("{value} is too large"),
                                                  step });
    }
    if value.fract() != 0.0 {
        return Err(DomainError::InvalidArgument { operator,
                                                  details: format!("{value} is not an integer"),
                                                  step });
    }
    Ok(value as u64)
}

/// Converts a `u64` to `f64`, failing when the value is past the exactly
/// representable range.
///
/// ## Errors
/// Returns `DomainError::NonFinite` if the value exceeds `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64, operator: &'static str, step: usize) -> Result<f64, DomainError> {
    if value > MAX_SAFE_U64_INT {
        return Err(DomainError::NonFinite { operator, step });
    }

    Ok(value as f64)
}

/// Returns the value as an `i64` if it is integral and exactly representable.
///
/// Unlike the checked conversions above this never fails loudly; callers use it
/// to decide between an integer and a real representation.
///
/// ## Example
/// ```
/// use mathqa::util::num::f64_as_exact_i64;
///
/// assert_eq!(f64_as_exact_i64(12.0), Some(12));
/// assert_eq!(f64_as_exact_i64(-0.0), Some(0));
/// assert_eq!(f64_as_exact_i64(12.5), None);
/// assert_eq!(f64_as_exact_i64(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_as_exact_i64(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Rounds `value` to `places` decimal places, halves away from zero.
///
/// ## Example
/// ```
/// use mathqa::util::num::round_to_places;
///
/// assert_eq!(round_to_places(1.0 / 3.0, 5), 0.33333);
/// assert_eq!(round_to_places(0.375, 5), 0.375);
/// ```
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { value }
}
