/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Largest `n` for which `n!` is finite as an `f64`.
pub const MAX_FACTORIAL_OPERAND: u64 = 170;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// not fractional and exactly representable.
///
/// ## Returns
/// - `Some(u64)`: The converted value.
/// - `None`: For non-finite, negative, fractional or too-large values.
///
/// ## Example
/// ```
/// use shuntcalc::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.23), None);
/// assert_eq!(f64_to_u64_checked(1e300), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Returns `true` if `value` is an odd integer.
///
/// ## Example
/// ```
/// use shuntcalc::util::num::is_odd_integer;
///
/// assert!(is_odd_integer(3.0));
/// assert!(is_odd_integer(-5.0));
/// assert!(!is_odd_integer(2.0));
/// assert!(!is_odd_integer(1.5));
/// assert!(!is_odd_integer(f64::INFINITY));
/// ```
#[must_use]
pub fn is_odd_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && (value % 2.0).abs() == 1.0
}
