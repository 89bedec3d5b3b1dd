/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use likho::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Formats a runtime number the way it is shown to the learner.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`. Infinities print as `Infinity` and `-Infinity`. Magnitudes of
/// `1e21` and above, or below `1e-6`, switch to exponent form with a signed
/// exponent.
///
/// ## Example
/// ```
/// use likho::util::num::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(-4.0), "-4");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e-9), "1e-9");
/// assert_eq!(format_number(1.5e21), "1.5e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }

    format!("{value}")
}
