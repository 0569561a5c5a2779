/// Number of decimal places kept when a result is printed.
pub const DISPLAY_DECIMALS: usize = 4;

/// Converts an `f64` to `i32` if the value is finite, integral and within
/// range.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i32)`: The converted value.
/// - `None`: If the value is non-finite, fractional or out of range.
///
/// ## Example
/// ```
/// use unitcalc::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-2.0), Some(-2));
/// assert_eq!(f64_to_i32_checked(1.5), None);
/// assert_eq!(f64_to_i32_checked(1e12), None);
/// assert_eq!(f64_to_i32_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i32_checked(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Formats a result the way the REPL prints it.
///
/// The value is rounded to [`DISPLAY_DECIMALS`] places, trailing zeros and a
/// trailing decimal point are removed, and a negative zero prints as `0`.
///
/// ## Example
/// ```
/// use unitcalc::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(118_110.236_1), "118110.2361");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(-0.000_01), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value:.DISPLAY_DECIMALS$}");
    let rendered = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    if rendered == "-0" { "0".to_string() } else { rendered.to_string() }
}
