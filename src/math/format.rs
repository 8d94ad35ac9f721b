//! Display formatting and parsing of numbers.
//!
//! The display only ever holds text produced by [`format_number`] or typed
//! digit by digit, so [`parse_number`] failing is a defensive condition
//! rather than an expected one.

use super::error::MathError;

/// Largest magnitude rendered in plain notation; beyond it (or below
/// `1e-10` for non-zero values) the display switches to exponent form.
const PLAIN_NOTATION_MAX: f64 = 1e15;
const PLAIN_NOTATION_MIN: f64 = 1e-10;

/// Decimal places kept for fractional values before trimming.
const FRACTION_DIGITS: usize = 10;

/// Render a numeric value as a display string.
///
/// Policy: integral values render without a fraction, fractional values
/// keep at most ten decimal places with trailing zeros trimmed, and very
/// large or very small magnitudes use exponent form. The result always
/// parses back via [`parse_number`] to a value equal to `n` within that
/// precision.
///
/// # Example
///
/// ```rust
/// use abacus::math::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        // Callers reject non-finite results before formatting; keep the
        // function total anyway.
        return n.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= PLAIN_NOTATION_MAX || magnitude < PLAIN_NOTATION_MIN {
        return format!("{:e}", n);
    }
    if n.fract() == 0.0 {
        return format!("{:.0}", n);
    }
    let rendered = format!("{:.*}", FRACTION_DIGITS, n);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Parse a display string back into a numeric value.
///
/// Fails with [`MathError::Parse`] on malformed input or on text that
/// parses to a non-finite value.
pub fn parse_number(s: &str) -> Result<f64, MathError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MathError::Parse {
            input: s.to_string(),
        }),
    }
}
