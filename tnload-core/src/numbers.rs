//! Numeric parsing and rounding helpers shared by validation and presentation.

use num_traits::cast::cast;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").ok());

/// Parse the leading numeric prefix of a form value.
///
/// Leading whitespace is skipped and trailing text is ignored, so `" 12.5 acres"`
/// reads as `12.5`. Returns `None` when no digits lead the value or the parsed
/// number is not finite.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let prefix = LEADING_NUMBER.as_ref()?.find(trimmed)?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to a fixed number of decimal places, returning 0.0 for non-finite values.
#[must_use]
pub fn round_to_places(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let exponent = cast::<u8, i32>(places).unwrap_or(0);
    let scale = 10_f64.powi(exponent);
    (value * scale).round() / scale
}

/// Render a value with a fixed number of decimals, the way results are shown and copied.
///
/// Non-finite values are spelled out (`Infinity`, `-Infinity`, `NaN`) rather
/// than masked as a number.
#[must_use]
pub fn format_fixed(value: f64, places: u8) -> String {
    let precision = usize::from(places);
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string()
    } else {
        format!("{value:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+.25"), Some(0.25));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn ignores_leading_whitespace_and_trailing_text() {
        assert_eq!(parse_number("  12.5 acres"), Some(12.5));
        assert_eq!(parse_number("7."), Some(7.0));
    }

    #[test]
    fn rejects_values_without_leading_digits() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn rounds_to_requested_places() {
        assert!((round_to_places(1.005_1, 2) - 1.01).abs() < 1e-12);
        assert!((round_to_places(10.0, 2) - 10.0).abs() < 1e-12);
        assert!(round_to_places(f64::NAN, 2).abs() < f64::EPSILON);
    }

    #[test]
    fn formats_with_fixed_decimals() {
        assert_eq!(format_fixed(10.0, 2), "10.00");
        assert_eq!(format_fixed(0.125, 1), "0.1");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
    }
}
