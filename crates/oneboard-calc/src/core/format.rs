//! Conversions between display text and numbers
//!
//! The display only ever holds digits typed by the user, a canonical
//! numeral produced by [`canonical_string`], or [`ERROR_MARKER`].

/// Display text shown after an invalid arithmetic result
pub const ERROR_MARKER: &str = "Error";

/// Display text of a fresh or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// Smallest magnitude rendered without an exponent
const PLAIN_MIN: f64 = 1e-6;

/// Magnitudes at or above this are rendered with an exponent
const PLAIN_MAX: f64 = 1e21;

/// Parses the leading numeral of `text`
///
/// Returns NaN when `text` does not start with a numeral (the error marker
/// included). Digit runs too long for an `f64` saturate to infinity.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeral_prefix_len(text);
    if end == 0 {
        return f64::NAN;
    }
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Length in bytes of the longest numeral prefix, 0 if there is none
fn numeral_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Renders a number the way the dashboard display does
///
/// - `-0` renders as `0`
/// - magnitudes in `[1e-6, 1e21)` use positional notation with the
///   shortest digits that round-trip
/// - everything else uses an exponent with an explicit sign (`1e+21`)
#[must_use]
pub fn canonical_string(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if (PLAIN_MIN..PLAIN_MAX).contains(&n.abs()) {
        return format!("{n}");
    }

    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
