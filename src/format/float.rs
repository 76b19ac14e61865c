use crate::format::group_digits;

/// Magnitudes below this (and above zero) print in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-6;
/// Magnitudes at or above this print in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e9;

/// Renders a float in fixed or scientific notation.
///
/// Scientific notation is used when `scientific` is set, or when the
/// magnitude is nonzero and below `1e-6`, or at least `1e9`. The exponent
/// is written the C way, with a sign and at least two digits. Grouping only
/// touches the integer part of fixed output.
///
/// # Parameters
/// - `value`: The float to render.
/// - `precision`: Digits after the decimal point.
/// - `group`: Integer-part digits per group, or 0 for no grouping.
/// - `scientific`: Whether to force scientific notation.
///
/// # Example
/// ```
/// use ccalc::format::float::format_float;
///
/// assert_eq!(format_float(1.5, 6, 0, false), "1.500000");
/// assert_eq!(format_float(-0.25, 2, 0, false), "-0.25");
/// assert_eq!(format_float(1234567.5, 1, 3, false), "1 234 567.5");
/// assert_eq!(format_float(1.5e10, 3, 0, false), "1.500e+10");
/// assert_eq!(format_float(2.5e-7, 2, 0, false), "2.50e-07");
/// assert_eq!(format_float(f64::NEG_INFINITY, 6, 0, false), "-inf");
/// ```
#[must_use]
pub fn format_float(value: f64, precision: usize, group: usize, scientific: bool) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude.is_infinite() {
        return format!("{sign}inf");
    }

    let use_scientific = scientific
                         || (magnitude != 0.0 && magnitude < SCIENTIFIC_LOWER)
                         || magnitude >= SCIENTIFIC_UPPER;

    let body = if use_scientific {
        format_scientific(magnitude, precision)
    } else {
        format_fixed(magnitude, precision, group)
    };

    format!("{sign}{body}")
}

/// Fixed notation with optional grouping of the integer part.
fn format_fixed(magnitude: f64, precision: usize, group: usize) -> String {
    let text = format!("{magnitude:.precision$}");
    if group == 0 {
        return text;
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits: Vec<String> = integer.chars().map(String::from).collect();
    let grouped = group_digits(&digits, group, "", " ");

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

/// Scientific notation as `d.ddde±XX`.
fn format_scientific(magnitude: f64, precision: usize) -> String {
    let text = format!("{magnitude:.precision$e}");

    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let exponent_sign = if exponent < 0 { '-' } else { '+' };

    format!("{mantissa}e{exponent_sign}{:02}", exponent.unsigned_abs())
}
