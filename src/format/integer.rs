use crate::format::group_digits;

/// Renders an integer in the given radix.
///
/// Binary, octal and hexadecimal output carry the C prefixes `0b`, `0` and
/// `0x`. Digits above 9 print as letters up to radix 16; above that every
/// digit prints as a decimal number and digits are separated by `:`.
/// Negative values print `-` before the prefix.
///
/// # Parameters
/// - `value`: The integer to render.
/// - `radix`: Output base, at least 2.
/// - `group`: Digits per group, or 0 for no grouping.
/// - `uppercase`: Whether letter digits are upper case.
///
/// # Example
/// ```
/// use ccalc::format::integer::format_integer;
///
/// assert_eq!(format_integer(219, 2, 8, false), "0b11011011");
/// assert_eq!(format_integer(0x1234_5678, 16, 4, false), "0x1234 5678");
/// assert_eq!(format_integer(-255, 16, 0, true), "-0xFF");
/// assert_eq!(format_integer(1000, 20, 0, false), "2:10:0");
/// assert_eq!(format_integer(1_234_567, 10, 3, false), "1 234 567");
/// ```
#[must_use]
pub fn format_integer(value: i64, radix: u32, group: usize, uppercase: bool) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let sign = if value < 0 { "-" } else { "" };
    let prefix = match radix {
        2 => "0b",
        8 => "0",
        16 => "0x",
        _ => "",
    };

    let digits = to_digits(value.unsigned_abs(), radix);

    let body = if radix > 16 {
        let parts: Vec<String> = digits.iter().map(u32::to_string).collect();
        group_digits(&parts, group, ":", ": ")
    } else {
        let parts: Vec<String> = digits.iter()
                                       .map(|&d| digit_char(d, uppercase).to_string())
                                       .collect();
        group_digits(&parts, group, "", " ")
    };

    format!("{sign}{prefix}{body}")
}

/// Splits a magnitude into its digits, most significant first.
fn to_digits(mut magnitude: u64, radix: u32) -> Vec<u32> {
    let base = u64::from(radix);
    let count = magnitude.ilog(base) as usize + 1;
    let mut digits = vec![0; count];

    for slot in digits.iter_mut().rev() {
        *slot = u32::try_from(magnitude % base).unwrap_or_default();
        magnitude /= base;
    }

    digits
}

/// Maps a digit below 16 to its character.
fn digit_char(digit: u32, uppercase: bool) -> char {
    let c = char::from_digit(digit, 16).unwrap_or('?');
    if uppercase { c.to_ascii_uppercase() } else { c }
}
