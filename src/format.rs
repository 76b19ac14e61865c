use crate::{config::Config, error::FormatError, interpreter::value::core::Value};

/// Float rendering in fixed or scientific notation.
pub mod float;
/// Integer rendering in an arbitrary radix.
pub mod integer;

/// Result type used by the formatter.
pub type FormatResult<T> = Result<T, FormatError>;

/// Renders a value as text according to the output configuration.
///
/// In boolean mode any nonzero value prints `true` and zero prints `false`.
/// Otherwise integers are rendered in the configured radix and floats with
/// the configured precision.
///
/// # Parameters
/// - `value`: The value to render.
/// - `config`: Output settings.
///
/// # Errors
/// - `FormatError::RadixTooSmall` if the radix is below 2.
/// - `FormatError::NegativePrecision` if the precision is negative.
///
/// # Example
/// ```
/// use ccalc::{Config, Value, format_value};
///
/// let hex = Config { radix: 16, uppercase: true, ..Config::default() };
/// assert_eq!(format_value(Value::Integer(42), &hex).unwrap(), "0x2A");
///
/// let binary = Config { radix: 2, ..Config::default() };
/// assert_eq!(format_value(Value::Integer(-42), &binary).unwrap(), "-0b101010");
///
/// assert_eq!(format_value(Value::Float(5.0 / 3.0), &Config::default()).unwrap(), "1.666667");
/// ```
pub fn format_value(value: Value, config: &Config) -> FormatResult<String> {
    config.validate()?;

    if config.boolean {
        let word = match (value.is_truthy(), config.uppercase) {
            (true, false) => "true",
            (false, false) => "false",
            (true, true) => "TRUE",
            (false, true) => "FALSE",
        };
        return Ok(word.to_string());
    }

    Ok(match value {
        Value::Integer(n) => integer::format_integer(n,
                                                     config.radix.unsigned_abs(),
                                                     config.grouping_width(),
                                                     config.uppercase),
        Value::Float(x) => float::format_float(x,
                                               usize::try_from(config.precision).unwrap_or_default(),
                                               config.grouping.unwrap_or(0),
                                               config.scientific),
    })
}

/// Joins digits, inserting `separator` before every `width` digits counted
/// from the least significant one.
///
/// A `width` of zero joins everything with `join` only.
pub(crate) fn group_digits<S: AsRef<str>>(digits: &[S],
                                          width: usize,
                                          join: &str,
                                          separator: &str)
                                          -> String {
    let mut out = String::new();

    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            let remaining = digits.len() - i;
            if width > 0 && remaining % width == 0 {
                out.push_str(separator);
            } else {
                out.push_str(join);
            }
        }
        out.push_str(digit.as_ref());
    }

    out
}
