//! # ccalc
//!
//! ccalc evaluates a single C-style expression and renders the result.
//! Integers and floats follow C promotion rules, operators follow the C
//! precedence ladder and the C math library is available as built-in
//! functions. Integer results can be printed in any radix of at least two.
//!
//! ```
//! use ccalc::{Config, Value, calculate, evaluate};
//!
//! assert_eq!(evaluate("2**2**2**2", &Config::default()).unwrap(), Value::Integer(65536));
//! assert_eq!(calculate("5 / 3", &Config::default()).unwrap(), "1.666667");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, lexer::Tokens, parser::core::parse_input};

/// Output and evaluation settings.
///
/// Defines the [`Config`] record the caller fills in for one evaluation:
/// output radix, precision and grouping, the angle unit, the meaning of `^`
/// and boolean coercion.
pub mod config;
/// Provides unified error types for lexing, parsing, evaluation and
/// formatting.
///
/// Each phase has its own error enum with a human-readable message; the
/// top-level [`error::Error`] wraps them and reports the error category
/// through [`error::Error::kind`].
pub mod error;
/// Turns a value into text.
///
/// Integers are rendered in the configured radix with optional digit
/// grouping, floats in fixed or scientific notation.
pub mod format;
/// Lexes, parses and evaluates expressions.
///
/// Ties together the lexer, the precedence cascade that evaluates while it
/// parses, the operator semantics and the built-in registry.
pub mod interpreter;
/// Defines the unary and binary operators of the expression language.
pub mod operator;
/// General utilities for safe numeric conversion.
///
/// Conversions between `i64`, `u32` and `f64` are funnelled through these
/// helpers so that every lossy cast is spelled out in one place.
pub mod util;

pub use config::{AngleUnit, Config};
pub use error::Error;
pub use format::format_value;
pub use interpreter::value::core::Value;

/// Evaluates an expression and returns its value.
///
/// Only [`Config::angle_unit`] and [`Config::caret_exp`] matter here; the
/// output settings are not validated.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error encountered.
///
/// # Examples
/// ```
/// use ccalc::{Config, Value, error::ErrorKind, evaluate};
///
/// let config = Config::default();
/// assert_eq!(evaluate("4 / 2", &config).unwrap(), Value::Integer(2));
/// assert_eq!(evaluate("-13**2", &config).unwrap(), Value::Integer(-169));
///
/// let err = evaluate("4 * (1 + 2", &config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// assert_eq!(err.to_string(), "unmatched parenthesis '('");
/// ```
pub fn evaluate(text: &str, config: &Config) -> Result<Value, Error> {
    let context = Context::new(config.angle_unit);
    let mut tokens = Tokens::new(text, config.caret_exp).peekable();

    parse_input(&mut tokens, &context)
}

/// Validates the configuration, evaluates an expression and formats the
/// result.
///
/// # Errors
/// Returns a configuration error before looking at the expression, or the
/// first error raised while evaluating it.
///
/// # Examples
/// ```
/// use ccalc::{Config, calculate};
///
/// let hex = Config { radix: 16, ..Config::default() };
/// assert_eq!(calculate("0b11011011", &hex).unwrap(), "0xdb");
///
/// let bad = Config { precision: -1, ..Config::default() };
/// assert_eq!(calculate("1", &bad).unwrap_err().to_string(),
///            "precision cannot be less than 0");
/// ```
pub fn calculate(text: &str, config: &Config) -> Result<String, Error> {
    config.validate()?;
    let value = evaluate(text, config)?;

    Ok(format_value(value, config)?)
}
