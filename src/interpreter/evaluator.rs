/// Binary operator evaluation logic.
///
/// Handles every infix operator: arithmetic with promotion, integer-only
/// division and modulo, exponentiation, bitwise operators, comparisons, the
/// logical connectives and the comma operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators `+`, `-`, `!` and `~`.
pub mod unary;

/// Core evaluation context.
///
/// Contains the read-only `Context` every operator and function is evaluated
/// against, and the `EvalResult` alias.
pub mod core;

/// Named constants.
///
/// Resolves identifiers such as `PI` or `INT_MAX` to their values.
pub mod constants;

/// Function evaluation.
///
/// Looks up built-in functions, checks their arity and applies them.
pub mod function;
