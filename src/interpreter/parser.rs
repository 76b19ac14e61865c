/// Entry points of the precedence cascade.
///
/// Contains the comma and conditional levels and the function that checks
/// the whole input has been consumed.
pub mod core;

/// Unary, exponentiation and primary expressions.
///
/// Handles prefix operators, the right-associative `**`, literals,
/// constants, function calls and parentheses.
pub mod unary;

/// Binary operator levels.
///
/// One function per left-associative precedence level, from `||` down to
/// the multiplicative operators.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides lookahead helpers, the shared left-associative fold and
/// argument list parsing.
pub mod utils;
