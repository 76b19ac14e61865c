/// Operator dispatch.
pub mod core;

/// `+`, `-`, `*`, `/`, `//` and `%`.
pub mod arithmetic;

/// `&`, `|`, `^`, `<<` and `>>`.
pub mod bitwise;

/// Equality and relational operators.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;

/// `**`, and `^` when the caret means exponentiation.
pub mod power;
