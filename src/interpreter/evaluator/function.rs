/// Built-in function implementations.
///
/// Contains the C library math functions available to expressions:
/// roots, exponentials, logarithms, trigonometric and hyperbolic functions,
/// the error and gamma functions, remainders and `rand`.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two arguments, keeping integers as
/// integers.
pub mod min_max;
/// `floor`, `ceil`, `trunc` and `round`.
///
/// Rounds a float to an integral value and returns it as an integer when
/// it fits.
pub mod rounding;

pub mod core;
