/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64` and `f64` that the
/// value model relies on: exact demotion of integral doubles, C-style
/// truncation, and checked narrowing for shift and exponent counts.
///
/// Checked functions return a `Result` or `Option` so that no conversion
/// silently loses data.
pub mod num;
