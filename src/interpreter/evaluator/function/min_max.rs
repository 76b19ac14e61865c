use crate::interpreter::{
    evaluator::core::EvalResult,
    value::core::{Operands, Value},
};

/// Computes the minimum or maximum of two numeric values.
///
/// - If both arguments are integers, the result is an integer.
/// - Otherwise the comparison is performed on floats, and a NaN argument is
///   ignored in favour of the other one.
///
/// # Parameters
/// - `args`: Slice containing exactly two arguments.
/// - `integer`: `i64::min` or `i64::max`.
/// - `float`: `f64::min` or `f64::max`.
///
/// # Example
/// ```
/// use ccalc::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max(&[Value::Integer(3), Value::Integer(7)], i64::min, f64::min).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max(&[Value::Float(2.5), Value::Integer(1)], i64::max, f64::max).unwrap();
/// assert_eq!(r, Value::Float(2.5));
/// ```
pub fn min_max(args: &[Value],
               integer: fn(i64, i64) -> i64,
               float: fn(f64, f64) -> f64)
               -> EvalResult<Value> {
    Ok(match args[0].promote(args[1]) {
           Operands::Integers(a, b) => Value::Integer(integer(a, b)),
           Operands::Floats(a, b) => Value::Float(float(a, b)),
       })
}
