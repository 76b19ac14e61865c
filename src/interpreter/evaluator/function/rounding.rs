use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Rounds a value to an integral value with the given float operation.
///
/// - Integers are returned unchanged.
/// - Floats are rounded and then demoted to integers when the result fits
///   in an `i64`; larger magnitudes stay floats.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `op`: One of `f64::floor`, `f64::ceil`, `f64::trunc` or `f64::round`.
///
/// # Returns
/// `Value::Integer`, or `Value::Float` if the rounded value is out of range
/// or not finite.
///
/// # Example
/// ```
/// use ccalc::interpreter::{evaluator::function::rounding::unary_round, value::core::Value};
///
/// let r = unary_round(&[Value::Float(-2.5)], f64::round).unwrap();
/// assert_eq!(r, Value::Integer(-3));
///
/// let r = unary_round(&[Value::Integer(-5)], f64::floor).unwrap();
/// assert_eq!(r, Value::Integer(-5));
///
/// let r = unary_round(&[Value::Float(1e300)], f64::ceil).unwrap();
/// assert_eq!(r, Value::Float(1e300));
/// ```
pub fn unary_round(args: &[Value], op: fn(f64) -> f64) -> EvalResult<Value> {
    match args[0] {
        Value::Integer(i) => Ok(Value::Integer(i)),
        Value::Float(x) => Ok(Value::Float(op(x)).demote_if_integral()),
    }
}
