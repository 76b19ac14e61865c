use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer base raised to a non-negative integer exponent is computed
    /// exactly by repeated squaring, and overflow is reported. A negative
    /// exponent or any float operand falls back to `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ** exponent`.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(10)).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(-1)).unwrap();
    /// assert_eq!(result, Value::Float(0.5));
    /// ```
    pub fn eval_pow(base: Value, exponent: Value) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) if e >= 0 => {
                checked_integer_pow(b, e).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            _ => Ok(Value::Float(base.as_float().powf(exponent.as_float()))),
        }
    }
}

/// Raises `base` to a non-negative `exponent` by square-and-multiply.
///
/// The base is only squared while exponent bits remain, so results such as
/// `(-2) ** 63` that fit in an `i64` are not rejected because an unused
/// square would overflow.
fn checked_integer_pow(mut base: i64, mut exponent: i64) -> Option<i64> {
    let mut result: i64 = 1;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Some(result)
}
