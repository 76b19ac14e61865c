use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged.
    /// - `Negate`: numeric negation; negating `LONG_MIN` overflows.
    /// - `Not`: logical negation, yielding `Integer` 1 or 0.
    /// - `BitNot`: bitwise complement, integers only.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, Value::Float(0.0)).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    ///
    /// let v = Context::eval_unary(UnaryOperator::BitNot, Value::Integer(0)).unwrap();
    /// assert_eq!(v, Value::Integer(-1));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow),
                Value::Float(x) => Ok(Value::Float(-x)),
            },
            UnaryOperator::Not => Ok(Value::from(!value.is_truthy())),
            UnaryOperator::BitNot => match value {
                Value::Integer(n) => Ok(Value::Integer(!n)),
                Value::Float(_) => Err(RuntimeError::IntegerOperandRequired { op }),
            },
        }
    }
}
