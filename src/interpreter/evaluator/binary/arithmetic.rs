use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Operands, Value},
    },
    operator::BinaryOperator,
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates `+`, `-` or `*`.
    ///
    /// Integer operands use the checked integer operation, so a result
    /// outside the `i64` range is reported instead of wrapping. If either
    /// operand is a float both are promoted and the float operation is used.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `integer`: Checked integer operation.
    /// - `float`: Floating-point operation.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let x = Value::Float(1.5);
    /// let y = Value::Integer(2);
    ///
    /// let result = Context::eval_arithmetic(x, y, i64::checked_mul, |a, b| a * b).unwrap();
    /// assert_eq!(result, Value::Float(3.0));
    /// ```
    pub fn eval_arithmetic(left: Value,
                           right: Value,
                           integer: fn(i64, i64) -> Option<i64>,
                           float: fn(f64, f64) -> f64)
                           -> EvalResult<Value> {
        match left.promote(right) {
            Operands::Integers(a, b) => {
                integer(a, b).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            Operands::Floats(a, b) => Ok(Value::Float(float(a, b))),
        }
    }

    /// Evaluates `/`.
    ///
    /// Integer division stays an integer only when it is exact; otherwise
    /// the quotient is computed in floating point. A zero divisor is an
    /// error for both integers and floats.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let exact = Context::eval_division(Value::Integer(12), Value::Integer(4));
    /// assert_eq!(exact, Ok(Value::Integer(3)));
    ///
    /// let by_zero = Context::eval_division(Value::Float(1.0), Value::Integer(0));
    /// assert_eq!(by_zero, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_division(left: Value, right: Value) -> EvalResult<Value> {
        match left.promote(right) {
            Operands::Integers(_, 0) => Err(RuntimeError::DivisionByZero),
            Operands::Floats(_, b) if b == 0.0 => Err(RuntimeError::DivisionByZero),
            Operands::Integers(a, b) if a.wrapping_rem(b) == 0 => {
                a.checked_div(b).map(Value::Integer).ok_or(RuntimeError::Overflow)
            },
            Operands::Integers(a, b) => Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b))),
            Operands::Floats(a, b) => Ok(Value::Float(a / b)),
        }
    }

    /// Evaluates `//`, truncating toward zero.
    ///
    /// Both operands must be integers regardless of their value.
    pub fn eval_integer_division(op: BinaryOperator,
                                 left: Value,
                                 right: Value)
                                 -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::IntegerOperandsRequired { op });
        };
        if b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        a.checked_div(b).map(Value::Integer).ok_or(RuntimeError::Overflow)
    }

    /// Evaluates `%`.
    ///
    /// Both operands must be integers. The result takes the sign of the
    /// dividend, as in C.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let result = Context::eval_modulo(BinaryOperator::Mod, Value::Integer(-7), Value::Integer(3));
    /// assert_eq!(result, Ok(Value::Integer(-1)));
    /// ```
    pub fn eval_modulo(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::IntegerOperandsRequired { op });
        };
        if b == 0 {
            return Err(RuntimeError::ModByZero);
        }

        Ok(Value::Integer(a.wrapping_rem(b)))
    }
}
