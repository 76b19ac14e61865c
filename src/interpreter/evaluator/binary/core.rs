use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to a specialized handler. The
    /// arithmetic handlers apply the promotion rule, the integer-only
    /// operators reject floats, comparisons and logical operators always
    /// yield `Integer` 0 or 1, and the comma operator returns its right
    /// operand.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let left = Value::Integer(5);
    /// let right = Value::Integer(3);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, left, right);
    /// assert_eq!(result.unwrap(), Value::Float(5.0 / 3.0));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, Value::Integer(4), Value::Integer(2));
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Comma, Div, Equal, Greater, GreaterEqual, IntDiv,
            Less, LessEqual, Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub,
        };

        match op {
            Comma => Ok(right),

            Add => Self::eval_arithmetic(left, right, i64::checked_add, |a, b| a + b),
            Sub => Self::eval_arithmetic(left, right, i64::checked_sub, |a, b| a - b),
            Mul => Self::eval_arithmetic(left, right, i64::checked_mul, |a, b| a * b),
            Div => Self::eval_division(left, right),
            IntDiv => Self::eval_integer_division(op, left, right),
            Mod => Self::eval_modulo(op, left, right),

            Pow => Self::eval_pow(left, right),

            BitAnd => Self::eval_bitwise(op, left, right, |a, b| a & b),
            BitOr => Self::eval_bitwise(op, left, right, |a, b| a | b),
            BitXor => Self::eval_bitwise(op, left, right, |a, b| a ^ b),
            ShiftLeft => Self::eval_shift(op, left, right, i64::wrapping_shl),
            ShiftRight => Self::eval_shift(op, left, right, i64::wrapping_shr),

            Equal => Ok(Self::eval_comparison(left, right, i64::eq, f64::eq)),
            NotEqual => Ok(Self::eval_comparison(left, right, i64::ne, f64::ne)),
            Less => Ok(Self::eval_comparison(left, right, i64::lt, f64::lt)),
            LessEqual => Ok(Self::eval_comparison(left, right, i64::le, f64::le)),
            Greater => Ok(Self::eval_comparison(left, right, i64::gt, f64::gt)),
            GreaterEqual => Ok(Self::eval_comparison(left, right, i64::ge, f64::ge)),

            And => Ok(Self::eval_logic(left, right, |a, b| a && b)),
            Or => Ok(Self::eval_logic(left, right, |a, b| a || b)),
        }
    }
}
