use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
    util::num::i64_to_u32_checked,
};

/// Number of bits in an `i64`; shift counts must be below this.
const INTEGER_BITS: u32 = i64::BITS;

impl Context {
    /// Evaluates `&`, `|` or `^`.
    ///
    /// Only the type tag matters: `6.0 & 3` is rejected even though `6.0` is
    /// integral.
    ///
    /// # Parameters
    /// - `op`: The operator, reported when an operand is a float.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `apply`: The bit operation.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let op = BinaryOperator::BitAnd;
    /// let ok = Context::eval_bitwise(op, Value::Integer(6), Value::Integer(3), |a, b| a & b);
    /// assert_eq!(ok, Ok(Value::Integer(2)));
    ///
    /// let err = Context::eval_bitwise(op, Value::Float(6.0), Value::Integer(3), |a, b| a & b);
    /// assert_eq!(err, Err(RuntimeError::IntegerOperandsRequired { op }));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: Value,
                        right: Value,
                        apply: fn(i64, i64) -> i64)
                        -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(apply(a, b))),
            _ => Err(RuntimeError::IntegerOperandsRequired { op }),
        }
    }

    /// Evaluates `<<` or `>>`.
    ///
    /// Right shifts are arithmetic. Bits shifted out of a left shift are
    /// lost. A count outside `0..64` is an error.
    pub fn eval_shift(op: BinaryOperator,
                      left: Value,
                      right: Value,
                      shift: fn(i64, u32) -> i64)
                      -> EvalResult<Value> {
        let (Value::Integer(value), Value::Integer(count)) = (left, right) else {
            return Err(RuntimeError::IntegerOperandsRequired { op });
        };

        let out_of_range = RuntimeError::ShiftOutOfRange { count };
        let bits = i64_to_u32_checked(count, out_of_range.clone())?;
        if bits >= INTEGER_BITS {
            return Err(out_of_range);
        }

        Ok(Value::Integer(shift(value, bits)))
    }
}
