use crate::interpreter::{evaluator::core::Context, value::core::Value};

impl Context {
    /// Evaluates a logical operation between two values.
    ///
    /// Any nonzero value counts as true. Both operands have already been
    /// evaluated by the time this runs; there is no short-circuiting.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `combine`: The connective applied to the truth values.
    ///
    /// # Returns
    /// `Integer` 1 or 0.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let a = Value::Float(0.5);
    /// let b = Value::Integer(0);
    ///
    /// assert_eq!(Context::eval_logic(a, b, |x, y| x || y), Value::Integer(1));
    /// assert_eq!(Context::eval_logic(a, b, |x, y| x && y), Value::Integer(0));
    /// ```
    #[must_use]
    pub fn eval_logic(left: Value, right: Value, combine: fn(bool, bool) -> bool) -> Value {
        Value::from(combine(left.is_truthy(), right.is_truthy()))
    }
}
