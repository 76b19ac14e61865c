use crate::interpreter::{
    evaluator::core::Context,
    value::core::{Operands, Value},
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers are compared exactly. If either operand is a float both are
    /// compared as floats, so any comparison involving NaN is false except
    /// `!=`. The result is always `Integer` 1 or 0.
    ///
    /// # Parameters
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `integer`: The comparison on integers.
    /// - `float`: The same comparison on floats.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let a = Value::Float(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let result = Context::eval_comparison(a, b, i64::lt, f64::lt);
    /// assert_eq!(result, Value::Integer(1));
    /// ```
    #[must_use]
    pub fn eval_comparison(left: Value,
                           right: Value,
                           integer: fn(&i64, &i64) -> bool,
                           float: fn(&f64, &f64) -> bool)
                           -> Value {
        Value::from(match left.promote(right) {
                        Operands::Integers(a, b) => integer(&a, &b),
                        Operands::Floats(a, b) => float(&a, &b),
                    })
    }
}
