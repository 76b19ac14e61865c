use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, min_max, rounding},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context and a slice of evaluated
/// arguments whose length already matches the builtin's arity.
type BuiltinFn = fn(&Context, &[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "pow"       => { arity: 2, func: builtin::pow },
    "sqrt"      => { arity: 1, func: builtin::sqrt },
    "cbrt"      => { arity: 1, func: builtin::cbrt },
    "abs"       => { arity: 1, func: builtin::abs },
    "floor"     => { arity: 1, func: |_, args| rounding::unary_round(args, f64::floor) },
    "ceil"      => { arity: 1, func: |_, args| rounding::unary_round(args, f64::ceil) },
    "trunc"     => { arity: 1, func: |_, args| rounding::unary_round(args, f64::trunc) },
    "round"     => { arity: 1, func: |_, args| rounding::unary_round(args, f64::round) },
    "sin"       => { arity: 1, func: builtin::sin },
    "cos"       => { arity: 1, func: builtin::cos },
    "tan"       => { arity: 1, func: builtin::tan },
    "asin"      => { arity: 1, func: builtin::asin },
    "acos"      => { arity: 1, func: builtin::acos },
    "atan"      => { arity: 1, func: builtin::atan },
    "atan2"     => { arity: 2, func: builtin::atan2 },
    "exp"       => { arity: 1, func: builtin::exp },
    "exp2"      => { arity: 1, func: builtin::exp2 },
    "log"       => { arity: 1, func: builtin::log },
    "log10"     => { arity: 1, func: builtin::log10 },
    "log2"      => { arity: 1, func: builtin::log2 },
    "rand"      => { arity: 0, func: builtin::rand },
    "hypot"     => { arity: 2, func: builtin::hypot },
    "expm1"     => { arity: 1, func: builtin::expm1 },
    "log1p"     => { arity: 1, func: builtin::log1p },
    "sinh"      => { arity: 1, func: builtin::sinh },
    "cosh"      => { arity: 1, func: builtin::cosh },
    "tanh"      => { arity: 1, func: builtin::tanh },
    "asinh"     => { arity: 1, func: builtin::asinh },
    "acosh"     => { arity: 1, func: builtin::acosh },
    "atanh"     => { arity: 1, func: builtin::atanh },
    "erf"       => { arity: 1, func: builtin::erf },
    "erfc"      => { arity: 1, func: builtin::erfc },
    "lgamma"    => { arity: 1, func: builtin::lgamma },
    "tgamma"    => { arity: 1, func: builtin::tgamma },
    "fmod"      => { arity: 2, func: builtin::fmod },
    "remainder" => { arity: 2, func: builtin::remainder },
    "nextafter" => { arity: 2, func: builtin::nextafter },
    "max"       => { arity: 2, func: |_, args| min_max::min_max(args, i64::max, f64::max) },
    "min"       => { arity: 2, func: |_, args| min_max::min_max(args, i64::min, f64::min) },
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is looked up in the builtin table, the argument count is
    /// checked against the builtin's arity and the builtin is applied. A
    /// float result that is infinite or NaN is reported as a domain error
    /// naming the function.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    ///
    /// # Returns
    /// The function result, or an error if lookup, arity or the domain
    /// check fails.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     config::AngleUnit,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new(AngleUnit::Radians);
    ///
    /// let r = context.eval_function("floor", &[Value::Float(2.5)]).unwrap();
    /// assert_eq!(r, Value::Integer(2));
    ///
    /// let err = context.eval_function("asin", &[Value::Float(1.5)]).unwrap_err();
    /// assert_eq!(err, RuntimeError::DomainError { name: "asin".to_string() });
    /// ```
    pub fn eval_function(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if args.len() < builtin.arity {
            return Err(RuntimeError::TooFewArguments { name:  name.to_string(),
                                                       count: args.len(), });
        }
        if args.len() > builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                             count: args.len(), });
        }

        let result = (builtin.func)(self, args)?;

        if let Value::Float(x) = result
           && !x.is_finite()
        {
            return Err(RuntimeError::DomainError { name: name.to_string() });
        }

        Ok(result)
    }
}
