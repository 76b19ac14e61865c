use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Applies a one-argument floating-point function.
///
/// The argument is converted to a float and the result is always a
/// `Value::Float`; whether it is finite is checked by the caller.
///
/// # Example
/// ```
/// use ccalc::{
///     config::AngleUnit,
///     interpreter::{
///         evaluator::{core::Context, function::builtin::sqrt},
///         value::core::Value,
///     },
/// };
///
/// let context = Context::new(AngleUnit::Radians);
/// let r = sqrt(&context, &[Value::Integer(16)]).unwrap();
///
/// assert_eq!(r, Value::Float(4.0));
/// ```
macro_rules! float_builtin {
    ($fname:ident, $real_fn:path) => {
        pub fn $fname(_: &Context, args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Float($real_fn(args[0].as_float())))
        }
    };
}

/// Applies a trigonometric function whose argument is an angle.
macro_rules! angle_argument_builtin {
    ($fname:ident, $real_fn:path) => {
        pub fn $fname(context: &Context, args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Float($real_fn(context.angle_to_radians(args[0].as_float()))))
        }
    };
}

/// Applies an inverse trigonometric function whose result is an angle.
macro_rules! angle_result_builtin {
    ($fname:ident, $real_fn:path) => {
        pub fn $fname(context: &Context, args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Float(context.angle_from_radians($real_fn(args[0].as_float()))))
        }
    };
}

float_builtin!(sqrt, f64::sqrt);
float_builtin!(cbrt, f64::cbrt);
float_builtin!(exp, f64::exp);
float_builtin!(log, f64::ln);
float_builtin!(log10, f64::log10);
float_builtin!(log2, f64::log2);
float_builtin!(expm1, f64::exp_m1);
float_builtin!(log1p, f64::ln_1p);
float_builtin!(sinh, f64::sinh);
float_builtin!(cosh, f64::cosh);
float_builtin!(tanh, f64::tanh);
float_builtin!(asinh, f64::asinh);
float_builtin!(acosh, f64::acosh);
float_builtin!(atanh, f64::atanh);
float_builtin!(erf, libm::erf);
float_builtin!(erfc, libm::erfc);
float_builtin!(lgamma, libm::lgamma);
float_builtin!(tgamma, libm::tgamma);

angle_argument_builtin!(sin, f64::sin);
angle_argument_builtin!(cos, f64::cos);
angle_argument_builtin!(tan, f64::tan);

angle_result_builtin!(asin, f64::asin);
angle_result_builtin!(acos, f64::acos);
angle_result_builtin!(atan, f64::atan);

/// Computes the angle of the point `(x, y)`, given as `atan2(y, x)`.
pub fn atan2(context: &Context, args: &[Value]) -> EvalResult<Value> {
    let angle = args[0].as_float().atan2(args[1].as_float());
    Ok(Value::Float(context.angle_from_radians(angle)))
}

/// Computes `sqrt(x*x + y*y)` without undue overflow.
pub fn hypot(_: &Context, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Float(args[0].as_float().hypot(args[1].as_float())))
}

/// Returns the next representable float after `x` in the direction of `y`.
pub fn nextafter(_: &Context, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Float(libm::nextafter(args[0].as_float(), args[1].as_float())))
}

/// Raises the first argument to the power of the second, following the
/// rules of the `**` operator.
///
/// # Example
/// ```
/// use ccalc::{
///     config::AngleUnit,
///     interpreter::{
///         evaluator::{core::Context, function::builtin::pow},
///         value::core::Value,
///     },
/// };
///
/// let context = Context::new(AngleUnit::Radians);
/// let r = pow(&context, &[Value::Integer(3), Value::Integer(4)]).unwrap();
///
/// assert_eq!(r, Value::Integer(81));
/// ```
pub fn pow(_: &Context, args: &[Value]) -> EvalResult<Value> {
    Context::eval_pow(args[0], args[1])
}

/// Computes `2 ** x`, staying an integer for non-negative integer `x`.
pub fn exp2(_: &Context, args: &[Value]) -> EvalResult<Value> {
    Context::eval_pow(Value::Integer(2), args[0])
}

/// Returns the absolute value, keeping the argument's type.
///
/// # Errors
/// `RuntimeError::Overflow` for the absolute value of `LONG_MIN`.
pub fn abs(_: &Context, args: &[Value]) -> EvalResult<Value> {
    match args[0] {
        Value::Integer(n) => n.checked_abs().map(Value::Integer).ok_or(RuntimeError::Overflow),
        Value::Float(x) => Ok(Value::Float(x.abs())),
    }
}

/// Returns the remainder of truncating division.
///
/// Two integer arguments behave exactly like the `%` operator, including
/// the error for a zero divisor. Otherwise the float remainder is returned.
pub fn fmod(_: &Context, args: &[Value]) -> EvalResult<Value> {
    match (args[0], args[1]) {
        (Value::Integer(_), Value::Integer(_)) => {
            Context::eval_modulo(BinaryOperator::Mod, args[0], args[1])
        },
        (x, y) => Ok(Value::Float(x.as_float() % y.as_float())),
    }
}

/// Returns the IEEE remainder of `x / y`, rounding the quotient to nearest.
///
/// The result of two integer arguments is integral and is returned as an
/// integer.
///
/// # Example
/// ```
/// use ccalc::{
///     config::AngleUnit,
///     interpreter::{
///         evaluator::{core::Context, function::builtin::remainder},
///         value::core::Value,
///     },
/// };
///
/// let context = Context::new(AngleUnit::Radians);
/// let r = remainder(&context, &[Value::Integer(10), Value::Integer(4)]).unwrap();
///
/// assert_eq!(r, Value::Integer(2));
/// ```
pub fn remainder(_: &Context, args: &[Value]) -> EvalResult<Value> {
    let result = Value::Float(libm::remainder(args[0].as_float(), args[1].as_float()));

    if args[0].is_integer() && args[1].is_integer() {
        Ok(result.demote_if_integral())
    } else {
        Ok(result)
    }
}

/// Returns a pseudo-random integer between 0 and `RAND_MAX`.
pub fn rand(context: &Context, _: &[Value]) -> EvalResult<Value> {
    Ok(Value::Integer(context.next_random()))
}
