use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, RAND_MAX},
        value::core::Value,
    },
};

/// The golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Named constants, with the values of the C limits on an LP64 system.
#[allow(clippy::cast_lossless)]
static CONSTANTS: &[(&str, Value)] = &[
    ("PI", Value::Float(std::f64::consts::PI)),
    ("E", Value::Float(std::f64::consts::E)),
    ("PHI", Value::Float(PHI)),
    ("RAND_MAX", Value::Integer(RAND_MAX)),
    ("CHAR_MAX", Value::Integer(i8::MAX as i64)),
    ("CHAR_MIN", Value::Integer(i8::MIN as i64)),
    ("SCHAR_MAX", Value::Integer(i8::MAX as i64)),
    ("SCHAR_MIN", Value::Integer(i8::MIN as i64)),
    ("UCHAR_MAX", Value::Integer(u8::MAX as i64)),
    ("SHRT_MAX", Value::Integer(i16::MAX as i64)),
    ("SHRT_MIN", Value::Integer(i16::MIN as i64)),
    ("USHRT_MAX", Value::Integer(u16::MAX as i64)),
    ("INT_MAX", Value::Integer(i32::MAX as i64)),
    ("INT_MIN", Value::Integer(i32::MIN as i64)),
    ("LONG_MAX", Value::Integer(i64::MAX)),
    ("LONG_MIN", Value::Integer(i64::MIN)),
    ("DBL_DIG", Value::Integer(f64::DIGITS as i64)),
    ("DBL_EPSILON", Value::Float(f64::EPSILON)),
    ("DBL_MANT_DIG", Value::Integer(f64::MANTISSA_DIGITS as i64)),
    ("DBL_MAX", Value::Float(f64::MAX)),
    ("DBL_MAX_EXP", Value::Integer(f64::MAX_EXP as i64)),
    ("DBL_MIN", Value::Float(f64::MIN_POSITIVE)),
    ("DBL_MIN_EXP", Value::Integer(f64::MIN_EXP as i64)),
    ("FLT_DIG", Value::Integer(f32::DIGITS as i64)),
    ("FLT_EPSILON", Value::Float(f32::EPSILON as f64)),
    ("FLT_MANT_DIG", Value::Integer(f32::MANTISSA_DIGITS as i64)),
    ("FLT_MAX", Value::Float(f32::MAX as f64)),
    ("FLT_MAX_EXP", Value::Integer(f32::MAX_EXP as i64)),
    ("FLT_MIN", Value::Float(f32::MIN_POSITIVE as f64)),
    ("FLT_MIN_EXP", Value::Integer(f32::MIN_EXP as i64)),
    ("FLT_RADIX", Value::Integer(f64::RADIX as i64)),
];

impl Context {
    /// Resolves a constant name to its value.
    ///
    /// Names are case-sensitive.
    ///
    /// # Errors
    /// `RuntimeError::UnknownIdentifier` if no constant has this name.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_constant("INT_MAX"), Ok(Value::Integer(2_147_483_647)));
    /// assert!(Context::eval_constant("pi").is_err());
    /// ```
    pub fn eval_constant(name: &str) -> EvalResult<Value> {
        CONSTANTS.iter()
                 .find(|(constant, _)| *constant == name)
                 .map(|(_, value)| *value)
                 .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })
    }
}
