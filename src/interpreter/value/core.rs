use crate::util::num::{f64_to_i64_exact, f64_to_i64_truncating, i64_to_f64};

/// Represents a runtime value in the calculator.
///
/// Every literal, constant, operator result and function result is one of
/// these two variants. Which variant an operation produces is decided by the
/// promotion rule: if either operand is a `Float` the computation happens in
/// floating point, otherwise it stays in integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
}

/// A pair of operands after applying the promotion rule.
///
/// Binary operators match on this instead of on the raw pair of values, so
/// that mixed operands are converted in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float; both are now floats.
    Floats(f64, f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl Value {
    /// Views the value as an integer, truncating floats toward zero.
    ///
    /// # Example
    /// ```
    /// use ccalc::Value;
    ///
    /// assert_eq!(Value::Float(-2.75).as_integer(), -2);
    /// assert_eq!(Value::Integer(7).as_integer(), 7);
    /// ```
    #[must_use]
    pub const fn as_integer(self) -> i64 {
        match self {
            Self::Integer(n) => n,
            Self::Float(x) => f64_to_i64_truncating(x),
        }
    }

    /// Views the value as a float.
    ///
    /// Integers of magnitude up to `2^53` convert exactly.
    #[must_use]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }

    /// Collapses a float holding an integral value back to an integer.
    ///
    /// Floats with a fractional part, non-finite floats and floats outside
    /// the `i64` range are returned unchanged, as are integers.
    ///
    /// # Example
    /// ```
    /// use ccalc::Value;
    ///
    /// assert_eq!(Value::Float(4.0).demote_if_integral(), Value::Integer(4));
    /// assert_eq!(Value::Float(4.5).demote_if_integral(), Value::Float(4.5));
    /// assert_eq!(Value::Float(1e300).demote_if_integral(), Value::Float(1e300));
    /// ```
    #[must_use]
    pub fn demote_if_integral(self) -> Self {
        match self {
            Self::Float(x) => f64_to_i64_exact(x).map_or(self, Self::Integer),
            Self::Integer(_) => self,
        }
    }

    /// Returns `true` for any nonzero value.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Float(x) => x != 0.0,
        }
    }

    /// Returns `true` if the value is an `Integer`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Applies the promotion rule to a pair of operands.
    ///
    /// # Parameters
    /// - `other`: The right-hand operand.
    ///
    /// # Returns
    /// `Operands::Integers` if both values are integers, otherwise both
    /// values converted to floats.
    ///
    /// # Example
    /// ```
    /// use ccalc::{Value, interpreter::value::core::Operands};
    ///
    /// let promoted = Value::Integer(2).promote(Value::Float(0.5));
    /// assert_eq!(promoted, Operands::Floats(2.0, 0.5));
    /// ```
    #[must_use]
    pub const fn promote(self, other: Self) -> Operands {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Operands::Integers(a, b),
            _ => Operands::Floats(self.as_float(), other.as_float()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
