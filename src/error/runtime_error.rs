use crate::{
    error::ErrorKind,
    operator::{BinaryOperator, UnaryOperator},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Referenced a constant that does not exist.
    UnknownIdentifier {
        /// The name of the constant.
        name: String,
    },
    /// Called a function that does not exist.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a function with fewer arguments than it takes.
    TooFewArguments {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        count: usize,
    },
    /// Called a function with more arguments than it takes.
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        count: usize,
    },
    /// A function produced an infinite or NaN result.
    DomainError {
        /// The name of the function.
        name: String,
    },
    /// Attempted `/` or `//` with a zero divisor.
    DivisionByZero,
    /// Attempted `%` with a zero divisor.
    ModByZero,
    /// An integer result does not fit in 64 bits.
    Overflow,
    /// A shift count outside `0..64`.
    ShiftOutOfRange {
        /// The requested shift count.
        count: i64,
    },
    /// A binary integer-only operator received a float.
    IntegerOperandsRequired {
        /// The operator that was applied.
        op: BinaryOperator,
    },
    /// A unary integer-only operator received a float.
    IntegerOperandRequired {
        /// The operator that was applied.
        op: UnaryOperator,
    },
}

impl RuntimeError {
    /// Returns the error category reported to callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::TooFewArguments { .. } | Self::ArgumentCountMismatch { .. } => ErrorKind::Arity,
            Self::DomainError { .. } => ErrorKind::Domain,
            Self::DivisionByZero | Self::ModByZero | Self::Overflow | Self::ShiftOutOfRange { .. } => {
                ErrorKind::Arithmetic
            },
            Self::IntegerOperandsRequired { .. } | Self::IntegerOperandRequired { .. } => {
                ErrorKind::Type
            },
        }
    }
}

/// Picks the singular or plural noun for an argument count.
const fn arguments(count: usize) -> &'static str {
    if count == 1 { "argument" } else { "arguments" }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name } => write!(f, "unknown identifier '{name}'"),
            Self::UnknownFunction { name } => {
                write!(f, "unknown function identifier '{name}'")
            },
            Self::TooFewArguments { name, count } => write!(f,
                                                            "function '{name}' requires more than {count} {}",
                                                            arguments(*count)),
            Self::ArgumentCountMismatch { name, count } => write!(f,
                                                                  "function '{name}' does not take {count} {}",
                                                                  arguments(*count)),
            Self::DomainError { name } => write!(f, "domain error in function '{name}'"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModByZero => write!(f, "mod by zero"),
            Self::Overflow => write!(f, "integer overflow"),
            Self::ShiftOutOfRange { count } => {
                write!(f, "shift count {count} is out of range")
            },
            Self::IntegerOperandsRequired { op } => {
                write!(f, "{} '{op}' requires integer operands", op.description())
            },
            Self::IntegerOperandRequired { op } => {
                write!(f, "{} '{op}' requires an integer operand", op.description())
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
