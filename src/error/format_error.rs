#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents an output configuration that cannot be honoured.
pub enum FormatError {
    /// The requested radix is below two.
    RadixTooSmall {
        /// The requested radix.
        radix: i32,
    },
    /// The requested float precision is negative.
    NegativePrecision {
        /// The requested precision.
        precision: i32,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RadixTooSmall { .. } => write!(f, "radix cannot be less than 2"),
            Self::NegativePrecision { .. } => write!(f, "precision cannot be less than 0"),
        }
    }
}

impl std::error::Error for FormatError {}
