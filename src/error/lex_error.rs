/// Represents all errors that can occur while tokenizing an expression.
///
/// `LexError` doubles as the error type of the logos-derived lexer, which
/// requires a `Default` value for input that matches no token at all. The
/// token stream replaces that placeholder with [`LexError::UnexpectedCharacter`]
/// before the parser ever sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// Input matched no token rule. Only produced inside the lexer.
    #[default]
    Unrecognized,
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// A lone `=`; assignment is not part of the language.
    AssignmentUnsupported,
    /// A digit outside the range allowed by the literal's base.
    UnexpectedDigit {
        /// The offending digit.
        digit: char,
        /// The base the literal was being read in.
        base:  u32,
    },
    /// A hexadecimal or binary literal containing a decimal point.
    FractionalConstant {
        /// The base the literal was being read in (16 or 2).
        base: u32,
    },
    /// An integer literal that does not fit in 64 bits.
    ConstantTooLarge,
    /// A float literal that could not be converted. The scanner only hands
    /// well-formed decimal text to the conversion, so this is not expected.
    MalformedConstant,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "unrecognized input"),
            Self::UnexpectedCharacter { character } => {
                write!(f, "unexpected character '{character}'")
            },
            Self::AssignmentUnsupported => {
                write!(f, "assignment operator '=' is not supported")
            },
            Self::UnexpectedDigit { digit, base } => match base {
                2 => write!(f, "unexpected digit '{digit}' in binary constant"),
                8 => write!(f, "unexpected digit '{digit}' in octal constant"),
                _ => write!(f, "unexpected digit '{digit}' in constant"),
            },
            Self::FractionalConstant { base } => match base {
                16 => write!(f, "hexadecimal constant must be an integer"),
                _ => write!(f, "binary constant must be an integer"),
            },
            Self::ConstantTooLarge => write!(f, "integer constant is too large"),
            Self::MalformedConstant => write!(f, "malformed floating-point constant"),
        }
    }
}

impl std::error::Error for LexError {}
