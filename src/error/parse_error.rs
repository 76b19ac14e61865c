use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching tokens to the grammar.
pub enum ParseError {
    /// Found a token where it cannot appear.
    UnexpectedToken {
        /// The token encountered, as written.
        token: String,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A `(` was never closed.
    UnmatchedOpeningParen,
    /// A `)` appeared without a matching `(`.
    UnmatchedClosingParen,
    /// A call supplied more arguments than the parser accepts.
    TooManyArguments {
        /// The name of the function.
        name: String,
    },
}

impl ParseError {
    /// Returns the error category reported to callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyArguments { .. } => ErrorKind::Arity,
            _ => ErrorKind::Syntax,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "unexpected token '{token}'"),
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Self::UnmatchedOpeningParen => write!(f, "unmatched parenthesis '('"),
            Self::UnmatchedClosingParen => write!(f, "unmatched parenthesis ')'"),
            Self::TooManyArguments { name } => {
                write!(f, "too many arguments to function '{name}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
