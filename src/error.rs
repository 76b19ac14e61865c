/// Format errors.
///
/// Raised when the output configuration cannot be honoured, such as a radix
/// below two or a negative precision.
pub mod format_error;
/// Lexical errors.
///
/// Defines everything that can go wrong while turning expression text into
/// tokens: stray characters, digits that do not belong to the literal's base,
/// fractional hexadecimal or binary constants and the unsupported `=`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching tokens against the
/// expression grammar, such as unexpected tokens, a premature end of input
/// or unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing values.
/// Runtime errors include unknown names, wrong argument counts, domain
/// errors, division by zero and integer-only operators applied to floats.
pub mod runtime_error;

pub use format_error::FormatError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category an [`Error`] belongs to.
///
/// Callers use the kind to decide how to report a failure without matching
/// on every individual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad character, malformed literal or the unsupported `=`.
    Lexical,
    /// Unexpected token, end of input or unbalanced parenthesis.
    Syntax,
    /// A constant name that is not in the registry.
    UnknownIdentifier,
    /// A function name that is not in the registry.
    UnknownFunction,
    /// A function called with the wrong number of arguments.
    Arity,
    /// A function whose floating-point result is not finite.
    Domain,
    /// Division or modulo by zero, integer overflow, bad shift counts.
    Arithmetic,
    /// An integer-only operator applied to a float.
    Type,
    /// An output configuration that cannot be honoured.
    Config,
}

/// Any error produced while lexing, parsing, evaluating or formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression text could not be tokenized.
    Lex(LexError),
    /// The token stream does not match the grammar.
    Parse(ParseError),
    /// A value could not be computed.
    Runtime(RuntimeError),
    /// The result could not be rendered.
    Format(FormatError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use ccalc::{Config, error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("13 % 0", &Config::default()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lexical,
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
            Self::Format(_) => ErrorKind::Config,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Format(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
