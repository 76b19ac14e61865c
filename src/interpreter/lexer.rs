use logos::Logos;

use crate::{error::LexError, interpreter::value::core::Value};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Identifiers are truncated to this many characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 32;

/// Represents a lexical token in the expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literals such as `42`, `0x1F`, `017`, `0b101`, `.5` or
    /// `2.5e-3`. The callback scans the whole literal by hand.
    #[regex(r"[0-9.]", lex_number)]
    Number(Value),
    /// Constant or function names such as `PI` or `sqrt`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", lex_identifier)]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`, or `^` when the caret means exponentiation.
    #[token("**")]
    Pow,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// A lone `=` is rejected; only `==` exists.
    #[token("=", reject_assignment)]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`, unless the caret means exponentiation.
    #[token("^", lex_caret)]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexerExtras {
    /// Whether `^` is lexed as exponentiation instead of bitwise XOR.
    pub caret_exp: bool,
}

/// Classifies `^` according to the caret setting.
fn lex_caret(lex: &logos::Lexer<Token>) -> Token {
    if lex.extras.caret_exp { Token::Pow } else { Token::Caret }
}

/// Fails on a lone `=`.
const fn reject_assignment(_: &logos::Lexer<Token>) -> LexResult<()> {
    Err(LexError::AssignmentUnsupported)
}

/// Reads an identifier, dropping characters past the length limit.
fn lex_identifier(lex: &logos::Lexer<Token>) -> String {
    lex.slice().chars().take(MAX_IDENTIFIER_LENGTH).collect()
}

/// Scans a numeric literal starting at the matched character and extends
/// the token over the rest of it.
///
/// # Parameters
/// - `lex`: The lexer, positioned on the first character of the literal.
///
/// # Returns
/// - `Ok(Value::Integer)` for integer literals in base 2, 8, 10 or 16.
/// - `Ok(Value::Float)` for literals with a decimal point.
/// - `Err(LexError)` for a digit outside the literal's base, a fractional
///   hexadecimal or binary literal, or an integer that does not fit.
fn lex_number(lex: &mut logos::Lexer<Token>) -> LexResult<Value> {
    let start = lex.span().start;
    let (value, length) = scan_number(&lex.source()[start..])?;
    lex.bump(length - lex.slice().len());

    Ok(value)
}

/// Scans the numeric literal at the start of `text`.
///
/// Whether the literal is a float is decided up front by looking through
/// the run of hexadecimal digits and points that follows. The base is then
/// taken from the prefix: `0x` is hexadecimal, `0b` is binary and any other
/// leading zero is octal unless the literal is a float.
///
/// # Returns
/// The literal's value and the number of bytes it spans.
fn scan_number(text: &str) -> LexResult<(Value, usize)> {
    let bytes = text.as_bytes();

    let is_float = bytes.iter()
                        .take_while(|b| b.is_ascii_hexdigit() || **b == b'.')
                        .any(|b| *b == b'.');

    let (base, mut pos) = match bytes {
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', b'b' | b'B', ..] => (2, 2),
        [b'0', ..] if !is_float => (8, 1),
        _ => (10, 0),
    };

    let mut integer: i64 = 0;
    let mut integer_digits = String::new();

    while let Some(&byte) = bytes.get(pos) {
        if byte == b'.' {
            if base == 16 || base == 2 {
                return Err(LexError::FractionalConstant { base });
            }
            return scan_fraction(bytes, pos + 1, &integer_digits);
        }

        let Some(digit) = char::from(byte).to_digit(16) else {
            break;
        };
        if digit >= base {
            return Err(LexError::UnexpectedDigit { digit: char::from(byte),
                                                   base });
        }

        if is_float {
            integer_digits.push(char::from(byte));
        } else {
            integer = integer.checked_mul(i64::from(base))
                             .and_then(|n| n.checked_add(i64::from(digit)))
                             .ok_or(LexError::ConstantTooLarge)?;
        }
        pos += 1;
    }

    Ok((Value::Integer(integer), pos))
}

/// Scans the fraction and optional exponent of a decimal float literal.
///
/// The exponent marker may be followed by a sign; missing digits anywhere
/// count as zero, so `.` alone is `0.0` and `1.5e` is `1.5`. An exponent too
/// large for a double yields infinity, not an error.
fn scan_fraction(bytes: &[u8], mut pos: usize, integer_digits: &str) -> LexResult<(Value, usize)> {
    let digits = |pos: &mut usize| {
        let mut run = String::new();
        while let Some(&byte) = bytes.get(*pos)
              && byte.is_ascii_digit()
        {
            run.push(char::from(byte));
            *pos += 1;
        }
        run
    };

    let fraction = digits(&mut pos);

    let mut exponent_sign = "";
    let mut exponent = String::new();
    if let Some(b'e' | b'E') = bytes.get(pos) {
        pos += 1;
        match bytes.get(pos) {
            Some(b'+') => pos += 1,
            Some(b'-') => {
                exponent_sign = "-";
                pos += 1;
            },
            _ => {},
        }
        exponent = digits(&mut pos);
    }

    let or_zero = |s: &str| if s.is_empty() { "0".to_string() } else { s.to_string() };
    let literal = format!("{}.{}e{exponent_sign}{}",
                          or_zero(integer_digits),
                          or_zero(&fraction),
                          or_zero(&exponent));

    literal.parse::<f64>()
           .map(|x| (Value::Float(x), pos))
           .map_err(|_| LexError::MalformedConstant)
}

/// A lazily lexed token stream over an expression.
///
/// Each item pairs a token with the text it was read from, which the parser
/// uses in error messages. A character that starts no token is reported as
/// [`LexError::UnexpectedCharacter`]. Errors are only produced when the
/// parser actually reaches them.
pub struct Tokens<'source> {
    lexer: logos::Lexer<'source, Token>,
}

impl<'source> Tokens<'source> {
    /// Creates a token stream over `source`.
    ///
    /// # Example
    /// ```
    /// use ccalc::interpreter::lexer::{Token, Tokens};
    ///
    /// let tokens: Vec<_> = Tokens::new("2 ^ 3", true).map(|t| t.unwrap().0).collect();
    /// assert_eq!(tokens[1], Token::Pow);
    ///
    /// let tokens: Vec<_> = Tokens::new("2 ^ 3", false).map(|t| t.unwrap().0).collect();
    /// assert_eq!(tokens[1], Token::Caret);
    /// ```
    #[must_use]
    pub fn new(source: &'source str, caret_exp: bool) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras { caret_exp }) }
    }
}

impl<'source> Iterator for Tokens<'source> {
    type Item = LexResult<(Token, &'source str)>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let slice = self.lexer.slice();

        Some(match token {
                 Ok(token) => Ok((token, slice)),
                 Err(LexError::Unrecognized) => {
                     Err(LexError::UnexpectedCharacter { character: slice.chars()
                                                                        .next()
                                                                        .unwrap_or_default() })
                 },
                 Err(e) => Err(e),
             })
    }
}
