use std::iter::Peekable;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::{LexResult, Token},
        parser::{
            binary::parse_logical_or,
            utils::{expect_token, parse_left_associative, peek_token},
        },
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Result type used by the parser.
///
/// Parsing and evaluation happen in the same pass, so a parse step can fail
/// with a lexical, syntax or runtime error.
pub type ParseResult<T> = Result<T, Error>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing. It handles the comma
/// operator, the loosest binding level, and descends through the precedence
/// hierarchy for each operand. Every operand is evaluated; the value of the
/// last one is the result.
///
/// Grammar: `expression := conditional ("," conditional)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `context`: Evaluation context.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use ccalc::{
///     config::AngleUnit,
///     interpreter::{
///         evaluator::core::Context, lexer::Tokens, parser::core::parse_expression,
///         value::core::Value,
///     },
/// };
///
/// let context = Context::new(AngleUnit::Radians);
/// let mut tokens = Tokens::new("1, 2 + 3", false).peekable();
///
/// let value = parse_expression(&mut tokens, &context).unwrap();
/// assert_eq!(value, Value::Integer(5));
/// ```
pub fn parse_expression<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::Comma], parse_conditional)
}

/// Parses a conditional expression `condition ? on_true : on_false`.
///
/// The middle operand may contain commas; the last operand is itself a
/// conditional, which makes the operator right-associative. Both branches
/// are parsed and evaluated and one of them is kept, so an error in the
/// branch that is not selected still fails the expression.
///
/// Grammar: `conditional := logical_or ("?" expression ":" conditional)?`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `context`: Evaluation context.
///
/// # Errors
/// - `UnexpectedToken` or `UnexpectedEndOfInput` if the `:` is missing.
/// - Propagates any errors from the three operands.
pub fn parse_conditional<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let condition = parse_logical_or(tokens, context)?;

    if !matches!(peek_token(tokens)?, Some(Token::Question)) {
        return Ok(condition);
    }
    tokens.next();

    let on_true = parse_expression(tokens, context)?;
    expect_token(tokens, &Token::Colon)?;
    let on_false = parse_conditional(tokens, context)?;

    Ok(if condition.is_truthy() { on_true } else { on_false })
}

/// Parses and evaluates a complete input.
///
/// After the expression, the input must be exhausted: a stray `)` is
/// reported as an unmatched parenthesis and anything else as an unexpected
/// token.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the input.
/// - `context`: Evaluation context.
pub fn parse_input<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let value = parse_expression(tokens, context)?;

    match tokens.next().transpose()? {
        None => Ok(value),
        Some((Token::RParen, _)) => Err(ParseError::UnmatchedClosingParen.into()),
        Some((_, text)) => Err(ParseError::UnexpectedToken { token: text.to_string() }.into()),
    }
}
