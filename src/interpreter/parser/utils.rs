use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexResult, Token},
        parser::{
            binary::token_to_binary_operator,
            core::{ParseResult, parse_conditional},
        },
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// The most arguments a function call may supply.
pub const MAX_ARGUMENTS: usize = 16;

/// Looks at the next token without consuming it.
///
/// A lexical error waiting in the stream is returned as an error here, so
/// it surfaces as soon as the parser needs to look past the last token it
/// accepted.
///
/// # Returns
/// - `Ok(Some(token))`: The next token.
/// - `Ok(None)`: The input is exhausted.
pub(in crate::interpreter::parser) fn peek_token<'p, 's, I>(tokens: &'p mut Peekable<I>)
                                                            -> ParseResult<Option<&'p Token>>
    where 's: 'p,
          I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    match tokens.peek() {
        None => Ok(None),
        Some(Ok((token, _))) => Ok(Some(token)),
        Some(Err(e)) => Err(e.clone().into()),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input is exhausted.
/// - `UnexpectedToken` if a different token follows.
pub(in crate::interpreter::parser) fn expect_token<'s, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<()>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    match tokens.next().transpose()? {
        Some((token, _)) if token == *expected => Ok(()),
        Some((_, text)) => Err(ParseError::UnexpectedToken { token: text.to_string() }.into()),
        None => Err(ParseError::UnexpectedEndOfInput.into()),
    }
}

/// Parses one left-associative precedence level.
///
/// `operand` parses the next tighter level. While the lookahead is one of
/// `operators`, the operator is consumed, the right operand is parsed and
/// the two sides are folded immediately.
///
/// Grammar (simplified): `level := operand (operator operand)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `context`: Evaluation context.
/// - `operators`: Operators that belong to this level.
/// - `operand`: Parser for the next tighter level.
///
/// # Returns
/// The folded value.
pub(in crate::interpreter::parser) fn parse_left_associative<'s, I>(
    tokens: &mut Peekable<I>,
    context: &Context,
    operators: &[BinaryOperator],
    operand: fn(&mut Peekable<I>, &Context) -> ParseResult<Value>)
    -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let mut left = operand(tokens, context)?;

    while let Some(op) = peek_token(tokens)?.and_then(token_to_binary_operator)
          && operators.contains(&op)
    {
        tokens.next();
        let right = operand(tokens, context)?;
        left = Context::eval_binary(op, left, right)?;
    }

    Ok(left)
}

/// Parses the argument list of a function call after its `(`.
///
/// Arguments are conditional expressions separated by commas, so a comma
/// always starts a new argument. An immediately encountered `)` produces an
/// empty list.
///
/// Grammar (simplified): `arguments := (conditional ("," conditional)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `context`: Evaluation context.
/// - `name`: The function name, for error messages.
///
/// # Errors
/// - `TooManyArguments` if more than [`MAX_ARGUMENTS`] arguments are given.
/// - `UnmatchedOpeningParen` if the list is not closed by `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'s, I>(tokens: &mut Peekable<I>,
                                                             context: &Context,
                                                             name: &str)
                                                             -> ParseResult<Vec<Value>>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let mut arguments = Vec::new();

    if !matches!(peek_token(tokens)?, Some(Token::RParen)) {
        loop {
            if arguments.len() >= MAX_ARGUMENTS {
                return Err(ParseError::TooManyArguments { name: name.to_string() }.into());
            }
            arguments.push(parse_conditional(tokens, context)?);

            if !matches!(peek_token(tokens)?, Some(Token::Comma)) {
                break;
            }
            tokens.next();
        }
    }

    match tokens.next().transpose()? {
        Some((Token::RParen, _)) => Ok(arguments),
        _ => Err(ParseError::UnmatchedOpeningParen.into()),
    }
}
