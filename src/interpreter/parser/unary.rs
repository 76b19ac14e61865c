use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexResult, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_arguments, peek_token},
        },
        value::core::Value,
    },
    operator::{BinaryOperator, UnaryOperator},
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `~`  (bitwise complement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. They bind looser than exponentiation: `-13**2` is `-(13**2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!" | "~") unary
///            | exponent
/// ```
pub(crate) fn parse_unary<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let op = match peek_token(tokens)? {
        Some(Token::Plus) => UnaryOperator::Plus,
        Some(Token::Minus) => UnaryOperator::Negate,
        Some(Token::Bang) => UnaryOperator::Not,
        Some(Token::Tilde) => UnaryOperator::BitNot,
        _ => return parse_exponent(tokens, context),
    };
    tokens.next();

    let operand = parse_unary(tokens, context)?;
    Ok(Context::eval_unary(op, operand)?)
}

/// Parses exponentiation expressions.
///
/// The right operand is parsed at the unary level, which makes the operator
/// right-associative (`2**3**2` is `2**(3**2)`) and lets it take a signed
/// exponent (`2**-1`).
///
/// Grammar: `exponent := primary ("**" unary)?`
fn parse_exponent<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let base = parse_primary(tokens, context)?;

    if !matches!(peek_token(tokens)?, Some(Token::Pow)) {
        return Ok(base);
    }
    tokens.next();

    let exponent = parse_unary(tokens, context)?;
    Ok(Context::eval_binary(BinaryOperator::Pow, base, exponent)?)
}

/// Parses a primary expression.
///
/// A primary is a numeric literal, a constant, a function call or a
/// parenthesized expression. An identifier directly followed by `(` is a
/// call; the arguments are evaluated before the function is looked up.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER "(" arguments
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where an operand is expected.
/// - `UnexpectedToken` for any other token in operand position.
/// - `UnmatchedOpeningParen` if a `(` is not closed.
fn parse_primary<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    let Some((token, text)) = tokens.next().transpose()? else {
        return Err(ParseError::UnexpectedEndOfInput.into());
    };

    match token {
        Token::Number(value) => Ok(value),

        Token::Identifier(name) => {
            if matches!(peek_token(tokens)?, Some(Token::LParen)) {
                tokens.next();
                let arguments = parse_arguments(tokens, context, &name)?;
                Ok(context.eval_function(&name, &arguments)?)
            } else {
                Ok(Context::eval_constant(&name)?)
            }
        },

        Token::LParen => {
            let value = parse_expression(tokens, context)?;
            match tokens.next().transpose()? {
                Some((Token::RParen, _)) => Ok(value),
                _ => Err(ParseError::UnmatchedOpeningParen.into()),
            }
        },

        _ => Err(ParseError::UnexpectedToken { token: text.to_string() }.into()),
    }
}
