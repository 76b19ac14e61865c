use std::iter::Peekable;

use crate::{
    interpreter::{
        evaluator::core::Context,
        lexer::{LexResult, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::parse_left_associative},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Maps a token to the binary operator it denotes, if any.
///
/// `^` maps to bitwise XOR here; in caret mode the lexer already produced
/// `Token::Pow` for it.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Comma => Some(BinaryOperator::Comma),
        Token::OrOr => Some(BinaryOperator::Or),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::IntDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Parses logical OR expressions.
///
/// Both sides are always evaluated; the result is `Integer` 1 or 0.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := bitwise_or ("&&" bitwise_or)*`
pub fn parse_logical_and<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::And], parse_bitwise_or)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitwise_or := bitwise_xor ("|" bitwise_xor)*`
pub fn parse_bitwise_or<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::BitOr], parse_bitwise_xor)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitwise_xor := bitwise_and ("^" bitwise_and)*`
pub fn parse_bitwise_xor<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::BitXor], parse_bitwise_and)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitwise_and := equality ("&" equality)*`
pub fn parse_bitwise_and<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens, context, &[BinaryOperator::BitAnd], parse_equality)
}

/// Parses equality expressions.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens,
                           context,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_relational)
}

/// Parses relational expressions.
///
/// Chains are left-associative, so `4 < 6 < 8` compares the result of
/// `4 < 6` with `8`.
///
/// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)*`
pub fn parse_relational<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens,
                           context,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual],
                           parse_shift)
}

/// Parses bit shift expressions.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens,
                           context,
                           &[BinaryOperator::ShiftLeft, BinaryOperator::ShiftRight],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'s, I>(tokens: &mut Peekable<I>, context: &Context) -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens,
                           context,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
pub fn parse_multiplicative<'s, I>(tokens: &mut Peekable<I>,
                                   context: &Context)
                                   -> ParseResult<Value>
    where I: Iterator<Item = LexResult<(Token, &'s str)>>
{
    parse_left_associative(tokens,
                           context,
                           &[BinaryOperator::Mul,
                             BinaryOperator::Div,
                             BinaryOperator::IntDiv,
                             BinaryOperator::Mod],
                           parse_unary)
}
