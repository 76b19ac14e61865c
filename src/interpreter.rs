/// The evaluator module defines the semantics of operators, constants and
/// functions.
///
/// The parser folds every operator and call through the evaluator as soon as
/// both operands are known. The evaluator applies the promotion rule, checks
/// integer overflow and operand types, and looks up the built-in constant
/// and function tables.
///
/// # Responsibilities
/// - Computes unary and binary operator results.
/// - Resolves constants and built-in functions, checking arity and domain.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer produces tokens lazily, one lookahead at a time. Numeric
/// literals are scanned into values here, so the parser never sees raw
/// digits.
pub mod lexer;
/// The parser module evaluates tokens in a single recursive-descent pass.
///
/// Each precedence level is one function that parses its operands through
/// the next tighter level and folds them immediately. No syntax tree is
/// built.
pub mod parser;
/// The value module defines the runtime number type.
///
/// A value is either an integer or a float. The module provides the views,
/// the promotion rule for mixed operands and demotion of integral floats.
pub mod value;
