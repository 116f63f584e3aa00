use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        builtin::Function,
        lexer::{Operator, Token},
        parser::core::{Cursor, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds tighter than `^`, so `--x` is `-(-x)` and
/// `-2^2` is `(-2)^2`.
///
/// If no operator is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    if let Some(Token::Operator(Operator::Minus)) = cursor.peek() {
        cursor.advance();
        let operand = cursor.nested(parse_unary)?;
        return Ok(Expr::negate(operand));
    }
    parse_primary(cursor)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - constants, folded into their value
/// - function calls
/// - parenthesised expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | CONSTANT
///              | FUNCTION "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let token = cursor.peek()
                      .ok_or(ParseError::UnexpectedEndOfExpression)?;

    match token {
        Token::Number(value) => {
            cursor.advance();
            Ok(Expr::Number(*value))
        },
        Token::Constant(constant) => {
            cursor.advance();
            Ok(Expr::Number(constant.value()))
        },
        Token::Function(function) => parse_function_call(cursor, *function),
        Token::LParen => parse_grouping(cursor),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string() }),
    }
}

/// Parses a call such as `sqrt(x)`.
///
/// The cursor is positioned at the function name.
///
/// # Errors
/// - `ExpectedOpeningParen` if the name is not followed by `(`.
/// - `MissingClosingParen` if the argument is not closed.
fn parse_function_call(cursor: &mut Cursor<'_>, function: Function) -> ParseResult<Expr> {
    cursor.advance();
    if !matches!(cursor.peek(), Some(Token::LParen)) {
        return Err(ParseError::ExpectedOpeningParen { function: function.name().to_string() });
    }

    let argument = parse_grouping(cursor)?;
    Ok(Expr::call(function, argument))
}

/// Parses a parenthesised expression, positioned at `(`.
///
/// The inner expression is parsed one nesting level deeper.
fn parse_grouping(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    cursor.advance();
    let inner = cursor.nested(parse_expression)?;

    match cursor.advance() {
        Some(Token::RParen) => Ok(inner),
        _ => Err(ParseError::MissingClosingParen),
    }
}
