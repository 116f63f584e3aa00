use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            core::{Cursor, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Operands are folded
/// in a loop, so long chains do not deepen the call stack.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    while let Some(token) = cursor.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        cursor.advance();
        let right = parse_multiplicative(cursor)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_exponent(cursor)?;
    while let Some(token) = cursor.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Rem)
    {
        cursor.advance();
        let right = parse_exponent(cursor)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The right operand recurses into this rule, so each `^` costs one nesting
/// level.
///
/// The rule is: `exponent := unary ("^" exponent)?`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let base = parse_unary(cursor)?;
    if let Some(Token::Operator(Operator::Caret)) = cursor.peek() {
        cursor.advance();
        let exponent = cursor.nested(parse_exponent)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+ - * / % ^`, and
/// `None` for all other tokens.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Operator, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(Operator::Percent)),
///            Some(BinaryOperator::Rem));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(op) => Some(match op {
                                   Operator::Plus => BinaryOperator::Add,
                                   Operator::Minus => BinaryOperator::Sub,
                                   Operator::Star => BinaryOperator::Mul,
                                   Operator::Slash => BinaryOperator::Div,
                                   Operator::Percent => BinaryOperator::Rem,
                                   Operator::Caret => BinaryOperator::Pow,
                               }),
        _ => None,
    }
}
