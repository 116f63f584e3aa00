use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// A character that starts no valid token.
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),
    /// Reached the end of input where an operand was required.
    #[error("Unexpected end of expression")]
    UnexpectedEndOfExpression,
    /// Found a token that cannot start an operand.
    #[error("Expected number, function or parenthesis, got {token}")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A function name was not followed by `(`.
    #[error("Expected '(' after function {function}")]
    ExpectedOpeningParen {
        /// The name of the function.
        function: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Missing closing parenthesis")]
    MissingClosingParen,
    /// Found extra tokens after a complete expression.
    #[error("Unexpected token after expression: {token}")]
    TrailingToken {
        /// The first leftover token.
        token: String,
    },
    /// Parentheses, function calls, negations or powers were nested too deep.
    #[error("Expression is nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
}
