use thiserror::Error;

use crate::error::{EvaluationError, ParseError};

#[derive(Debug, Clone, PartialEq, Error)]
/// Every failure a calculation can report.
///
/// Parse and evaluation errors keep their own message. Anything else that
/// escapes the pipeline is reported as `Unexpected`.
pub enum CalculatorError {
    /// The expression is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// Any other failure, carrying the original message.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl CalculatorError {
    /// Returns `true` if the expression failed to parse.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if the expression parsed but failed to evaluate.
    #[must_use]
    pub const fn is_evaluation_error(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }
}
