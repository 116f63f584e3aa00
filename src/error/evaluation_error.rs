use thiserror::Error;

use crate::interpreter::builtin::Function;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvaluationError {
    /// Attempted division (or remainder) by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// A power or exponential grew beyond the range of `f64`.
    #[error("Numerical overflow")]
    Overflow,
    /// `ctg` of an angle whose tangent is zero.
    #[error("Cotangent is undefined")]
    UndefinedCotangent,
    /// `ln` of zero or a negative number.
    #[error("Logarithm is only defined for positive numbers")]
    LogarithmDomain,
    /// `sqrt` of a negative number.
    #[error("Square root is only defined for non-negative numbers")]
    SquareRootDomain,
    /// A trigonometric function was applied to an infinite angle.
    #[error("Math domain error in {function}")]
    MathDomain {
        /// The function that was called.
        function: Function,
    },
    /// A power whose real result does not exist, such as `(-8)^(1/3)`.
    #[error("Result of {base}^{exponent} is not a real number")]
    ComplexResult {
        /// The base of the power.
        base:     f64,
        /// The exponent of the power.
        exponent: f64,
    },
}
