use std::{fmt, str::FromStr};

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ConfigError, EvaluationError},
    interpreter::builtin::Function,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// How trigonometric functions interpret angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Angles are in radians.
    #[default]
    Radian,
    /// Angles are in degrees.
    Degree,
}

impl FromStr for AngleUnit {
    type Err = ConfigError;

    /// Parses `radian` or `degree`, ignoring case and surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::evaluator::AngleUnit;
    ///
    /// assert_eq!("Degree".parse::<AngleUnit>().unwrap(), AngleUnit::Degree);
    /// assert!("gradian".parse::<AngleUnit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radian" => Ok(Self::Radian),
            "degree" => Ok(Self::Degree),
            _ => Err(ConfigError::InvalidAngleUnit(s.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radian => f.write_str("radian"),
            Self::Degree => f.write_str("degree"),
        }
    }
}

/// Walks syntax trees and computes their value.
///
/// The angle unit is fixed when the evaluator is created. Evaluation holds no
/// other state, so one evaluator can be reused for any number of trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    angle_unit: AngleUnit,
}

impl Evaluator {
    /// Creates an evaluator using the given angle unit.
    #[must_use]
    pub const fn new(angle_unit: AngleUnit) -> Self {
        Self { angle_unit }
    }

    /// Returns the angle unit used by trigonometric functions.
    #[must_use]
    pub const fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Both operands
    /// of a binary operation are always evaluated, left first. The tree is
    /// walked with an explicit stack, so its depth is limited only by memory.
    ///
    /// # Errors
    /// Returns an `EvaluationError` on division by zero, overflow, or a
    /// function argument outside its domain.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::Evaluator,
    /// };
    ///
    /// let evaluator = Evaluator::default();
    /// let expr = Expr::binary(Expr::Number(6.0), BinaryOperator::Mul, Expr::Number(7.0));
    /// assert_eq!(evaluator.evaluate(&expr).unwrap(), 42.0);
    ///
    /// let expr = Expr::binary(Expr::Number(1.0), BinaryOperator::Div, Expr::Number(0.0));
    /// assert!(evaluator.evaluate(&expr).is_err());
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        let mut pending = Vec::new();
        let mut expr = expr;

        loop {
            let mut value = loop {
                match expr {
                    Expr::Number(value) => break *value,
                    Expr::BinaryOp { left, op, right } => {
                        pending.push(Pending::LeftOperand { op: *op, right });
                        expr = left;
                    },
                    Expr::UnaryOp { op: UnaryOperator::Negate,
                                    operand, } => {
                        pending.push(Pending::Negation);
                        expr = operand;
                    },
                    Expr::FunctionCall { function, argument } => {
                        pending.push(Pending::Argument(*function));
                        expr = argument;
                    },
                }
            };

            loop {
                match pending.pop() {
                    None => return Ok(value),
                    Some(Pending::LeftOperand { op, right }) => {
                        pending.push(Pending::RightOperand { op, left: value });
                        expr = right;
                        break;
                    },
                    Some(Pending::RightOperand { op, left }) => {
                        value = Self::eval_binary(op, left, value)?;
                    },
                    Some(Pending::Negation) => value = -value,
                    Some(Pending::Argument(function)) => {
                        value = self.eval_function(function, value)?;
                    },
                }
            }
        }
    }
}

/// An operation waiting for the value of the subtree currently being walked.
///
/// The evaluator keeps these on a heap-allocated stack instead of recursing,
/// so a chain of any length is walked in constant native stack space.
enum Pending<'a> {
    /// The left operand is being evaluated; `right` comes next.
    LeftOperand { op: BinaryOperator, right: &'a Expr },
    /// The right operand is being evaluated; `left` is already known.
    RightOperand { op: BinaryOperator, left: f64 },
    Negation,
    Argument(Function),
}
