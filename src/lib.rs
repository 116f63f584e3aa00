//! # exprcalc
//!
//! exprcalc is an arithmetic expression calculator written in Rust.
//! It tokenizes, parses and evaluates expressions such as `2 * sin(pi / 4)`
//! and reports malformed input and invalid arithmetic as typed errors.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
pub mod ast;
/// The calculator front end.
///
/// Ties the parser and evaluator together behind a single `calculate` call
/// and holds the configuration both are built from.
pub mod calculator;
/// Provides the error types for parsing, evaluation and configuration.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Folds them into the single `CalculatorError` seen by callers.
pub mod error;
/// Orchestrates the stages of a calculation.
///
/// This module holds the builtin tables, the lexer, the parser and the
/// evaluator.
pub mod interpreter;
/// Line-oriented interactive session.
///
/// Reads expressions one per line and prints each result or error.
pub mod repl;

pub use calculator::{CalcResult, Calculator, CalculatorConfig};
pub use error::CalculatorError;
pub use interpreter::evaluator::AngleUnit;

/// Calculates an expression using the default configuration.
///
/// Angles are in radians and the default nesting limit applies.
///
/// # Errors
/// Returns an error if the expression is malformed or cannot be evaluated.
///
/// # Examples
/// ```
/// use exprcalc::calculate;
///
/// assert_eq!(calculate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(calculate("-2^2").unwrap(), 4.0);
///
/// // `2/` is missing its right operand.
/// assert!(calculate("2/").unwrap_err().is_parse_error());
/// ```
pub fn calculate(source: &str) -> CalcResult<f64> {
    Calculator::new().calculate(source)
}
