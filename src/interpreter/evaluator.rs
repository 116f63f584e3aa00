/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators, including the division-by-zero and
/// overflow checks.
pub mod binary;

/// Core evaluation logic and configuration.
///
/// Contains the evaluator, its angle unit setting and the tree walk.
pub mod core;

/// Function evaluation.
///
/// Applies builtin functions, including angle conversion and domain checks.
pub mod function;

pub use self::core::{AngleUnit, EvalResult, Evaluator};
