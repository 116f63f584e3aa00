/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: unrecognised characters, missing operands, unbalanced
/// parentheses and leftover input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking a well-formed
/// syntax tree, such as division by zero, domain violations and overflow.
pub mod evaluation_error;
/// Configuration errors.
///
/// Raised when a calculator is configured with a value it does not recognise.
pub mod config_error;
/// The calculator's public error taxonomy.
///
/// Wraps parse and evaluation failures and anything else that escapes the
/// pipeline into a single type.
pub mod calculator_error;

pub use calculator_error::CalculatorError;
pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;
