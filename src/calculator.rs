use std::{
    any::Any,
    cell::Cell,
    panic::{self, AssertUnwindSafe},
};

use tracing::debug;

use crate::{
    error::CalculatorError,
    interpreter::{
        evaluator::{AngleUnit, Evaluator},
        parser::{DEFAULT_MAX_DEPTH, Parser},
    },
};

thread_local! {
    /// Set while the current thread runs inside [`Calculator::calculate`].
    static CALCULATING: Cell<bool> = const { Cell::new(false) };
}

/// Result type returned by [`Calculator::calculate`].
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Settings a [`Calculator`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Unit used by trigonometric functions.
    pub angle_unit: AngleUnit,
    /// How deeply groups, calls, negations and powers may nest.
    pub max_depth:  usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { angle_unit: AngleUnit::default(),
               max_depth:  DEFAULT_MAX_DEPTH, }
    }
}

/// Parses and evaluates expressions.
///
/// A calculator owns one [`Parser`] and one [`Evaluator`]. Neither keeps state
/// between calls, so repeated calculations of the same text always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    parser:    Parser,
    evaluator: Evaluator,
}

impl Calculator {
    /// Creates a calculator working in radians.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator using the given angle unit.
    #[must_use]
    pub fn with_angle_unit(angle_unit: AngleUnit) -> Self {
        Self::from_config(CalculatorConfig { angle_unit,
                                             ..CalculatorConfig::default() })
    }

    /// Creates a calculator from a full configuration.
    #[must_use]
    pub const fn from_config(config: CalculatorConfig) -> Self {
        Self { parser:    Parser::with_max_depth(config.max_depth),
               evaluator: Evaluator::new(config.angle_unit), }
    }

    /// Returns the parser used by this calculator.
    #[must_use]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Returns the evaluator used by this calculator.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Parses and evaluates one expression.
    ///
    /// Parse and evaluation errors are returned as the matching
    /// [`CalculatorError`] variant. A panic inside the pipeline is caught and
    /// reported as [`CalculatorError::Unexpected`].
    ///
    /// # Errors
    /// Returns a `CalculatorError` if the expression is malformed or cannot be
    /// evaluated.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{calculator::Calculator, interpreter::evaluator::AngleUnit};
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.calculate("2 + 3 * 4").unwrap(), 14.0);
    /// assert!(calc.calculate("1 / 0").unwrap_err().is_evaluation_error());
    ///
    /// let calc = Calculator::with_angle_unit(AngleUnit::Degree);
    /// assert!((calc.calculate("sin(90)").unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn calculate(&self, source: &str) -> CalcResult<f64> {
        let result = catch_panics(|| self.run(source));

        match &result {
            Ok(value) => debug!(source, value, "calculated expression"),
            Err(error) => debug!(source, %error, "calculation failed"),
        }
        result
    }

    fn run(&self, source: &str) -> CalcResult<f64> {
        let ast = self.parser.parse(source)?;
        Ok(self.evaluator.evaluate(&ast)?)
    }
}

/// Installs a panic hook that keeps panics caught by [`Calculator::calculate`]
/// off stderr.
///
/// Those panics are already returned as [`CalculatorError::Unexpected`], so the
/// hook only logs them at debug level. Panics anywhere else are passed to the
/// hook that was installed before.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
                        if CALCULATING.get() {
                            debug!(%info, "panic during calculation");
                        } else {
                            previous(info);
                        }
                    }));
}

/// Runs one calculation, turning a panic into [`CalculatorError::Unexpected`].
fn catch_panics(run: impl FnOnce() -> CalcResult<f64>) -> CalcResult<f64> {
    let was_calculating = CALCULATING.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(run));
    CALCULATING.set(was_calculating);

    outcome.unwrap_or_else(|payload| {
               Err(CalculatorError::Unexpected(panic_message(payload.as_ref())))
           })
}

/// Extracts the message of a caught panic.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>()
           .map(ToString::to_string)
           .or_else(|| payload.downcast_ref::<String>().cloned())
           .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_becomes_unexpected_error() {
        install_panic_hook();

        let result = catch_panics(|| panic!("boom"));

        assert_eq!(result, Err(CalculatorError::Unexpected("boom".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Unexpected error: boom");
        assert!(!CALCULATING.get());
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let limit = 3;
        let result = catch_panics(|| panic!("limit {limit} exceeded"));

        assert_eq!(result, Err(CalculatorError::Unexpected("limit 3 exceeded".to_string())));
    }

    #[test]
    fn results_pass_through() {
        assert_eq!(catch_panics(|| Ok(2.5)), Ok(2.5));
        assert_eq!(catch_panics(|| Err(CalculatorError::Unexpected("no".to_string()))),
                   Err(CalculatorError::Unexpected("no".to_string())));
    }
}
