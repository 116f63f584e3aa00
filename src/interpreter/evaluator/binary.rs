use crate::{
    ast::BinaryOperator,
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-` and `*` are plain `f64` arithmetic. `/` and `%` reject an exact
    /// zero divisor; `%` is the floating-point remainder, which takes the sign
    /// of the dividend. `^` delegates to [`Evaluator::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{ast::BinaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Rem, -7.0, 3.0).unwrap(), -1.0);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Rem => {
                if right == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(left % right)
            },
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates an exponentiation operation.
    ///
    /// Zero raised to a negative power is a division by zero. An infinite
    /// result is reported as overflow. A negative base with a fractional
    /// exponent has no real result.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::evaluator::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0).unwrap(), 1024.0);
    /// assert!(Evaluator::eval_pow(10.0, 400.0).is_err());
    /// assert!(Evaluator::eval_pow(-8.0, 0.5).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(EvaluationError::DivisionByZero);
        }

        let result = base.powf(exponent);
        if result.is_infinite() {
            return Err(EvaluationError::Overflow);
        }
        if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
            return Err(EvaluationError::ComplexResult { base, exponent });
        }

        Ok(result)
    }
}
