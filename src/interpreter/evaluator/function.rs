use crate::{
    error::EvaluationError,
    interpreter::{
        builtin::Function,
        evaluator::core::{AngleUnit, EvalResult, Evaluator},
    },
};

impl Evaluator {
    /// Applies a builtin function to an evaluated argument.
    ///
    /// `sin`, `cos`, `tg` and `ctg` take their argument in the evaluator's
    /// angle unit. `arctan` takes a plain number and returns an angle in that
    /// unit.
    ///
    /// # Parameters
    /// - `function`: The builtin to apply.
    /// - `argument`: The evaluated argument.
    ///
    /// # Returns
    /// The function value, or an error when the argument is outside the
    /// function's domain or the result overflows.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::{
    ///     builtin::Function,
    ///     evaluator::{AngleUnit, Evaluator},
    /// };
    ///
    /// let degrees = Evaluator::new(AngleUnit::Degree);
    /// assert!((degrees.eval_function(Function::Cos, 180.0).unwrap() + 1.0).abs() < 1e-12);
    /// assert!((degrees.eval_function(Function::Arctan, 1.0).unwrap() - 45.0).abs() < 1e-12);
    ///
    /// let radians = Evaluator::new(AngleUnit::Radian);
    /// assert!(radians.eval_function(Function::Ln, 0.0).is_err());
    /// ```
    pub fn eval_function(&self, function: Function, argument: f64) -> EvalResult<f64> {
        match function {
            Function::Sin => Ok(self.angle_in_radians(function, argument)?.sin()),
            Function::Cos => Ok(self.angle_in_radians(function, argument)?.cos()),
            Function::Tg => Ok(self.angle_in_radians(function, argument)?.tan()),
            Function::Ctg => {
                let tangent = self.angle_in_radians(function, argument)?.tan();
                if tangent == 0.0 {
                    return Err(EvaluationError::UndefinedCotangent);
                }
                Ok(1.0 / tangent)
            },
            Function::Arctan => {
                let angle = argument.atan();
                Ok(match self.angle_unit() {
                       AngleUnit::Radian => angle,
                       AngleUnit::Degree => angle.to_degrees(),
                   })
            },
            Function::Ln => {
                if argument <= 0.0 {
                    return Err(EvaluationError::LogarithmDomain);
                }
                Ok(argument.ln())
            },
            Function::Exp => {
                let result = argument.exp();
                if result.is_infinite() {
                    return Err(EvaluationError::Overflow);
                }
                Ok(result)
            },
            Function::Sqrt => {
                if argument < 0.0 {
                    return Err(EvaluationError::SquareRootDomain);
                }
                Ok(argument.sqrt())
            },
        }
    }

    /// Converts a trigonometric argument to radians.
    ///
    /// Infinite angles have no trigonometric value and are rejected.
    fn angle_in_radians(&self, function: Function, argument: f64) -> EvalResult<f64> {
        if argument.is_infinite() {
            return Err(EvaluationError::MathDomain { function });
        }

        Ok(match self.angle_unit() {
               AngleUnit::Radian => argument,
               AngleUnit::Degree => argument.to_radians(),
           })
    }
}
