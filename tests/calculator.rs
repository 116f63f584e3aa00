use std::time::{Duration, Instant};

use exprcalc::{
    AngleUnit, Calculator, CalculatorConfig, CalculatorError,
    ast::Expr,
    calculate,
    error::{EvaluationError, ParseError},
    interpreter::{builtin::Function, evaluator::Evaluator},
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!((value - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_parse_error(src: &str) -> ParseError {
    match calculate(src) {
        Err(CalculatorError::Parse(e)) => e,
        other => panic!("{src} was expected to fail parsing, got {other:?}"),
    }
}

fn assert_evaluation_error(src: &str) -> EvaluationError {
    match calculate(src) {
        Err(CalculatorError::Evaluation(e)) => e,
        other => panic!("{src} was expected to fail evaluation, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", 5.0);
    assert_value("5-2", 3.0);
    assert_value("3*4", 12.0);
    assert_value("10/2", 5.0);
    assert_value("2+3*4", 14.0);
    assert_value("2*-3", -6.0);
}

#[test]
fn floats_and_scientific_notation() {
    assert_value("3.14", 3.14);
    assert_value("1e5", 1e5);
    assert_value("1.25e+09", 1.25e+09);
    assert_value("2.5E-3", 2.5e-3);
    assert_value("7.", 7.0);
    assert_value("-5", -5.0);
}

#[test]
fn literals_round_trip() {
    for n in [0.0, 1.0, 42.0, 3.5, 0.1, 123_456.789, 1e-7, 6.02e23, f64::MAX] {
        assert_eq!(calculate(&n.to_string()).unwrap(), n);
        assert_eq!(calculate(&format!("{n:e}")).unwrap(), n);
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3^2", 18.0);
    assert_value("10-4-3", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("2+10%4", 4.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("8^(1/3)", 2.0);
    assert_value("2^3^2", 512.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_eq!(calculate("-2^2").unwrap(), 4.0);
    assert_eq!(calculate("-(2^2)").unwrap(), -4.0);
    assert_eq!(calculate("--3").unwrap(), 3.0);
}

#[test]
fn remainder_keeps_sign_of_dividend() {
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", -1.0);
    assert_value("5.5 % 2", 1.5);
    assert_eq!(assert_evaluation_error("1 % 0"), EvaluationError::DivisionByZero);
}

#[test]
fn constants_and_functions() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("ln(e)", 1.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("sqrt(0)", 0.0);
    assert_value("sin(pi/2)", 1.0);
    assert_value("cos(0)", 1.0);
    assert_value("tg(pi/4)", 1.0);
    assert_value("ctg(pi/4)", 1.0);
    assert_value("arctan(1)", std::f64::consts::FRAC_PI_4);
    assert_value("2*sqrt(9)+ln(1)", 6.0);
}

#[test]
fn degree_mode() {
    let calc = Calculator::with_angle_unit(AngleUnit::Degree);
    let approx = |src: &str, expected: f64| {
        let value = calc.calculate(src).unwrap();
        assert!((value - expected).abs() < TOLERANCE, "{src} evaluated to {value}");
    };

    approx("sin(90)", 1.0);
    approx("cos(60)", 0.5);
    approx("tg(45)", 1.0);
    approx("ctg(45)", 1.0);
    approx("arctan(1)", 45.0);
    assert_eq!(calc.evaluator().angle_unit(), AngleUnit::Degree);
}

#[test]
fn evaluation_errors() {
    assert_eq!(assert_evaluation_error("1/0"), EvaluationError::DivisionByZero);
    assert_eq!(assert_evaluation_error("1/(2-2)"), EvaluationError::DivisionByZero);
    assert_eq!(assert_evaluation_error("ln(-1)"), EvaluationError::LogarithmDomain);
    assert_eq!(assert_evaluation_error("ln(0)"), EvaluationError::LogarithmDomain);
    assert_eq!(assert_evaluation_error("sqrt(-1)"), EvaluationError::SquareRootDomain);
    assert_eq!(assert_evaluation_error("ctg(0)"), EvaluationError::UndefinedCotangent);
    assert_eq!(assert_evaluation_error("10^400"), EvaluationError::Overflow);
    assert_eq!(assert_evaluation_error("exp(1000)"), EvaluationError::Overflow);
    assert_eq!(assert_evaluation_error("0^-1"), EvaluationError::DivisionByZero);
    assert!(matches!(assert_evaluation_error("(-8)^(1/3)"),
                     EvaluationError::ComplexResult { .. }));
    assert!(matches!(assert_evaluation_error("sin(1e400)"),
                     EvaluationError::MathDomain { .. }));
}

#[test]
fn tiny_divisor_is_not_division_by_zero() {
    assert_value("1/1e-300", 1e300);
}

#[test]
fn parse_errors() {
    assert_eq!(assert_parse_error("2/"), ParseError::UnexpectedEndOfExpression);
    assert_eq!(assert_parse_error("1 + (2 * 3"), ParseError::MissingClosingParen);
    assert_eq!(assert_parse_error(""), ParseError::UnexpectedEndOfExpression);
    assert_eq!(assert_parse_error("   "), ParseError::UnexpectedEndOfExpression);
    assert_eq!(assert_parse_error("2 # 3"), ParseError::InvalidCharacter('#'));
    assert_eq!(assert_parse_error("x + 1"), ParseError::InvalidCharacter('x'));
    assert_eq!(assert_parse_error("sinx"), ParseError::InvalidCharacter('x'));
    assert_eq!(assert_parse_error("sin 1"),
               ParseError::ExpectedOpeningParen { function: "sin".to_string() });
    assert_eq!(assert_parse_error("sin()"),
               ParseError::UnexpectedToken { token: ")".to_string() });
    assert_eq!(assert_parse_error("+5"),
               ParseError::UnexpectedToken { token: "+".to_string() });
    assert_eq!(assert_parse_error("(1))"),
               ParseError::TrailingToken { token: ")".to_string() });
    assert_eq!(assert_parse_error("2 3"),
               ParseError::TrailingToken { token: "3".to_string() });
}

#[test]
fn error_messages() {
    assert_eq!(calculate("1/0").unwrap_err().to_string(), "Division by zero");
    assert_eq!(calculate("2 $").unwrap_err().to_string(), "Invalid character: $");
    assert_eq!(calculate("2/").unwrap_err().to_string(), "Unexpected end of expression");
    assert_eq!(calculate("sqrt(-4)").unwrap_err().to_string(),
               "Square root is only defined for non-negative numbers");
    assert_eq!(calculate("ln(-4)").unwrap_err().to_string(),
               "Logarithm is only defined for positive numbers");
    assert_eq!(CalculatorError::Unexpected("boom".to_string()).to_string(),
               "Unexpected error: boom");
}

#[test]
fn error_classification() {
    assert!(calculate("2/").unwrap_err().is_parse_error());
    assert!(calculate("1/0").unwrap_err().is_evaluation_error());
    assert!(!calculate("1/0").unwrap_err().is_parse_error());
}

#[test]
fn nesting_limit_is_configurable() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(assert_parse_error(&deep), ParseError::NestingTooDeep { limit: 256 });

    let calc = Calculator::from_config(CalculatorConfig { max_depth: 400,
                                                          ..CalculatorConfig::default() });
    assert_eq!(calc.calculate(&deep).unwrap(), 1.0);
}

#[test]
fn repeated_calculations_agree() {
    let calc = Calculator::new();
    let expressions = ["2+3*4", "sin(pi/3)^2 + cos(pi/3)^2", "1/0", "2/"];

    let first: Vec<_> = expressions.iter().map(|src| calc.calculate(src)).collect();
    for _ in 0..3 {
        let again: Vec<_> = expressions.iter().map(|src| calc.calculate(src)).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn long_expression() {
    let src = format!("1{}", "+1".repeat(1023));

    let start = Instant::now();
    let result = calculate(&src).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result, 1024.0);
    assert!(elapsed < Duration::from_millis(200), "took {elapsed:?}");
}

#[test]
fn very_long_chains_do_not_exhaust_the_stack() {
    let sum = format!("1{}", "+1".repeat(199_999));
    assert_eq!(calculate(&sum).unwrap(), 200_000.0);

    let mixed = format!("0{}", "+2*3-6/2%4".repeat(25_000));
    assert_eq!(calculate(&mixed).unwrap(), 75_000.0);

    let failing = format!("1{}/0", "-1".repeat(100_000));
    assert_eq!(assert_evaluation_error(&failing), EvaluationError::DivisionByZero);
}

#[test]
fn deep_trees_evaluate_iteratively() {
    let mut expr = Expr::Number(2.0);
    for _ in 0..100_001 {
        expr = Expr::negate(expr);
    }
    assert_eq!(Evaluator::default().evaluate(&expr).unwrap(), -2.0);

    let mut expr = Expr::Number(0.0);
    for _ in 0..100_000 {
        expr = Expr::call(Function::Sin, expr);
    }
    assert_eq!(Evaluator::default().evaluate(&expr).unwrap(), 0.0);
}

#[test]
fn large_numbers() {
    let start = Instant::now();
    let result = calculate("1e300 + 1e30000").unwrap();
    let elapsed = start.elapsed();

    assert!(result.is_infinite() && result.is_sign_positive());
    assert!(elapsed < Duration::from_millis(100), "took {elapsed:?}");
}
