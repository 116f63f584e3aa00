use exprcalc::{
    AngleUnit, Calculator,
    repl::{BANNER, PROMPT, run_interactive},
};

fn session(calc: &Calculator, input: &str) -> String {
    let mut output = Vec::new();
    run_interactive(calc, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_results_and_errors() {
    let output = session(&Calculator::new(), "2 + 3 * 4\n1 / 0\n2 /\nexit\n");

    assert_eq!(output,
               format!("{BANNER}\n{PROMPT}14\n{PROMPT}Error: Division by zero\n{PROMPT}Error: Unexpected end of expression\n{PROMPT}"));
}

#[test]
fn skips_blank_lines_and_trims_input() {
    let output = session(&Calculator::new(), "\n   \n  6*7  \nquit\n");

    assert_eq!(output, format!("{BANNER}\n{PROMPT}{PROMPT}{PROMPT}42\n{PROMPT}"));
}

#[test]
fn exit_commands_ignore_case() {
    for command in ["exit", "EXIT", "Quit", "  quit  "] {
        let output = session(&Calculator::new(), &format!("{command}\n1+1\n"));
        assert!(!output.contains('2'), "{command:?} did not end the session");
    }
}

#[test]
fn end_of_input_ends_the_session() {
    let output = session(&Calculator::new(), "1 + 1");

    assert_eq!(output, format!("{BANNER}\n{PROMPT}2\n{PROMPT}\n"));
}

#[test]
fn uses_the_calculator_configuration() {
    let output = session(&Calculator::with_angle_unit(AngleUnit::Degree), "cos(180)\n");

    assert!(output.contains("-1\n"), "{output}");
}
