use std::{io, process::ExitCode};

use clap::{CommandFactory, Parser, builder::RangedU64ValueParser};
use exprcalc::{
    AngleUnit, Calculator, CalculatorConfig, calculator::install_panic_hook,
    interpreter::parser::DEFAULT_MAX_DEPTH, repl::run_interactive,
};
use tracing_subscriber::EnvFilter;

/// Largest `--max-depth` accepted. Parsing recurses once per nesting level, so
/// this keeps the deepest accepted input well inside the main thread's stack.
const MAX_DEPTH_CEILING: u64 = 1024;

/// exprcalc evaluates arithmetic expressions with functions such as `sin`,
/// `ln` and `sqrt` and the constants `pi` and `e`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions line by line until `exit` or `quit`.
    #[arg(short, long)]
    interactive: bool,

    /// Interprets trigonometric angles in degrees instead of radians.
    #[arg(short, long)]
    degree: bool,

    /// Rejects expressions nested deeper than this (at most 1024).
    #[arg(long,
          default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DEPTH_CEILING))]
    max_depth: usize,

    /// The expression to evaluate.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    const fn config(&self) -> CalculatorConfig {
        CalculatorConfig { angle_unit: if self.degree {
                                           AngleUnit::Degree
                                       } else {
                                           AngleUnit::Radian
                                       },
                           max_depth:  self.max_depth, }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();
    install_panic_hook();

    let args = Args::parse();
    let calculator = Calculator::from_config(args.config());

    if args.interactive {
        return match run_interactive(&calculator, io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let Some(expression) = args.expression else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match calculator.calculate(&expression) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
