use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::calculator::Calculator;

/// Banner printed when an interactive session starts.
pub const BANNER: &str = "Type 'exit' or 'quit' to leave.";

/// Prompt printed before each input line.
pub const PROMPT: &str = "> ";

/// Runs an interactive session until `exit`, `quit` or end of input.
///
/// Each line is trimmed. Blank lines are ignored and the exit commands are
/// matched case-insensitively. Every other line is calculated and either the
/// value or `Error: <message>` is written to `output`.
///
/// # Errors
/// Returns an error only if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use exprcalc::{calculator::Calculator, repl::run_interactive};
///
/// let mut output = Vec::new();
/// run_interactive(&Calculator::new(), "1 + 1\nquit\n".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("> 2\n"));
/// ```
pub fn run_interactive<R, W>(calculator: &Calculator, input: R, mut output: W) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    writeln!(output, "{BANNER}")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let expression = line.trim();

        if is_exit_command(expression) {
            debug!("interactive session ended by user");
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match calculator.calculate(expression) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "Error: {error}")?,
        }
    }

    Ok(())
}

/// Returns `true` for the commands that end an interactive session.
///
/// # Example
/// ```
/// use exprcalc::repl::is_exit_command;
///
/// assert!(is_exit_command("EXIT"));
/// assert!(is_exit_command("quit"));
/// assert!(!is_exit_command("exp(1)"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}
