//! Bare-word commands recognised by the REPL.

use std::io::{self, Write};

use super::app::App;

/// Result of executing a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Command was handled.
    Handled,
    /// Not a command, should be evaluated as an expression.
    NotACommand,
    /// Quit the REPL.
    Quit,
}

/// Try to execute input as a command.
///
/// Only `q` is case-insensitive; `clear`, `stack` and `f` must match exactly.
pub fn try_execute_command(
    app: &mut App,
    input: &str,
    out: &mut impl Write,
) -> io::Result<CommandResult> {
    match input {
        "q" | "Q" => {
            writeln!(out, "Calculator exited. Goodbye!")?;
            Ok(CommandResult::Quit)
        }
        "clear" => {
            app.evaluator.clear_stack();
            writeln!(out, "Stack cleared")?;
            Ok(CommandResult::Handled)
        }
        "stack" => {
            writeln!(
                out,
                "Stack (bottom to top): {}",
                app.evaluator.snapshot_stack()
            )?;
            Ok(CommandResult::Handled)
        }
        "f" => {
            match app.evaluator.fibonacci() {
                Ok(value) => writeln!(out, "Fibonacci result: {}", rpn::format_real(value))?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
            Ok(CommandResult::Handled)
        }
        _ => Ok(CommandResult::NotACommand),
    }
}
