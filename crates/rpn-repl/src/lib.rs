//! RPN REPL - Interactive Read-Eval-Print Loop.
//!
//! Reads one line at a time, runs bare-word commands (`q`, `clear`,
//! `stack`, `f`) and evaluates everything else as an RPN expression.

mod app;
mod commands;
pub mod config;

pub use app::App;
pub use commands::CommandResult;
pub use config::ReplConfig;

use std::io::{self, BufRead, Write};

const BANNER: &str = "\
==================== RPN Calculator ====================
Usage:
1. Enter a Reverse Polish expression, separated by spaces (e.g. 5 5 +)
2. Arithmetic operators: + (add), - (subtract), * (multiply), / (divide)
3. Advanced operators: ^ (power), s (square root)
4. Commands: clear (empty the stack), stack (show the stack), f (fibonacci), q (quit)
========================================================
Enter an expression or command:";

/// Run the REPL on stdin and stdout.
pub fn run(config: ReplConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Run the REPL over arbitrary input and output streams.
///
/// Returns when the user quits or the input is exhausted.
pub fn run_with(
    config: ReplConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut app = App::new(config);

    if app.config.show_banner {
        writeln!(output, "{}", BANNER)?;
    }

    let mut line = String::new();
    while app.running {
        write!(output, "{}", app.config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("end of input");
            writeln!(output)?;
            break;
        }

        app.handle_line(&line, &mut output)?;
    }

    output.flush()
}
