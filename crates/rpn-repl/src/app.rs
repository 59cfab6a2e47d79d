//! Application state for the REPL.

use std::io::{self, Write};

use rpn::StackEvaluator;

use super::{
    commands::{CommandResult, try_execute_command},
    config::ReplConfig,
};

/// Application state.
pub struct App {
    /// The evaluator and its stack.
    pub evaluator: StackEvaluator,
    pub config: ReplConfig,
    /// Whether the app is still running.
    pub running: bool,
}

impl App {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            evaluator: StackEvaluator::new(),
            config,
            running: true,
        }
    }

    /// Handle one line of input.
    ///
    /// Blank lines are ignored. Commands take priority over expressions.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(());
        }

        match try_execute_command(self, input, out)? {
            CommandResult::Handled => {}
            CommandResult::Quit => self.running = false,
            CommandResult::NotACommand => self.evaluate(input, out)?,
        }
        Ok(())
    }

    fn evaluate(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        match self.evaluator.process_expression(input) {
            Ok(value) => writeln!(out, "Result: {}", rpn::format_real(value)),
            Err(e) => {
                log::debug!("expression {:?} rejected: {:?}", input, e);
                writeln!(out, "Error: {}", e)
            }
        }
    }
}
