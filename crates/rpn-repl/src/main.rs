//! RPN calculator command-line interface.
//!
//! Usage:
//!   rpn              Start the interactive calculator
//!   rpn -e <expr>    Evaluate one expression

use std::{env, process::ExitCode};

use log::LevelFilter;
use rpn::StackEvaluator;
use rpn_repl::ReplConfig;

const USAGE: &str = "\
Usage: rpn [OPTIONS]

Options:
  -e <EXPR>      Evaluate EXPR once, print the result and exit
  -q, --quiet    Do not print the welcome banner
  -v, --verbose  Log evaluator activity to stderr (repeat for trace)
  -h, --help     Print this help message

With no -e option, starts the interactive calculator.";

enum Action {
    Interactive(ReplConfig),
    Eval(ReplConfig, String),
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Action, String> {
    let mut config = ReplConfig::default();
    let mut expression = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "-q" | "--quiet" => config.show_banner = false,
            "-v" | "--verbose" => {
                config.log_level = match config.log_level {
                    LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
                    _ => LevelFilter::Debug,
                };
            }
            "-vv" => config.log_level = LevelFilter::Trace,
            "-e" => {
                let code = args
                    .next()
                    .ok_or_else(|| format!("-e requires an expression\n\n{USAGE}"))?;
                expression = Some(code);
            }
            other => return Err(format!("unexpected argument '{other}'\n\n{USAGE}")),
        }
    }

    Ok(match expression {
        Some(code) => Action::Eval(config, code),
        None => Action::Interactive(config),
    })
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    match parse_args(env::args().skip(1)) {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Eval(config, code)) => {
            init_logging(config.log_level);
            let mut calc = StackEvaluator::new();
            match calc.process_expression(&code) {
                Ok(value) => {
                    println!("{}", rpn::format_real(value));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Action::Interactive(config)) => {
            init_logging(config.log_level);
            match rpn_repl::run(config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("calculator terminated abnormally: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
