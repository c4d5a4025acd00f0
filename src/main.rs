//! convergent-prompt: render convergent-thinking timeline prompts.
//!
//! This is the main entry point for the CLI. It sets up logging, parses
//! arguments, dispatches to the command handler, and maps errors to exit
//! codes. Logs go to stderr; stdout carries only the requested output.

mod cli;
mod commands;

use cli::Cli;
use convergent_prompt::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "CONVERGENT_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
