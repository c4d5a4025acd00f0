//! Command implementations for convergent-prompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod render;

use crate::cli::{Cli, Command};
use convergent_prompt::config::Config;
use convergent_prompt::error::{PromptError, Result};
use convergent_prompt::prompt::CONVERGENT_ANSWERING_TEMPLATE;
use convergent_prompt::verdict::Verdict;
use std::io::{self, Write};

/// Dispatch a command to its implementation.
///
/// Resolves the config once, then routes to the handler. Output goes to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptError::UserError(format!("failed to read current directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Render(args) => render::cmd_render(&args, &config, &mut out),
        Command::Template => cmd_template(&config, &mut out),
        Command::Schema => cmd_schema(&mut out),
    }
}

/// Print the active template: the configured file, or the built-in one.
fn cmd_template(config: &Config, out: &mut dyn Write) -> Result<()> {
    let text = config
        .load_template()?
        .unwrap_or_else(|| CONVERGENT_ANSWERING_TEMPLATE.to_string());
    write_out(out, &text)
}

/// Print the worked example's verdict as a schema sample.
fn cmd_schema(out: &mut dyn Write) -> Result<()> {
    let json = Verdict::example().to_json_pretty()?;
    write_out(out, &format!("{}\n", json))
}

pub(crate) fn write_out(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| PromptError::UserError(format!("failed to write output: {}", e)))
}
