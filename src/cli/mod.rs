//! CLI argument parsing for convergent-prompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build convergent-thinking prompts that ask a model to pick the most
/// coherent of several candidate timelines for a company event.
#[derive(Parser, Debug)]
#[command(name = "convergent-prompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./convergent.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a prompt for one scenario.
    ///
    /// Values come from a scenario file, from flags, or both; flags win.
    Render(RenderArgs),

    /// Print the raw template, placeholders included.
    Template,

    /// Print an example of the JSON verdict the prompt asks for.
    Schema,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug, Default)]
pub struct RenderArgs {
    /// Scenario file (.json, .yaml or .yml).
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Company the scenario concerns.
    #[arg(long)]
    pub company: Option<String>,

    /// Short event title.
    #[arg(long)]
    pub event: Option<String>,

    /// Narrative description of the event.
    #[arg(long)]
    pub event_description: Option<String>,

    /// Pre-formatted, numbered timelines text.
    #[arg(long, conflicts_with = "timeline")]
    pub timelines: Option<String>,

    /// One timeline as "step -> step -> step"; repeat for each candidate.
    #[arg(long)]
    pub timeline: Vec<String>,

    /// Treat empty values as missing.
    #[arg(long)]
    pub reject_empty: bool,

    /// Substitute empty values literally, overriding `reject_empty_fields`.
    #[arg(long, conflicts_with = "reject_empty")]
    pub allow_empty: bool,

    /// Reserved-marker handling: allow, warn, or reject.
    #[arg(long)]
    pub marker_policy: Option<String>,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
