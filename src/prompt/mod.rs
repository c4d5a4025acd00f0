//! Prompt construction for convergent-thinking timeline selection.
//!
//! This module provides:
//!
//! - **Template**: slot substitution engine (`{slot}`, `{{`/`}}` escapes)
//! - **Convergent**: the built-in answering template and its required slots
//! - **Request**: the four values a prompt is built from
//! - **Formatter**: validation and substitution of a request into a template
//! - **Timeline**: rendering and counting of numbered candidate timelines
//!
//! # Example
//!
//! ```
//! use convergent_prompt::prompt::format_prompt;
//!
//! let prompt = format_prompt(
//!     "Nvidia",
//!     "Tariffs on foreign imports",
//!     "It is January 2025...",
//!     "(1) A → B\n(2) C → D",
//! )
//! .unwrap();
//! assert!(prompt.contains("Company: Nvidia\n"));
//! ```

mod convergent;
mod formatter;
mod request;
mod template;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use convergent::{CONVERGENT_ANSWERING_TEMPLATE, REQUIRED_SLOTS};
pub use formatter::{PromptFormatter, RESERVED_MARKERS, format_prompt, reserved_markers_in};
pub use request::PromptRequest;
pub use template::{Template, TemplateError, render_template, vars};
pub use timeline::{Timeline, count_entries, format_timelines};
