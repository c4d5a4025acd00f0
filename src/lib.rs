//! Prompt construction for convergent-thinking evaluation.
//!
//! Given a company, an event, its description and several candidate causal
//! timelines, [`prompt::format_prompt`] builds the prompt asking a model to
//! pick the timeline with the strongest entailment, factor alignment and
//! temporal coherence, answering with a [`verdict::Verdict`] JSON object.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
pub mod scenario;
pub mod verdict;
