//! Configuration for convergent-prompt.
//!
//! This module defines the Config struct that represents `convergent.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
pub use types::MarkerPolicy;
