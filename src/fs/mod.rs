//! Filesystem utilities for convergent-prompt.
//!
//! Rendered prompts are written atomically so a consumer watching the output
//! path never reads a half-written prompt.

pub mod atomic;

pub use atomic::atomic_write_file;
