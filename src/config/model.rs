//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "convergent.yaml";

/// Configuration for prompt construction.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alternative template file. Must reference all four slots.
    /// Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// Treat empty or whitespace-only values as missing.
    #[serde(default)]
    pub reject_empty_fields: bool,

    /// Handling of values that contain the template's section markers.
    #[serde(default)]
    pub marker_policy: MarkerPolicy,

    /// Fewer numbered timelines than this triggers a warning.
    #[serde(default = "default_min_timelines")]
    pub min_timelines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: None,
            reject_empty_fields: false,
            marker_policy: MarkerPolicy::default(),
            min_timelines: default_min_timelines(),
        }
    }
}
