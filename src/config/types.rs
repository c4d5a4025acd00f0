//! Supporting types and serde defaults for the config model.

use serde::{Deserialize, Serialize};

/// What to do when a supplied value contains one of the template's own
/// section markers (`<answer>`, `Start Example`, ...).
///
/// Values are never escaped; the policy only decides whether to log or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Substitute silently.
    Allow,
    /// Log a warning, then substitute (default).
    #[default]
    Warn,
    /// Refuse to build the prompt.
    Reject,
}

impl MarkerPolicy {
    /// Parse a marker policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "allow" => Some(Self::Allow),
            "warn" => Some(Self::Warn),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

pub(crate) fn default_min_timelines() -> usize {
    2
}
