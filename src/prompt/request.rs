//! The values a convergent prompt is built from.

use super::convergent::REQUIRED_SLOTS;
use std::collections::HashMap;

/// One scenario instance to be turned into a prompt.
///
/// `timelines` is pre-formatted text: one numbered timeline per line, steps
/// joined by arrows, e.g. `(1) A → B\n(2) C → D`. At least two distinct
/// entries are expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Company the scenario concerns.
    pub company: String,
    /// Short event title.
    pub event: String,
    /// Narrative context for the event.
    pub event_description: String,
    /// Numbered candidate timelines.
    pub timelines: String,
}

impl PromptRequest {
    pub fn new(
        company: impl Into<String>,
        event: impl Into<String>,
        event_description: impl Into<String>,
        timelines: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            event: event.into(),
            event_description: event_description.into(),
            timelines: timelines.into(),
        }
    }

    /// Look up a field by its slot name.
    pub fn get(&self, slot: &str) -> Option<&str> {
        match slot {
            "company" => Some(&self.company),
            "event" => Some(&self.event),
            "event_description" => Some(&self.event_description),
            "timelines" => Some(&self.timelines),
            _ => None,
        }
    }

    /// Slot values keyed by slot name.
    pub fn to_variables(&self) -> HashMap<String, String> {
        REQUIRED_SLOTS
            .iter()
            .filter_map(|slot| self.get(slot).map(|v| (slot.to_string(), v.to_string())))
            .collect()
    }
}
