//! Scenario records read from JSON or YAML.
//!
//! Every field is optional so that a record can be merged with command-line
//! overrides before being checked. `timelines` may be pre-formatted text or a
//! list whose items are `A -> B` lines or step lists, freely mixed:
//!
//! ```yaml
//! company: Nvidia
//! event: Tariffs on foreign imports
//! event_description: It is January 2025...
//! timelines:
//!   - [Tariff announcement, Nvidia stock dips 10%]
//!   - Tariff announcement -> Record profits
//! ```

use crate::error::{PromptError, Result};
use crate::prompt::{PromptRequest, Timeline, format_timelines};
use serde::Deserialize;
use std::path::Path;

/// One entry of a `timelines` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimelineItem {
    /// An `A -> B -> C` line.
    Line(String),
    /// A list of steps.
    Steps(Timeline),
}

impl TimelineItem {
    pub fn to_timeline(&self) -> Timeline {
        match self {
            TimelineItem::Line(line) => Timeline::parse(line),
            TimelineItem::Steps(timeline) => timeline.clone(),
        }
    }
}

/// Candidate timelines in any of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimelinesField {
    /// Already numbered text, substituted as-is.
    Text(String),
    /// One item per timeline.
    Items(Vec<TimelineItem>),
}

impl TimelinesField {
    /// Items from `A -> B` lines, as given on the command line.
    pub fn from_lines(lines: &[String]) -> Self {
        TimelinesField::Items(lines.iter().cloned().map(TimelineItem::Line).collect())
    }

    /// Text substituted into the `timelines` slot.
    pub fn to_text(&self) -> String {
        match self {
            TimelinesField::Text(text) => text.clone(),
            TimelinesField::Items(items) => {
                let timelines: Vec<Timeline> = items.iter().map(TimelineItem::to_timeline).collect();
                format_timelines(&timelines)
            }
        }
    }
}

/// A possibly incomplete scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScenarioRecord {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub timelines: Option<TimelinesField>,
}

impl ScenarioRecord {
    /// Load a record, choosing the parser by file extension.
    ///
    /// `.json` is parsed as JSON; `.yaml` and `.yml` as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read scenario file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(PromptError::UserError(format!(
                "unsupported scenario file '{}': expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PromptError::UserError(format!("failed to parse scenario JSON: {}", e)))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse scenario YAML: {}", e)))
    }

    /// Overlay the fields set in `overrides` onto this record.
    pub fn merge(self, overrides: ScenarioRecord) -> Self {
        Self {
            company: overrides.company.or(self.company),
            event: overrides.event.or(self.event),
            event_description: overrides.event_description.or(self.event_description),
            timelines: overrides.timelines.or(self.timelines),
        }
    }

    /// Convert into a complete request.
    ///
    /// Fails with [`PromptError::MissingField`] for the first absent field,
    /// in slot order. Empty strings are kept; the formatter decides on them.
    pub fn into_request(self) -> Result<PromptRequest> {
        fn require<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| PromptError::MissingField(field.to_string()))
        }

        let company = require(self.company, "company")?;
        let event = require(self.event, "event")?;
        let event_description = require(self.event_description, "event_description")?;
        let timelines = require(self.timelines, "timelines")?.to_text();

        Ok(PromptRequest {
            company,
            event,
            event_description,
            timelines,
        })
    }
}
