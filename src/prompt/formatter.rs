//! Validation and substitution of prompt values into a template.

use super::convergent::{CONVERGENT_ANSWERING_TEMPLATE, REQUIRED_SLOTS};
use super::request::PromptRequest;
use super::template::{Template, TemplateError};
use crate::config::{Config, MarkerPolicy};
use crate::error::{PromptError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Markers the template uses to delimit sections of the prompt and reply.
pub const RESERVED_MARKERS: [&str; 6] = [
    "<thinking>",
    "</thinking>",
    "<answer>",
    "</answer>",
    "Start Example",
    "End Example",
];

static BUILTIN_TEMPLATE: LazyLock<Template> = LazyLock::new(|| {
    Template::parse(CONVERGENT_ANSWERING_TEMPLATE).expect("Invalid built-in template")
});

static DEFAULT_FORMATTER: LazyLock<PromptFormatter> = LazyLock::new(PromptFormatter::default);

/// Reserved markers that occur in `value`, in [`RESERVED_MARKERS`] order.
pub fn reserved_markers_in(value: &str) -> Vec<&'static str> {
    RESERVED_MARKERS
        .iter()
        .copied()
        .filter(|marker| value.contains(marker))
        .collect()
}

/// Build the convergent answering prompt with default settings.
///
/// Values are substituted literally; an empty string yields an empty section.
pub fn format_prompt(
    company: &str,
    event: &str,
    event_description: &str,
    timelines: &str,
) -> Result<String> {
    DEFAULT_FORMATTER.format(company, event, event_description, timelines)
}

/// Turns prompt values into a complete prompt string.
///
/// Holds only immutable data, so one formatter can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct PromptFormatter {
    template: Template,
    reject_empty_fields: bool,
    marker_policy: MarkerPolicy,
}

impl Default for PromptFormatter {
    fn default() -> Self {
        Self {
            template: BUILTIN_TEMPLATE.clone(),
            reject_empty_fields: false,
            marker_policy: MarkerPolicy::default(),
        }
    }
}

impl PromptFormatter {
    /// Formatter over the built-in convergent answering template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter over an alternative template.
    ///
    /// The template must parse and reference every required slot.
    pub fn with_template(text: &str) -> Result<Self> {
        let template = Template::parse(text)?;
        template.require_slots(&REQUIRED_SLOTS)?;
        Ok(Self {
            template,
            ..Self::default()
        })
    }

    /// Formatter configured from `config`, loading its template file if set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let formatter = match config.load_template()? {
            Some(text) => Self::with_template(&text)?,
            None => Self::new(),
        };

        Ok(formatter
            .reject_empty_fields(config.reject_empty_fields)
            .marker_policy(config.marker_policy))
    }

    /// Treat empty or whitespace-only values as missing.
    pub fn reject_empty_fields(mut self, reject: bool) -> Self {
        self.reject_empty_fields = reject;
        self
    }

    pub fn marker_policy(mut self, policy: MarkerPolicy) -> Self {
        self.marker_policy = policy;
        self
    }

    /// Substitute the four values into the template.
    pub fn format(
        &self,
        company: &str,
        event: &str,
        event_description: &str,
        timelines: &str,
    ) -> Result<String> {
        self.format_request(&PromptRequest::new(
            company,
            event,
            event_description,
            timelines,
        ))
    }

    pub fn format_request(&self, request: &PromptRequest) -> Result<String> {
        self.format_variables(&request.to_variables())
    }

    /// Substitute values keyed by slot name.
    ///
    /// Fails with [`PromptError::MissingField`] naming the first slot, in
    /// template order, that has no usable value.
    pub fn format_variables(&self, values: &HashMap<String, String>) -> Result<String> {
        for slot in self.template.placeholders() {
            let value = values
                .get(slot)
                .ok_or_else(|| PromptError::MissingField(slot.to_string()))?;

            if self.reject_empty_fields && value.trim().is_empty() {
                return Err(PromptError::MissingField(slot.to_string()));
            }

            self.check_markers(slot, value)?;
        }

        let prompt = self.template.render(values).map_err(|e| match e {
            TemplateError::MissingValue { name, .. } => PromptError::MissingField(name),
            other => PromptError::Template(other),
        })?;

        tracing::debug!(bytes = prompt.len(), "formatted prompt");
        Ok(prompt)
    }

    fn check_markers(&self, slot: &str, value: &str) -> Result<()> {
        if self.marker_policy == MarkerPolicy::Allow {
            return Ok(());
        }

        let found = reserved_markers_in(value);
        if found.is_empty() {
            return Ok(());
        }

        match self.marker_policy {
            MarkerPolicy::Reject => Err(PromptError::ValidationError(format!(
                "field '{}' contains reserved marker(s): {}",
                slot,
                found.join(", ")
            ))),
            _ => {
                tracing::warn!(
                    field = slot,
                    markers = %found.join(", "),
                    "value contains reserved template markers; substituting as-is"
                );
                Ok(())
            }
        }
    }
}
