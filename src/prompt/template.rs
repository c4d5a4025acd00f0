//! Template engine for slot substitution.
//!
//! Templates are parsed once into literal and slot segments, then rendered
//! against a map of values.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value supplied for slot `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A lone `}` outside a slot is an error. Whitespace around a slot name is
//! trimmed.
//!
//! # Error Handling
//!
//! Rendering never substitutes an empty default: a slot with no supplied
//! value is an error.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A slot was referenced but no value was supplied.
    #[error("no value for slot '{name}' at position {position}")]
    MissingValue {
        /// The name of the slot.
        name: String,
        /// Byte offset of the slot's opening brace.
        position: usize,
    },
    /// A `}` outside a slot was not doubled.
    #[error("single '}}' at position {position}")]
    UnmatchedClosingBrace {
        /// Byte offset of the lone `}`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position}")]
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// An empty slot name was found (e.g., `{}`).
    #[error("empty slot name '{{}}' at position {position}")]
    EmptySlotName {
        /// Byte offset of the empty slot.
        position: usize,
    },
    /// A slot the caller requires is never referenced by the template.
    #[error("template does not reference required slot '{0}'")]
    SlotNotReferenced(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot { name: String, position: usize },
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text into segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use convergent_prompt::prompt::Template;
    ///
    /// let template = Template::parse("Company: {company}").unwrap();
    /// let mut values = HashMap::new();
    /// values.insert("company".to_string(), "Nvidia".to_string());
    /// assert_eq!(template.render(&values).unwrap(), "Company: Nvidia");
    /// ```
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::with_capacity(text.len());
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    let name = name.trim();
                    if name.is_empty() {
                        return Err(TemplateError::EmptySlotName { position: pos });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot {
                        name: name.to_string(),
                        position: pos,
                    });
                }
                '}' => {
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedClosingBrace { position: pos });
                    }
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Slot names in order of first occurrence.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot { name, .. } = segment
                && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }

    /// Fail unless every name in `required` is referenced at least once.
    pub fn require_slots(&self, required: &[&str]) -> Result<(), TemplateError> {
        let present = self.placeholders();
        match required.iter().copied().find(|name| !present.contains(name)) {
            Some(name) => Err(TemplateError::SlotNotReferenced(name.to_string())),
            None => Ok(()),
        }
    }

    /// Render the template, substituting each slot literally.
    ///
    /// Values are inserted as-is; braces inside values are not interpreted.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Slot { name, position } => match values.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::MissingValue {
                            name: name.clone(),
                            position: *position,
                        });
                    }
                },
            }
        }
        Ok(result)
    }
}

/// Parse and render in one step.
pub fn render_template(
    template: &str,
    values: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    Template::parse(template)?.render(values)
}

/// Helper to create a values map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
