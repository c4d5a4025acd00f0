//! Candidate timelines: rendering and counting.
//!
//! A timeline is rendered as a numbered line of arrow-joined steps:
//!
//! ```text
//! (1) Tariff announcement → Nvidia stock dips 10% → Margin outlook revised
//! (2) Tariff announcement → Record profits → Stock surges 15%
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Separator placed between steps when rendering.
pub const STEP_SEPARATOR: &str = " → ";

/// Matches the `(n)` numbering at the start of a line.
static ENTRY_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\((\d+)\)").expect("Invalid entry number regex")
});

/// Matches `(n)` numbering at the very start of a single timeline.
static LEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s*\(\d+\)").expect("Invalid leading number regex"));

/// One candidate timeline: an ordered sequence of causal steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    pub steps: Vec<String>,
}

impl Timeline {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a single line such as `A -> B -> C` or `(2) A → B`.
    ///
    /// Accepts `→` and `->` as separators. Only a `(n)` at the very start is
    /// dropped; line breaks inside a step collapse to single spaces so the
    /// rendered timeline stays on one line. Empty steps are skipped.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let body = match LEADING_NUMBER_REGEX.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        };

        let steps = body
            .split('→')
            .flat_map(|part| part.split("->"))
            .map(|step| step.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|step| !step.is_empty())
            .collect();

        Self { steps }
    }

    /// Steps joined by [`STEP_SEPARATOR`], without numbering.
    pub fn render(&self) -> String {
        self.steps.join(STEP_SEPARATOR)
    }
}

/// Render timelines as the numbered block the prompt expects.
///
/// Entries are numbered from 1 and separated by `\n`; there is no trailing
/// newline.
///
/// ```
/// use convergent_prompt::prompt::{Timeline, format_timelines};
///
/// let text = format_timelines(&[
///     Timeline::new(["A", "B"]),
///     Timeline::new(["C", "D"]),
/// ]);
/// assert_eq!(text, "(1) A → B\n(2) C → D");
/// ```
pub fn format_timelines(timelines: &[Timeline]) -> String {
    timelines
        .iter()
        .enumerate()
        .map(|(i, timeline)| format!("({}) {}", i + 1, timeline.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count distinct numbered entries in pre-formatted timeline text.
///
/// Only lines that start with `(n)` count; a number repeated on two lines is
/// counted once.
pub fn count_entries(text: &str) -> usize {
    ENTRY_NUMBER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .collect::<BTreeSet<_>>()
        .len()
}
