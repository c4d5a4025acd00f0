//! Shape of the model's reply inside the `<answer>` section.
//!
//! Extracting and validating replies belongs to whoever consumes them; this
//! type only pins the schema the prompt asks for.

use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};

/// The JSON object the prompt asks the model to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Verdict {
    /// Explanation for the choice.
    pub reason: String,
    /// 1-based index of the chosen timeline.
    pub final_answer: u32,
}

impl Verdict {
    /// The verdict given in the template's worked example.
    pub fn example() -> Self {
        Self {
            reason: "Timeline (4) satisfies entailment, factor alignment, and temporal \
                     coherence best, reflecting realistic operational and market responses \
                     to tariffs on foreign imports."
                .to_string(),
            final_answer: 4,
        }
    }

    /// Pretty-printed JSON with two-space indentation, no trailing comma.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize verdict: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::CONVERGENT_ANSWERING_TEMPLATE;

    #[test]
    fn example_matches_worked_example() {
        let json = Verdict::example().to_json_pretty().unwrap();
        let in_template = json.replace('{', "{{").replace('}', "}}");
        assert!(
            CONVERGENT_ANSWERING_TEMPLATE.contains(&in_template),
            "worked example answer differs:\n{}",
            json
        );
    }

    #[test]
    fn key_order_is_reason_then_final_answer() {
        let json = Verdict::example().to_json_pretty().unwrap();
        let reason = json.find("\"reason\"").unwrap();
        let answer = json.find("\"final_answer\"").unwrap();
        assert!(reason < answer);
        assert!(!json.contains(",\n}"));
    }

    #[test]
    fn deserializes_compliant_reply() {
        let verdict: Verdict =
            serde_json::from_str(r#"{"reason": "clear causal links", "final_answer": 2}"#).unwrap();
        assert_eq!(verdict.final_answer, 2);
        assert_eq!(verdict.reason, "clear causal links");
    }

    #[test]
    fn rejects_extra_keys_and_non_integer_answer() {
        assert!(
            serde_json::from_str::<Verdict>(r#"{"reason": "x", "final_answer": 1, "extra": 0}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<Verdict>(r#"{"reason": "x", "final_answer": "1"}"#).is_err());
        assert!(serde_json::from_str::<Verdict>(r#"{"reason": "x", "final_answer": -1}"#).is_err());
    }
}
