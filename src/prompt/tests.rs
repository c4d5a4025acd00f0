//! Tests for the convergent prompt formatter.

use super::*;
use crate::config::{Config, MarkerPolicy};
use crate::error::PromptError;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

const DESCRIPTION: &str = "It is January 2025...";
const TIMELINES: &str = "(1) A → B\n(2) C → D";

fn nvidia_prompt() -> String {
    format_prompt("Nvidia", "Tariffs on foreign imports", DESCRIPTION, TIMELINES).unwrap()
}

/// Text after the worked example's end marker.
fn question_section(prompt: &str) -> &str {
    let end = prompt.find("End Example").unwrap();
    &prompt[end..]
}

/// Text between the start and end markers of the worked example.
fn example_section(prompt: &str) -> &str {
    let start = prompt.find("Start Example").unwrap();
    let end = prompt.find("End Example").unwrap();
    &prompt[start..end]
}

#[test]
fn test_question_section_layout() {
    let prompt = nvidia_prompt();
    let expected = "=========================== Question =====================================\n\
                    [Scenario]\n\
                    Company: Nvidia\n\
                    Event: Tariffs on foreign imports\n\
                    Event Description: It is January 2025...\n\
                    \n\
                    [Timelines]\n\
                    (1) A → B\n\
                    (2) C → D\n\
                    \n\
                    [Output]\n";
    assert!(prompt.ends_with(expected), "question section:\n{}", question_section(&prompt));
}

#[test]
fn test_each_value_appears_once_in_question() {
    let prompt = format_prompt("Acme Corp", "Rate hike", "Fed raises rates", TIMELINES).unwrap();
    let question = question_section(&prompt);

    for value in ["Acme Corp", "Rate hike", "Fed raises rates", TIMELINES] {
        assert_eq!(question.matches(value).count(), 1, "value {:?}", value);
        assert!(!example_section(&prompt).contains(value));
    }
}

#[test]
fn test_worked_example_is_unchanged() {
    let prompt = nvidia_prompt();
    let template_example = example_section(CONVERGENT_ANSWERING_TEMPLATE);
    // The example's JSON uses escaped braces in the template.
    let rendered_example = template_example.replace("{{", "{").replace("}}", "}");
    assert_eq!(example_section(&prompt), rendered_example);
    assert!(rendered_example.contains("\"final_answer\": 4\n}"));
}

#[test]
fn test_formatting_is_idempotent() {
    assert_eq!(nvidia_prompt(), nvidia_prompt());

    let formatter = PromptFormatter::new();
    let a = formatter.format("x", "y", "z", TIMELINES).unwrap();
    let b = formatter.format("x", "y", "z", TIMELINES).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_directive_and_markers() {
    let prompt = nvidia_prompt();
    let example_start = prompt.find("Start Example").unwrap();
    let instructions = &prompt[..example_start];

    assert!(instructions.contains("<answer>\n{\n  \"reason\": <reason_for_answer>,\n  \"final_answer\": <final_answer_as_number>\n}\n</answer>"));
    assert!(instructions.contains("- Do not leave a trailing comma after the last entry."));
    assert!(instructions.contains("- Give ONLY the JSON data."));

    for marker in ["<thinking>", "</thinking>", "<answer>", "</answer>"] {
        let line = format!("\n{}\n", marker);
        assert_eq!(instructions.matches(&line).count(), 1, "marker {}", marker);
        assert_eq!(example_section(&prompt).matches(marker).count(), 1, "marker {}", marker);
        assert!(!question_section(&prompt).contains(marker));
    }
}

#[test]
fn test_persona_and_criteria_are_present() {
    let prompt = nvidia_prompt();
    assert!(prompt.starts_with("\nYou are a 300 IQ sell-side analysts"));
    assert!(prompt.contains("displays top notch convergent thinking"));
    assert!(prompt.contains("exhibit strong entailment between each occurrence in the timeline"));
    assert!(prompt.contains("have strong factor alignment with the chosen factors"));
    assert!(prompt.contains("have strong temporal coherence between occurrence in the timeline"));
}

#[test]
fn test_missing_field_fails() {
    let formatter = PromptFormatter::new();

    for missing in REQUIRED_SLOTS {
        let mut values = PromptRequest::new("a", "b", "c", TIMELINES).to_variables();
        values.remove(missing);

        match formatter.format_variables(&values) {
            Err(PromptError::MissingField(name)) => assert_eq!(name, missing),
            other => panic!("expected MissingField({}), got {:?}", missing, other),
        }
    }
}

#[test]
fn test_first_missing_field_in_template_order() {
    let values = vars([("event", "b")]);
    let err = PromptFormatter::new().format_variables(&values).unwrap_err();
    assert!(matches!(err, PromptError::MissingField(ref name) if name == "company"));
}

#[test]
fn test_empty_timelines_substituted_literally_by_default() {
    let prompt = format_prompt("Nvidia", "Tariffs", DESCRIPTION, "").unwrap();
    assert!(prompt.ends_with("[Timelines]\n\n\n[Output]\n"));
}

#[test]
fn test_empty_fields_rejected_when_configured() {
    let formatter = PromptFormatter::new().reject_empty_fields(true);

    let err = formatter.format("Nvidia", "Tariffs", DESCRIPTION, "").unwrap_err();
    assert!(matches!(err, PromptError::MissingField(ref name) if name == "timelines"));

    let err = formatter.format("  ", "Tariffs", DESCRIPTION, TIMELINES).unwrap_err();
    assert!(matches!(err, PromptError::MissingField(ref name) if name == "company"));

    assert!(formatter.format("Nvidia", "Tariffs", DESCRIPTION, TIMELINES).is_ok());
}

#[test]
fn test_values_are_not_escaped() {
    let prompt = format_prompt("{event}", "Tariffs {{x}}", DESCRIPTION, TIMELINES).unwrap();
    assert!(prompt.contains("Company: {event}\n"));
    assert!(prompt.contains("Event: Tariffs {{x}}\n"));
}

#[test]
fn test_reserved_markers_in() {
    assert!(reserved_markers_in("(1) A → B").is_empty());
    assert_eq!(
        reserved_markers_in("(1) A → <answer>{}</answer>"),
        vec!["<answer>", "</answer>"]
    );
}

#[test]
fn test_marker_policy_warn_substitutes() {
    let timelines = "(1) A → <answer>\n(2) C → D";
    let prompt = format_prompt("Nvidia", "Tariffs", DESCRIPTION, timelines).unwrap();
    assert!(prompt.contains(timelines));
}

#[test]
fn test_marker_policy_reject_fails() {
    let formatter = PromptFormatter::new().marker_policy(MarkerPolicy::Reject);
    let err = formatter
        .format("Nvidia", "End Example", DESCRIPTION, TIMELINES)
        .unwrap_err();

    match err {
        PromptError::ValidationError(msg) => {
            assert!(msg.contains("'event'"));
            assert!(msg.contains("End Example"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_marker_policy_allow_substitutes() {
    let formatter = PromptFormatter::new().marker_policy(MarkerPolicy::Allow);
    let prompt = formatter
        .format("Nvidia", "Tariffs", DESCRIPTION, "(1) <thinking>")
        .unwrap();
    assert!(prompt.contains("[Timelines]\n(1) <thinking>\n"));
}

#[test]
fn test_custom_template() {
    let formatter =
        PromptFormatter::with_template("{company}|{event}|{event_description}|{timelines}")
            .unwrap();
    let prompt = formatter.format("a", "b", "c", "d").unwrap();
    assert_eq!(prompt, "a|b|c|d");
}

#[test]
fn test_custom_template_must_reference_every_slot() {
    let err = PromptFormatter::with_template("{company} {event} {timelines}").unwrap_err();
    assert!(matches!(
        err,
        PromptError::Template(TemplateError::SlotNotReferenced(ref name)) if name == "event_description"
    ));
}

#[test]
fn test_custom_template_rejects_lone_closing_brace() {
    let err = PromptFormatter::with_template(
        "{company} {event} {event_description} {timelines} }",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PromptError::Template(TemplateError::UnmatchedClosingBrace { .. })
    ));
}

#[test]
fn test_custom_template_extra_slot_requires_value() {
    let formatter = PromptFormatter::with_template(
        "{ticker} {company} {event} {event_description} {timelines}",
    )
    .unwrap();
    let err = formatter.format("a", "b", "c", "d").unwrap_err();
    assert!(matches!(err, PromptError::MissingField(ref name) if name == "ticker"));
}

#[test]
fn test_from_config_applies_settings() {
    let temp_dir = TempDir::new().unwrap();
    let template_file = temp_dir.path().join("custom.txt");
    fs::write(
        &template_file,
        "C={company}\nE={event}\nD={event_description}\nT={timelines}",
    )
    .unwrap();

    let config = Config {
        template_path: Some(template_file),
        reject_empty_fields: true,
        ..Config::default()
    };
    let formatter = PromptFormatter::from_config(&config).unwrap();

    assert_eq!(
        formatter.format("a", "b", "c", "d").unwrap(),
        "C=a\nE=b\nD=c\nT=d"
    );
    assert!(formatter.format("a", "b", "c", "").is_err());
}

#[test]
fn test_formatter_is_shareable_across_threads() {
    let formatter = std::sync::Arc::new(PromptFormatter::new());
    let expected = nvidia_prompt();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let formatter = formatter.clone();
            std::thread::spawn(move || {
                formatter
                    .format("Nvidia", "Tariffs on foreign imports", DESCRIPTION, TIMELINES)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_format_variables_accepts_request_map() {
    let request = PromptRequest::new("Nvidia", "Tariffs on foreign imports", DESCRIPTION, TIMELINES);
    let values: HashMap<String, String> = request.to_variables();
    let formatter = PromptFormatter::new();
    assert_eq!(
        formatter.format_variables(&values).unwrap(),
        formatter.format_request(&request).unwrap()
    );
}
