//! The `render` command: scenario in, prompt out.

use super::write_out;
use crate::cli::RenderArgs;
use convergent_prompt::config::{Config, MarkerPolicy};
use convergent_prompt::error::{PromptError, Result};
use convergent_prompt::fs::atomic_write_file;
use convergent_prompt::prompt::{PromptFormatter, count_entries};
use convergent_prompt::scenario::{ScenarioRecord, TimelinesField};
use std::io::Write;

pub fn cmd_render(args: &RenderArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let config = apply_overrides(args, config)?;
    let formatter = PromptFormatter::from_config(&config)?;

    let base = match &args.scenario {
        Some(path) => ScenarioRecord::load(path)?,
        None => ScenarioRecord::default(),
    };
    let request = base.merge(record_from_flags(args)).into_request()?;

    let entries = count_entries(&request.timelines);
    if entries < config.min_timelines {
        tracing::warn!(
            entries,
            min = config.min_timelines,
            "fewer numbered timelines than expected; the model has little to choose from"
        );
    }

    let prompt = formatter.format_request(&request)?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &prompt)?;
            tracing::info!(path = %path.display(), bytes = prompt.len(), "wrote prompt");
            Ok(())
        }
        None => write_out(out, &prompt),
    }
}

fn apply_overrides(args: &RenderArgs, config: &Config) -> Result<Config> {
    let mut config = config.clone();

    if args.reject_empty {
        config.reject_empty_fields = true;
    }
    if args.allow_empty {
        config.reject_empty_fields = false;
    }

    if let Some(policy) = &args.marker_policy {
        config.marker_policy = MarkerPolicy::from_str(policy).ok_or_else(|| {
            PromptError::UserError(format!(
                "invalid marker policy '{}': expected allow, warn, or reject",
                policy
            ))
        })?;
    }

    Ok(config)
}

fn record_from_flags(args: &RenderArgs) -> ScenarioRecord {
    let timelines = match (&args.timelines, args.timeline.is_empty()) {
        (Some(text), _) => Some(TimelinesField::Text(text.clone())),
        (None, false) => Some(TimelinesField::from_lines(&args.timeline)),
        (None, true) => None,
    };

    ScenarioRecord {
        company: args.company.clone(),
        event: args.event.clone(),
        event_description: args.event_description.clone(),
        timelines,
    }
}
