//! Config loading, validation, and template lookup.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PromptError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `convergent.yaml` in `dir`
    /// is used if present, otherwise defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty documents map to defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `min_timelines` must be positive
    /// - `template_path`, when set, must not be empty
    pub fn validate(&self) -> Result<()> {
        if self.min_timelines == 0 {
            return Err(PromptError::UserError(
                "config validation failed: min_timelines must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.template_path
            && path.as_os_str().is_empty()
        {
            return Err(PromptError::UserError(
                "config validation failed: template_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Read the alternative template text, if one is configured.
    pub fn load_template(&self) -> Result<Option<String>> {
        let Some(path) = &self.template_path else {
            return Ok(None);
        };

        std::fs::read_to_string(path).map(Some).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
