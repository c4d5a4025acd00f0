//! Error types for convergent-prompt.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for prompt construction.
#[derive(Error, Debug)]
pub enum PromptError {
    /// A required slot had no value supplied.
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// The template itself is malformed or does not reference a required slot.
    #[error("invalid template: {0}")]
    Template(#[from] TemplateError),

    /// A supplied value was refused (e.g. it contains a reserved marker).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Bad arguments, unreadable files, or unparsable config/scenario input.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::MissingField(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
