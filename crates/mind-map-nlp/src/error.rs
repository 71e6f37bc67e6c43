//! Error types for phrase extraction.

use thiserror::Error;

/// Result type for NLP operations.
pub type NlpResult<T> = Result<T, NlpError>;

/// Errors that can occur while loading a model or parsing text.
#[derive(Debug, Error)]
pub enum NlpError {
    /// The linguistic model could not be loaded.
    #[error("language model `{model}` is unavailable: {reason}")]
    ModelUnavailable { model: String, reason: String },

    /// The model could not process the given input.
    #[error("failed to parse input: {message}")]
    Parse { message: String },
}

impl NlpError {
    /// Create a model-unavailable error.
    pub fn model_unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Remediation hint to show next to the error.
    pub fn hint(&self) -> &'static str {
        match self {
            NlpError::ModelUnavailable { .. } => {
                "use the built-in `en_rules` model, or point the lexicon setting at a readable file of `word TAG` lines"
            }
            NlpError::Parse { .. } => "make sure the input is UTF-8 encoded text",
        }
    }
}
