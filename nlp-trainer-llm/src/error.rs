//! Errors raised while talking to the hosted model.
//!
//! None of these cross the [`ChatBridge`](crate::ChatBridge) boundary; the
//! bridge renders them into a reply string instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was supplied
    #[error("Gemini API key is not configured")]
    NotConfigured,

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The API answered but produced no text
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LlmError {
    /// Build an API error from a raw error body, preferring the message the
    /// API put in its `error` envelope.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: Detail,
        }

        #[derive(serde::Deserialize)]
        struct Detail {
            message: String,
        }

        let message = serde_json::from_str::<Envelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        LlmError::Api { status, message }
    }
}

pub type LlmResult<T> = Result<T, LlmError>;
