//! HTTP client for the Gemini `generateContent` REST endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LlmError, LlmResult};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether the generator has the credentials it needs. A generator that
    /// reports `false` is never called.
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, with all of its parts concatenated.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|part| part.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini client over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> LlmResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("nlp-trainer/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Endpoint for the configured model. Accepts both `gemini-1.5-flash`
    /// and the fully qualified `models/gemini-1.5-flash`.
    pub fn url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let model = self.config.model.trim_start_matches("models/");
        format!("{}/models/{}:generateContent", base, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        if !self.is_configured() {
            return Err(LlmError::NotConfigured);
        }

        let url = self.url();
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        debug!(url = %url, prompt_chars = prompt.len(), "Calling Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::from_response(status.as_u16(), &text));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        parsed.into_text().ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_strips_slashes_and_model_prefix() {
        let client = GeminiClient::new(
            GeminiConfig::new("key")
                .with_base_url("http://localhost:9000/v1beta/")
                .with_model("models/gemini-1.5-pro"),
        )
        .unwrap();
        assert_eq!(
            client.url(),
            "http://localhost:9000/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn blank_key_is_not_configured() {
        let client = GeminiClient::new(GeminiConfig::new("  ")).unwrap();
        assert!(!client.is_configured());
        assert!(GeminiClient::new(GeminiConfig::new("abc")).unwrap().is_configured());
    }

    #[test]
    fn request_body_matches_the_wire_format() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello"},{"text":", world"}],"role":"model"},"finishReason":"STOP"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let raw = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text(), None);
    }
}
