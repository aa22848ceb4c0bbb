//! Request and response bodies of the HTTP API.

use nlp_trainer_core::{ExplanationEntry, Task, TaskOutput};
use nlp_trainer_llm::{ChatKind, ChatPrompt};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

// ===== Task processing =====

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub comparison_text: Option<String>,
}

impl ProcessRequest {
    /// The input text; a missing or null field reads as empty.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// The comparison text, treating an empty string as absent.
    pub fn comparison(&self) -> Option<&str> {
        self.comparison_text.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(flatten)]
    pub output: TaskOutput,
}

impl From<TaskOutput> for ProcessResponse {
    fn from(output: TaskOutput) -> Self {
        Self {
            success: true,
            output,
        }
    }
}

// ===== Catalog =====

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleTextQuery {
    pub task: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleTextResponse {
    pub success: bool,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_text: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationResponse {
    pub success: bool,
    pub explanation: &'static ExplanationEntry,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeSampleQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeSampleResponse {
    pub success: bool,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub name: Task,
    pub title: &'static str,
    pub needs_comparison: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    pub tasks: Vec<TaskSummary>,
}

// ===== Chat =====

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub source_library: Option<String>,
    #[serde(default)]
    pub target_library: Option<String>,
    #[serde(default)]
    pub include_performance: Option<bool>,
}

impl ChatRequest {
    /// Turn the loose wire form into a prompt, applying defaults and
    /// rejecting empty required fields.
    pub fn into_prompt(self) -> ApiResult<ChatPrompt> {
        let kind = match self.kind.as_deref() {
            None => ChatKind::General,
            Some(name) => name
                .parse()
                .map_err(|_| ApiError::BadRequest("Invalid message type".to_string()))?,
        };

        let prompt = match kind {
            ChatKind::General => ChatPrompt::General {
                question: required(self.message, "Message cannot be empty")?,
            },
            ChatKind::CodeExplanation => ChatPrompt::CodeExplanation {
                code: required(self.code, "Code cannot be empty")?,
            },
            ChatKind::LibraryComparison => ChatPrompt::LibraryComparison {
                code: required(self.code, "Code cannot be empty")?,
                source_library: self.source_library.unwrap_or_else(|| "nltk".to_string()),
                target_library: self.target_library.unwrap_or_else(|| "spacy".to_string()),
                include_performance: self.include_performance.unwrap_or(true),
            },
        };
        Ok(prompt)
    }
}

fn required(value: Option<String>, message: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn chat(body: serde_json::Value) -> ApiResult<ChatPrompt> {
        serde_json::from_value::<ChatRequest>(body).unwrap().into_prompt()
    }

    #[test]
    fn chat_defaults_to_general() {
        let prompt = chat(json!({"message": "What is NLP?"})).unwrap();
        assert_eq!(
            prompt,
            ChatPrompt::General {
                question: "What is NLP?".to_string()
            }
        );
    }

    #[test]
    fn comparison_defaults_are_applied() {
        let prompt = chat(json!({"type": "library_comparison", "code": "nltk.word_tokenize(t)"})).unwrap();
        assert_eq!(
            prompt,
            ChatPrompt::LibraryComparison {
                code: "nltk.word_tokenize(t)".to_string(),
                source_library: "nltk".to_string(),
                target_library: "spacy".to_string(),
                include_performance: true,
            }
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = chat(json!({"type": "general", "message": ""})).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Message cannot be empty");

        let err = chat(json!({"type": "code_explanation"})).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Code cannot be empty");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = chat(json!({"type": "poetry", "message": "hi"})).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Invalid message type");
    }

    #[test]
    fn empty_comparison_counts_as_missing() {
        let request: ProcessRequest =
            serde_json::from_value(json!({"task": "text_similarity", "text": "abc", "comparison_text": ""})).unwrap();
        assert_eq!(request.comparison(), None);
    }

    #[test]
    fn null_text_reads_as_empty() {
        let request: ProcessRequest =
            serde_json::from_value(json!({"task": "tokenization", "text": null})).unwrap();
        assert_eq!(request.text(), "");
    }
}
