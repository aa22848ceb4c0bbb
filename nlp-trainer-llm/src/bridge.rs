//! The chat bridge: renders a prompt, asks the generator, and never fails.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{error, warn};

use crate::client::TextGenerator;
use crate::prompts;

pub const UNAVAILABLE: &str = "Sorry, Gemini API is not available. Please check your API key.";

/// The three kinds of chat message the trainer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatKind {
    General,
    CodeExplanation,
    LibraryComparison,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::General => "general",
            ChatKind::CodeExplanation => "code_explanation",
            ChatKind::LibraryComparison => "library_comparison",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            ChatKind::General => "Sorry, I couldn't generate a response due to an error",
            ChatKind::CodeExplanation => "Sorry, I couldn't explain the code due to an error",
            ChatKind::LibraryComparison => "Sorry, I couldn't compare the libraries due to an error",
        }
    }
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(ChatKind::General),
            "code_explanation" => Ok(ChatKind::CodeExplanation),
            "library_comparison" => Ok(ChatKind::LibraryComparison),
            other => Err(format!("Invalid message type: {other}")),
        }
    }
}

/// A fully specified chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPrompt {
    General {
        question: String,
    },
    CodeExplanation {
        code: String,
    },
    LibraryComparison {
        code: String,
        source_library: String,
        target_library: String,
        include_performance: bool,
    },
}

impl ChatPrompt {
    pub fn kind(&self) -> ChatKind {
        match self {
            ChatPrompt::General { .. } => ChatKind::General,
            ChatPrompt::CodeExplanation { .. } => ChatKind::CodeExplanation,
            ChatPrompt::LibraryComparison { .. } => ChatKind::LibraryComparison,
        }
    }

    pub fn render(&self) -> String {
        match self {
            ChatPrompt::General { question } => prompts::general(question),
            ChatPrompt::CodeExplanation { code } => prompts::code_explanation(code),
            ChatPrompt::LibraryComparison {
                code,
                source_library,
                target_library,
                include_performance,
            } => prompts::library_comparison(
                code,
                source_library,
                target_library,
                *include_performance,
            ),
        }
    }
}

/// What the bridge hands back. `degraded` is set when `text` is one of the
/// apology strings rather than model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub degraded: bool,
}

#[derive(Clone)]
pub struct ChatBridge {
    generator: Arc<dyn TextGenerator>,
}

impl fmt::Debug for ChatBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatBridge")
            .field("available", &self.is_available())
            .finish()
    }
}

impl ChatBridge {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        if !generator.is_configured() {
            warn!("GEMINI_API_KEY not found in environment variables. Gemini features will not work.");
        }
        Self { generator }
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_configured()
    }

    pub async fn respond(&self, prompt: &ChatPrompt) -> ChatReply {
        let kind = prompt.kind();
        if !self.is_available() {
            warn!(kind = %kind, "Chat request while Gemini is not configured");
            return ChatReply {
                text: UNAVAILABLE.to_string(),
                degraded: true,
            };
        }

        match self.generator.generate(&prompt.render()).await {
            Ok(text) => ChatReply {
                text,
                degraded: false,
            },
            Err(err) => {
                error!(kind = %kind, error = %err, "Gemini request failed");
                ChatReply {
                    text: format!("{}: {}", kind.failure_prefix(), err),
                    degraded: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LlmError, LlmResult};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        prompts: Mutex<Vec<String>>,
        fail: bool,
        configured: bool,
    }

    #[async_trait]
    impl TextGenerator for Recording {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate(&self, prompt: &str) -> LlmResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok("generated".to_string())
            }
        }
    }

    fn bridge(generator: Recording) -> (ChatBridge, Arc<Recording>) {
        let generator = Arc::new(generator);
        (ChatBridge::new(generator.clone()), generator)
    }

    #[tokio::test]
    async fn passes_rendered_prompt_through() {
        let (bridge, generator) = bridge(Recording {
            configured: true,
            ..Default::default()
        });
        let reply = bridge
            .respond(&ChatPrompt::General {
                question: "What is NER?".into(),
            })
            .await;
        assert_eq!(reply.text, "generated");
        assert!(!reply.degraded);
        let seen = generator.prompts.lock().unwrap();
        assert_eq!(seen.as_slice(), [prompts::general("What is NER?")]);
    }

    #[tokio::test]
    async fn unconfigured_generator_is_never_called() {
        let (bridge, generator) = bridge(Recording::default());
        let reply = bridge
            .respond(&ChatPrompt::CodeExplanation {
                code: "print(1)".into(),
            })
            .await;
        assert_eq!(reply.text, UNAVAILABLE);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[rstest]
    #[case(ChatPrompt::General { question: "q".into() },
           "Sorry, I couldn't generate a response due to an error: API error: 500 - boom")]
    #[case(ChatPrompt::CodeExplanation { code: "c".into() },
           "Sorry, I couldn't explain the code due to an error: API error: 500 - boom")]
    #[case(ChatPrompt::LibraryComparison {
               code: "c".into(),
               source_library: "nltk".into(),
               target_library: "spacy".into(),
               include_performance: true,
           },
           "Sorry, I couldn't compare the libraries due to an error: API error: 500 - boom")]
    #[tokio::test]
    async fn failures_become_apologies(#[case] prompt: ChatPrompt, #[case] expected: &str) {
        let (bridge, _) = bridge(Recording {
            configured: true,
            fail: true,
            ..Default::default()
        });
        let reply = bridge.respond(&prompt).await;
        assert_eq!(reply.text, expected);
        assert!(reply.degraded);
    }

    #[rstest]
    #[case("general", ChatKind::General)]
    #[case("code_explanation", ChatKind::CodeExplanation)]
    #[case("library_comparison", ChatKind::LibraryComparison)]
    fn kinds_parse_from_wire_names(#[case] name: &str, #[case] kind: ChatKind) {
        assert_eq!(name.parse::<ChatKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), name);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("translation".parse::<ChatKind>().is_err());
    }
}
