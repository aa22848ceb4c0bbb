use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the ten NLP operations the trainer exposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Tokenization,
    StopwordRemoval,
    Lemmatization,
    PosTagging,
    Ner,
    SentimentAnalysis,
    TextSummarization,
    KeywordExtraction,
    TextSimilarity,
    LanguageDetection,
}

impl Task {
    pub const ALL: [Task; 10] = [
        Task::Tokenization,
        Task::StopwordRemoval,
        Task::Lemmatization,
        Task::PosTagging,
        Task::Ner,
        Task::SentimentAnalysis,
        Task::TextSummarization,
        Task::KeywordExtraction,
        Task::TextSimilarity,
        Task::LanguageDetection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Tokenization => "tokenization",
            Task::StopwordRemoval => "stopword_removal",
            Task::Lemmatization => "lemmatization",
            Task::PosTagging => "pos_tagging",
            Task::Ner => "ner",
            Task::SentimentAnalysis => "sentiment_analysis",
            Task::TextSummarization => "text_summarization",
            Task::KeywordExtraction => "keyword_extraction",
            Task::TextSimilarity => "text_similarity",
            Task::LanguageDetection => "language_detection",
        }
    }

    /// Whether the task compares the main text against a second text.
    pub fn needs_comparison(&self) -> bool {
        matches!(self, Task::TextSimilarity)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| CoreError::UnsupportedTask(s.to_string()))
    }
}

/// The toolkit style an adapter should follow.
///
/// `Nltk` is the classic rule-based pipeline (Treebank tokens, Penn tags,
/// WordNet-style noun lemmas); `Spacy` is the pipeline-object style
/// (special-case tokenizer, Universal POS tags, POS-aware lemmas).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Nltk,
    Spacy,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Nltk, Backend::Spacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Nltk => "nltk",
            Backend::Spacy => "spacy",
        }
    }

    /// Resolve a caller-supplied library name, falling back to `default`
    /// for missing or unrecognized names instead of failing.
    pub fn normalize(name: Option<&str>, default: Backend) -> Backend {
        name.and_then(|n| n.parse().ok()).unwrap_or(default)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nltk" => Ok(Backend::Nltk),
            "spacy" => Ok(Backend::Spacy),
            other => Err(CoreError::UnsupportedBackend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_names_round_trip_through_from_str() {
        for task in Task::ALL {
            assert_eq!(task.as_str().parse::<Task>().unwrap(), task);
        }
    }

    #[test]
    fn unknown_task_is_rejected() {
        let err = "translation".parse::<Task>().unwrap_err();
        assert_eq!(err, CoreError::UnsupportedTask("translation".to_string()));
    }

    #[test]
    fn backend_normalization_falls_back_to_default() {
        assert_eq!(Backend::normalize(Some("spacy"), Backend::Nltk), Backend::Spacy);
        assert_eq!(Backend::normalize(Some("gensim"), Backend::Nltk), Backend::Nltk);
        assert_eq!(Backend::normalize(None, Backend::Spacy), Backend::Spacy);
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&Task::PosTagging).unwrap(),
            "\"pos_tagging\""
        );
        assert_eq!(serde_json::to_string(&Backend::Spacy).unwrap(), "\"spacy\"");
    }
}
