use serde::Serialize;

use super::{OrderedMap, Task};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenizationResult {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl TokenizationResult {
    pub fn new(words: Vec<String>, sentences: Vec<String>) -> Self {
        Self {
            word_count: words.len(),
            sentence_count: sentences.len(),
            words,
            sentences,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopwordResult {
    pub original_words: Vec<String>,
    pub filtered_words: Vec<String>,
    pub removed_words: Vec<String>,
    pub original_count: usize,
    pub filtered_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LemmatizationResult {
    pub original_words: Vec<String>,
    pub lemmatized_words: Vec<String>,
    /// Surface form to lemma, only for words the lemmatizer changed.
    pub lemma_dict: OrderedMap<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PosTaggingResult {
    pub pos_tags: Vec<(String, String)>,
    pub pos_groups: OrderedMap<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NerResult {
    pub entities: Vec<Entity>,
    pub entity_groups: OrderedMap<Vec<String>>,
}

/// VADER-style polarity scores. `neg`, `neu` and `pos` are proportions
/// that sum to roughly one; `compound` is the normalized overall valence
/// in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    pub fn from_compound(compound: f64) -> Self {
        if compound >= Self::POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= Self::NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub scores: SentimentScores,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummarizationResult {
    pub summary: String,
    pub summary_sentences: Vec<String>,
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMethod {
    Tfidf,
    Frequency,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeywordScore {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeywordResult {
    /// Term to score, in rank order.
    pub keywords: OrderedMap<f64>,
    pub keyword_list: Vec<KeywordScore>,
    pub method: KeywordMethod,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarityResult {
    pub similarity_score: f64,
    pub common_terms: Vec<String>,
    pub text1_unique: Vec<String>,
    pub text2_unique: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageProbability {
    pub lang: String,
    pub prob: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageResult {
    pub language_code: String,
    pub language_name: String,
    pub confidence: f64,
    pub probabilities: Vec<LanguageProbability>,
    pub sample_tokens: Vec<String>,
    pub text: String,
}

/// The result of one task. Serializes as the bare per-task mapping.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TaskResult {
    Tokenization(TokenizationResult),
    StopwordRemoval(StopwordResult),
    Lemmatization(LemmatizationResult),
    PosTagging(PosTaggingResult),
    Ner(NerResult),
    SentimentAnalysis(SentimentResult),
    TextSummarization(SummarizationResult),
    KeywordExtraction(KeywordResult),
    TextSimilarity(SimilarityResult),
    LanguageDetection(LanguageResult),
}

impl TaskResult {
    pub fn task(&self) -> Task {
        match self {
            TaskResult::Tokenization(_) => Task::Tokenization,
            TaskResult::StopwordRemoval(_) => Task::StopwordRemoval,
            TaskResult::Lemmatization(_) => Task::Lemmatization,
            TaskResult::PosTagging(_) => Task::PosTagging,
            TaskResult::Ner(_) => Task::Ner,
            TaskResult::SentimentAnalysis(_) => Task::SentimentAnalysis,
            TaskResult::TextSummarization(_) => Task::TextSummarization,
            TaskResult::KeywordExtraction(_) => Task::KeywordExtraction,
            TaskResult::TextSimilarity(_) => Task::TextSimilarity,
            TaskResult::LanguageDetection(_) => Task::LanguageDetection,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilaritySummary {
    pub similarity_score: f64,
    pub text1_unique_count: usize,
    pub text2_unique_count: usize,
    pub common_terms_count: usize,
}

/// Chart-ready data returned next to some results.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Visualization {
    Series(Vec<ChartPoint>),
    Similarity(SimilaritySummary),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskOutput {
    pub result: TaskResult,
    pub visualization: Option<Visualization>,
}

impl TaskOutput {
    pub fn plain(result: TaskResult) -> Self {
        Self {
            result,
            visualization: None,
        }
    }

    pub fn with_visualization(result: TaskResult, visualization: Visualization) -> Self {
        Self {
            result,
            visualization: Some(visualization),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentiment_label_thresholds_are_inclusive() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.0499), SentimentLabel::Neutral);
    }

    #[test]
    fn task_result_serializes_without_variant_tag() {
        let result = TaskResult::Tokenization(TokenizationResult::new(
            vec!["hello".into(), "world".into()],
            vec!["hello world".into()],
        ));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "words": ["hello", "world"],
                "sentences": ["hello world"],
                "word_count": 2,
                "sentence_count": 1
            })
        );
    }

    #[test]
    fn pos_tags_serialize_as_pairs() {
        let result = PosTaggingResult {
            pos_tags: vec![("Dogs".into(), "NNS".into())],
            pos_groups: OrderedMap::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["pos_tags"], json!([["Dogs", "NNS"]]));
    }

    #[test]
    fn entity_label_serializes_as_type() {
        let entity = Entity {
            text: "Paris".into(),
            label: "GPE".into(),
        };
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({"text": "Paris", "type": "GPE"})
        );
    }

    #[test]
    fn visualization_variants_serialize_flat() {
        let series = Visualization::Series(vec![ChartPoint::new("Positive", 0.5)]);
        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!([{"name": "Positive", "value": 0.5}])
        );

        let summary = Visualization::Similarity(SimilaritySummary {
            similarity_score: 0.25,
            text1_unique_count: 3,
            text2_unique_count: 4,
            common_terms_count: 2,
        });
        assert_eq!(serde_json::to_value(&summary).unwrap()["common_terms_count"], 2);
    }
}
