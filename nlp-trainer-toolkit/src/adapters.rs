//! One adapter per task. Each adapter runs the toolkit primitives for the
//! requested style and reshapes their output into the task's result type.

use std::collections::{BTreeSet, HashMap};

use nlp_trainer_core::domain::{
    Backend, ChartPoint, Entity, KeywordMethod, KeywordResult, KeywordScore, LanguageResult,
    LemmatizationResult, NerResult, OrderedMap, PosTaggingResult, SentimentLabel,
    SentimentResult, SimilarityResult, SimilaritySummary, StopwordResult, SummarizationResult,
    TaskOutput, TaskResult, TokenizationResult, Visualization,
};
use nlp_trainer_core::error::{CoreError, Result};

use crate::doc::Doc;
use crate::language::language_name;
use crate::resources::Toolkit;
use crate::tokenize::{is_alphabetic, is_punctuation, pipeline_tokenize, split_sentences, word_tokenize};
use crate::vectorize::{analyze, cosine_similarity, mean_tfidf, term_frequencies, top_scores, TfIdf};

/// Share of sentences kept by the summarizer.
pub const SUMMARY_RATIO: f64 = 0.3;
/// Texts with at most this many sentences are returned unsummarized.
pub const SHORT_TEXT_SENTENCES: usize = 2;
pub const KEYWORD_LIMIT: usize = 10;
/// Minimum sentence count for TF-IDF keyword scoring.
pub const TFIDF_MIN_SENTENCES: usize = 3;
pub const SAMPLE_TOKENS: usize = 10;

pub fn tokenization(toolkit: &Toolkit, backend: Backend, text: &str) -> TokenizationResult {
    match backend {
        Backend::Nltk => TokenizationResult::new(word_tokenize(text), split_sentences(text)),
        Backend::Spacy => {
            let doc = Doc::parse(toolkit, text);
            TokenizationResult::new(doc.words(), doc.sentence_texts())
        }
    }
}

pub fn stopword_removal(toolkit: &Toolkit, backend: Backend, text: &str) -> StopwordResult {
    let (words, removed_flags): (Vec<String>, Vec<bool>) = match backend {
        Backend::Nltk => {
            let stopwords = toolkit.classic_stopwords();
            word_tokenize(&text.to_lowercase())
                .into_iter()
                .map(|word| {
                    let removed = stopwords.contains_lower(&word) || is_punctuation(&word);
                    (word, removed)
                })
                .unzip()
        }
        Backend::Spacy => {
            let stopwords = toolkit.pipeline_stopwords();
            pipeline_tokenize(text)
                .into_iter()
                .map(|token| {
                    let removed = stopwords.contains_lower(&token.text)
                        || crate::tokenize::is_punct_like(&token.text);
                    (token.text, removed)
                })
                .unzip()
        }
    };

    let mut filtered_words = Vec::new();
    let mut removed_words = Vec::new();
    for (word, removed) in words.iter().zip(removed_flags) {
        if removed {
            removed_words.push(word.clone());
        } else {
            filtered_words.push(word.clone());
        }
    }
    StopwordResult {
        original_count: words.len(),
        filtered_count: filtered_words.len(),
        original_words: words,
        filtered_words,
        removed_words,
    }
}

pub fn lemmatization(toolkit: &Toolkit, backend: Backend, text: &str) -> LemmatizationResult {
    let (original_words, lemmatized_words): (Vec<String>, Vec<String>) = match backend {
        Backend::Nltk => {
            let lemmatizer = toolkit.classic_lemmatizer();
            word_tokenize(text)
                .into_iter()
                .map(|word| {
                    let lemma = lemmatizer.lemmatize(&word);
                    (word, lemma)
                })
                .unzip()
        }
        Backend::Spacy => Doc::parse(toolkit, text)
            .tokens
            .into_iter()
            .map(|t| (t.token.text, t.lemma))
            .unzip(),
    };

    let mut lemma_dict = OrderedMap::new();
    for (word, lemma) in original_words.iter().zip(&lemmatized_words) {
        if word != lemma {
            lemma_dict.insert(word.clone(), lemma.clone());
        }
    }
    LemmatizationResult {
        original_words,
        lemmatized_words,
        lemma_dict,
    }
}

pub fn pos_tagging(toolkit: &Toolkit, backend: Backend, text: &str) -> PosTaggingResult {
    let pos_tags: Vec<(String, String)> = match backend {
        Backend::Nltk => {
            let words = word_tokenize(text);
            let tags = toolkit.tagger().tag(&words);
            words
                .into_iter()
                .zip(tags)
                .map(|(word, tag)| (word, tag.to_string()))
                .collect()
        }
        Backend::Spacy => Doc::parse(toolkit, text)
            .tokens
            .into_iter()
            .map(|t| (t.token.text, t.pos.to_string()))
            .collect(),
    };

    let mut pos_groups = OrderedMap::new();
    for (word, tag) in &pos_tags {
        pos_groups.push_to(tag, word.clone());
    }
    PosTaggingResult {
        pos_tags,
        pos_groups,
    }
}

pub fn ner(toolkit: &Toolkit, backend: Backend, text: &str) -> NerResult {
    let entities: Vec<Entity> = match backend {
        Backend::Nltk => {
            let words = word_tokenize(text);
            let tags = toolkit.tagger().tag(&words);
            toolkit.entities().classic(&words, &tags)
        }
        Backend::Spacy => toolkit.entities().pipeline(&Doc::parse(toolkit, text)),
    };

    let mut entity_groups = OrderedMap::new();
    for entity in &entities {
        entity_groups.push_to(&entity.label, entity.text.clone());
    }
    NerResult {
        entities,
        entity_groups,
    }
}

/// Both styles share the lexicon scorer.
pub fn sentiment(toolkit: &Toolkit, text: &str) -> TaskOutput {
    let scores = toolkit.sentiment().polarity_scores(text);
    let visualization = Visualization::Series(vec![
        ChartPoint::new("Positive", scores.pos),
        ChartPoint::new("Neutral", scores.neu),
        ChartPoint::new("Negative", scores.neg),
    ]);
    let result = SentimentResult {
        sentiment: SentimentLabel::from_compound(scores.compound),
        scores,
        text: text.to_string(),
    };
    TaskOutput::with_visualization(TaskResult::SentimentAnalysis(result), visualization)
}

/// Frequency-based extractive summary, shared by both styles.
pub fn summarization(toolkit: &Toolkit, text: &str) -> SummarizationResult {
    let sentences = split_sentences(text);
    let original_length = text.chars().count();
    let passthrough = |sentences: Vec<String>| SummarizationResult {
        summary: text.to_string(),
        summary_sentences: sentences,
        original_length,
        summary_length: original_length,
        compression_ratio: 1.0,
    };
    if sentences.len() <= SHORT_TEXT_SENTENCES {
        return passthrough(sentences);
    }

    let stopwords = toolkit.classic_stopwords();
    let sentence_words: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| {
            word_tokenize(&s.to_lowercase())
                .into_iter()
                .filter(|w| !stopwords.contains(w) && !is_punctuation(w))
                .collect()
        })
        .collect();

    let mut frequencies: HashMap<&str, f64> = HashMap::new();
    for word in sentence_words.iter().flatten() {
        *frequencies.entry(word).or_insert(0.0) += 1.0;
    }
    let max_frequency = frequencies.values().copied().fold(0.0, f64::max);
    if max_frequency == 0.0 {
        return passthrough(sentences);
    }

    // Sentences without a single scored word are never picked.
    let mut scored: Vec<(usize, f64)> = sentence_words
        .iter()
        .enumerate()
        .filter(|(_, words)| !words.is_empty())
        .map(|(i, words)| {
            let score = words
                .iter()
                .map(|w| frequencies[w.as_str()] / max_frequency)
                .sum::<f64>();
            (i, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let keep = ((sentences.len() as f64 * SUMMARY_RATIO).ceil() as usize).max(1);
    let mut picked: Vec<usize> = scored.into_iter().take(keep).map(|(i, _)| i).collect();
    picked.sort_unstable();

    let summary_sentences: Vec<String> = picked.into_iter().map(|i| sentences[i].clone()).collect();
    let summary = summary_sentences.join(" ");
    let summary_length = summary.chars().count();
    SummarizationResult {
        compression_ratio: summary_length as f64 / original_length as f64,
        summary,
        summary_sentences,
        original_length,
        summary_length,
    }
}

/// Top keywords, shared by both styles.
pub fn keyword_extraction(toolkit: &Toolkit, text: &str) -> TaskOutput {
    let stopwords = toolkit.classic_stopwords();
    let documents: Vec<Vec<String>> = split_sentences(text)
        .iter()
        .map(|sentence| {
            word_tokenize(sentence)
                .into_iter()
                .filter(|w| is_alphabetic(w))
                .map(|w| w.to_lowercase())
                .filter(|w| !stopwords.contains(w))
                .collect()
        })
        .collect();

    let mut method = KeywordMethod::Frequency;
    let mut scores = Vec::new();
    if documents.len() >= TFIDF_MIN_SENTENCES {
        scores = mean_tfidf(&documents);
        method = KeywordMethod::Tfidf;
    }
    if scores.is_empty() {
        let tokens: Vec<String> = documents.into_iter().flatten().collect();
        scores = term_frequencies(&tokens);
        method = KeywordMethod::Frequency;
    }
    let ranked = top_scores(scores, KEYWORD_LIMIT);

    let visualization = Visualization::Series(
        ranked
            .iter()
            .map(|(word, score)| ChartPoint::new(word.clone(), *score))
            .collect(),
    );
    let result = KeywordResult {
        keywords: ranked.iter().cloned().collect(),
        keyword_list: ranked
            .into_iter()
            .map(|(word, score)| KeywordScore { word, score })
            .collect(),
        method,
    };
    TaskOutput::with_visualization(TaskResult::KeywordExtraction(result), visualization)
}

/// Both backends share the TF-IDF score and the lower-cased word-tokenizer term sets.
pub fn similarity(toolkit: &Toolkit, text1: &str, text2: &str) -> Result<TaskOutput> {
    let stopwords = toolkit.vectorizer_stopwords();
    let documents = vec![analyze(text1, stopwords), analyze(text2, stopwords)];
    if documents.iter().all(Vec::is_empty) {
        return Err(CoreError::EmptyVocabulary);
    }
    let mut tfidf = TfIdf::new();
    let rows = tfidf.fit_transform(&documents);
    let similarity_score = cosine_similarity(&rows[0], &rows[1]);

    let terms =
        |text: &str| -> BTreeSet<String> { word_tokenize(&text.to_lowercase()).into_iter().collect() };
    let (terms1, terms2) = (terms(text1), terms(text2));
    let common_terms: Vec<String> = terms1.intersection(&terms2).cloned().collect();
    let text1_unique: Vec<String> = terms1.difference(&terms2).cloned().collect();
    let text2_unique: Vec<String> = terms2.difference(&terms1).cloned().collect();

    let visualization = Visualization::Similarity(SimilaritySummary {
        similarity_score,
        text1_unique_count: text1_unique.len(),
        text2_unique_count: text2_unique.len(),
        common_terms_count: common_terms.len(),
    });
    let result = SimilarityResult {
        similarity_score,
        common_terms,
        text1_unique,
        text2_unique,
    };
    Ok(TaskOutput::with_visualization(TaskResult::TextSimilarity(result), visualization))
}

pub fn language_detection(toolkit: &Toolkit, backend: Backend, text: &str) -> Result<LanguageResult> {
    let detection = toolkit.languages().detect(text)?;
    let sample_tokens: Vec<String> = match backend {
        Backend::Nltk => word_tokenize(text).into_iter().take(SAMPLE_TOKENS).collect(),
        Backend::Spacy => pipeline_tokenize(text)
            .into_iter()
            .take(SAMPLE_TOKENS)
            .map(|t| t.text)
            .collect(),
    };
    Ok(LanguageResult {
        language_name: language_name(&detection.code),
        language_code: detection.code,
        confidence: detection.confidence,
        probabilities: detection.probabilities,
        sample_tokens,
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nlp_trainer_core::catalog::sample_text;
    use nlp_trainer_core::domain::Task;
    use pretty_assertions::assert_eq;

    fn toolkit() -> Toolkit {
        Toolkit::load()
    }

    #[test]
    fn classic_stopword_removal_lowercases() {
        let result = stopword_removal(&toolkit(), Backend::Nltk, "The cat sat on the mat.");
        assert_eq!(result.original_words, vec!["the", "cat", "sat", "on", "the", "mat", "."]);
        assert_eq!(result.filtered_words, vec!["cat", "sat", "mat"]);
        assert_eq!(result.removed_words, vec!["the", "on", "the", "."]);
        assert_eq!(result.filtered_count, 3);
    }

    #[test]
    fn pipeline_stopword_removal_keeps_case() {
        let result = stopword_removal(&toolkit(), Backend::Spacy, "The cat sat on the mat.");
        assert_eq!(result.original_words[0], "The");
        assert_eq!(result.filtered_words, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn classic_lemmas_only_record_changes() {
        let result = lemmatization(&toolkit(), Backend::Nltk, "The geese were running");
        assert_eq!(result.lemmatized_words, vec!["The", "goose", "were", "running"]);
        assert_eq!(result.lemma_dict.len(), 1);
        assert_eq!(result.lemma_dict.get("geese").map(String::as_str), Some("goose"));
    }

    #[test]
    fn pos_groups_keep_first_seen_order() {
        let result = pos_tagging(&toolkit(), Backend::Nltk, "The dog saw the cat");
        let keys: Vec<&str> = result.pos_groups.keys().collect();
        assert_eq!(keys, vec!["DT", "NN", "VBD"]);
        assert_eq!(result.pos_groups.get("DT"), Some(&vec!["The".to_string(), "the".to_string()]));
    }

    #[test]
    fn sentiment_sample_is_positive() {
        let output = sentiment(&toolkit(), sample_text(Task::SentimentAnalysis).text);
        let TaskResult::SentimentAnalysis(result) = output.result else {
            panic!("unexpected result variant");
        };
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        match output.visualization {
            Some(Visualization::Series(points)) => {
                let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Positive", "Neutral", "Negative"]);
            }
            other => panic!("unexpected visualization: {other:?}"),
        }
    }

    #[test]
    fn short_texts_are_not_summarized() {
        let text = "One short sentence. And another one.";
        let result = summarization(&toolkit(), text);
        assert_eq!(result.summary, text);
        assert_relative_eq!(result.compression_ratio, 1.0);
    }

    #[test]
    fn summary_sentences_keep_document_order() {
        let text = sample_text(Task::TextSummarization).text;
        let result = summarization(&toolkit(), text);
        let sentences = split_sentences(text);
        let positions: Vec<usize> = result
            .summary_sentences
            .iter()
            .map(|s| sentences.iter().position(|t| t == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(positions.len(), ((sentences.len() as f64) * SUMMARY_RATIO).ceil() as usize);
        assert!(result.compression_ratio < 1.0);
    }

    #[test]
    fn keywords_use_tfidf_for_longer_texts() {
        let output = keyword_extraction(&toolkit(), sample_text(Task::KeywordExtraction).text);
        let TaskResult::KeywordExtraction(result) = output.result else {
            panic!("unexpected result variant");
        };
        assert_eq!(result.method, KeywordMethod::Tfidf);
        assert!(result.keyword_list.len() <= KEYWORD_LIMIT);
        assert!(result
            .keyword_list
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn keywords_fall_back_to_frequency() {
        let output = keyword_extraction(&toolkit(), "Rust makes fast and safe code. Rust rocks.");
        let TaskResult::KeywordExtraction(result) = output.result else {
            panic!("unexpected result variant");
        };
        assert_eq!(result.method, KeywordMethod::Frequency);
        assert_eq!(result.keyword_list[0].word, "rust");
        assert_relative_eq!(result.keyword_list[0].score, 2.0 / 7.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let tk = toolkit();
        let score = |a: &str, b: &str| match similarity(&tk, a, b).unwrap().result {
            TaskResult::TextSimilarity(r) => r.similarity_score,
            _ => unreachable!(),
        };
        let a = "Cats chase mice in the garden.";
        let b = "Dogs chase cats in the park.";
        assert_relative_eq!(score(a, b), score(b, a), epsilon = 1e-12);
        assert_relative_eq!(score(a, a), 1.0, epsilon = 1e-12);
        assert_relative_eq!(score("red apples", "blue oceans"), 0.0);
    }

    #[test]
    fn stopword_only_similarity_is_rejected() {
        let err = similarity(&toolkit(), "the and of", "is it a").unwrap_err();
        assert_eq!(err, CoreError::EmptyVocabulary);
    }

    #[test]
    fn language_result_names_the_code() {
        let result = language_detection(&toolkit(), Backend::Nltk, "This is an English sentence.").unwrap();
        assert_eq!(result.language_code, "en");
        assert_eq!(result.language_name, "English");
        assert_eq!(result.sample_tokens, vec!["This", "is", "an", "English", "sentence", "."]);
    }
}
