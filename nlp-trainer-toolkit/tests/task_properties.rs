use std::collections::HashMap;
use std::sync::Arc;

use nlp_trainer_core::domain::{Backend, SentimentLabel, TaskResult};
use nlp_trainer_toolkit::adapters;
use nlp_trainer_toolkit::tokenize::split_sentences;
use nlp_trainer_toolkit::{Dispatcher, Toolkit};
use once_cell::sync::Lazy;
use proptest::prelude::*;

static TOOLKIT: Lazy<Arc<Toolkit>> = Lazy::new(|| Arc::new(Toolkit::load()));

fn backend() -> impl Strategy<Value = Backend> {
    prop_oneof![Just(Backend::Nltk), Just(Backend::Spacy)]
}

fn prose() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,9}([ ,.!?']{1,2}[A-Za-z]{1,9}){0,30}[.!?]?"
}

fn multiset(words: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn tokenization_counts_match_sequences(text in prose(), backend in backend()) {
        let result = adapters::tokenization(&TOOLKIT, backend, &text);
        prop_assert_eq!(result.word_count, result.words.len());
        prop_assert_eq!(result.sentence_count, result.sentences.len());
    }

    #[test]
    fn stopword_removal_partitions_the_tokens(text in prose(), backend in backend()) {
        let result = adapters::stopword_removal(&TOOLKIT, backend, &text);
        let mut rebuilt = result.filtered_words.clone();
        rebuilt.extend(result.removed_words.iter().cloned());
        prop_assert_eq!(multiset(&rebuilt), multiset(&result.original_words));
        prop_assert_eq!(result.filtered_count, result.filtered_words.len());
        prop_assert_eq!(result.original_count, result.original_words.len());
    }

    #[test]
    fn lemmatization_is_parallel_to_input(text in prose(), backend in backend()) {
        let result = adapters::lemmatization(&TOOLKIT, backend, &text);
        prop_assert_eq!(result.original_words.len(), result.lemmatized_words.len());
        for (word, lemma) in result.lemma_dict.iter() {
            prop_assert_ne!(word, lemma.as_str());
        }
    }

    #[test]
    fn sentiment_label_agrees_with_compound(text in prose()) {
        let output = adapters::sentiment(&TOOLKIT, &text);
        let TaskResult::SentimentAnalysis(result) = output.result else {
            return Err(TestCaseError::fail("unexpected result variant"));
        };
        let compound = result.scores.compound;
        prop_assert!((-1.0..=1.0).contains(&compound));
        prop_assert_eq!(result.sentiment, SentimentLabel::from_compound(compound));
    }

    #[test]
    fn summaries_are_ordered_subsequences(text in prose()) {
        let result = adapters::summarization(&TOOLKIT, &text);
        let sentences = split_sentences(&text);
        let mut cursor = 0;
        for picked in &result.summary_sentences {
            let offset = sentences[cursor..].iter().position(|s| s == picked);
            prop_assert!(offset.is_some());
            cursor += offset.unwrap_or(0) + 1;
        }
        if sentences.len() <= adapters::SHORT_TEXT_SENTENCES {
            prop_assert_eq!(&result.summary, &text);
            prop_assert_eq!(result.compression_ratio, 1.0);
        }
    }

    #[test]
    fn similarity_is_symmetric(a in prose(), b in prose()) {
        let forward = adapters::similarity(&TOOLKIT, &a, &b);
        let backward = adapters::similarity(&TOOLKIT, &b, &a);
        match (forward, backward) {
            (Ok(f), Ok(r)) => {
                let (TaskResult::TextSimilarity(f), TaskResult::TextSimilarity(r)) = (f.result, r.result) else {
                    return Err(TestCaseError::fail("unexpected result variant"));
                };
                prop_assert!((f.similarity_score - r.similarity_score).abs() < 1e-9);
                prop_assert_eq!(f.common_terms, r.common_terms);
                prop_assert_eq!(f.text1_unique, r.text2_unique);
            }
            (Err(f), Err(r)) => prop_assert_eq!(f, r),
            _ => prop_assert!(false, "only one direction failed"),
        }
    }
}

#[test]
fn end_to_end_tokenization_through_the_dispatcher() {
    let dispatcher = Dispatcher::new(TOOLKIT.clone(), Backend::Nltk);
    let output = dispatcher
        .dispatch_named("tokenization", Some("nltk"), "hello world", None)
        .unwrap();
    let json = serde_json::to_value(&output.result).unwrap();
    assert_eq!(json["word_count"], 2);
    assert_eq!(json["words"], serde_json::json!(["hello", "world"]));
}

#[test]
fn language_detection_is_deterministic() {
    let first = adapters::language_detection(&TOOLKIT, Backend::Nltk, "This is an English sentence.").unwrap();
    let second = adapters::language_detection(&TOOLKIT, Backend::Nltk, "This is an English sentence.").unwrap();
    assert_eq!(first.language_code, "en");
    assert_eq!(first, second);
}
