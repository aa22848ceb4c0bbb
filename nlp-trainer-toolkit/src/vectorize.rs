//! Term weighting: TF-IDF vectors, cosine similarity and keyword scores.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::StopwordList;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Lower-cased word tokens of two or more word characters, stopwords removed.
pub fn analyze(text: &str, stopwords: &StopwordList) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}

/// TF-IDF vectorizer with smoothed idf and L2-normalized rows.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    /// Term to column index, columns in sorted term order.
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, documents: &[Vec<String>]) {
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(&str, usize)> = doc_freq.into_iter().collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f64;
        self.vocabulary.clear();
        self.terms.clear();
        self.idf.clear();
        for (idx, (term, df)) in terms.into_iter().enumerate() {
            self.vocabulary.insert(term.to_string(), idx);
            self.terms.push(term.to_string());
            self.idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
        }
    }

    /// Raw counts times idf, L2-normalized. Unknown terms are ignored.
    pub fn transform(&self, document: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.terms.len()];
        for term in document {
            if let Some(&idx) = self.vocabulary.get(term) {
                vector[idx] += 1.0;
            }
        }
        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        l2_normalize(&mut vector);
        vector
    }

    pub fn fit_transform(&mut self, documents: &[Vec<String>]) -> Vec<Vec<f64>> {
        self.fit(documents);
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Cosine of the angle between two vectors; zero when either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Mean TF-IDF weight of each term across `documents`, in first-occurrence
/// order.
pub fn mean_tfidf(documents: &[Vec<String>]) -> Vec<(String, f64)> {
    let mut tfidf = TfIdf::new();
    let rows = tfidf.fit_transform(documents);
    if tfidf.is_empty() {
        return Vec::new();
    }
    let n_docs = documents.len() as f64;

    first_occurrence(documents.iter().flatten())
        .into_iter()
        .filter_map(|term| {
            let idx = *tfidf.vocabulary.get(term)?;
            let total: f64 = rows.iter().map(|row| row[idx]).sum();
            Some((term.to_string(), total / n_docs))
        })
        .collect()
}

/// Share of each term in the token stream, in first-occurrence order.
pub fn term_frequencies(tokens: &[String]) -> Vec<(String, f64)> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    first_occurrence(tokens)
        .into_iter()
        .map(|term| (term.to_string(), counts[term] as f64 / total))
        .collect()
}

fn first_occurrence<'a>(terms: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .map(String::as_str)
        .filter(|term| seen.insert(*term))
        .collect()
}

/// Highest `limit` scores, descending. Equal scores keep their input order.
pub fn top_scores(mut scores: Vec<(String, f64)>, limit: usize) -> Vec<(String, f64)> {
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores.truncate(limit);
    scores
}
