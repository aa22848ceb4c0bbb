//! Process-wide language resources.
//!
//! Everything here is built once at start-up and only read afterwards, so
//! a single `Toolkit` behind an `Arc` serves every request.

use tracing::info;

use crate::entities::EntityRecognizer;
use crate::language::LanguageIdentifier;
use crate::lemma::{ClassicLemmatizer, PipelineLemmatizer};
use crate::sentiment::SentimentAnalyzer;
use crate::stopwords::{self, StopwordList};
use crate::tagger::Tagger;

#[derive(Debug, Clone)]
pub struct Toolkit {
    tagger: Tagger,
    classic_lemmatizer: ClassicLemmatizer,
    pipeline_lemmatizer: PipelineLemmatizer,
    classic_stopwords: StopwordList,
    pipeline_stopwords: StopwordList,
    vectorizer_stopwords: StopwordList,
    sentiment: SentimentAnalyzer,
    entities: EntityRecognizer,
    languages: LanguageIdentifier,
}

impl Toolkit {
    /// Build every lexicon, list and profile.
    pub fn load() -> Self {
        let toolkit = Self {
            tagger: Tagger::new(),
            classic_lemmatizer: ClassicLemmatizer::new(),
            pipeline_lemmatizer: PipelineLemmatizer::new(),
            classic_stopwords: StopwordList::new(stopwords::CLASSIC),
            pipeline_stopwords: StopwordList::new(stopwords::PIPELINE),
            vectorizer_stopwords: StopwordList::new(stopwords::VECTORIZER),
            sentiment: SentimentAnalyzer::new(),
            entities: EntityRecognizer::new(),
            languages: LanguageIdentifier::new(),
        };
        info!(
            classic_stopwords = toolkit.classic_stopwords.len(),
            pipeline_stopwords = toolkit.pipeline_stopwords.len(),
            "Language resources loaded"
        );
        toolkit
    }

    pub fn tagger(&self) -> &Tagger {
        &self.tagger
    }

    pub fn classic_lemmatizer(&self) -> &ClassicLemmatizer {
        &self.classic_lemmatizer
    }

    pub fn pipeline_lemmatizer(&self) -> &PipelineLemmatizer {
        &self.pipeline_lemmatizer
    }

    pub fn classic_stopwords(&self) -> &StopwordList {
        &self.classic_stopwords
    }

    pub fn pipeline_stopwords(&self) -> &StopwordList {
        &self.pipeline_stopwords
    }

    pub fn vectorizer_stopwords(&self) -> &StopwordList {
        &self.vectorizer_stopwords
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    pub fn entities(&self) -> &EntityRecognizer {
        &self.entities
    }

    pub fn languages(&self) -> &LanguageIdentifier {
        &self.languages
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::load()
    }
}
