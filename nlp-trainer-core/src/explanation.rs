use serde::Serialize;

use crate::domain::Task;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BackendNotes {
    pub nltk: &'static str,
    pub spacy: &'static str,
}

/// Human-readable description of a task, shown next to its results.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExplanationEntry {
    pub title: &'static str,
    pub what: &'static str,
    pub why: &'static str,
    pub how: BackendNotes,
}

const NOT_AVAILABLE: &str = "Information not available";

pub static UNKNOWN_TASK: ExplanationEntry = ExplanationEntry {
    title: "Unknown Task",
    what: NOT_AVAILABLE,
    why: NOT_AVAILABLE,
    how: BackendNotes {
        nltk: NOT_AVAILABLE,
        spacy: NOT_AVAILABLE,
    },
};

/// Look up the explanation for a task name, returning the `Unknown Task`
/// entry for names that are not tasks.
pub fn explain(task: &str) -> &'static ExplanationEntry {
    task.parse::<Task>()
        .map(explain_task)
        .unwrap_or(&UNKNOWN_TASK)
}

pub fn explain_task(task: Task) -> &'static ExplanationEntry {
    match task {
        Task::Tokenization => &TOKENIZATION,
        Task::StopwordRemoval => &STOPWORD_REMOVAL,
        Task::Lemmatization => &LEMMATIZATION,
        Task::PosTagging => &POS_TAGGING,
        Task::Ner => &NER,
        Task::SentimentAnalysis => &SENTIMENT_ANALYSIS,
        Task::TextSummarization => &TEXT_SUMMARIZATION,
        Task::KeywordExtraction => &KEYWORD_EXTRACTION,
        Task::TextSimilarity => &TEXT_SIMILARITY,
        Task::LanguageDetection => &LANGUAGE_DETECTION,
    }
}

static TOKENIZATION: ExplanationEntry = ExplanationEntry {
    title: "Tokenization",
    what: "Tokenization is the process of breaking down text into smaller pieces called tokens. These tokens can be words, characters, or subwords.",
    why: "Tokenization is a fundamental step in NLP because it transforms text into a format that machines can process. It helps with analyzing text structure, extracting meaning, and preparing data for downstream tasks.",
    how: BackendNotes {
        nltk: "NLTK uses rule-based tokenizers that split text based on whitespace and punctuation. It provides specialized tokenizers like <code>word_tokenize()</code> and <code>sent_tokenize()</code> for different levels of tokenization.",
        spacy: "spaCy uses a more advanced tokenization algorithm that considers language-specific rules. It tokenizes text as part of its processing pipeline, applying linguistic knowledge to identify token boundaries.",
    },
};

static STOPWORD_REMOVAL: ExplanationEntry = ExplanationEntry {
    title: "Stopword Removal",
    what: "Stopword removal is the process of filtering out common words (like \"the\", \"is\", \"at\") that typically don't contribute significant meaning to text analysis.",
    why: "Removing stopwords reduces noise in text data, decreases the dimensionality of feature vectors, and helps focus analysis on the more meaningful content words. This can improve the performance of various NLP models.",
    how: BackendNotes {
        nltk: "NLTK provides pre-defined lists of stopwords for multiple languages. You can access these with <code>nltk.corpus.stopwords.words(\"english\")</code> and filter words from your text using Python's list comprehension.",
        spacy: "spaCy marks stopwords in its processing pipeline with the <code>is_stop</code> attribute. You can easily filter them out by checking this property for each token object.",
    },
};

static LEMMATIZATION: ExplanationEntry = ExplanationEntry {
    title: "Lemmatization",
    what: "Lemmatization is the process of reducing words to their base or dictionary form (lemma). For example, \"running\", \"runs\", and \"ran\" would all be reduced to \"run\".",
    why: "Lemmatization helps standardize text by reducing different inflected forms to a common base. This reduces vocabulary size and helps algorithms treat related word forms as the same entity.",
    how: BackendNotes {
        nltk: "NLTK uses the WordNet lemmatizer which requires part-of-speech information for optimal results. It applies linguistic rules to determine the lemma based on the word's morphology.",
        spacy: "spaCy performs lemmatization as part of its processing pipeline, using statistical models to determine the base form. Each token has a <code>lemma_</code> attribute containing the lemmatized form.",
    },
};

static POS_TAGGING: ExplanationEntry = ExplanationEntry {
    title: "Part-of-Speech Tagging",
    what: "Part-of-Speech (POS) tagging is the process of labeling each word in a text with its grammatical category such as noun, verb, adjective, etc.",
    why: "POS tags provide valuable grammatical information that helps with text understanding, syntactic parsing, word sense disambiguation, and information extraction.",
    how: BackendNotes {
        nltk: "NLTK uses statistical models (like the Perceptron tagger) trained on annotated corpora. The <code>pos_tag()</code> function takes tokenized text and returns word-tag pairs.",
        spacy: "spaCy applies more advanced neural network models for POS tagging as part of its pipeline. Each token has a <code>pos_</code> attribute containing the coarse-grained tag and a <code>tag_</code> attribute for fine-grained tags.",
    },
};

static NER: ExplanationEntry = ExplanationEntry {
    title: "Named Entity Recognition",
    what: "Named Entity Recognition (NER) is the task of identifying and classifying named entities in text into predefined categories such as person names, organizations, locations, etc.",
    why: "NER helps extract structured information from unstructured text, enabling applications like information retrieval, question answering, and relationship extraction.",
    how: BackendNotes {
        nltk: "NLTK combines POS tagging with chunking to identify named entities. It uses a rule-based system with the <code>ne_chunk()</code> function to classify entities into categories like PERSON, ORGANIZATION, etc.",
        spacy: "spaCy uses statistical models to identify entities, providing better accuracy than rule-based systems. It can recognize a wide range of entity types and provides entity recognition through the <code>doc.ents</code> property.",
    },
};

static SENTIMENT_ANALYSIS: ExplanationEntry = ExplanationEntry {
    title: "Sentiment Analysis",
    what: "Sentiment Analysis is the process of determining the emotional tone or attitude expressed in a piece of text, typically classifying it as positive, negative, or neutral.",
    why: "Sentiment analysis helps understand public opinion, customer feedback, social media sentiment, and other emotional reactions expressed in text.",
    how: BackendNotes {
        nltk: "NLTK provides the VADER (Valence Aware Dictionary and sEntiment Reasoner) tool, which is a lexicon and rule-based sentiment analyzer specifically tuned for social media text.",
        spacy: "While spaCy doesn't have built-in sentiment analysis, it can be combined with other tools or custom models. It provides a good foundation by accurately parsing text structure.",
    },
};

static TEXT_SUMMARIZATION: ExplanationEntry = ExplanationEntry {
    title: "Text Summarization",
    what: "Text summarization is the process of creating a concise and coherent version of a longer document while preserving its key information and meaning.",
    why: "Summarization helps manage information overload, enables quick comprehension of large documents, and supports applications like news aggregation and document indexing.",
    how: BackendNotes {
        nltk: "Using NLTK, we can implement extractive summarization by tokenizing text into sentences, calculating importance scores (using metrics like term frequency), and selecting top-scoring sentences.",
        spacy: "spaCy's efficient text processing capabilities make it suitable for extractive summarization. Its advanced tokenization and linguistic features help identify important sentences based on various features.",
    },
};

static KEYWORD_EXTRACTION: ExplanationEntry = ExplanationEntry {
    title: "Keyword Extraction",
    what: "Keyword extraction identifies the most important or relevant terms in a document that best represent its content.",
    why: "Extracted keywords help with document indexing, content categorization, SEO optimization, and generating metadata for improved search and retrieval.",
    how: BackendNotes {
        nltk: "Using NLTK, keywords can be extracted by calculating statistical measures like TF-IDF (Term Frequency-Inverse Document Frequency) to identify terms that are important to a document but not common across all documents.",
        spacy: "spaCy's linguistic annotations make it effective for keyword extraction by identifying noun phrases and using statistical measures to rank terms. Its part-of-speech tagging helps focus on content-bearing words.",
    },
};

static TEXT_SIMILARITY: ExplanationEntry = ExplanationEntry {
    title: "Text Similarity",
    what: "Text similarity is the measure of how close two pieces of text are in terms of their content, meaning, or structure.",
    why: "Measuring text similarity is essential for applications like plagiarism detection, recommendation systems, search engines, and document clustering.",
    how: BackendNotes {
        nltk: "NLTK can be used to implement various similarity measures by converting text to vector representations (using techniques like bag-of-words or TF-IDF) and calculating metrics like cosine similarity.",
        spacy: "spaCy provides pre-trained word vectors that capture semantic meaning, allowing for more advanced similarity calculations. It has built-in methods for comparing document and span similarities.",
    },
};

static LANGUAGE_DETECTION: ExplanationEntry = ExplanationEntry {
    title: "Language Detection",
    what: "Language detection is the task of automatically identifying the natural language that a piece of text is written in.",
    why: "Language detection enables multilingual applications, content filtering, and proper text processing for language-specific tasks.",
    how: BackendNotes {
        nltk: "Language detection can be implemented using statistical approaches like n-gram models that analyze character or word distributions characteristic of different languages.",
        spacy: "While not a primary feature, spaCy can be used with other libraries like langdetect for language identification before applying language-specific NLP models.",
    },
};
