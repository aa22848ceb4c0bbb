//! Canned content served to the UI: sample inputs per task and the code
//! snippets offered in the code-explanation panel.

use crate::domain::Task;

pub const DEFAULT_SAMPLE_TEXT: &str = "Natural language processing (NLP) is a subfield of linguistics, computer science, and artificial intelligence concerned with the interactions between computers and human language.";

/// A sample input for a task, with a second text for comparison tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleText {
    pub text: &'static str,
    pub comparison_text: Option<&'static str>,
}

pub fn sample_text(task: Task) -> SampleText {
    let text = match task {
        Task::Tokenization => "The quick brown fox jumps over the lazy dog. This is a sample sentence for tokenization.",
        Task::StopwordRemoval => "The quick brown fox jumps over the lazy dog. This is a sample sentence for stopword removal with common words like the, is, and, of.",
        Task::Lemmatization => "The cats are running in the garden. They were eating the food that was prepared by their owners. I am walking to the store.",
        Task::PosTagging => "The quick brown fox quickly jumps over the lazy dog. I love to read interesting books about artificial intelligence.",
        Task::Ner => "Apple Inc. was founded by Steve Jobs in California. Microsoft is headquartered in Redmond, Washington. Elon Musk is the CEO of Tesla and SpaceX.",
        Task::SentimentAnalysis => "I absolutely love this product! It's amazing and exceeded all my expectations. The quality is outstanding and the service was excellent.",
        Task::TextSummarization => SUMMARIZATION_SAMPLE,
        Task::KeywordExtraction => "Machine learning is the study of computer algorithms that improve automatically through experience. It is seen as a subset of artificial intelligence. Machine learning algorithms build a mathematical model based on sample data, known as training data, in order to make predictions or decisions without being explicitly programmed to do so.",
        Task::TextSimilarity => {
            return SampleText {
                text: "Natural language processing (NLP) is a subfield of linguistics, computer science, and artificial intelligence concerned with the interactions between computers and human language.",
                comparison_text: Some("NLP is a branch of AI that focuses on the interaction between computers and human languages. It involves processing and analyzing large amounts of natural language data."),
            }
        }
        Task::LanguageDetection => "Hello, this is a sample text in English to test language detection capabilities of our natural language processing system.",
    };

    SampleText {
        text,
        comparison_text: None,
    }
}

const SUMMARIZATION_SAMPLE: &str = "Natural Language Processing (NLP) is a field of artificial intelligence that focuses on the interaction between computers and humans through natural language. The ultimate objective of NLP is to read, decipher, understand, and make sense of human language in a valuable way. Most NLP techniques rely on machine learning to derive meaning from human languages. NLP tasks include text classification, sentiment analysis, speech recognition, machine translation, named entity recognition, topic modeling, and question answering systems. NLP combines computational linguistics\u{2014}rule-based modeling of human language\u{2014}with statistical, machine learning, and deep learning models. These technologies enable computers to process human language in the form of text or voice data and to 'understand' its full meaning, complete with the speaker or writer's intent and sentiment. NLP drives computer programs that translate text from one language to another, respond to spoken commands, and summarize large volumes of text rapidly\u{2014}even in real time. There's a tremendous amount of information stored in free text files, such as patients' medical records. Before deep learning-based NLP models, this information was inaccessible to computer-assisted analysis and could not be analyzed in any systematic way. The implementation of NLP systems has helped to address this problem by making it possible to analyze large amounts of text data.";

pub const DEFAULT_CODE_SAMPLE: &str = "nltk-tokenize";

/// Look up a code snippet by its catalog key.
pub fn code_sample(kind: &str) -> Option<&'static str> {
    CODE_SAMPLES
        .iter()
        .find(|(key, _)| *key == kind)
        .map(|(_, code)| *code)
}

pub fn code_sample_kinds() -> impl Iterator<Item = &'static str> {
    CODE_SAMPLES.iter().map(|(key, _)| *key)
}

static CODE_SAMPLES: [(&str, &str); 3] = [
    ("nltk-tokenize", NLTK_TOKENIZE),
    ("spacy-ner", SPACY_NER),
    ("sklearn-vectorizer", SKLEARN_VECTORIZER),
];

const NLTK_TOKENIZE: &str = r#"# Basic NLTK tokenization example
import nltk
from nltk.tokenize import word_tokenize, sent_tokenize

# Download required resources
nltk.download('punkt')

# Sample text
text = "Hello world! This is an example of NLTK tokenization. It works with multiple sentences."

# Sentence tokenization
sentences = sent_tokenize(text)
print("Sentences:", sentences)

# Word tokenization
words = word_tokenize(text)
print("Words:", words)

# Count tokens
print(f"Number of sentences: {len(sentences)}")
print(f"Number of words: {len(words)}")"#;

const SPACY_NER: &str = r#"# spaCy Named Entity Recognition example
import spacy

# Load English language model
nlp = spacy.load("en_core_web_sm")

# Sample text
text = "Apple Inc. was founded by Steve Jobs in California. Microsoft is headquartered in Redmond, Washington."

# Process the text
doc = nlp(text)

# Extract named entities
for ent in doc.ents:
    print(f"Entity: {ent.text}, Type: {ent.label_}, Description: {spacy.explain(ent.label_)}")

# Visualize entities (in notebook/supported environment)
# from spacy import displacy
# displacy.render(doc, style="ent")"#;

const SKLEARN_VECTORIZER: &str = r#"# Text vectorization with scikit-learn
from sklearn.feature_extraction.text import CountVectorizer, TfidfVectorizer

# Sample documents
documents = [
    "Machine learning is a subset of artificial intelligence.",
    "Natural language processing uses machine learning techniques.",
    "TF-IDF helps determine the importance of words in documents."
]

# Create a bag-of-words vectorizer
count_vectorizer = CountVectorizer()
count_matrix = count_vectorizer.fit_transform(documents)

# Get feature names (words)
feature_names = count_vectorizer.get_feature_names_out()
print("Vocabulary:", feature_names)
print("Document vectors shape:", count_matrix.shape)

# Create a TF-IDF vectorizer
tfidf_vectorizer = TfidfVectorizer()
tfidf_matrix = tfidf_vectorizer.fit_transform(documents)

# Print the TF-IDF scores for the first document
first_doc_vector = tfidf_matrix[0]
for idx, score in zip(first_doc_vector.indices, first_doc_vector.data):
    print(f"Word: {tfidf_vectorizer.get_feature_names_out()[idx]}, TF-IDF: {score:.4f}")"#;
