//! Pipeline-style document: tokens annotated in one pass with tags,
//! lemmas and stopword/punctuation flags, plus sentence boundaries.

use crate::resources::Toolkit;
use crate::tagger::universal_tag;
use crate::tokenize::pipeline::sentence_token_ranges;
use crate::tokenize::{is_punct_like, pipeline_tokenize, Token};

/// One annotated token.
#[derive(Debug, Clone, PartialEq)]
pub struct DocToken {
    pub token: Token,
    /// Fine-grained Penn Treebank tag.
    pub tag: &'static str,
    /// Coarse Universal POS tag.
    pub pos: &'static str,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

impl DocToken {
    pub fn text(&self) -> &str {
        &self.token.text
    }
}

/// A processed text. Borrowing the source keeps sentence and entity spans
/// cheap to slice.
#[derive(Debug, Clone)]
pub struct Doc<'a> {
    pub text: &'a str,
    pub tokens: Vec<DocToken>,
    /// Inclusive token index ranges, one per sentence.
    pub sentences: Vec<(usize, usize)>,
}

impl<'a> Doc<'a> {
    pub fn parse(toolkit: &Toolkit, text: &'a str) -> Self {
        let tokens = pipeline_tokenize(text);
        let sentences = sentence_token_ranges(&tokens);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let tags = toolkit.tagger().tag(&words);

        let annotated = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let tag = tags[i];
                let pos = universal_tag(&token.text, tag, tags.get(i + 1).copied());
                let lemma = toolkit.pipeline_lemmatizer().lemmatize(&token.text, pos);
                let is_stop = toolkit.pipeline_stopwords().contains_lower(&token.text);
                let is_punct = is_punct_like(&token.text);
                DocToken {
                    token,
                    tag,
                    pos,
                    lemma,
                    is_stop,
                    is_punct,
                }
            })
            .collect::<Vec<_>>();

        Self {
            text,
            tokens: annotated,
            sentences,
        }
    }

    /// Source text covered by tokens `first..=last`.
    pub fn span_text(&self, first: usize, last: usize) -> &'a str {
        &self.text[self.tokens[first].token.start..self.tokens[last].token.end]
    }

    pub fn sentence_texts(&self) -> Vec<String> {
        self.sentences
            .iter()
            .map(|&(first, last)| self.span_text(first, last).to_string())
            .collect()
    }

    pub fn words(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.token.text.clone()).collect()
    }
}
