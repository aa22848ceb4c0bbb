//! Tokenizers for the two toolkit styles.
//!
//! The classic style ([`treebank`], [`sentences`]) follows Punkt sentence
//! splitting and Penn Treebank word conventions. The pipeline style
//! ([`pipeline`]) peels prefixes, suffixes and infixes off whitespace
//! chunks and keeps character offsets into the source text.

pub mod pipeline;
pub mod sentences;
pub mod treebank;

pub use pipeline::{pipeline_sentences, pipeline_tokenize, Token};
pub use sentences::split_sentences;
pub use treebank::{treebank_tokenize, word_tokenize};

/// True when every character is ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// True for tokens made of punctuation or typographic quote/dash marks.
pub fn is_punct_like(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| {
            c.is_ascii_punctuation()
                || matches!(
                    c,
                    '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2013}' | '\u{2014}'
                        | '\u{2026}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}' | '\u{00A1}'
                )
        })
}

pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Digits with optional separators, e.g. `42`, `3.5`, `1,000`.
pub fn like_number(token: &str) -> bool {
    let mut digits = 0;
    for c in token.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if !matches!(c, '.' | ',' | '-' | '+') {
            return false;
        }
    }
    digits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_requires_every_char() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("``"));
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("n't"));
        assert!(!is_punctuation(""));
    }

    #[test]
    fn number_shapes() {
        assert!(like_number("1,000"));
        assert!(like_number("3.5"));
        assert!(!like_number("v2"));
        assert!(!like_number("."));
    }
}
