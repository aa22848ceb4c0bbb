//! Penn Treebank word tokenization, applied sentence by sentence.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sentences::split_sentences;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("treebank pattern compiles"),
            replacement,
        })
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"([«“‘„]|`+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern.replace_all(&acc, rule.replacement).into_owned()
    })
}

/// Tokenize a single sentence with Treebank conventions.
pub fn treebank_tokenize(sentence: &str) -> Vec<String> {
    let text = apply(&STARTING_QUOTES, sentence.to_string());
    let text = apply(&PUNCTUATION, text);
    let text = format!(" {} ", text);
    let text = apply(&ENDING_QUOTES, text);
    let text = apply(&CONTRACTIONS, text);

    text.split_whitespace().map(str::to_string).collect()
}

/// Split into sentences, then tokenize each sentence.
pub fn word_tokenize(text: &str) -> Vec<String> {
    split_sentences(text)
        .iter()
        .flat_map(|sentence| treebank_tokenize(sentence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(text: &str) -> Vec<String> {
        word_tokenize(text)
    }

    #[test]
    fn splits_final_period_and_commas() {
        assert_eq!(
            tokens("Hello, world. This is an English sentence."),
            vec!["Hello", ",", "world", ".", "This", "is", "an", "English", "sentence", "."]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(tokens("I don't think it's fine"), vec!["I", "do", "n't", "think", "it", "'s", "fine"]);
        assert_eq!(tokens("They cannot go"), vec!["They", "can", "not", "go"]);
    }

    #[test]
    fn converts_double_quotes() {
        assert_eq!(
            tokens("He said \"stop\" twice"),
            vec!["He", "said", "``", "stop", "''", "twice"]
        );
    }

    #[test]
    fn keeps_internal_periods_and_decimals() {
        assert_eq!(
            tokens("Apple Inc. paid $3.5 million"),
            vec!["Apple", "Inc.", "paid", "$", "3.5", "million"]
        );
    }

    #[test]
    fn two_plain_words() {
        assert_eq!(tokens("hello world"), vec!["hello", "world"]);
    }
}
