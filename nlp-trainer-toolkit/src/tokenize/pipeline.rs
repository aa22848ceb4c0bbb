//! Pipeline-style tokenizer: whitespace chunks are peeled into prefixes,
//! suffixes and infixes, with a special-case table for contractions and
//! abbreviations. Every token keeps its byte span in the source text.

use serde::Serialize;

/// A token with its byte span in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    fn new(source: &str, start: usize, end: usize) -> Self {
        Self {
            text: source[start..end].to_string(),
            start,
            end,
        }
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

const PREFIX_CHARS: &[char] = &[
    '"', '\'', '(', '[', '{', '<', '$', '#', '\u{00A3}', '\u{20AC}', '\u{201C}', '\u{2018}',
    '\u{00AB}', '\u{00BF}', '\u{00A1}', '*', '`',
];
const SUFFIX_CHARS: &[char] = &[
    ',', ';', ':', '!', '?', '"', '\'', ')', ']', '}', '>', '%', '\u{201D}', '\u{2019}',
    '\u{00BB}', '*',
];
const CLITICS: &[&str] = &["n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m"];
const SENTENCE_FINAL: &[char] = &['.', '!', '?', '\u{2026}'];
const CLOSING: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];

/// Tokens kept whole even though they carry a period.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr.", "vs.", "etc.", "e.g.", "i.e.",
    "a.m.", "p.m.", "u.s.", "u.k.", "inc.", "corp.", "ltd.", "co.", "jan.", "feb.", "mar.",
    "apr.", "jun.", "jul.", "aug.", "sep.", "sept.", "oct.", "nov.", "dec.", "no.", "mt.",
];

/// Whole-chunk splits that the prefix/suffix rules cannot derive.
const SPECIAL_CASES: &[(&str, &[usize])] = &[
    ("cannot", &[3]),
    ("gonna", &[3]),
    ("gotta", &[3]),
    ("wanna", &[3]),
    ("lemme", &[3]),
    ("gimme", &[3]),
];

/// Tokenize `text` into pipeline tokens.
pub fn pipeline_tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chunk_start = None;

    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), chunk_start) {
            (true, Some(start)) => {
                split_chunk(text, start, idx, &mut tokens);
                chunk_start = None;
            }
            (false, None) => chunk_start = Some(idx),
            _ => {}
        }
    }
    if let Some(start) = chunk_start {
        split_chunk(text, start, text.len(), &mut tokens);
    }

    tokens
}

fn split_chunk(source: &str, mut start: usize, mut end: usize, out: &mut Vec<Token>) {
    let mut suffixes: Vec<Token> = Vec::new();

    loop {
        if start >= end {
            break;
        }
        let rest = &source[start..end];

        if let Some(splits) = special_case(rest) {
            let mut cursor = start;
            for offset in splits {
                out.push(Token::new(source, cursor, start + offset));
                cursor = start + offset;
            }
            out.push(Token::new(source, cursor, end));
            start = end;
            break;
        }

        if rest == "..." || is_abbreviation(rest) {
            break;
        }

        if rest.starts_with("...") && rest.len() > 3 {
            out.push(Token::new(source, start, start + 3));
            start += 3;
            continue;
        }

        let first = rest.chars().next().unwrap_or(' ');
        if PREFIX_CHARS.contains(&first) && rest.chars().count() > 1 {
            let len = first.len_utf8();
            out.push(Token::new(source, start, start + len));
            start += len;
            continue;
        }

        if rest.ends_with("...") && rest.len() > 3 {
            suffixes.push(Token::new(source, end - 3, end));
            end -= 3;
            continue;
        }

        if let Some(clitic) = CLITICS
            .iter()
            .find(|clitic| rest.len() > clitic.len() && rest.to_lowercase().ends_with(*clitic))
        {
            let len = clitic.len();
            suffixes.push(Token::new(source, end - len, end));
            end -= len;
            continue;
        }

        let last = rest.chars().last().unwrap_or(' ');
        let splits_period = last == '.' && rest.chars().count() > 1;
        if (SUFFIX_CHARS.contains(&last) || splits_period) && rest.chars().count() > 1 {
            let len = last.len_utf8();
            suffixes.push(Token::new(source, end - len, end));
            end -= len;
            continue;
        }

        break;
    }

    if start < end {
        split_infixes(source, start, end, out);
    }
    out.extend(suffixes.into_iter().rev());
}

/// Split hyphens, slashes and commas that sit between alphanumerics.
fn split_infixes(source: &str, start: usize, end: usize, out: &mut Vec<Token>) {
    let chunk = &source[start..end];
    if is_abbreviation(chunk) {
        out.push(Token::new(source, start, end));
        return;
    }

    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut piece_start = 0;
    for i in 1..chars.len().saturating_sub(1) {
        let (offset, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars[i + 1].1;
        let is_infix = match c {
            '-' | '/' => prev.is_alphabetic() && next.is_alphanumeric(),
            ',' => prev.is_alphabetic() && next.is_alphabetic(),
            _ => false,
        };
        if is_infix {
            if piece_start < offset {
                out.push(Token::new(source, start + piece_start, start + offset));
            }
            out.push(Token::new(source, start + offset, start + offset + c.len_utf8()));
            piece_start = offset + c.len_utf8();
        }
    }
    if piece_start < chunk.len() {
        out.push(Token::new(source, start + piece_start, end));
    }
}

fn special_case(chunk: &str) -> Option<&'static [usize]> {
    let lower = chunk.to_lowercase();
    SPECIAL_CASES
        .iter()
        .find(|(form, _)| *form == lower)
        .map(|(_, splits)| *splits)
}

fn is_abbreviation(chunk: &str) -> bool {
    let lower = chunk.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    // Initials such as "J." or "A.B.".
    let mut chars = chunk.chars();
    let pairs_of_letter_period = chunk.len() >= 2
        && chunk.len() % 2 == 0
        && (0..chunk.len() / 2).all(|_| {
            matches!((chars.next(), chars.next()), (Some(l), Some('.')) if l.is_alphabetic())
        });
    pairs_of_letter_period && chunk.chars().next().is_some_and(char::is_uppercase)
}

/// Group pipeline tokens into sentences and return each sentence's text.
pub fn pipeline_sentences(text: &str, tokens: &[Token]) -> Vec<String> {
    sentence_token_ranges(tokens)
        .into_iter()
        .map(|(first, last)| text[tokens[first].start..tokens[last].end].to_string())
        .collect()
}

/// Inclusive token index ranges of each sentence.
pub fn sentence_token_ranges(tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut first = 0;
    let mut i = 0;

    while i < tokens.len() {
        let is_terminal = !tokens[i].text.is_empty()
            && tokens[i].text.chars().all(|c| SENTENCE_FINAL.contains(&c));
        if is_terminal {
            let mut last = i;
            // Closing marks glued to the terminator stay in this sentence.
            while last + 1 < tokens.len()
                && tokens[last + 1].start == tokens[last].end
                && tokens[last + 1]
                    .text
                    .chars()
                    .all(|c| CLOSING.contains(&c) || SENTENCE_FINAL.contains(&c))
            {
                last += 1;
            }
            ranges.push((first, last));
            first = last + 1;
            i = last + 1;
            continue;
        }
        i += 1;
    }
    if first < tokens.len() {
        ranges.push((first, tokens.len() - 1));
    }
    ranges
}
