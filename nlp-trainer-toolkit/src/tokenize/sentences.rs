//! Punkt-style sentence boundary detection.

const TERMINATORS: &[char] = &['.', '!', '?', '\u{2026}'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '\u{201C}', '\u{2018}', '\u{00AB}'];

/// Abbreviations that never end a sentence when followed by a period.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "gen", "gov", "sen", "rep",
    "capt", "col", "lt", "sgt", "rev", "hon", "fig", "no", "dept", "univ", "approx", "est",
    "mt", "ft", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "e.g", "i.e", "cf", "al",
];

/// Abbreviations that may also close a sentence when the next word is capitalized.
const TERMINAL_ABBREVIATIONS: &[&str] = &["etc", "inc", "ltd", "co", "corp", "llc", "u.s", "u.k", "a.m", "p.m"];

/// Split `text` into trimmed sentence strings, in order.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_spans(text)
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect()
}

/// Byte spans of each sentence with surrounding whitespace excluded.
pub fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i].1;
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        let run = j - i;
        let ends_with_period_run = chars[i..j].iter().all(|(_, ch)| *ch == '.');
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        // A terminator glued to the next character ("3.5", "e.g.x") is not a boundary.
        if j < chars.len() && !chars[j].1.is_whitespace() {
            i = j;
            continue;
        }

        let end = chars.get(j).map(|(b, _)| *b).unwrap_or(text.len());
        let next = chars[j..]
            .iter()
            .map(|(_, ch)| *ch)
            .find(|ch| !ch.is_whitespace() && !OPENERS.contains(ch));

        let split = match next {
            None => true,
            Some(next_char) if ends_with_period_run && run == 1 => {
                match classify_word_before(text, chars[i].0) {
                    WordBefore::Title | WordBefore::Initial => false,
                    WordBefore::TerminalAbbreviation => next_char.is_uppercase(),
                    WordBefore::Plain => true,
                }
            }
            Some(next_char) if ends_with_period_run || c == '\u{2026}' => next_char.is_uppercase(),
            Some(_) => true,
        };

        if split {
            push_span(text, start, end, &mut spans);
            start = end;
        }
        i = j;
    }

    push_span(text, start, text.len(), &mut spans);
    spans
}

enum WordBefore {
    Title,
    Initial,
    TerminalAbbreviation,
    Plain,
}

fn classify_word_before(text: &str, period_at: usize) -> WordBefore {
    let before = &text[..period_at];
    let word_start = before
        .rfind(char::is_whitespace)
        .map(|idx| idx + before[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let word = before[word_start..].trim_start_matches(OPENERS);
    let lower = word.to_lowercase();

    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return WordBefore::Initial;
    }
    if TITLES.contains(&lower.as_str()) {
        return WordBefore::Title;
    }
    if TERMINAL_ABBREVIATIONS.contains(&lower.as_str()) || (lower.contains('.') && lower.len() <= 5) {
        return WordBefore::TerminalAbbreviation;
    }
    WordBefore::Plain
}

fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let slice = &text[start..end];
    let trimmed_start = start + (slice.len() - slice.trim_start().len());
    let trimmed_end = end - (slice.len() - slice.trim_end().len());
    if trimmed_start < trimmed_end {
        spans.push((trimmed_start, trimmed_end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_terminators() {
        let sentences = split_sentences("The quick brown fox jumps. Is it lazy? Yes!");
        assert_eq!(sentences, vec!["The quick brown fox jumps.", "Is it lazy?", "Yes!"]);
    }

    #[test]
    fn keeps_titles_and_initials_together() {
        let sentences = split_sentences("Dr. Smith met J. R. Tolkien. They talked.");
        assert_eq!(sentences, vec!["Dr. Smith met J. R. Tolkien.", "They talked."]);
    }

    #[test]
    fn corporate_suffix_before_lowercase_is_not_a_boundary() {
        let sentences = split_sentences("Apple Inc. was founded by Steve Jobs. Microsoft followed.");
        assert_eq!(
            sentences,
            vec!["Apple Inc. was founded by Steve Jobs.", "Microsoft followed."]
        );
    }

    #[test]
    fn decimals_and_closing_quotes() {
        let sentences = split_sentences("He said \"it costs 3.5 dollars.\" Then he left.");
        assert_eq!(
            sentences,
            vec!["He said \"it costs 3.5 dollars.\"", "Then he left."]
        );
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("  hello world  "), vec!["hello world"]);
        assert!(split_sentences("   ").is_empty());
    }
}
