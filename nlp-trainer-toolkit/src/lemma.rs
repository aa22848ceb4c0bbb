//! Lemmatizers for the two toolkit styles.
//!
//! The classic lemmatizer only knows noun morphology, exactly like a
//! dictionary lemmatizer called without a part of speech: verbs and
//! adjectives come back unchanged and case is preserved. The pipeline
//! lemmatizer is driven by Universal POS tags and lower-cases everything
//! except proper nouns.

use std::collections::{HashMap, HashSet};

/// Noun-only lemmatizer with an exception table for irregular plurals.
#[derive(Debug, Clone)]
pub struct ClassicLemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for ClassicLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicLemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            invariant: S_FINAL_WORDS.iter().copied().collect(),
        }
    }

    /// Lemmatize one token as a noun. Only lower-case words are reduced,
    /// matching a dictionary lookup that is case sensitive.
    pub fn lemmatize(&self, word: &str) -> String {
        if !word.chars().all(|c| c.is_lowercase() || c == '-') {
            return word.to_string();
        }
        if let Some(lemma) = self.exceptions.get(word) {
            return (*lemma).to_string();
        }
        if self.invariant.contains(word) {
            return word.to_string();
        }
        noun_singular(word).unwrap_or_else(|| word.to_string())
    }
}

/// Detachment rules for regular noun plurals, most specific first.
fn noun_singular(word: &str) -> Option<String> {
    if word.len() <= 3 || !word.ends_with('s') {
        return None;
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    const RULES: &[(&str, &str)] = &[
        ("ches", "ch"),
        ("shes", "sh"),
        ("sses", "ss"),
        ("xes", "x"),
        ("zes", "z"),
        ("ies", "y"),
        ("s", ""),
    ];
    RULES.iter().find_map(|(suffix, replacement)| {
        word.strip_suffix(suffix)
            .filter(|stem| stem.len() >= 2)
            .map(|stem| format!("{}{}", stem, replacement))
    })
}

/// POS-aware lemmatizer for the pipeline style.
#[derive(Debug, Clone)]
pub struct PipelineLemmatizer {
    verbs: HashMap<&'static str, &'static str>,
    nouns: HashMap<&'static str, &'static str>,
    adjectives: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for PipelineLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLemmatizer {
    pub fn new() -> Self {
        Self {
            verbs: VERB_EXCEPTIONS.iter().copied().collect(),
            nouns: NOUN_EXCEPTIONS.iter().copied().collect(),
            adjectives: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
            invariant: S_FINAL_WORDS.iter().copied().collect(),
        }
    }

    /// Lemmatize a token given its Universal POS tag.
    pub fn lemmatize(&self, word: &str, upos: &str) -> String {
        if upos == "PROPN" {
            return word.to_string();
        }
        let lower = word.to_lowercase();
        match upos {
            "VERB" | "AUX" => self.verb(&lower),
            "NOUN" => self
                .nouns
                .get(lower.as_str())
                .map(|l| (*l).to_string())
                .or_else(|| {
                    if self.invariant.contains(lower.as_str()) {
                        None
                    } else {
                        noun_singular(&lower)
                    }
                })
                .unwrap_or(lower),
            "ADJ" | "ADV" => self.adjective(&lower),
            "PART" if lower == "n't" || lower == "n\u{2019}t" => "not".to_string(),
            _ => lower,
        }
    }

    fn verb(&self, lower: &str) -> String {
        if let Some(lemma) = self.verbs.get(lower) {
            return (*lemma).to_string();
        }
        if let Some(stem) = lower.strip_suffix("ing").filter(|s| s.len() >= 2) {
            return restore_stem(stem);
        }
        if let Some(stem) = lower.strip_suffix("ied") {
            return format!("{}y", stem);
        }
        if let Some(stem) = lower.strip_suffix("ed").filter(|s| s.len() >= 2) {
            return restore_stem(stem);
        }
        if let Some(stem) = lower.strip_suffix("ies").filter(|s| s.len() >= 2) {
            return format!("{}y", stem);
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if ["ch", "sh", "ss", "x", "z", "o"].iter().any(|e| stem.ends_with(e)) {
                return stem.to_string();
            }
        }
        if lower.len() > 2 && lower.ends_with('s') && !lower.ends_with("ss") {
            return lower[..lower.len() - 1].to_string();
        }
        lower.to_string()
    }

    fn adjective(&self, lower: &str) -> String {
        if let Some(lemma) = self.adjectives.get(lower) {
            return (*lemma).to_string();
        }
        lower.to_string()
    }
}

/// Undo consonant doubling and restore a dropped final `e` after an
/// `-ing`/`-ed` suffix has been stripped.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');

    if n >= 3 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
        if !matches!(chars[n - 1], 'l' | 's' | 'z' | 'f') {
            return chars[..n - 1].iter().collect();
        }
        return stem.to_string();
    }

    const E_ENDINGS: &[&str] = &[
        "at", "iz", "is", "ar", "ur", "ir", "iv", "av", "ov", "uc", "ac", "ic", "ud", "ut",
        "um", "ym", "bl", "pl", "tl", "dl", "gl", "rg", "rv", "lv", "ps", "rs", "ns", "anc",
        "enc", "uag",
    ];
    let short_cvc = n == 3
        && !is_vowel(chars[0])
        && is_vowel(chars[1])
        && !is_vowel(chars[2])
        && !matches!(chars[2], 'w' | 'x' | 'y');
    // The letter before a two-letter ending must be a consonant: "prepar" but not "appear".
    let restores_e = n > 3
        && E_ENDINGS.iter().any(|e| {
            stem.ends_with(e) && (e.len() > 2 || !is_vowel(chars[n - 3]))
        });
    if short_cvc || restores_e {
        return format!("{}e", stem);
    }
    stem.to_string()
}

/// Words ending in `s` that are not plurals.
const S_FINAL_WORDS: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "economics", "linguistics",
    "statistics", "always", "perhaps", "this", "was", "has", "is", "its", "his", "us", "yes",
    "thus", "plus", "bus", "gas", "lens", "chaos", "towards", "afterwards", "whereas", "besides",
    "less", "unless", "analysis", "basis", "thesis", "crisis", "status", "corpus", "focus",
    "bonus", "virus", "campus", "census", "bias", "alias", "atlas", "canvas", "does", "goes",
    "sometimes", "various", "previous", "famous", "serious", "obvious", "numerous", "across",
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"),
    ("oxen", "ox"), ("people", "people"), ("data", "data"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("analyses", "analysis"), ("theses", "thesis"),
    ("crises", "crisis"), ("indices", "index"), ("matrices", "matrix"), ("vertices", "vertex"),
    ("wolves", "wolf"), ("leaves", "leaf"), ("knives", "knife"), ("wives", "wife"),
    ("lives", "life"), ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"),
    ("corpora", "corpus"), ("cacti", "cactus"), ("fungi", "fungus"), ("alumni", "alumnus"),
    ("movies", "movie"), ("cookies", "cookie"), ("species", "species"), ("series", "series"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"), ("are", "be"), ("am", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'s", "be"), ("'re", "be"), ("'m", "be"), ("has", "have"),
    ("had", "have"), ("having", "have"), ("'ve", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("doing", "do"), ("'ll", "will"), ("'d", "would"), ("ca", "can"),
    ("wo", "will"), ("went", "go"), ("gone", "go"), ("goes", "go"), ("ran", "run"),
    ("ate", "eat"), ("eaten", "eat"), ("made", "make"), ("making", "make"), ("said", "say"),
    ("took", "take"), ("taken", "take"), ("taking", "take"), ("came", "come"),
    ("coming", "come"), ("saw", "see"), ("seen", "see"), ("knew", "know"), ("known", "know"),
    ("thought", "think"), ("found", "find"), ("gave", "give"), ("given", "give"),
    ("giving", "give"), ("told", "tell"), ("became", "become"), ("left", "leave"),
    ("felt", "feel"), ("brought", "bring"), ("began", "begin"), ("begun", "begin"),
    ("kept", "keep"), ("held", "hold"), ("wrote", "write"), ("written", "write"),
    ("writing", "write"), ("stood", "stand"), ("heard", "hear"), ("meant", "mean"),
    ("met", "meet"), ("paid", "pay"), ("built", "build"), ("sent", "send"), ("led", "lead"),
    ("read", "read"), ("spoken", "speak"), ("spoke", "speak"), ("chose", "choose"),
    ("chosen", "choose"), ("drove", "drive"), ("driven", "drive"), ("fell", "fall"),
    ("fallen", "fall"), ("grew", "grow"), ("grown", "grow"), ("threw", "throw"),
    ("thrown", "throw"), ("broke", "break"), ("broken", "break"), ("shown", "show"),
    ("using", "use"), ("used", "use"), ("having", "have"), ("lying", "lie"), ("dying", "die"),
    ("tied", "tie"), ("seeing", "see"), ("being", "be"), ("fed", "feed"), ("sat", "sit"),
    ("won", "win"), ("lost", "lose"), ("sold", "sell"), ("understood", "understand"),
    ("prepared", "prepare"), ("preparing", "prepare"), ("exceeded", "exceed"),
    ("founded", "found"), ("headquartered", "headquarter"), ("focuses", "focus"),
    ("focused", "focus"), ("processing", "process"), ("processed", "process"),
    ("visited", "visit"), ("opening", "open"), ("opened", "open"), ("happened", "happen"),
    ("listening", "listen"), ("considered", "consider"), ("offered", "offer"),
    ("answered", "answer"), ("entered", "enter"), ("covered", "cover"),
    ("created", "create"), ("creating", "create"), ("required", "require"),
    ("acquired", "acquire"), ("treated", "treat"), ("repeated", "repeat"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("more", "more"), ("most", "most"), ("less", "less"), ("least", "least"),
    ("bigger", "big"), ("biggest", "big"), ("larger", "large"), ("largest", "large"),
    ("smaller", "small"), ("smallest", "small"), ("faster", "fast"), ("fastest", "fast"),
    ("easier", "easy"), ("easiest", "easy"), ("happier", "happy"), ("happiest", "happy"),
    ("higher", "high"), ("highest", "high"), ("lower", "low"), ("lowest", "low"),
    ("longer", "long"), ("longest", "long"), ("greater", "great"), ("greatest", "great"),
    ("quicker", "quick"), ("quickest", "quick"), ("older", "old"), ("oldest", "old"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cats", "cats", "cat")]
    #[case("churches", "churches", "church")]
    #[case("studies", "studies", "study")]
    #[case("children", "children", "child")]
    #[case("glass", "glass", "glass")]
    #[case("running", "running", "running")]
    #[case("Cats", "Cats", "Cats")]
    #[case("analysis", "analysis", "analysis")]
    fn classic_noun_morphology(#[case] word: &str, #[case] _surface: &str, #[case] lemma: &str) {
        assert_eq!(ClassicLemmatizer::new().lemmatize(word), lemma);
    }

    #[rstest]
    #[case("running", "VERB", "run")]
    #[case("making", "VERB", "make")]
    #[case("walking", "VERB", "walk")]
    #[case("eating", "VERB", "eat")]
    #[case("were", "AUX", "be")]
    #[case("prepared", "VERB", "prepare")]
    #[case("created", "VERB", "create")]
    #[case("stopped", "VERB", "stop")]
    #[case("carried", "VERB", "carry")]
    #[case("jumps", "VERB", "jump")]
    #[case("owners", "NOUN", "owner")]
    #[case("The", "DET", "the")]
    #[case("Paris", "PROPN", "Paris")]
    #[case("better", "ADJ", "good")]
    #[case("n't", "PART", "not")]
    fn pipeline_lemmas(#[case] word: &str, #[case] upos: &str, #[case] lemma: &str) {
        assert_eq!(PipelineLemmatizer::new().lemmatize(word, upos), lemma);
    }
}
