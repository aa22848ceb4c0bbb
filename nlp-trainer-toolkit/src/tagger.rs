//! Rule-based part-of-speech tagger.
//!
//! Tagging runs in two passes, Brill style: every token first receives a
//! Penn Treebank tag from the lexicon, closed-class tables or its shape and
//! suffix, then a small set of contextual rules repairs the usual
//! noun/verb and past-tense/participle confusions. Universal POS tags are
//! derived from the Penn tags for the pipeline style.

use std::collections::{HashMap, HashSet};

use crate::tokenize::like_number;

/// Penn Treebank tagger over a fixed English lexicon.
#[derive(Debug, Clone)]
pub struct Tagger {
    lexicon: HashMap<&'static str, &'static str>,
    noun_verb: HashSet<&'static str>,
    proper_nouns: HashSet<&'static str>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            noun_verb: NOUN_VERB.iter().copied().collect(),
            proper_nouns: crate::entities::gazetteer_words().collect(),
        }
    }

    /// Look up the lexicon tag of a lower-cased word.
    pub fn lexicon_tag(&self, lower: &str) -> Option<&'static str> {
        self.lexicon.get(lower).copied()
    }

    /// Tag a token sequence. The returned vector is parallel to `tokens`.
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&'static str> {
        let words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let sentence_start = i == 0 || is_sentence_break(words[i - 1]);
            tags.push(self.initial_tag(word, sentence_start));
        }
        self.apply_context_rules(&words, &mut tags);
        tags
    }

    fn initial_tag(&self, word: &str, sentence_start: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(word) {
            return tag;
        }
        if like_number(word) {
            return "CD";
        }

        let lower = word.to_lowercase();
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let lexical = self.lexicon.get(lower.as_str()).copied();

        if word.chars().count() > 1 && word.chars().all(|c| c.is_uppercase() || c == '.') {
            return if word.ends_with('s') { "NNPS" } else { "NNP" };
        }
        if capitalized && word.chars().any(|c| c.is_alphabetic()) {
            match lexical {
                Some(tag) if sentence_start || is_closed_class(tag) || lower == "i" => {
                    return tag
                }
                // Sentence-initial capitals only mark names the gazetteers know.
                None if sentence_start && !self.proper_nouns.contains(word) => {
                    return suffix_tag(&lower);
                }
                _ => return "NNP",
            }
        }
        if let Some(tag) = lexical {
            return tag;
        }
        suffix_tag(&lower)
    }

    fn is_noun_verb(&self, lower: &str) -> bool {
        if self.noun_verb.contains(lower) {
            return true;
        }
        strip_verb_s(lower).is_some_and(|stem| self.noun_verb.contains(stem))
    }

    fn apply_context_rules(&self, words: &[&str], tags: &mut [&'static str]) {
        for i in 0..words.len() {
            let lower = words[i].to_lowercase();
            let prev = previous_content(tags, i);
            let prev_word = prev.map(|p| words[p].to_lowercase());
            let prev_tag = prev.map(|p| tags[p]);

            // Noun/verb ambiguity resolved from the left neighbour.
            if self.is_noun_verb(&lower) && !words[i].starts_with(char::is_uppercase) {
                let third_person = strip_verb_s(&lower).is_some();
                tags[i] = match prev_tag {
                    Some("TO") | Some("MD") => "VB",
                    Some("PRP") if matches!(prev_word.as_deref(), Some("he" | "she" | "it")) => {
                        if third_person {
                            "VBZ"
                        } else {
                            "VBD"
                        }
                    }
                    Some("PRP") | Some("WP") | Some("NNS") => {
                        if strip_verb_s(&lower).is_some() {
                            tags[i]
                        } else {
                            "VBP"
                        }
                    }
                    Some("NN") | Some("NNP") if strip_verb_s(&lower).is_some() => "VBZ",
                    Some("DT") | Some("PRP$") | Some("JJ") | Some("POS") | Some("IN") => {
                        if strip_verb_s(&lower).is_some() {
                            "NNS"
                        } else {
                            "NN"
                        }
                    }
                    _ => tags[i],
                };
            }

            match tags[i] {
                // Base verbs after a subject are present tense.
                "VB" => {
                    if matches!(prev_tag, Some("PRP" | "NNS" | "NNP" | "WP"))
                        && !matches!(prev_word.as_deref(), Some("me" | "him" | "us" | "them"))
                    {
                        tags[i] = "VBP";
                    }
                }
                // Past forms after have/be are participles.
                "VBD" => {
                    if prev_word.as_deref().is_some_and(is_have_or_be) {
                        tags[i] = "VBN";
                    } else if matches!(prev_tag, Some("DT")) {
                        tags[i] = "JJ";
                    }
                }
                _ => {}
            }

            match lower.as_str() {
                "'s" => {
                    tags[i] = if matches!(prev_tag, Some("PRP" | "EX" | "WP" | "DT")) {
                        "VBZ"
                    } else {
                        "POS"
                    };
                }
                "that" => {
                    if matches!(prev_tag, Some("NN" | "NNS" | "NNP")) {
                        tags[i] = "WDT";
                    } else if words
                        .get(i + 1)
                        .map(|w| w.to_lowercase())
                        .is_some_and(|next| matches!(next.as_str(), "is" | "was" | "'s" | "."))
                    {
                        tags[i] = "DT";
                    }
                }
                "there" => {
                    let next = words.get(i + 1).map(|w| w.to_lowercase());
                    if next.as_deref().is_some_and(is_have_or_be) {
                        tags[i] = "EX";
                    }
                }
                "like" if matches!(prev_tag, Some("PRP" | "NNS" | "MD" | "TO")) => {
                    tags[i] = if matches!(prev_tag, Some("MD" | "TO")) { "VB" } else { "VBP" };
                }
                _ => {}
            }

            // A gerund directly after a determiner names a thing.
            if tags[i] == "VBG" && matches!(prev_tag, Some("DT" | "PRP$")) {
                tags[i] = "NN";
            }
        }
    }
}

fn previous_content(tags: &[&str], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !matches!(tags[j], "RB" | "``" | "''"))
}

fn is_have_or_be(word: &str) -> bool {
    matches!(
        word,
        "is" | "are" | "am" | "was" | "were" | "be" | "been" | "being" | "'s" | "'re" | "'m"
            | "has" | "have" | "had" | "having" | "'ve" | "'d"
    )
}

fn is_sentence_break(previous: &str) -> bool {
    matches!(previous, "." | "!" | "?" | "``" | "\"" | ":" | "(")
}

fn is_closed_class(tag: &str) -> bool {
    matches!(
        tag,
        "DT" | "PRP" | "PRP$" | "IN" | "CC" | "TO" | "MD" | "WDT" | "WP" | "WP$" | "WRB" | "EX"
    )
}

/// Strip a third-person `-s`/`-es`, returning the stem when the word has one.
fn strip_verb_s(lower: &str) -> Option<&str> {
    if lower.len() < 3 || lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is")
    {
        return None;
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if stem.ends_with("ch") || stem.ends_with("sh") || stem.ends_with('x') || stem.ends_with('s')
        {
            return Some(stem);
        }
    }
    lower.strip_suffix('s')
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    let tag = match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "--" | "-" | "..." | "\u{2026}" | "\u{2013}" | "\u{2014}" => ":",
        "``" | "\"" | "\u{201C}" | "'" | "\u{2018}" => "``",
        "''" | "\u{201D}" | "\u{2019}" => "''",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "$" | "\u{00A3}" | "\u{20AC}" => "$",
        "#" => "#",
        "&" => "CC",
        "%" => "NN",
        _ if !word.is_empty() && word.chars().all(|c| c.is_ascii_punctuation()) => ":",
        _ => return None,
    };
    Some(tag)
}

fn suffix_tag(lower: &str) -> &'static str {
    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "hood", "ist",
        "ogy", "ery", "age", "ure", "dom",
    ];
    const ADJ_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ary", "ish", "ical", "ant",
        "ent", "ile",
    ];

    if lower.ends_with("ly") && lower.len() > 4 {
        return "RB";
    }
    if lower.ends_with("ing") && lower.len() > 4 {
        return "VBG";
    }
    if lower.ends_with("ed") && lower.len() > 3 {
        return "VBD";
    }
    if lower.ends_with("est") && lower.len() > 5 {
        return "JJS";
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if NOUN_SUFFIXES.iter().any(|s| stem.ends_with(s)) {
            return "NNS";
        }
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "NN";
    }
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "JJ";
    }
    if lower.contains('-') {
        return "JJ";
    }
    if strip_verb_s(lower).is_some() {
        return "NNS";
    }
    "NN"
}

/// Map a Penn Treebank tag to its Universal POS tag.
///
/// `next_tag` is the following token's Penn tag and decides whether a form
/// of `have` or `do` is an auxiliary or a main verb.
pub fn universal_tag(word: &str, penn: &str, next_tag: Option<&str>) -> &'static str {
    let lower = word.to_lowercase();
    match penn {
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "MD" => "AUX",
        tag if tag.starts_with("VB") => {
            if is_be(&lower) {
                "AUX"
            } else if is_have_or_do(&lower) && next_tag.is_some_and(|t| t.starts_with("VB")) {
                "AUX"
            } else {
                "VERB"
            }
        }
        "JJ" | "JJR" | "JJS" => "ADJ",
        "RB" | "RBR" | "RBS" | "WRB" => {
            if matches!(lower.as_str(), "not" | "n't" | "n\u{2019}t") {
                "PART"
            } else {
                "ADV"
            }
        }
        "DT" | "PDT" | "WDT" => "DET",
        "IN" => {
            if SUBORDINATORS.contains(&lower.as_str()) {
                "SCONJ"
            } else {
                "ADP"
            }
        }
        "CC" => "CCONJ",
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => "PRON",
        "CD" => "NUM",
        "TO" | "POS" => "PART",
        "RP" => "ADP",
        "UH" => "INTJ",
        "$" | "#" => "SYM",
        "FW" => "X",
        "." | "," | ":" | "``" | "''" | "(" | ")" => "PUNCT",
        _ => "X",
    }
}

fn is_be(lower: &str) -> bool {
    matches!(
        lower,
        "is" | "are" | "am" | "was" | "were" | "be" | "been" | "being" | "'s" | "'re" | "'m"
    )
}

fn is_have_or_do(lower: &str) -> bool {
    matches!(
        lower,
        "has" | "have" | "had" | "having" | "'ve" | "'d" | "do" | "does" | "did"
    )
}

const SUBORDINATORS: &[&str] = &[
    "because", "if", "that", "while", "although", "though", "since", "unless", "whether",
    "until", "as", "once",
];

/// Words that are both common nouns and common verbs. Their lexicon entry
/// is the noun reading; the contextual rules pick the verb reading.
const NOUN_VERB: &[&str] = &[
    "love", "read", "work", "use", "need", "run", "walk", "play", "study", "help", "change",
    "process", "test", "build", "model", "train", "answer", "show", "start", "look", "place",
    "report", "form", "drive", "focus", "address", "store", "jump", "plan", "design", "set",
    "call", "state", "hope", "result", "offer", "point", "rate", "request", "respond",
    "return", "search", "share", "sound", "step", "support", "talk", "turn", "view", "visit",
    "want", "watch", "name", "book", "end", "face", "fear", "hate", "interest", "note",
    "order", "rely", "record", "release", "review", "score", "sign", "try", "vote", "word",
    "rank", "tag", "chunk", "parse", "label", "exceed",
];

const LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("these", "DT"),
    ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"), ("any", "DT"),
    ("no", "DT"), ("all", "DT"), ("both", "DT"), ("another", "DT"), ("either", "DT"),
    ("neither", "DT"),
    // Pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"), ("we", "PRP"),
    ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP$"), ("us", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"), ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("which", "WDT"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // Prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("through", "IN"), ("during", "IN"),
    ("without", "IN"), ("within", "IN"), ("between", "IN"), ("among", "IN"),
    ("against", "IN"), ("upon", "IN"), ("since", "IN"), ("because", "IN"),
    ("although", "IN"), ("though", "IN"), ("while", "IN"), ("if", "IN"), ("than", "IN"),
    ("as", "IN"), ("like", "IN"), ("until", "IN"), ("unless", "IN"), ("whether", "IN"),
    ("per", "IN"), ("via", "IN"), ("despite", "IN"), ("toward", "IN"), ("towards", "IN"),
    ("across", "IN"), ("behind", "IN"), ("beyond", "IN"), ("above", "IN"), ("below", "IN"),
    ("near", "IN"), ("out", "IN"), ("that", "IN"), ("off", "IN"), ("around", "IN"),
    // Conjunctions, particles, modals
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("to", "TO"), ("can", "MD"),
    ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"), ("should", "MD"),
    ("may", "MD"), ("might", "MD"), ("must", "MD"), ("ca", "MD"), ("wo", "MD"),
    ("'ll", "MD"), ("'d", "MD"),
    // be / have / do
    ("be", "VB"), ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("having", "VBG"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    ("done", "VBN"), ("doing", "VBG"), ("'re", "VBP"), ("'m", "VBP"), ("'ve", "VBP"),
    ("'s", "POS"),
    // Adverbs
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
    ("just", "RB"), ("only", "RB"), ("even", "RB"), ("still", "RB"), ("never", "RB"),
    ("always", "RB"), ("often", "RB"), ("sometimes", "RB"), ("already", "RB"),
    ("here", "RB"), ("there", "RB"), ("now", "RB"), ("then", "RB"), ("again", "RB"),
    ("ever", "RB"), ("soon", "RB"), ("so", "RB"), ("well", "RB"), ("almost", "RB"),
    ("quite", "RB"), ("rather", "RB"), ("perhaps", "RB"), ("together", "RB"),
    ("however", "RB"), ("thus", "RB"), ("yet", "RB"), ("away", "RB"), ("back", "RB"),
    ("more", "JJR"), ("most", "JJS"), ("less", "JJR"), ("least", "JJS"),
    // Adjectives
    ("quick", "JJ"), ("brown", "JJ"), ("lazy", "JJ"), ("new", "JJ"), ("old", "JJ"),
    ("good", "JJ"), ("great", "JJ"), ("bad", "JJ"), ("big", "JJ"), ("small", "JJ"),
    ("large", "JJ"), ("little", "JJ"), ("high", "JJ"), ("low", "JJ"), ("long", "JJ"),
    ("short", "JJ"), ("important", "JJ"), ("different", "JJ"), ("same", "JJ"),
    ("other", "JJ"), ("own", "JJ"), ("natural", "JJ"), ("artificial", "JJ"),
    ("human", "JJ"), ("interesting", "JJ"), ("amazing", "JJ"), ("excellent", "JJ"),
    ("outstanding", "JJ"), ("simple", "JJ"), ("real", "JJ"), ("free", "JJ"),
    ("medical", "JJ"), ("valuable", "JJ"), ("ultimate", "JJ"), ("deep", "JJ"),
    ("tremendous", "JJ"), ("possible", "JJ"), ("many", "JJ"), ("much", "JJ"), ("few", "JJ"),
    ("several", "JJ"), ("best", "JJS"), ("better", "JJR"), ("worse", "JJR"),
    ("worst", "JJS"), ("first", "JJ"), ("last", "JJ"), ("next", "JJ"), ("happy", "JJ"),
    ("sad", "JJ"), ("nice", "JJ"), ("fast", "JJ"), ("sleepy", "JJ"), ("full", "JJ"),
    ("whole", "JJ"), ("able", "JJ"), ("early", "JJ"), ("late", "JJ"), ("easy", "JJ"),
    ("hard", "JJ"), ("free-text", "JJ"), ("key", "JJ"), ("main", "JJ"), ("such", "JJ"),
    // Nouns
    ("time", "NN"), ("people", "NNS"), ("way", "NN"), ("day", "NN"), ("man", "NN"),
    ("men", "NNS"), ("woman", "NN"), ("women", "NNS"), ("child", "NN"),
    ("children", "NNS"), ("thing", "NN"), ("world", "NN"), ("life", "NN"), ("hand", "NN"),
    ("part", "NN"), ("eye", "NN"), ("case", "NN"), ("company", "NN"), ("number", "NN"),
    ("group", "NN"), ("problem", "NN"), ("fact", "NN"), ("text", "NN"), ("language", "NN"),
    ("data", "NNS"), ("information", "NN"), ("computer", "NN"), ("field", "NN"),
    ("science", "NN"), ("intelligence", "NN"), ("sentence", "NN"), ("dog", "NN"),
    ("fox", "NN"), ("cat", "NN"), ("garden", "NN"), ("food", "NN"), ("product", "NN"),
    ("service", "NN"), ("quality", "NN"), ("owner", "NN"), ("speaker", "NN"),
    ("writer", "NN"), ("meaning", "NN"), ("intent", "NN"), ("voice", "NN"),
    ("subfield", "NN"), ("subset", "NN"), ("experience", "NN"), ("study", "NN"),
    ("algorithm", "NN"), ("canine", "NN"), ("park", "NN"), ("press", "NN"),
    ("conference", "NN"), ("year", "NN"), ("week", "NN"), ("month", "NN"), ("home", "NN"),
    ("school", "NN"), ("country", "NN"), ("city", "NN"), ("house", "NN"), ("money", "NN"),
    ("water", "NN"), ("room", "NN"), ("idea", "NN"), ("sample", "NN"), ("token", "NN"),
    ("system", "NN"), ("amount", "NN"), ("file", "NN"), ("record", "NN"), ("branch", "NN"),
    ("technique", "NN"), ("task", "NN"), ("translation", "NN"), ("recognition", "NN"),
    ("word", "NN"), ("love", "NN"), ("work", "NN"), ("use", "NN"), ("need", "NN"),
    ("run", "NN"), ("walk", "NN"), ("play", "NN"), ("help", "NN"), ("change", "NN"),
    ("process", "NN"), ("test", "NN"), ("model", "NN"), ("answer", "NN"), ("show", "NN"),
    ("start", "NN"), ("look", "NN"), ("place", "NN"), ("report", "NN"), ("form", "NN"),
    ("focus", "NN"), ("address", "NN"), ("store", "NN"), ("jump", "NN"), ("plan", "NN"),
    ("design", "NN"), ("book", "NN"), ("result", "NN"), ("point", "NN"),
    // Common verbs
    ("get", "VB"), ("make", "VB"), ("go", "VB"), ("know", "VB"), ("take", "VB"),
    ("see", "VB"), ("come", "VB"), ("think", "VB"), ("want", "VB"), ("give", "VB"),
    ("find", "VB"), ("tell", "VB"), ("ask", "VB"), ("seem", "VB"), ("feel", "VB"),
    ("leave", "VB"), ("keep", "VB"), ("let", "VB"), ("begin", "VB"), ("understand", "VB"),
    ("include", "VB"), ("enable", "VB"), ("derive", "VB"), ("decipher", "VB"),
    ("translate", "VB"), ("summarize", "VB"), ("analyze", "VB"), ("improve", "VB"),
    ("combine", "VB"), ("involve", "VB"), ("eat", "VB"), ("write", "VB"), ("say", "VB"),
    ("went", "VBD"), ("ran", "VBD"), ("ate", "VBD"), ("made", "VBD"), ("said", "VBD"),
    ("took", "VBD"), ("came", "VBD"), ("saw", "VBD"), ("knew", "VBD"), ("thought", "VBD"),
    ("found", "VBD"), ("gave", "VBD"), ("told", "VBD"), ("became", "VBD"), ("left", "VBD"),
    ("felt", "VBD"), ("brought", "VBD"), ("began", "VBD"), ("kept", "VBD"), ("held", "VBD"),
    ("wrote", "VBD"), ("stood", "VBD"), ("heard", "VBD"), ("meant", "VBD"), ("met", "VBD"),
    ("paid", "VBD"), ("built", "VBD"), ("sent", "VBD"), ("led", "VBD"), ("gone", "VBN"),
    ("taken", "VBN"), ("seen", "VBN"), ("known", "VBN"), ("given", "VBN"),
    ("written", "VBN"), ("eaten", "VBN"), ("shown", "VBN"), ("begun", "VBN"),
    ("broken", "VBN"), ("chosen", "VBN"), ("driven", "VBN"), ("spoken", "VBN"),
    ("fallen", "VBN"), ("grown", "VBN"), ("thrown", "VBN"),
    // Interjections
    ("hello", "UH"), ("hi", "UH"), ("oh", "UH"), ("yes", "UH"), ("wow", "UH"),
    ("please", "UH"), ("thanks", "UH"),
];
