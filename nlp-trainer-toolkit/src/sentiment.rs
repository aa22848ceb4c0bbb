//! Lexicon and rule-based sentiment scoring (VADER).
//!
//! Each token gets a valence from the lexicon, adjusted for preceding
//! boosters and dampeners, negations, capitalisation emphasis and a few
//! idioms. Valences after "but" weigh more than those before it, and
//! exclamation or question marks amplify the total before normalisation.

use std::collections::HashMap;

use nlp_trainer_core::domain::SentimentScores;

/// Empirically derived increment for booster words.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// Increment for an all-caps sentiment word in mixed-case text.
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;

/// VADER sentiment analyzer over a fixed lexicon.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let boosters = INCREMENTS
            .iter()
            .map(|w| (*w, B_INCR))
            .chain(DECREMENTS.iter().map(|w| (*w, B_DECR)))
            .collect();
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters,
        }
    }

    pub fn valence(&self, lower: &str) -> Option<f64> {
        self.lexicon.get(lower).copied()
    }

    /// Score `text`. Text without sentiment-bearing tokens scores all zeros.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let words = sentiment_words(text);
        if words.is_empty() {
            return SentimentScores::default();
        }
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            if self.boosters.contains_key(lower[i].as_str())
                || (lower[i] == "kind" && lower.get(i + 1).is_some_and(|next| next == "of"))
            {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&words, &lower, i, cap_diff));
        }
        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn token_valence(&self, words: &[&str], lower: &[String], i: usize, cap_diff: bool) -> f64 {
        let Some(base) = self.valence(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" before another sentiment word only negates it.
        if lower[i] == "no" && lower.get(i + 1).is_some_and(|next| self.lexicon.contains_key(next.as_str())) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(words[i]) && cap_diff {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start in 0..3 {
            if i <= start {
                break;
            }
            let preceding = i - (start + 1);
            if self.lexicon.contains_key(lower[preceding].as_str()) {
                continue;
            }
            let mut scalar = self.scalar_inc_dec(words[preceding], &lower[preceding], valence, cap_diff);
            if scalar != 0.0 {
                scalar *= [1.0, 0.95, 0.9][start];
            }
            valence += scalar;
            valence = negation_check(valence, lower, start, i);
            if start == 2 {
                valence = self.idioms_check(valence, lower, i);
            }
        }

        least_check(valence, lower, i, &self.lexicon)
    }

    fn scalar_inc_dec(&self, word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&booster) = self.boosters.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -booster } else { booster };
        if is_upper(word) && cap_diff {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn idioms_check(&self, mut valence: f64, lower: &[String], i: usize) -> f64 {
        let w = |k: usize| lower[k].as_str();
        let mut sequences = vec![
            format!("{} {}", w(i - 1), w(i)),
            format!("{} {} {}", w(i - 2), w(i - 1), w(i)),
            format!("{} {}", w(i - 2), w(i - 1)),
            format!("{} {} {}", w(i - 3), w(i - 2), w(i - 1)),
            format!("{} {}", w(i - 3), w(i - 2)),
        ];
        if i + 1 < lower.len() {
            sequences.push(format!("{} {}", w(i), w(i + 1)));
        }
        if i + 2 < lower.len() {
            sequences.push(format!("{} {} {}", w(i), w(i + 1), w(i + 2)));
        }
        for sequence in &sequences {
            if let Some((_, idiom)) = IDIOMS.iter().find(|(phrase, _)| phrase == sequence) {
                valence = *idiom;
                break;
            }
        }

        // Multi-word boosters ahead of the word.
        for sequence in [
            format!("{} {} {}", w(i - 3), w(i - 2), w(i - 1)),
            format!("{} {}", w(i - 3), w(i - 2)),
            format!("{} {}", w(i - 2), w(i - 1)),
        ] {
            if let Some(booster) = self.boosters.get(sequence.as_str()) {
                valence += booster;
            }
        }
        valence
    }
}

/// Whitespace tokens with surrounding punctuation stripped from words.
/// Single-character tokens carry no sentiment and are dropped.
fn sentiment_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// True when some, but not all, words are in all caps.
fn allcap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_upper(w)).count();
    caps > 0 && caps < words.len()
}

fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn is_negation(lower: &str) -> bool {
    NEGATE.contains(&lower) || lower.contains("n't")
}

fn negation_check(valence: f64, lower: &[String], start: usize, i: usize) -> f64 {
    let w = |k: usize| lower[k].as_str();
    match start {
        0 if is_negation(w(i - 1)) => valence * N_SCALAR,
        1 if w(i - 2) == "never" && matches!(w(i - 1), "so" | "this") => valence * 1.25,
        1 if w(i - 2) == "without" && w(i - 1) == "doubt" => valence,
        1 if is_negation(w(i - 2)) => valence * N_SCALAR,
        2 if w(i - 3) == "never"
            && (matches!(w(i - 2), "so" | "this") || matches!(w(i - 1), "so" | "this")) =>
        {
            valence * 1.25
        }
        2 if w(i - 3) == "without" && (w(i - 2) == "doubt" || w(i - 1) == "doubt") => valence,
        2 if is_negation(w(i - 3)) => valence * N_SCALAR,
        _ => valence,
    }
}

fn least_check(valence: f64, lower: &[String], i: usize, lexicon: &HashMap<&'static str, f64>) -> f64 {
    if i == 0 || lower[i - 1] != "least" || lexicon.contains_key("least") {
        return valence;
    }
    if i > 1 && matches!(lower[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Sentiment after "but" counts more than the sentiment before it.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        n @ 2..=3 => n as f64 * 0.18,
        n if n > 3 => 0.96,
        _ => 0.0,
    };
    exclamations + questions
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    let emphasis = punctuation_emphasis(text);
    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += emphasis;
    } else if total < 0.0 {
        total -= emphasis;
    }
    let compound = normalize(total);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let denominator = pos_sum + neg_sum.abs() + neu_count;
    if denominator == 0.0 {
        return SentimentScores::default();
    }
    SentimentScores {
        neg: round_to((neg_sum / denominator).abs(), 3),
        neu: round_to((neu_count / denominator).abs(), 3),
        pos: round_to((pos_sum / denominator).abs(), 3),
        compound: round_to(compound, 4),
    }
}

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
    "exceptionally", "extreme", "extremely", "fabulously", "flipping", "fully", "greatly",
    "hella", "highly", "hugely", "incredible", "incredibly", "intensely", "major", "majorly",
    "more", "most", "particularly", "purely", "quite", "really", "remarkably", "so",
    "substantially", "thoroughly", "total", "totally", "tremendous", "tremendously", "uber",
    "unbelievably", "unusually", "utter", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of", "less",
    "little", "marginal", "marginally", "occasional", "occasionally", "partly", "scarce",
    "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
];

const IDIOMS: &[(&str, f64)] = &[
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

/// Mean human valence ratings on a -4..4 scale.
const LEXICON: &[(&str, f64)] = &[
    ("abandon", -1.9), ("abuse", -3.2), ("accept", 1.6), ("accomplish", 1.8),
    ("adequate", 0.9), ("admire", 2.1), ("adorable", 2.2), ("adore", 2.6),
    ("advantage", 1.0), ("adventure", 1.3), ("afraid", -2.2), ("aggressive", -0.6),
    ("agony", -1.8), ("agree", 1.5), ("alarm", -1.4), ("alive", 1.6),
    ("alone", -1.0), ("amaze", 2.5), ("amazing", 2.8), ("amused", 1.6),
    ("angel", 2.8), ("anger", -2.7), ("angry", -2.3), ("annoy", -1.9),
    ("annoyed", -1.6), ("annoying", -1.7), ("anxiety", -0.7), ("anxious", -1.0),
    ("apology", 0.2), ("appreciate", 1.7), ("appreciated", 2.3), ("approve", 2.0),
    ("argue", -1.4), ("arrogant", -1.8), ("ashamed", -2.1), ("attack", -2.1),
    ("attract", 1.5), ("attractive", 1.9), ("avoid", -1.2), ("awesome", 3.1),
    ("awful", -2.0), ("awkward", -0.6), ("bad", -2.5), ("bastard", -2.5),
    ("beautiful", 2.9), ("beauty", 2.8), ("benefit", 2.0), ("best", 3.2),
    ("better", 1.9), ("bitter", -1.8), ("blame", -1.4), ("bless", 1.8),
    ("blessed", 2.9), ("bliss", 2.7), ("bored", -1.1), ("boring", -1.3),
    ("bother", -1.4), ("brave", 2.4), ("bright", 1.9), ("brilliant", 2.8),
    ("broke", -1.8), ("broken", -2.1), ("bug", -0.7), ("calm", 1.3),
    ("care", 2.2), ("careful", 0.6), ("celebrate", 2.7), ("chaos", -2.7),
    ("charming", 2.8), ("cheap", -0.7), ("cheat", -2.0), ("cheer", 2.3),
    ("cheerful", 2.5), ("clean", 1.7), ("clear", 1.6), ("clever", 2.0),
    ("comedy", 1.5), ("comfort", 1.5), ("comfortable", 2.3), ("complain", -1.5),
    ("complaint", -1.2), ("confident", 2.2), ("confused", -1.3), ("cool", 1.3),
    ("crap", -1.6), ("crash", -1.7), ("crazy", -1.4), ("creative", 1.9),
    ("crisis", -3.1), ("cruel", -2.8), ("cry", -2.1), ("crying", -2.1),
    ("cute", 2.0), ("damage", -2.2), ("damn", -1.7), ("danger", -2.4),
    ("dangerous", -2.1), ("dead", -3.3), ("dear", 1.6), ("death", -2.9),
    ("defeat", -2.0), ("delicious", 2.7), ("delight", 2.9), ("delighted", 2.3),
    ("depressed", -2.3), ("depressing", -1.6), ("despair", -1.3), ("destroy", -2.5),
    ("destroyed", -3.4), ("die", -2.9), ("difficult", -1.5), ("disappoint", -2.3),
    ("disappointed", -1.9), ("disappointing", -2.2), ("disaster", -3.1), ("disgusting", -2.4),
    ("dislike", -1.6), ("dread", -2.0), ("dream", 1.0), ("dull", -1.7),
    ("dumb", -2.3), ("eager", 1.5), ("easy", 1.9), ("effective", 2.1),
    ("efficient", 1.8), ("elegant", 2.1), ("embarrassed", -1.5), ("encourage", 2.3),
    ("enemy", -2.5), ("energetic", 1.9), ("enjoy", 2.2), ("enjoyed", 2.3),
    ("enjoying", 2.4), ("enthusiastic", 1.9), ("error", -1.7), ("errors", -1.4),
    ("evil", -3.4), ("exceeded", 0.8), ("excellence", 3.1), ("excellent", 2.7),
    ("excited", 1.4), ("exciting", 2.2), ("exhausted", -1.5), ("fabulous", 2.4),
    ("fail", -2.5), ("failed", -2.3), ("failure", -2.3), ("fair", 1.3),
    ("fake", -2.1), ("fantastic", 2.6), ("fault", -1.7), ("favorite", 2.0),
    ("fear", -2.2), ("fights", -2.2), ("fine", 0.8), ("fool", -1.9),
    ("free", 2.3), ("freedom", 3.2), ("friend", 2.2), ("friendly", 2.2),
    ("frustrated", -2.4), ("frustrating", -1.9), ("fun", 2.3), ("funniest", 2.6),
    ("funny", 1.9), ("generous", 2.3), ("gentle", 1.9), ("gift", 1.9),
    ("glad", 2.0), ("glorious", 3.2), ("glory", 2.3), ("god", 1.1),
    ("good", 1.9), ("gorgeous", 3.0), ("grateful", 2.0), ("great", 3.1),
    ("greed", -1.7), ("grief", -2.2), ("guilty", -1.8), ("haha", 2.0),
    ("handsome", 2.2), ("happiness", 2.6), ("happy", 2.7), ("harm", -2.5),
    ("hate", -2.7), ("hated", -3.2), ("hates", -1.9), ("hatred", -3.2),
    ("healthy", 1.7), ("heartbreaking", -2.7), ("heartbroken", -3.3), ("heaven", 2.6),
    ("hell", -3.6), ("help", 1.7), ("helpful", 1.8), ("hero", 2.6),
    ("honest", 2.3), ("honor", 2.2), ("hope", 1.9), ("hopeful", 2.3),
    ("horrible", -2.5), ("horror", -2.7), ("hostile", -1.6), ("hug", 2.1),
    ("humor", 1.1), ("hurt", -2.4), ("ideal", 2.4), ("idiot", -2.3),
    ("ignore", -1.5), ("ill", -1.8), ("impressed", 2.1), ("impressive", 2.3),
    ("improve", 1.9), ("improved", 2.1), ("inspire", 2.7), ("inspiring", 2.3),
    ("insult", -2.3), ("intelligent", 2.0), ("interesting", 1.7), ("jealous", -2.0),
    ("joke", 1.2), ("joy", 2.8), ("joyful", 2.9), ("justice", 2.4),
    ("kill", -3.7), ("killed", -3.5), ("killer", -3.3), ("kind", 2.4),
    ("kiss", 1.8), ("laugh", 2.6), ("lazy", -1.5), ("liar", -2.9),
    ("lie", -1.8), ("like", 2.0), ("liked", 1.8), ("lmao", 2.9),
    ("lol", 2.9), ("lonely", -1.5), ("lose", -1.7), ("loser", -2.4),
    ("loss", -1.3), ("lost", -1.3), ("love", 3.2), ("loved", 2.9),
    ("lovely", 2.8), ("loves", 2.7), ("loving", 2.9), ("loyal", 2.1),
    ("luck", 2.0), ("lucky", 1.8), ("mad", -2.2), ("magnificent", 2.9),
    ("mediocre", -1.0), ("mercy", 1.5), ("mess", -1.5), ("miserable", -2.2),
    ("miss", -0.6), ("mistake", -1.4), ("nasty", -2.6), ("negative", -1.9),
    ("nervous", -1.1), ("nice", 1.8), ("nightmare", -1.9), ("no", -1.2),
    ("ok", 0.9), ("okay", 0.9), ("optimistic", 1.3), ("outstanding", 3.0),
    ("pain", -2.3), ("painful", -1.9), ("panic", -2.3), ("pathetic", -2.7),
    ("peace", 2.5), ("perfect", 2.7), ("pity", -1.2), ("pleasant", 2.3),
    ("pleased", 1.9), ("pleasure", 2.7), ("poor", -2.1), ("popular", 1.8),
    ("positive", 2.6), ("powerful", 1.8), ("pretty", 2.2), ("pride", 1.4),
    ("problem", -1.7), ("problems", -1.7), ("promise", 1.3), ("protect", 1.3),
    ("proud", 2.1), ("rage", -2.6), ("recommend", 1.5), ("regret", -1.9),
    ("reject", -1.7), ("relaxed", 2.2), ("reliable", 1.9), ("relief", 2.1),
    ("respect", 2.1), ("rich", 2.6), ("rofl", 2.7), ("romance", 2.6),
    ("rude", -2.0), ("sad", -2.1), ("sadness", -1.9), ("safe", 1.9),
    ("satisfied", 1.8), ("satisfying", 2.0), ("scandal", -1.9), ("scared", -1.9),
    ("secure", 1.4), ("selfish", -2.1), ("shame", -2.1), ("shit", -2.6),
    ("shock", -1.6), ("sick", -2.3), ("silly", -0.1), ("smart", 1.7),
    ("smile", 1.5), ("sorry", -0.3), ("stress", -1.8), ("stressed", -1.4),
    ("strong", 2.3), ("stunning", 1.6), ("stupid", -2.4), ("succeed", 2.2),
    ("success", 2.7), ("successful", 2.8), ("suck", -1.9), ("sucks", -1.5),
    ("suffer", -2.5), ("super", 2.9), ("superb", 3.1), ("support", 1.7),
    ("sux", -1.5), ("sweet", 2.0), ("talent", 1.8), ("terrible", -2.1),
    ("terrific", 2.1), ("thank", 1.5), ("thanks", 1.9), ("threat", -2.4),
    ("thrilled", 1.9), ("tired", -1.9), ("tragedy", -3.4), ("trouble", -1.7),
    ("true", 1.8), ("trust", 2.3), ("truth", 1.3), ("ugly", -2.3),
    ("unfortunately", -1.4), ("unhappy", -1.8), ("upset", -1.6), ("useful", 1.9),
    ("useless", -1.8), ("valuable", 2.1), ("victim", -1.1), ("victory", 2.8),
    ("violence", -3.1), ("violent", -2.9), ("war", -2.9), ("warm", 0.9),
    ("waste", -1.8), ("weak", -1.9), ("wealth", 2.2), ("weird", -0.7),
    ("welcome", 2.0), ("win", 2.8), ("winner", 2.8), ("wise", 1.8),
    ("wonder", 1.4), ("wonderful", 2.7), ("worried", -1.2), ("worry", -1.9),
    ("worrying", -1.4), ("worse", -2.1), ("worst", -3.1), ("worthless", -1.9),
    ("wow", 2.8), ("wrong", -2.1), ("yay", 2.4), ("yes", 1.7),
];
