//! Deterministic language identification.
//!
//! Non-Latin scripts decide the language directly from the letters' Unicode
//! blocks. Latin-script text is scored per language from function-word
//! hits, distinctive letters and characteristic trigrams, and the scores
//! are normalized into probabilities.

use std::collections::HashMap;

use nlp_trainer_core::domain::LanguageProbability;
use nlp_trainer_core::error::{CoreError, Result};

/// Probabilities at or below this are not reported.
pub const MIN_REPORTED_PROBABILITY: f64 = 0.1;

/// Display name for a language code. Unknown codes render as
/// `Unknown (<code>)`.
pub fn language_name(code: &str) -> String {
    let name = match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ar" => "Arabic",
        "zh-cn" => "Chinese (Simplified)",
        "zh-tw" => "Chinese (Traditional)",
        "ja" => "Japanese",
        "ko" => "Korean",
        "hi" => "Hindi",
        "nl" => "Dutch",
        "sv" => "Swedish",
        other => return format!("Unknown ({other})"),
    };
    name.to_string()
}

/// Outcome of identification: the best code plus the reported distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub code: String,
    pub confidence: f64,
    /// Descending, entries above [`MIN_REPORTED_PROBABILITY`] only.
    pub probabilities: Vec<LanguageProbability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Devanagari,
    Thai,
    Hangul,
    Kana,
    Han,
}

fn script_of(c: char) -> Option<Script> {
    let script = match c as u32 {
        0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF => Script::Greek,
        0x0400..=0x04FF => Script::Cyrillic,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x1100..=0x11FF | 0xAC00..=0xD7AF | 0x3130..=0x318F => Script::Hangul,
        0x3040..=0x30FF => Script::Kana,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF => Script::Han,
        _ => return None,
    };
    Some(script)
}

/// Profile of one Latin-script language.
struct Profile {
    code: &'static str,
    function_words: &'static [&'static str],
    letters: &'static [char],
    trigrams: &'static [&'static str],
}

/// Language identifier over built-in profiles.
#[derive(Debug, Clone, Default)]
pub struct LanguageIdentifier;

impl LanguageIdentifier {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> Result<Detection> {
        let mut scripts: HashMap<Script, usize> = HashMap::new();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            if let Some(script) = script_of(c) {
                *scripts.entry(script).or_insert(0) += 1;
            }
        }
        let letters: usize = scripts.values().sum();
        if letters == 0 {
            return Err(CoreError::Analysis("No features in text".to_string()));
        }

        let latin = scripts.get(&Script::Latin).copied().unwrap_or(0);
        if latin * 2 > letters {
            return Ok(detect_latin(text));
        }

        let mut scored: Vec<(String, f64)> = Vec::new();
        for (script, count) in &scripts {
            let share = *count as f64 / letters as f64;
            let code = match script {
                Script::Latin => "en",
                Script::Cyrillic => cyrillic_language(text),
                Script::Greek => "el",
                Script::Arabic => arabic_language(text),
                Script::Hebrew => "he",
                Script::Devanagari => "hi",
                Script::Thai => "th",
                Script::Hangul => "ko",
                Script::Kana => "ja",
                Script::Han if scripts.contains_key(&Script::Kana) => "ja",
                Script::Han => han_language(text),
            };
            match scored.iter_mut().find(|(c, _)| c == code) {
                Some((_, prob)) => *prob += share,
                None => scored.push((code.to_string(), share)),
            }
        }
        Ok(detection_from(scored))
    }
}

fn cyrillic_language(text: &str) -> &'static str {
    if text.chars().any(|c| matches!(c, 'ї' | 'є' | 'і' | 'ґ' | 'Ї' | 'Є' | 'І' | 'Ґ')) {
        "uk"
    } else {
        "ru"
    }
}

fn arabic_language(text: &str) -> &'static str {
    if text.chars().any(|c| matches!(c, 'پ' | 'چ' | 'ژ' | 'گ')) {
        "fa"
    } else {
        "ar"
    }
}

fn han_language(text: &str) -> &'static str {
    const TRADITIONAL: &[char] = &['這', '們', '個', '說', '為', '國', '來', '時', '會', '學', '對', '長', '開', '語', '體'];
    const SIMPLIFIED: &[char] = &['这', '们', '个', '说', '为', '国', '来', '时', '会', '学', '对', '长', '开', '语', '体'];
    let traditional = text.chars().filter(|c| TRADITIONAL.contains(c)).count();
    let simplified = text.chars().filter(|c| SIMPLIFIED.contains(c)).count();
    if traditional > simplified {
        "zh-tw"
    } else {
        "zh-cn"
    }
}

fn detect_latin(text: &str) -> Detection {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphabetic() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .collect();
    let padded = format!(" {} ", words.join(" "));

    let scored: Vec<(String, f64)> = PROFILES
        .iter()
        .map(|profile| {
            let word_hits = words
                .iter()
                .filter(|w| profile.function_words.contains(w))
                .count() as f64;
            let letter_hits = lower.chars().filter(|c| profile.letters.contains(c)).count() as f64;
            let trigram_hits = profile
                .trigrams
                .iter()
                .map(|t| padded.matches(t).count())
                .sum::<usize>() as f64;
            (
                profile.code.to_string(),
                2.0 * word_hits + letter_hits + 0.5 * trigram_hits,
            )
        })
        .filter(|(_, score)| *score > 0.0)
        .collect();

    if scored.is_empty() {
        return detection_from(vec![("en".to_string(), 1.0)]);
    }
    detection_from(scored)
}

fn detection_from(mut scored: Vec<(String, f64)>) -> Detection {
    let total: f64 = scored.iter().map(|(_, s)| s).sum();
    for (_, score) in scored.iter_mut() {
        *score /= total;
    }
    // Ties break on the code so repeated calls agree.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let (code, confidence) = scored[0].clone();
    let probabilities = scored
        .into_iter()
        .filter(|(_, prob)| *prob > MIN_REPORTED_PROBABILITY)
        .map(|(lang, prob)| LanguageProbability { lang, prob })
        .collect();
    Detection {
        code,
        confidence,
        probabilities,
    }
}

const PROFILES: &[Profile] = &[
    Profile {
        code: "en",
        function_words: &[
            "the", "and", "is", "are", "was", "were", "of", "to", "in", "that", "this", "it",
            "with", "for", "you", "have", "has", "be", "not", "what", "which", "from", "they",
            "will", "would", "there", "their", "an", "or", "by",
        ],
        letters: &[],
        trigrams: &[" th", "the", "he ", "ing", "ng ", " an", "and", "nd ", "ion", "tio"],
    },
    Profile {
        code: "es",
        function_words: &[
            "el", "la", "los", "las", "de", "del", "que", "y", "es", "en", "un", "una", "por",
            "con", "para", "como", "pero", "su", "al", "lo", "se", "no", "muy", "está", "son",
            "este", "esta", "yo", "hola",
        ],
        letters: &['ñ', '¿', '¡'],
        trigrams: &[" de", "de ", "os ", " la", "la ", "ción", "que", " qu", "ent", " el"],
    },
    Profile {
        code: "fr",
        function_words: &[
            "le", "la", "les", "de", "des", "du", "et", "est", "un", "une", "que", "qui", "dans",
            "pour", "pas", "sur", "au", "aux", "avec", "ce", "cette", "il", "elle", "nous", "vous",
            "je", "sont", "bonjour", "ne",
        ],
        letters: &['ç', 'è', 'ê', 'à', 'ù', 'û', 'î', 'œ'],
        trigrams: &[" le", "es ", " de", "ent", "ion", " la", "que", "ais", "eau", "oi"],
    },
    Profile {
        code: "de",
        function_words: &[
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "zu", "den", "dem", "mit",
            "sich", "des", "auf", "für", "im", "von", "ich", "sie", "es", "wir", "auch", "wie",
            "sind", "hallo", "nur", "aber",
        ],
        letters: &['ä', 'ö', 'ü', 'ß'],
        trigrams: &["en ", "er ", "sch", "ich", "ein", "ung", "cht", " de", "die", "der"],
    },
    Profile {
        code: "it",
        function_words: &[
            "il", "di", "che", "e", "la", "le", "un", "una", "per", "non", "sono", "del",
            "della", "con", "gli", "questo", "questa", "anche", "come", "ma", "ciao", "è", "nel",
            "alla", "lo", "io",
        ],
        letters: &['ò', 'ì'],
        trigrams: &["che", " di", "di ", "zio", "ell", "lla", "one", " il", "are", "gli"],
    },
    Profile {
        code: "pt",
        function_words: &[
            "o", "os", "a", "as", "de", "do", "da", "dos", "das", "e", "é", "que", "em", "um",
            "uma", "para", "com", "não", "por", "mais", "como", "se", "olá", "muito", "isso",
            "você", "está",
        ],
        letters: &['ã', 'õ'],
        trigrams: &["ção", "ões", " de", "do ", "da ", "os ", "que", "nte", "ão ", " co"],
    },
    Profile {
        code: "nl",
        function_words: &[
            "de", "het", "een", "en", "van", "is", "dat", "niet", "op", "te", "zijn", "met",
            "voor", "ik", "je", "die", "er", "maar", "ook", "wij", "hallo", "naar", "dit", "wat",
        ],
        letters: &[],
        trigrams: &["ij ", " he", "het", "een", "en ", "aa", "oo", "van", "sch", "ijk"],
    },
    Profile {
        code: "sv",
        function_words: &[
            "och", "att", "det", "är", "som", "en", "ett", "på", "av", "för", "med", "till",
            "inte", "jag", "har", "den", "de", "om", "hej", "vi", "ni", "var", "kan",
        ],
        letters: &['å'],
        trigrams: &["och", "att", " oc", "för", "ing", "de ", "en ", "är ", "lig", "ett"],
    },
    Profile {
        code: "da",
        function_words: &[
            "og", "at", "det", "er", "en", "et", "til", "på", "med", "ikke", "jeg", "har", "af",
            "for", "de", "som", "vi", "hej", "men",
        ],
        letters: &['ø', 'æ'],
        trigrams: &[" og", "og ", "er ", "ikk", "kke", "det", "en ", "af "],
    },
    Profile {
        code: "no",
        function_words: &[
            "og", "at", "det", "er", "en", "et", "til", "på", "med", "ikke", "jeg", "har", "av",
            "for", "som", "vi", "hei", "men", "ble",
        ],
        letters: &['ø', 'æ'],
        trigrams: &[" og", "og ", "er ", "ikk", "kke", "det", "av "],
    },
    Profile {
        code: "fi",
        function_words: &[
            "ja", "on", "ei", "että", "se", "hän", "oli", "ovat", "mutta", "kuin", "tämä", "minä",
            "sinä", "me", "te", "he", "hei", "myös",
        ],
        letters: &[],
        trigrams: &["sta", "ssa", "lla", "en ", "ist", "aan", "tta", "kse", "ää", "yy"],
    },
    Profile {
        code: "pl",
        function_words: &[
            "i", "w", "nie", "na", "się", "z", "jest", "to", "że", "do", "jak", "ale", "co", "tak",
            "czy", "od", "po", "dla", "cześć",
        ],
        letters: &['ł', 'ą', 'ę', 'ś', 'ż', 'ź', 'ć', 'ń'],
        trigrams: &["prz", "rze", "ie ", "nie", "ego", "ych", "owa", "wie", "cz", "sz"],
    },
    Profile {
        code: "tr",
        function_words: &[
            "ve", "bir", "bu", "da", "de", "için", "ile", "çok", "ne", "gibi", "daha", "ama",
            "var", "yok", "merhaba", "olarak", "ben", "sen",
        ],
        letters: &['ş', 'ğ', 'ı', 'İ'],
        trigrams: &["lar", "ler", "bir", "ını", "eri", "ası", "yor", "in "],
    },
    Profile {
        code: "id",
        function_words: &[
            "yang", "dan", "di", "ini", "itu", "dengan", "untuk", "tidak", "dari", "dalam", "akan",
            "ada", "saya", "kami", "juga", "halo", "adalah",
        ],
        letters: &[],
        trigrams: &["ang", "kan", "an ", "nya", "men", "ber", "ada", "aka"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("This is an English sentence.", "en")]
    #[case("Hola, ¿cómo estás? Esta es una frase en español.", "es")]
    #[case("Bonjour, je suis très content de vous voir dans cette ville.", "fr")]
    #[case("Das ist ein kleiner Test und die Sonne scheint für uns.", "de")]
    #[case("Questo è un testo della lingua italiana per il test.", "it")]
    #[case("Olá, isso não é um problema para você.", "pt")]
    #[case("Dit is een zin in het Nederlands en het werkt niet.", "nl")]
    #[case("Det här är en mening på svenska och den är kort.", "sv")]
    #[case("Привет, как дела? Это русский текст.", "ru")]
    #[case("こんにちは、元気ですか", "ja")]
    #[case("안녕하세요 반갑습니다", "ko")]
    #[case("这是一个中文句子，我们来学习", "zh-cn")]
    #[case("नमस्ते, आप कैसे हैं", "hi")]
    #[case("مرحبا كيف حالك", "ar")]
    fn identifies_language(#[case] text: &str, #[case] expected: &str) {
        let detection = LanguageIdentifier::new().detect(text).unwrap();
        assert_eq!(detection.code, expected);
    }

    #[test]
    fn detection_is_repeatable() {
        let identifier = LanguageIdentifier::new();
        let first = identifier.detect("This is an English sentence.").unwrap();
        let second = identifier.detect("This is an English sentence.").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn probabilities_are_descending_and_filtered() {
        let detection = LanguageIdentifier::new()
            .detect("The weather is nice and the people are friendly.")
            .unwrap();
        assert!(detection.probabilities.iter().all(|p| p.prob > MIN_REPORTED_PROBABILITY));
        assert!(detection
            .probabilities
            .windows(2)
            .all(|pair| pair[0].prob >= pair[1].prob));
        assert_eq!(detection.probabilities[0].lang, detection.code);
    }

    #[test]
    fn text_without_letters_fails() {
        let err = LanguageIdentifier::new().detect("12345 !!! ...").unwrap_err();
        assert_eq!(err, CoreError::Analysis("No features in text".to_string()));
    }

    #[test]
    fn names_fall_back_for_unmapped_codes() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("zh-tw"), "Chinese (Traditional)");
        assert_eq!(language_name("tr"), "Unknown (tr)");
    }
}
