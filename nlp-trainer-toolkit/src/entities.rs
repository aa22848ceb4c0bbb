//! Named-entity recognition.
//!
//! Proper-noun runs are chunked from the tagger output and classified with
//! small gazetteers plus head-word and context cues. The pipeline style also
//! recognises numeric and temporal expressions and reports entities as spans
//! of the source text; the classic style joins chunk tokens with spaces.

use std::collections::{HashMap, HashSet};

use nlp_trainer_core::domain::Entity;

use crate::doc::Doc;
use crate::tokenize::like_number;

/// Entity categories before they are rendered in a toolkit's label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Organization,
    Gpe,
    Location,
    Facility,
    Nationality,
    Date,
    Time,
    Money,
    Percent,
    Cardinal,
    Ordinal,
}

impl EntityKind {
    /// Label in the classic chunker's inventory.
    pub fn classic_label(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Gpe | Self::Nationality => "GPE",
            Self::Location => "LOCATION",
            Self::Facility => "FACILITY",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::Cardinal => "CARDINAL",
            Self::Ordinal => "ORDINAL",
        }
    }

    /// Label in the pipeline's inventory.
    pub fn pipeline_label(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORG",
            Self::Gpe => "GPE",
            Self::Location => "LOC",
            Self::Facility => "FAC",
            Self::Nationality => "NORP",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::Cardinal => "CARDINAL",
            Self::Ordinal => "ORDINAL",
        }
    }
}

/// A recognised entity as an inclusive token range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpan {
    pub first: usize,
    pub last: usize,
    pub kind: EntityKind,
}

/// Gazetteer-backed entity recogniser.
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    known: HashMap<&'static str, EntityKind>,
    given_names: HashSet<&'static str>,
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer {
    pub fn new() -> Self {
        let mut known = HashMap::new();
        for (names, kind) in [
            (PLACES, EntityKind::Gpe),
            (ORGANIZATIONS, EntityKind::Organization),
            (NATIONALITIES, EntityKind::Nationality),
            (LOCATIONS, EntityKind::Location),
        ] {
            for name in names {
                known.insert(*name, kind);
            }
        }
        Self {
            known,
            given_names: GIVEN_NAMES.iter().copied().collect(),
        }
    }

    /// Chunk and label a tagged token sequence in the classic style.
    pub fn classic(&self, words: &[String], tags: &[&str]) -> Vec<Entity> {
        self.proper_noun_spans(words, tags, &[])
            .into_iter()
            .map(|span| Entity {
                text: words[span.first..=span.last].join(" "),
                label: span.kind.classic_label().to_string(),
            })
            .collect()
    }

    /// Recognise entities over a parsed document in the pipeline style.
    pub fn pipeline(&self, doc: &Doc<'_>) -> Vec<Entity> {
        let words: Vec<&str> = doc.tokens.iter().map(|t| t.text()).collect();
        let tags: Vec<&str> = doc.tokens.iter().map(|t| t.tag).collect();

        let mut spans = numeric_spans(&words);
        let mut claimed = vec![false; words.len()];
        for span in &spans {
            claimed[span.first..=span.last].iter_mut().for_each(|c| *c = true);
        }
        spans.extend(self.proper_noun_spans(&words, &tags, &claimed));
        spans.sort_by_key(|span| span.first);

        spans
            .into_iter()
            .map(|span| Entity {
                text: doc.span_text(span.first, span.last).to_string(),
                label: span.kind.pipeline_label().to_string(),
            })
            .collect()
    }

    fn proper_noun_spans<S: AsRef<str>>(
        &self,
        words: &[S],
        tags: &[&str],
        claimed: &[bool],
    ) -> Vec<EntitySpan> {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        let is_free = |i: usize| !claimed.get(i).copied().unwrap_or(false);
        let is_name = |i: usize| {
            is_free(i)
                && (matches!(tags[i], "NNP" | "NNPS")
                    || (tags[i] == "JJ" && NATIONALITIES.contains(&words[i])))
        };

        let mut spans = Vec::new();
        let mut surnames: HashSet<&str> = HashSet::new();
        let mut i = 0;
        while i < words.len() {
            if !is_name(i) || !words[i].chars().any(char::is_alphabetic) {
                i += 1;
                continue;
            }
            let first = i;
            let mut last = i;
            loop {
                let next = last + 1;
                if next < words.len() && is_name(next) {
                    last = next;
                    continue;
                }
                // "Bank of America", "Procter & Gamble"
                if next + 1 < words.len() && is_name(next + 1) {
                    let joins = match words[next] {
                        "&" => true,
                        "of" => ORG_HEADS.contains(&words[last]) || LOCATION_HEADS.contains(&words[last]),
                        _ => false,
                    };
                    if joins {
                        last = next + 1;
                        continue;
                    }
                }
                break;
            }

            let chunk = &words[first..=last];
            // Titles and calendar words never stand alone as names.
            if chunk
                .iter()
                .all(|w| TITLES.contains(w) || MONTHS.contains(w) || WEEKDAYS.contains(w))
            {
                i = last + 1;
                continue;
            }
            let previous = first.checked_sub(1).map(|p| words[p]);
            let kind = self.classify(chunk, previous, &surnames);
            if kind == EntityKind::Person && chunk.len() > 1 {
                surnames.insert(chunk[chunk.len() - 1]);
            }
            spans.push(EntitySpan { first, last, kind });
            i = last + 1;
        }
        spans
    }

    fn classify(&self, chunk: &[&str], previous: Option<&str>, surnames: &HashSet<&str>) -> EntityKind {
        let phrase = chunk.join(" ");
        let head = chunk[chunk.len() - 1];
        let lead = chunk[0];

        if let Some(kind) = self.known.get(phrase.as_str()) {
            return *kind;
        }
        if chunk.iter().any(|w| ORG_SUFFIXES.contains(w)) || ORG_HEADS.contains(&lead) {
            return EntityKind::Organization;
        }
        if TITLES.contains(&lead) || self.given_names.contains(lead) || surnames.contains(head) {
            return EntityKind::Person;
        }
        if LOCATION_HEADS.contains(&head) || lead == "Mount" || lead == "Lake" {
            return EntityKind::Location;
        }
        if FACILITY_HEADS.contains(&head) {
            return EntityKind::Facility;
        }
        if chunk.len() > 1 {
            if let Some(kind) = self.known.get(lead) {
                return *kind;
            }
        }
        if matches!(previous, Some("in" | "at" | "from" | "near" | "to")) {
            return EntityKind::Gpe;
        }
        if chunk.len() == 1 && lead.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
            return EntityKind::Organization;
        }
        if chunk.len() > 1 {
            return EntityKind::Person;
        }
        EntityKind::Organization
    }
}

/// Numeric and temporal expressions over pipeline tokens.
fn numeric_spans(words: &[&str]) -> Vec<EntitySpan> {
    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let is_number = |i: usize| like_number(words[i]) || NUMBER_WORDS.contains(&lower[i].as_str());
    let is_month = |i: usize| {
        let month = MONTHS.contains(&words[i]);
        if words[i] == "May" {
            return (i + 1 < words.len() && is_number(i + 1)) || (i > 0 && is_number(i - 1));
        }
        month
    };

    let mut spans = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let start = i;
        let (last, kind) = if words[i] == "$" && i + 1 < words.len() && is_number(i + 1) {
            (extend_magnitude(&lower, i + 1), EntityKind::Money)
        } else if is_month(i) {
            let mut last = i;
            if last + 1 < words.len() && is_number(last + 1) {
                last += 1;
                if last + 2 < words.len() && words[last + 1] == "," && is_year(words[last + 2]) {
                    last += 2;
                }
            }
            if last + 1 < words.len() && is_year(words[last + 1]) {
                last += 1;
            }
            (last, EntityKind::Date)
        } else if WEEKDAYS.contains(&words[i]) || RELATIVE_DAYS.contains(&lower[i].as_str()) {
            (i, EntityKind::Date)
        } else if matches!(lower[i].as_str(), "last" | "next" | "this")
            && i + 1 < words.len()
            && PERIODS.contains(&lower[i + 1].as_str())
        {
            (i + 1, EntityKind::Date)
        } else if lower[i] == "tonight" || is_clock(words[i]) {
            let last = if i + 1 < words.len() && CLOCK_SUFFIXES.contains(&lower[i + 1].as_str()) {
                i + 1
            } else {
                i
            };
            (last, EntityKind::Time)
        } else if is_ordinal(&lower[i]) {
            (i, EntityKind::Ordinal)
        } else if is_number(i) {
            let last = extend_magnitude(&lower, i);
            match lower.get(last + 1).map(String::as_str) {
                Some("%" | "percent") => (last + 1, EntityKind::Percent),
                Some(unit) if CURRENCIES.contains(&unit) => (last + 1, EntityKind::Money),
                Some(unit) if CLOCK_SUFFIXES.contains(&unit) => (last + 1, EntityKind::Time),
                _ if last == i && is_year(words[i]) => (i, EntityKind::Date),
                _ => (last, EntityKind::Cardinal),
            }
        } else {
            i += 1;
            continue;
        };
        spans.push(EntitySpan {
            first: start,
            last,
            kind,
        });
        i = last + 1;
    }
    spans
}

fn extend_magnitude(lower: &[String], mut last: usize) -> usize {
    while last + 1 < lower.len() && MAGNITUDES.contains(&lower[last + 1].as_str()) {
        last += 1;
    }
    last
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && matches!(word.parse::<u32>(), Ok(1000..=2099))
}

fn is_clock(word: &str) -> bool {
    match word.split_once(':') {
        Some((h, m)) => {
            !h.is_empty()
                && h.len() <= 2
                && m.len() == 2
                && h.chars().all(|c| c.is_ascii_digit())
                && m.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

fn is_ordinal(lower: &str) -> bool {
    if ORDINAL_WORDS.contains(&lower) {
        return true;
    }
    ["st", "nd", "rd", "th"].iter().any(|suffix| {
        lower
            .strip_suffix(suffix)
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    })
}

/// Every single word appearing in a gazetteer entry, months and weekdays
/// included. The tagger treats these as proper nouns at sentence start.
pub fn gazetteer_words() -> impl Iterator<Item = &'static str> {
    [
        PLACES,
        ORGANIZATIONS,
        NATIONALITIES,
        LOCATIONS,
        GIVEN_NAMES,
        MONTHS,
        WEEKDAYS,
        TITLES,
    ]
    .into_iter()
    .flat_map(|list| list.iter())
    .flat_map(|entry| entry.split(' '))
}

const TITLES: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sir", "Lady", "Lord", "President", "Senator",
    "Governor", "Mayor", "Judge", "King", "Queen", "Prince", "Princess", "Mr", "Mrs", "Ms", "Dr",
];

const GIVEN_NAMES: &[&str] = &[
    "Adam", "Alan", "Albert", "Alex", "Alice", "Amanda", "Amy", "Andrew", "Angela", "Anna",
    "Anne", "Anthony", "Barack", "Ben", "Benjamin", "Bill", "Bob", "Brian", "Carl", "Carlos",
    "Catherine", "Charles", "Chris", "Christopher", "Claire", "Daniel", "David", "Donald",
    "Edward", "Elizabeth", "Elon", "Emily", "Emma", "Eric", "Frank", "George", "Grace", "Hannah",
    "Harry", "Helen", "Henry", "Isaac", "Jack", "Jacob", "James", "Jane", "Jason", "Jeff",
    "Jennifer", "Jessica", "Joe", "John", "Joseph", "Julia", "Karen", "Kate", "Kevin", "Laura",
    "Linda", "Lisa", "Maria", "Mark", "Mary", "Matthew", "Michael", "Michelle", "Mike", "Nancy",
    "Nicholas", "Olivia", "Oliver", "Patricia", "Paul", "Peter", "Rachel", "Richard", "Robert",
    "Sam", "Samuel", "Sarah", "Satya", "Sophia", "Stephen", "Steve", "Steven", "Susan", "Thomas",
    "Tim", "Tom", "Victoria", "William", "Marie", "Ada", "Noam", "Sundar", "Warren", "Larry",
    "Sergey",
];

const PLACES: &[&str] = &[
    "Afghanistan", "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile",
    "China", "Colombia", "Cuba", "Denmark", "Egypt", "England", "Finland", "France", "Germany",
    "Greece", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Japan",
    "Kenya", "Korea", "Mexico", "Netherlands", "New Zealand", "Nigeria", "North Korea", "Norway",
    "Pakistan", "Peru", "Poland", "Portugal", "Russia", "Saudi Arabia", "Scotland", "Singapore",
    "South Africa", "South Korea", "Spain", "Sweden", "Switzerland", "Turkey", "Ukraine",
    "United Kingdom", "United States", "America", "USA", "UK", "Vietnam", "Wales", "Europe",
    "Asia", "Africa", "Alabama", "Alaska", "Arizona", "California", "Colorado", "Florida",
    "Georgia", "Hawaii", "Illinois", "Massachusetts", "Michigan", "Minnesota", "Nevada",
    "New Jersey", "New York", "North Carolina", "Ohio", "Oregon", "Pennsylvania", "Texas",
    "Virginia", "Washington", "Amsterdam", "Athens", "Atlanta", "Austin", "Bangkok", "Barcelona",
    "Beijing", "Berlin", "Boston", "Brussels", "Cairo", "Chicago", "Cupertino", "Dallas",
    "Delhi", "Dublin", "Edinburgh", "Hong Kong", "Houston", "Istanbul", "Jakarta", "Lisbon",
    "London", "Los Angeles", "Madrid", "Manchester", "Melbourne", "Miami", "Milan", "Montreal",
    "Moscow", "Mumbai", "Munich", "Nairobi", "New Delhi", "Oslo", "Ottawa", "Paris", "Prague",
    "Redmond", "Rome", "San Francisco", "Seattle", "Seoul", "Shanghai", "Stockholm", "Sydney",
    "Tokyo", "Toronto", "Vancouver", "Vienna", "Warsaw", "Zurich", "Silicon Valley",
];

const ORGANIZATIONS: &[&str] = &[
    "Adobe", "Airbnb", "Alphabet", "Amazon", "AMD", "Apple", "BBC", "BMW", "Boeing", "CNN",
    "Disney", "EU", "Facebook", "FBI", "Ford", "GitHub", "Google", "Harvard", "IBM", "Intel",
    "Meta", "Microsoft", "MIT", "NASA", "NATO", "Netflix", "Nike", "Nvidia", "NVIDIA", "OpenAI",
    "Oracle", "Oxford", "Reuters", "Samsung", "Siemens", "Sony", "SpaceX", "Spotify", "Stanford",
    "Tesla", "Toyota", "Twitter", "Uber", "UN", "UNESCO", "Walmart", "WHO", "Yahoo", "Anthropic",
    "DeepMind", "Volkswagen", "Cambridge", "Congress", "Parliament", "Senate",
];

const NATIONALITIES: &[&str] = &[
    "American", "Americans", "Australian", "Brazilian", "British", "Canadian", "Chinese",
    "Christian", "Democrat", "Democrats", "Dutch", "English", "European", "French", "German",
    "Greek", "Indian", "Irish", "Islamic", "Italian", "Japanese", "Jewish", "Korean", "Mexican",
    "Muslim", "Republican", "Republicans", "Russian", "Scottish", "Spanish", "Swedish", "Swiss",
    "Turkish",
];

const LOCATIONS: &[&str] = &[
    "Alps", "Amazon River", "Antarctica", "Arctic", "Atlantic", "Everest", "Himalayas",
    "Mediterranean", "Nile", "Pacific", "Sahara", "Mississippi River", "Rocky Mountains",
];

const ORG_SUFFIXES: &[&str] = &[
    "Inc.", "Inc", "Corp.", "Corp", "Ltd.", "Ltd", "LLC", "Co.", "Corporation", "Company",
    "Group", "Foundation", "Association", "Agency", "Committee", "Council", "Party", "Society",
    "Laboratories", "Labs", "Technologies", "Systems",
];

const ORG_HEADS: &[&str] = &[
    "University", "Bank", "Department", "Institute", "Ministry", "Museum", "College", "School",
    "Board", "Bureau", "Office", "League", "Federation", "Academy", "Church",
];

const LOCATION_HEADS: &[&str] = &[
    "River", "Mountain", "Mountains", "Lake", "Ocean", "Sea", "Valley", "Island", "Islands",
    "Desert", "Bay", "Forest", "Peninsula", "Coast", "Gulf",
];

const FACILITY_HEADS: &[&str] = &[
    "Airport", "Bridge", "Tower", "Stadium", "Station", "Hospital", "Hall", "Building", "Palace",
    "Park", "Square", "Highway", "Street", "Avenue", "Road",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan.", "Feb.", "Mar.", "Apr.", "Aug.", "Sept.", "Sep.",
    "Oct.", "Nov.", "Dec.",
];

const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow"];

const PERIODS: &[&str] = &["year", "month", "week", "decade", "century", "summer", "winter", "spring", "autumn"];

const CLOCK_SUFFIXES: &[&str] = &["am", "pm", "a.m.", "p.m.", "o'clock"];

const CURRENCIES: &[&str] = &["dollars", "dollar", "euros", "euro", "pounds", "cents", "yen"];

const MAGNITUDES: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

const NUMBER_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];
