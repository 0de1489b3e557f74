//! # Sentiment Lexicon
//!
//! Word tables and whole-word matchers for rule-based sentiment scoring.

use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, trace};

use crate::utils::config::LexiconConfig;

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_config(&LexiconConfig::default()).expect("built-in lexicon tables are valid")
});

/// Errors raised while building a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("empty entry in {table} table")]
    EmptyWord { table: &'static str },

    #[error("'{word}' in {table} table must start and end with a letter or digit")]
    InvalidWord { table: &'static str, word: String },

    #[error("'{word}' appears in both the {first} and {second} tables")]
    Overlap {
        word: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("amplifier '{word}' is listed more than once")]
    DuplicateAmplifier { word: String },

    #[error("amplifier '{word}' has weight {weight}, expected a value in (0, 1)")]
    InvalidWeight { word: String, weight: f64 },

    #[error("failed to compile matcher: {0}")]
    Matcher(#[from] regex::Error),
}

/// Positive and negative cue hits in a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolarityCounts {
    pub positive: usize,
    pub negative: usize,
}

impl PolarityCounts {
    /// Total number of polarity hits
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Number of entries in each table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSizes {
    pub positive: usize,
    pub negative: usize,
    pub amplifiers: usize,
    pub negation_cues: usize,
}

/// Amplifier hits in a text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmplifierMatches {
    /// Number of amplifier occurrences
    pub count: usize,
    /// Sum of the weights of every occurrence
    pub weight_sum: f64,
}

/// Sentiment lexicon
///
/// Holds the polarity tables, amplifier weights and negation cues, together
/// with case-insensitive whole-word matchers compiled from them. A lexicon is
/// immutable once built and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
    amplifiers: HashMap<String, f64>,
    negation_cues: Vec<String>,
    positive_matcher: Option<Regex>,
    negative_matcher: Option<Regex>,
    amplifier_matcher: Option<Regex>,
    negation_matchers: Vec<Regex>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_lexicon().clone()
    }
}

impl Lexicon {
    /// Shared built-in lexicon, built on first use
    pub fn default_lexicon() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// Build a lexicon from word tables
    ///
    /// Entries are lowercased with whitespace collapsed; duplicates collapse,
    /// except amplifiers, whose weights would conflict. The polarity tables
    /// must be disjoint and amplifiers must not carry polarity.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let positive = normalize_table("positive", &config.positive_words)?;
        let negative = normalize_table("negative", &config.negative_words)?;
        let negation = normalize_table("negation", &config.negation_cues)?;

        let amplifier_words: Vec<String> = config.amplifiers.keys().cloned().collect();
        let amplifier_set = normalize_table("amplifier", &amplifier_words)?;

        check_disjoint(&positive, "positive", &negative, "negative")?;
        check_disjoint(&amplifier_set, "amplifier", &positive, "positive")?;
        check_disjoint(&amplifier_set, "amplifier", &negative, "negative")?;

        let mut amplifiers = HashMap::with_capacity(config.amplifiers.len());
        for (word, &weight) in &config.amplifiers {
            if !(weight > 0.0 && weight < 1.0) {
                return Err(LexiconError::InvalidWeight {
                    word: word.clone(),
                    weight,
                });
            }
            let key = normalize_word(word);
            if amplifiers.insert(key.clone(), weight).is_some() {
                return Err(LexiconError::DuplicateAmplifier { word: key });
            }
        }

        let positive_alternation = alternation(&positive);

        let negation_matchers = match &positive_alternation {
            Some(targets) => negation
                .iter()
                .map(|cue| {
                    Regex::new(&format!(
                        r"(?i)\b{}\s+(?:[\w']+\s+)?(?:{})\b",
                        escape_phrase(cue),
                        targets
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        debug!(
            positive = positive.len(),
            negative = negative.len(),
            amplifiers = amplifiers.len(),
            negation_cues = negation.len(),
            "built lexicon"
        );

        Ok(Self {
            positive_matcher: whole_word_matcher(positive_alternation.as_deref())?,
            negative_matcher: whole_word_matcher(alternation(&negative).as_deref())?,
            amplifier_matcher: whole_word_matcher(alternation(&amplifier_set).as_deref())?,
            negation_matchers,
            positive_words: positive.into_iter().collect(),
            negative_words: negative.into_iter().collect(),
            amplifiers,
            negation_cues: negation.into_iter().collect(),
        })
    }

    /// Check if a word is a positive cue
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(&normalize_word(word))
    }

    /// Check if a word is a negative cue
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(&normalize_word(word))
    }

    /// Check if a word or phrase is a negation cue
    pub fn is_negation(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.negation_cues.iter().any(|cue| *cue == word)
    }

    /// Get amplifier weight
    pub fn amplifier_weight(&self, word: &str) -> Option<f64> {
        self.amplifiers.get(&normalize_word(word)).copied()
    }

    /// Number of entries in each table
    pub fn sizes(&self) -> TableSizes {
        TableSizes {
            positive: self.positive_words.len(),
            negative: self.negative_words.len(),
            amplifiers: self.amplifiers.len(),
            negation_cues: self.negation_cues.len(),
        }
    }

    pub fn positive_words(&self) -> impl Iterator<Item = &str> {
        self.positive_words.iter().map(String::as_str)
    }

    pub fn negative_words(&self) -> impl Iterator<Item = &str> {
        self.negative_words.iter().map(String::as_str)
    }

    pub fn amplifiers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amplifiers.iter().map(|(word, weight)| (word.as_str(), *weight))
    }

    pub fn negation_cues(&self) -> impl Iterator<Item = &str> {
        self.negation_cues.iter().map(String::as_str)
    }

    /// Count whole-word positive and negative cue occurrences
    pub fn count_polarity(&self, text: &str) -> PolarityCounts {
        let counts = PolarityCounts {
            positive: count_matches(self.positive_matcher.as_ref(), text),
            negative: count_matches(self.negative_matcher.as_ref(), text),
        };
        trace!(positive = counts.positive, negative = counts.negative, "polarity counts");
        counts
    }

    /// Count negated positive cues
    ///
    /// A match is a negation cue, at most one intervening word, then a
    /// positive cue. Every cue is scanned on its own, so overlapping cues can
    /// each claim the same positive word.
    pub fn count_negations(&self, text: &str) -> usize {
        let count = self
            .negation_matchers
            .iter()
            .map(|matcher| matcher.find_iter(text).count())
            .sum();
        trace!(count, "negated positives");
        count
    }

    /// Count amplifier occurrences and sum their weights
    pub fn count_amplifiers(&self, text: &str) -> AmplifierMatches {
        let Some(matcher) = &self.amplifier_matcher else {
            return AmplifierMatches::default();
        };

        let mut matches = AmplifierMatches::default();
        for m in matcher.find_iter(text) {
            matches.count += 1;
            matches.weight_sum += self.amplifier_weight(m.as_str()).unwrap_or(0.0);
        }
        trace!(count = matches.count, weight_sum = matches.weight_sum, "amplifiers");
        matches
    }

    /// Polarity cues found in the text, in order of appearance
    pub fn matched_words(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = [&self.positive_matcher, &self.negative_matcher]
            .into_iter()
            .flatten()
            .flat_map(|matcher| matcher.find_iter(text))
            .map(|m| (m.start(), m.as_str().to_lowercase()))
            .collect();
        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, word)| word).collect()
    }
}

/// Lowercase and collapse inner whitespace runs to one space
fn normalize_word(word: &str) -> String {
    word.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn normalize_table(
    table: &'static str,
    words: &[String],
) -> Result<BTreeSet<String>, LexiconError> {
    let mut normalized = BTreeSet::new();
    for word in words {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(LexiconError::EmptyWord { table });
        }
        let bounded = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
        if !bounded(word.chars().next()) || !bounded(word.chars().last()) {
            return Err(LexiconError::InvalidWord { table, word });
        }
        normalized.insert(word);
    }
    Ok(normalized)
}

fn check_disjoint(
    left: &BTreeSet<String>,
    first: &'static str,
    right: &BTreeSet<String>,
    second: &'static str,
) -> Result<(), LexiconError> {
    match left.intersection(right).next() {
        Some(word) => Err(LexiconError::Overlap {
            word: word.clone(),
            first,
            second,
        }),
        None => Ok(()),
    }
}

/// Phrases match across any run of whitespace
fn escape_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Longest entries first so a prefix never shadows a longer cue
fn alternation(words: &BTreeSet<String>) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    Some(
        sorted
            .into_iter()
            .map(|w| escape_phrase(w))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

fn whole_word_matcher(alternation: Option<&str>) -> Result<Option<Regex>, LexiconError> {
    alternation
        .map(|alt| Regex::new(&format!(r"(?i)\b(?:{alt})\b")))
        .transpose()
        .map_err(LexiconError::from)
}

fn count_matches(matcher: Option<&Regex>, text: &str) -> usize {
    matcher.map_or(0, |m| m.find_iter(text).count())
}
