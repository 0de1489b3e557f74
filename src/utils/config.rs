//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::defaults;
use crate::sentiment::{Lexicon, LexiconError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring thresholds and jitter
    pub scorer: ScorerConfig,
    /// Lexicon tables
    pub lexicon: LexiconConfig,
}

impl AppConfig {
    /// Validate every section
    ///
    /// The lexicon section is checked by building it, so a config that
    /// passes here can always be turned into a [`Lexicon`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scorer.validate()?;
        Lexicon::from_config(&self.lexicon)?;
        Ok(())
    }
}

/// Scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Scores at or above this are labelled Positive
    pub positive_threshold: f64,
    /// Scores at or below this are labelled Negative
    pub negative_threshold: f64,
    /// Half-width of the uniform jitter; 0 disables it
    pub jitter_amplitude: f64,
    /// Amplification added per amplifier match
    pub amplifier_step: f64,
    /// Upper bound on total amplification
    pub amplifier_cap: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            positive_threshold: defaults::POSITIVE_THRESHOLD,
            negative_threshold: defaults::NEGATIVE_THRESHOLD,
            jitter_amplitude: defaults::JITTER_AMPLITUDE,
            amplifier_step: defaults::AMPLIFIER_STEP,
            amplifier_cap: defaults::AMPLIFIER_CAP,
        }
    }
}

impl ScorerConfig {
    /// Same settings with jitter disabled
    pub fn deterministic() -> Self {
        Self {
            jitter_amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Builder-style jitter override
    pub fn with_jitter(mut self, amplitude: f64) -> Self {
        self.jitter_amplitude = amplitude;
        self
    }

    /// Check ranges and ordering of the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;

        if !unit.contains(&self.positive_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "positive_threshold",
                reason: format!("{} is outside [0, 1]", self.positive_threshold),
            });
        }
        if !unit.contains(&self.negative_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "negative_threshold",
                reason: format!("{} is outside [0, 1]", self.negative_threshold),
            });
        }
        if self.negative_threshold >= self.positive_threshold {
            return Err(ConfigError::InvalidValue {
                field: "negative_threshold",
                reason: format!(
                    "{} must be below positive_threshold {}",
                    self.negative_threshold, self.positive_threshold
                ),
            });
        }
        if !(0.0..=0.5).contains(&self.jitter_amplitude) {
            return Err(ConfigError::InvalidValue {
                field: "jitter_amplitude",
                reason: format!("{} is outside [0, 0.5]", self.jitter_amplitude),
            });
        }
        if !(self.amplifier_step >= 0.0 && self.amplifier_step.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "amplifier_step",
                reason: format!("{} must be a non-negative number", self.amplifier_step),
            });
        }
        if !(self.amplifier_cap >= 0.0 && self.amplifier_cap.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "amplifier_cap",
                reason: format!("{} must be a non-negative number", self.amplifier_cap),
            });
        }

        Ok(())
    }
}

/// Word tables used to build a [`crate::Lexicon`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Positive polarity cues
    pub positive_words: Vec<String>,
    /// Negative polarity cues
    pub negative_words: Vec<String>,
    /// Intensity modifiers and their weights
    pub amplifiers: BTreeMap<String, f64>,
    /// Words that negate a following positive cue
    pub negation_cues: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();

        Self {
            positive_words: owned(POSITIVE_WORDS),
            negative_words: owned(NEGATIVE_WORDS),
            amplifiers: AMPLIFIERS
                .iter()
                .map(|(word, weight)| (word.to_string(), *weight))
                .collect(),
            negation_cues: owned(NEGATION_CUES),
        }
    }
}

/// Built-in positive cues
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "best", "love",
    "perfect", "fantastic", "outstanding", "awesome", "terrific", "delightful",
    "happy", "pleased", "joy", "enjoyable", "superb", "impressive", "positive",
    "satisfied", "thrilled", "ecstatic", "fabulous", "brilliant", "exceptional",
    "incredible", "marvelous", "splendid",
];

/// Built-in negative cues
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "poor", "hate",
    "disappointing", "mediocre", "subpar", "negative", "dislike", "unfortunate",
    "sad", "unhappy", "frustrating", "disappointed", "waste", "annoying",
    "failure", "dreadful", "miserable", "unpleasant", "unsatisfactory",
    "inferior", "lousy", "unacceptable", "disgusting", "repulsive",
];

/// Built-in amplifiers with their weights
pub const AMPLIFIERS: &[(&str, f64)] = &[
    ("very", 0.2),
    ("extremely", 0.3),
    ("really", 0.15),
    ("so", 0.15),
    ("absolutely", 0.25),
    ("completely", 0.2),
    ("totally", 0.2),
    ("incredibly", 0.25),
    ("exceptionally", 0.25),
    ("particularly", 0.15),
    ("especially", 0.15),
    ("remarkably", 0.2),
];

/// Built-in negation cues
pub const NEGATION_CUES: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "cannot", "can't",
    "won't", "hardly", "barely", "scarcely", "seldom", "rarely",
];

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let config: AppConfig = match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        "toml" => toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    config.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let content = match ext {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content).map_err(|e| ConfigError::FileError(e.to_string()))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    /// A setting is out of range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
    /// The lexicon tables cannot be built
    #[error("Invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}
