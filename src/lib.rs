//! # Sentiment Scorer
//!
//! Lexicon-based sentiment scoring for short free text. A text is reduced to
//! a score in [0, 1] and a Positive / Neutral / Negative label through four
//! ordered stages:
//!
//! 1. whole-word, case-insensitive polarity counting
//! 2. negation adjustment (a negation cue, at most one word, a positive cue)
//! 3. amplifier scaling of the distance from neutral, capped
//! 4. a small uniform jitter, then classification at 0.65 / 0.35
//!
//! ## Modules
//!
//! - `sentiment` - Lexicon, scorer, display tiers and batch summaries
//! - `data` - Text normalization and the example gallery
//! - `utils` - Configuration loading
//!
//! ## Example Usage
//!
//! ```
//! use sentiment_scorer::{SentimentLabel, SentimentScorer};
//!
//! // Jitter disabled for a repeatable result
//! let scorer = SentimentScorer::deterministic();
//!
//! let result = scorer.score("I love this, it's absolutely amazing!");
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert_eq!(result.score, 1.0);
//! ```

pub mod data;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use data::{ExampleCategory, ExampleText, TextPreprocessor};
pub use sentiment::{
    analyze_sentiment, BatchSummary, IndicatorTier, Lexicon, LexiconError, ScoreBreakdown,
    ScoreResult, SentimentAggregator, SentimentLabel, SentimentScorer,
};
pub use utils::{AppConfig, ConfigError, LexiconConfig, ScorerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Score assigned when no polarity cue is found
    pub const NEUTRAL_SCORE: f64 = 0.5;

    /// Scores at or above this are Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.65;

    /// Scores at or below this are Negative
    pub const NEGATIVE_THRESHOLD: f64 = 0.35;

    /// Half-width of the uniform jitter
    pub const JITTER_AMPLITUDE: f64 = 0.05;

    /// Amplification per amplifier match
    pub const AMPLIFIER_STEP: f64 = 0.1;

    /// Maximum total amplification
    pub const AMPLIFIER_CAP: f64 = 0.3;
}
