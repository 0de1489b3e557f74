//! # Sentiment Module
//!
//! Lexicon tables, the scoring pipeline and result summaries.

mod aggregator;
pub mod indicator;
mod lexicon;
mod scorer;

pub use aggregator::{BatchSummary, SentimentAggregator};
pub use indicator::IndicatorTier;
pub use lexicon::{AmplifierMatches, Lexicon, LexiconError, PolarityCounts, TableSizes};
pub use scorer::{
    analyze_sentiment, apply_amplification, apply_jitter, apply_negation, base_score, clamp01,
    ScoreBreakdown, ScoreResult, SentimentLabel, SentimentScorer,
};
