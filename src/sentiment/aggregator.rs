//! # Sentiment Aggregator
//!
//! Summarises a batch of score results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::scorer::{ScoreResult, SentimentLabel};
use crate::defaults;

/// Summary of a batch of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Number of results summarised
    pub count: usize,
    /// Mean score (0.5 for an empty batch)
    pub mean_score: f64,
    /// Population standard deviation of the scores
    pub std_dev: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Most common label; Neutral on ties
    pub dominant: SentimentLabel,
    /// Share of results carrying the dominant label
    pub agreement: f64,
    /// Time of aggregation
    pub timestamp: DateTime<Utc>,
}

/// Aggregator for score results
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAggregator;

impl SentimentAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Summarise a batch of results
    pub fn summarize(&self, results: &[ScoreResult]) -> BatchSummary {
        let count_of = |label: SentimentLabel| results.iter().filter(|r| r.label == label).count();
        let positive = count_of(SentimentLabel::Positive);
        let neutral = count_of(SentimentLabel::Neutral);
        let negative = count_of(SentimentLabel::Negative);

        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        let (dominant, agreement) = self.majority_label(results);

        BatchSummary {
            count: results.len(),
            mean_score: self.simple_average(results),
            std_dev: Self::calculate_std(&scores),
            positive,
            neutral,
            negative,
            dominant,
            agreement,
            timestamp: Utc::now(),
        }
    }

    /// Mean score, neutral when empty
    pub fn simple_average(&self, results: &[ScoreResult]) -> f64 {
        if results.is_empty() {
            return defaults::NEUTRAL_SCORE;
        }
        let sum: f64 = results.iter().map(|r| r.score).sum();
        sum / results.len() as f64
    }

    /// Majority label and the share of results that carry it
    pub fn majority_label(&self, results: &[ScoreResult]) -> (SentimentLabel, f64) {
        if results.is_empty() {
            return (SentimentLabel::Neutral, 0.0);
        }

        let count_of = |label: SentimentLabel| results.iter().filter(|r| r.label == label).count();
        let positive = count_of(SentimentLabel::Positive);
        let negative = count_of(SentimentLabel::Negative);
        let neutral = results.len() - positive - negative;

        let max_count = positive.max(negative).max(neutral);
        let agreement = max_count as f64 / results.len() as f64;

        let label = if positive > negative && positive > neutral {
            SentimentLabel::Positive
        } else if negative > positive && negative > neutral {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        (label, agreement)
    }

    fn calculate_std(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(score: f64) -> ScoreResult {
        ScoreResult {
            score,
            label: SentimentLabel::from_score(score),
        }
    }

    #[test]
    fn test_empty_batch() {
        let summary = SentimentAggregator::new().summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_score, 0.5);
        assert_eq!(summary.dominant, SentimentLabel::Neutral);
        assert_eq!(summary.agreement, 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            make_result(0.9),
            make_result(0.8),
            make_result(0.5),
            make_result(0.1),
        ];
        let summary = SentimentAggregator::new().summarize(&results);

        assert_eq!(summary.count, 4);
        assert_eq!((summary.positive, summary.neutral, summary.negative), (2, 1, 1));
        assert_eq!(summary.dominant, SentimentLabel::Positive);
        assert!((summary.agreement - 0.5).abs() < 1e-12);
        assert!((summary.mean_score - 0.575).abs() < 1e-12);
        assert!(summary.std_dev > 0.0);
    }

    #[test]
    fn test_tie_is_neutral() {
        let results = vec![make_result(0.9), make_result(0.1)];
        let (label, agreement) = SentimentAggregator::new().majority_label(&results);
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(agreement, 0.5);
    }

    #[test]
    fn test_uniform_scores_have_no_spread() {
        let results = vec![make_result(0.7); 3];
        assert!(SentimentAggregator::new().summarize(&results).std_dev < 1e-12);
    }
}
