//! # Score Indicator
//!
//! Five-tier bucketing of a score for gauges and badges. Finer than
//! [`SentimentLabel`](super::SentimentLabel) and independent of its
//! thresholds.

use serde::{Deserialize, Serialize};

/// Display tier of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorTier {
    /// score < 0.3
    VeryNegative,
    /// 0.3 <= score < 0.4
    Negative,
    /// 0.4 <= score < 0.5
    Neutral,
    /// 0.5 <= score < 0.7
    Positive,
    /// score >= 0.7
    VeryPositive,
}

impl IndicatorTier {
    /// Bucket a score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            IndicatorTier::VeryPositive
        } else if score >= 0.5 {
            IndicatorTier::Positive
        } else if score >= 0.4 {
            IndicatorTier::Neutral
        } else if score >= 0.3 {
            IndicatorTier::Negative
        } else {
            IndicatorTier::VeryNegative
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorTier::VeryNegative => "Very Negative",
            IndicatorTier::Negative => "Negative",
            IndicatorTier::Neutral => "Neutral",
            IndicatorTier::Positive => "Positive",
            IndicatorTier::VeryPositive => "Very Positive",
        }
    }
}

/// Score as a whole percentage, clamped to 0..=100
pub fn percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(IndicatorTier::from_score(0.0), IndicatorTier::VeryNegative);
        assert_eq!(IndicatorTier::from_score(0.3), IndicatorTier::Negative);
        assert_eq!(IndicatorTier::from_score(0.45), IndicatorTier::Neutral);
        assert_eq!(IndicatorTier::from_score(0.5), IndicatorTier::Positive);
        assert_eq!(IndicatorTier::from_score(0.7), IndicatorTier::VeryPositive);
        assert_eq!(IndicatorTier::from_score(1.0), IndicatorTier::VeryPositive);
    }

    #[test]
    fn test_tiers_ordered() {
        assert!(IndicatorTier::VeryNegative < IndicatorTier::VeryPositive);
        assert!(IndicatorTier::from_score(0.2) < IndicatorTier::from_score(0.6));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.656), 66);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(1.7), 100);
    }
}
