//! # Sentiment Scorer
//!
//! Lexical scoring pipeline: polarity counting, negation adjustment,
//! amplifier scaling, then a bounded random jitter before classification.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::lexicon::Lexicon;
use crate::data::TextPreprocessor;
use crate::defaults;
use crate::utils::config::{ConfigError, ScorerConfig};

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Score at or above the positive threshold
    Positive,
    /// Score strictly between the thresholds
    Neutral,
    /// Score at or below the negative threshold
    Negative,
}

impl SentimentLabel {
    /// Classify a score with the default thresholds (0.65 / 0.35)
    pub fn from_score(score: f64) -> Self {
        Self::classify(
            score,
            defaults::POSITIVE_THRESHOLD,
            defaults::NEGATIVE_THRESHOLD,
        )
    }

    /// Classify a score with explicit thresholds
    pub fn classify(score: f64, positive_threshold: f64, negative_threshold: f64) -> Self {
        if score >= positive_threshold {
            SentimentLabel::Positive
        } else if score <= negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final score and label for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Sentiment score in [0, 1]
    pub score: f64,
    /// Label derived from the score
    pub label: SentimentLabel,
}

/// Every intermediate value of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Positive cue hits before negation
    pub positive_count: usize,
    /// Negative cue hits before negation
    pub negative_count: usize,
    /// Negated positive cues
    pub negated_count: usize,
    /// Positive evidence after negation (may drop below zero)
    pub adjusted_positive: i64,
    /// Negative evidence after negation
    pub adjusted_negative: i64,
    /// Ratio score from the raw counts
    pub raw_base_score: f64,
    /// Ratio score from the negation-adjusted counts
    pub base_score: f64,
    /// Amplifier occurrences
    pub amplifier_count: usize,
    /// Sum of the matched amplifier weights
    pub amplifier_weight: f64,
    /// Score after amplifier scaling
    pub amplified_score: f64,
    /// Random offset added to the amplified score
    pub jitter: f64,
    /// Polarity cues in order of appearance
    pub key_words: Vec<String>,
    /// Final result
    pub result: ScoreResult,
}

/// Clamp a value to [0, 1]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Ratio of positive to total polarity evidence
///
/// Falls back to the neutral 0.5 when there is no evidence. Counts are taken
/// as-is, so a negative positive count yields a ratio that clamps to 0.
pub fn base_score(positive: i64, negative: i64) -> f64 {
    let total = positive + negative;
    if total == 0 {
        return defaults::NEUTRAL_SCORE;
    }
    clamp01(positive as f64 / total as f64)
}

/// Move negated positive hits over to the negative side
pub fn apply_negation(positive: usize, negative: usize, negated: usize) -> (i64, i64) {
    let negated = negated as i64;
    (positive as i64 - negated, negative as i64 + negated)
}

/// Stretch the distance from neutral by the amplifier count
///
/// `amplification = min(count * step, cap)`; an exactly neutral score is left
/// alone.
pub fn apply_amplification(score: f64, amplifier_count: usize, step: f64, cap: f64) -> f64 {
    if score == defaults::NEUTRAL_SCORE {
        return score;
    }
    let amplification = (amplifier_count as f64 * step).min(cap);
    let deviation = score - defaults::NEUTRAL_SCORE;
    clamp01(defaults::NEUTRAL_SCORE + deviation * (1.0 + amplification))
}

/// Add a uniform draw from `(-amplitude, amplitude)` and clamp
///
/// Returns the new score and the offset drawn. No draw is taken unless the
/// amplitude is a positive finite number.
pub fn apply_jitter<R: Rng + ?Sized>(score: f64, amplitude: f64, rng: &mut R) -> (f64, f64) {
    if !(amplitude > 0.0 && amplitude.is_finite()) {
        return (score, 0.0);
    }
    let offset = rng.gen_range(-amplitude..amplitude);
    (clamp01(score + offset), offset)
}

/// Lexical sentiment scorer
///
/// Borrows a lexicon, so the built-in tables are shared across every scorer
/// in the process. Scoring never fails: any string, including an empty one,
/// yields a result.
#[derive(Debug, Clone)]
pub struct SentimentScorer<'a> {
    preprocessor: TextPreprocessor,
    lexicon: &'a Lexicon,
    config: ScorerConfig,
}

impl Default for SentimentScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer<'static> {
    /// Create a scorer over the built-in lexicon with default settings
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::default_lexicon())
    }

    /// Built-in lexicon with jitter disabled
    pub fn deterministic() -> Self {
        Self {
            config: ScorerConfig::deterministic(),
            ..Self::new()
        }
    }
}

impl<'a> SentimentScorer<'a> {
    /// Create a scorer over a custom lexicon with default settings
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self {
            preprocessor: TextPreprocessor::new(),
            lexicon,
            config: ScorerConfig::default(),
        }
    }

    /// Replace the scoring settings after validating them
    pub fn with_config(mut self, config: ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Label a score with this scorer's thresholds
    pub fn classify(&self, score: f64) -> SentimentLabel {
        SentimentLabel::classify(
            score,
            self.config.positive_threshold,
            self.config.negative_threshold,
        )
    }

    /// Score a text using the thread-local random generator for jitter
    pub fn score(&self, text: &str) -> ScoreResult {
        self.score_with_rng(text, &mut rand::thread_rng())
    }

    /// Score a text drawing jitter from the given generator
    pub fn score_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ScoreResult {
        self.explain_with_rng(text, rng).result
    }

    /// Score several texts
    pub fn score_batch(&self, texts: &[&str]) -> Vec<ScoreResult> {
        let mut rng = rand::thread_rng();
        texts
            .iter()
            .map(|text| self.score_with_rng(text, &mut rng))
            .collect()
    }

    /// Score a text and keep every intermediate value
    pub fn explain(&self, text: &str) -> ScoreBreakdown {
        self.explain_with_rng(text, &mut rand::thread_rng())
    }

    /// Score a text and keep every intermediate value, drawing jitter from
    /// the given generator
    pub fn explain_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ScoreBreakdown {
        let text = self.preprocessor.normalize(text);

        let counts = self.lexicon.count_polarity(&text);
        let raw_base_score = base_score(counts.positive as i64, counts.negative as i64);

        let negated_count = self.lexicon.count_negations(&text);
        let (adjusted_positive, adjusted_negative) =
            apply_negation(counts.positive, counts.negative, negated_count);
        let base = base_score(adjusted_positive, adjusted_negative);

        let amplifiers = self.lexicon.count_amplifiers(&text);
        let amplified_score = apply_amplification(
            base,
            amplifiers.count,
            self.config.amplifier_step,
            self.config.amplifier_cap,
        );

        let (score, jitter) = apply_jitter(amplified_score, self.config.jitter_amplitude, rng);
        let label = self.classify(score);

        debug!(
            positive = counts.positive,
            negative = counts.negative,
            negated = negated_count,
            amplifiers = amplifiers.count,
            base_score = base,
            amplified_score,
            score,
            %label,
            "scored text"
        );

        ScoreBreakdown {
            positive_count: counts.positive,
            negative_count: counts.negative,
            negated_count,
            adjusted_positive,
            adjusted_negative,
            raw_base_score,
            base_score: base,
            amplifier_count: amplifiers.count,
            amplifier_weight: amplifiers.weight_sum,
            amplified_score,
            jitter,
            key_words: self.lexicon.matched_words(&text),
            result: ScoreResult { score, label },
        }
    }
}

/// Score a text with the built-in lexicon and default settings
pub fn analyze_sentiment(text: &str) -> ScoreResult {
    SentimentScorer::new().score(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    use crate::utils::config::LexiconConfig;

    fn score(text: &str) -> f64 {
        SentimentScorer::deterministic().score(text).score
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.65), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.35), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.6499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.3501), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"Negative\""
        );
    }

    #[test]
    fn test_base_score() {
        assert_eq!(base_score(0, 0), 0.5);
        assert_eq!(base_score(3, 1), 0.75);
        assert_eq!(base_score(0, 2), 0.0);
        assert_eq!(base_score(-1, 2), 0.0);
        assert_eq!(base_score(-1, 1), 0.5);
    }

    #[test]
    fn test_amplification_scales_deviation() {
        let amplified = apply_amplification(0.75, 1, 0.1, 0.3);
        assert!((amplified - 0.775).abs() < 1e-9);

        let amplified = apply_amplification(0.25, 2, 0.1, 0.3);
        assert!((amplified - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_amplification_leaves_neutral_alone() {
        assert_eq!(apply_amplification(0.5, 10, 0.1, 0.3), 0.5);
    }

    #[test]
    fn test_amplification_capped() {
        let three = apply_amplification(0.6, 3, 0.1, 0.3);
        let ten = apply_amplification(0.6, 10, 0.1, 0.3);
        assert!((three - ten).abs() < 1e-12);
        assert!(three > apply_amplification(0.6, 2, 0.1, 0.3));
    }

    #[test]
    fn test_zero_jitter_skips_draw() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(apply_jitter(0.4, 0.0, &mut rng), (0.4, 0.0));
    }

    #[test]
    fn test_jitter_bounded_and_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (score, offset) = apply_jitter(0.98, 0.05, &mut rng);
            assert!(offset >= -0.05 && offset < 0.05);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_polarity_ordering() {
        assert!(score("great") > score("bad"));
        assert!(score("great great great") >= score("great"));
    }

    #[test]
    fn test_negation_lowers_score() {
        assert!(score("not good") < score("good"));
        assert_eq!(score("this is not very good"), 0.0);
    }

    #[test]
    fn test_negated_negative_not_special() {
        // "not bad" keeps its negative hit
        assert_eq!(score("not bad"), 0.0);
    }

    #[test]
    fn test_overlapping_negation_not_floored() {
        let breakdown = SentimentScorer::deterministic().explain("not no good");
        assert_eq!(breakdown.negated_count, 2);
        assert_eq!(breakdown.adjusted_positive, -1);
        assert_eq!(breakdown.adjusted_negative, 2);
        assert_eq!(breakdown.base_score, 0.0);
        assert_eq!(breakdown.result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_amplifier_on_mixed_text() {
        let plain = score("good good bad");
        let amplified = score("very good good bad");
        assert!(amplified > plain);

        let saturated = score("very very very good good bad");
        let oversaturated = score("very very very very very good good bad");
        assert!((saturated - oversaturated).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_without_evidence() {
        let scorer = SentimentScorer::deterministic();
        let breakdown = scorer.explain("The quick brown fox jumps.");
        assert_eq!(breakdown.base_score, 0.5);
        assert_eq!(breakdown.result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_end_to_end_breakdown() {
        let scorer = SentimentScorer::deterministic();
        let breakdown = scorer.explain("I love this, it's absolutely amazing!");

        assert!(breakdown.positive_count >= 2);
        assert_eq!(breakdown.amplifier_count, 1);
        assert_eq!(breakdown.base_score, 1.0);
        assert_eq!(breakdown.result.score, 1.0);
        assert_eq!(breakdown.result.label, SentimentLabel::Positive);
        assert_eq!(breakdown.key_words, vec!["love", "amazing"]);
    }

    #[test]
    fn test_jittered_neutral_stays_neutral() {
        let scorer = SentimentScorer::new();
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..200 {
            let result = scorer.score_with_rng("Nothing to see here", &mut rng);
            assert!((0.45..0.55).contains(&result.score));
            assert_eq!(result.label, SentimentLabel::Neutral);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let scorer = SentimentScorer::new();
        let first = scorer.score_with_rng("good but bad", &mut StdRng::seed_from_u64(9));
        let second = scorer.score_with_rng("good but bad", &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = SentimentScorer::deterministic()
            .with_config(ScorerConfig {
                positive_threshold: 0.9,
                negative_threshold: 0.1,
                jitter_amplitude: 0.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(scorer.score("good good bad").label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_non_finite_jitter_skips_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        for amplitude in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.1] {
            assert_eq!(apply_jitter(0.7, amplitude, &mut rng), (0.7, 0.0));
        }
    }

    #[test]
    fn test_phrase_negation_lowers_score() {
        let config = LexiconConfig {
            positive_words: vec!["good".into()],
            negative_words: vec!["bad".into()],
            amplifiers: BTreeMap::new(),
            negation_cues: vec!["do not".into()],
        };
        let lexicon = Lexicon::from_config(&config).unwrap();
        let scorer = SentimentScorer::with_lexicon(&lexicon)
            .with_config(ScorerConfig::deterministic())
            .unwrap();

        let negated = scorer.explain("I do   NOT really good");
        assert_eq!(negated.negated_count, 1);
        assert_eq!(negated.result.score, 0.0);
        assert!(negated.result.score < scorer.score("I really good").score);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SentimentScorer::new().with_config(ScorerConfig {
            jitter_amplitude: -1.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_batch() {
        let results = SentimentScorer::deterministic().score_batch(&["great", "awful", ""]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[1].label, SentimentLabel::Negative);
        assert_eq!(results[2].label, SentimentLabel::Neutral);
    }
}
