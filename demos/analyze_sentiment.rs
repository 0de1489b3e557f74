//! # Sentiment Scoring Example
//!
//! Scores a few texts and prints every stage of the pipeline.
//!
//! Run with `RUST_LOG=sentiment_scorer=debug` to see per-stage tracing.

use sentiment_scorer::{sentiment::indicator, SentimentScorer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sentiment Scoring Demo ===\n");

    let scorer = SentimentScorer::new();

    let texts = vec![
        "I love this, it's absolutely amazing!",
        "This is not very good.",
        "Terrible service and awful food.",
        "The quick brown fox jumps.",
        "Good idea, bad execution, really disappointing.",
        "",
    ];

    println!("{}", "=".repeat(70));

    for text in texts {
        let breakdown = scorer.explain(text);

        println!("\nText: \"{}\"", text);
        println!("{}", "-".repeat(60));
        println!(
            "  Counts: +{} / -{} (negated: {})",
            breakdown.positive_count, breakdown.negative_count, breakdown.negated_count
        );
        println!("  Base Score: {:.3}", breakdown.base_score);
        println!(
            "  Amplifiers: {} (weight {:.2})",
            breakdown.amplifier_count, breakdown.amplifier_weight
        );
        println!("  Amplified: {:.3}", breakdown.amplified_score);
        println!("  Jitter: {:+.3}", breakdown.jitter);
        println!(
            "  Result: {:.3} ({}%) -> {}",
            breakdown.result.score,
            indicator::percent(breakdown.result.score),
            breakdown.result.label
        );

        if !breakdown.key_words.is_empty() {
            println!("  Key Words: {}", breakdown.key_words.join(", "));
        }
    }

    println!("\n{}", "=".repeat(70));

    let deterministic = SentimentScorer::deterministic();
    let result = deterministic.score("not good");
    println!("\nWith jitter disabled: \"not good\" -> {:.3} {}", result.score, result.label);

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize result: {}", e),
    }
}
