//! # Example Gallery
//!
//! Scores the built-in sample texts and summarises agreement with the
//! expected labels. An optional config file (`.toml` or `.json`) can be
//! passed as the first argument.

use sentiment_scorer::{
    data::gallery,
    utils::load_config,
    AppConfig, IndicatorTier, Lexicon, SentimentAggregator, SentimentScorer,
};
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => {
                info!(%path, "loaded configuration");
                config
            }
            Err(e) => {
                warn!(%path, error = %e, "falling back to default configuration");
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };

    let lexicon = match Lexicon::from_config(&config.lexicon) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Invalid lexicon: {}", e);
            std::process::exit(1);
        }
    };

    let scorer = match SentimentScorer::with_lexicon(&lexicon).with_config(config.scorer) {
        Ok(scorer) => scorer,
        Err(e) => {
            eprintln!("Invalid scorer settings: {}", e);
            std::process::exit(1);
        }
    };

    let sizes = lexicon.sizes();
    println!("=== Example Gallery ===");
    println!(
        "Lexicon: {} positive, {} negative, {} amplifiers, {} negation cues\n",
        sizes.positive, sizes.negative, sizes.amplifiers, sizes.negation_cues
    );

    let mut results = Vec::new();
    let mut matches = 0;

    for category in gallery::CATEGORIES {
        println!("{}", category.name);
        println!("{}", "-".repeat(60));

        for example in category.examples {
            let result = scorer.score(example.text);
            let tier = IndicatorTier::from_score(result.score);
            let hit = result.label == example.expected;
            if hit {
                matches += 1;
            }

            println!(
                "  [{}] {:.3} {:<8} ({}) expected {}",
                if hit { "ok" } else { "--" },
                result.score,
                result.label.as_str(),
                tier.as_str(),
                example.expected
            );
            println!("       \"{}\"", example.text);

            results.push(result);
        }
        println!();
    }

    let summary = SentimentAggregator::new().summarize(&results);

    println!("{}", "=".repeat(60));
    println!("Texts: {}", summary.count);
    println!("Matched expected label: {}/{}", matches, summary.count);
    println!(
        "Labels: {} positive, {} neutral, {} negative",
        summary.positive, summary.neutral, summary.negative
    );
    println!("Mean score: {:.3} (std {:.3})", summary.mean_score, summary.std_dev);
}
