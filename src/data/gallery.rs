//! # Example Gallery
//!
//! Sample texts grouped by category, each tagged with the sentiment a
//! reader would expect. Used by demos and as a smoke corpus in tests.

use crate::sentiment::SentimentLabel;

/// A sample text and its expected label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleText {
    pub text: &'static str,
    pub expected: SentimentLabel,
}

/// A named group of samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleCategory {
    pub name: &'static str,
    pub examples: &'static [ExampleText],
}

const fn sample(text: &'static str, expected: SentimentLabel) -> ExampleText {
    ExampleText { text, expected }
}

/// All gallery categories
pub const CATEGORIES: &[ExampleCategory] = &[
    ExampleCategory {
        name: "Product Reviews",
        examples: &[
            sample(
                "This product exceeded all my expectations. The quality is outstanding and customer service was excellent!",
                SentimentLabel::Positive,
            ),
            sample(
                "I'm extremely disappointed with this purchase. It broke after one week and customer service was unhelpful.",
                SentimentLabel::Negative,
            ),
        ],
    },
    ExampleCategory {
        name: "Restaurant Feedback",
        examples: &[
            sample(
                "The food was delicious and the staff was very friendly. Will definitely come back again!",
                SentimentLabel::Positive,
            ),
            sample(
                "Poor service, mediocre food, and overpriced. I wouldn't recommend this place to anyone.",
                SentimentLabel::Negative,
            ),
        ],
    },
    ExampleCategory {
        name: "Movie Reviews",
        examples: &[
            sample(
                "A masterpiece of storytelling with stunning visuals and a compelling screenplay. One of the best films I've seen this year!",
                SentimentLabel::Positive,
            ),
            sample(
                "This movie was a complete waste of time. Predictable plot, wooden acting and terrible dialogue.",
                SentimentLabel::Negative,
            ),
        ],
    },
    ExampleCategory {
        name: "Social Media Comments",
        examples: &[
            sample(
                "This post made my day! So inspiring and uplifting! Thanks for sharing!",
                SentimentLabel::Positive,
            ),
            sample(
                "What a terrible take. This is exactly the kind of content that ruins platforms like this.",
                SentimentLabel::Negative,
            ),
        ],
    },
];

/// Every sample paired with its category name
pub fn all_examples() -> impl Iterator<Item = (&'static str, &'static ExampleText)> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.examples.iter().map(move |e| (category.name, e)))
}

/// Look up a category by name, ignoring case
pub fn category(name: &str) -> Option<&'static ExampleCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_shape() {
        assert_eq!(CATEGORIES.len(), 4);
        assert_eq!(all_examples().count(), 8);
        for category in CATEGORIES {
            let positives = category
                .examples
                .iter()
                .filter(|e| e.expected == SentimentLabel::Positive)
                .count();
            assert_eq!(positives, 1, "{} should have one positive sample", category.name);
        }
    }

    #[test]
    fn test_category_lookup() {
        assert!(category("movie reviews").is_some());
        assert!(category("Weather").is_none());
    }
}
