//! # Text Preprocessing
//!
//! Normalization applied to free text before lexicon matching.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Text preprocessor for scorer input
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPreprocessor;

impl TextPreprocessor {
    /// Create a new text preprocessor
    pub fn new() -> Self {
        Self
    }

    /// Normalize text for matching
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC)
    /// 2. Convert to lowercase
    /// 3. Collapse whitespace runs and trim
    pub fn normalize(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let lowercase = normalized.to_lowercase();
        let clean = WHITESPACE_REGEX.replace_all(&lowercase, " ");
        clean.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let preprocessor = TextPreprocessor::new();
        assert_eq!(preprocessor.normalize("  Hello   World  "), "hello world");
    }

    #[test]
    fn test_normalize_line_breaks() {
        let preprocessor = TextPreprocessor::new();
        assert_eq!(
            preprocessor.normalize("This is\n\tGREAT"),
            "this is great"
        );
    }

    #[test]
    fn test_normalize_composes_accents() {
        let preprocessor = TextPreprocessor::new();
        // "e" followed by a combining acute accent
        let decomposed = "Cafe\u{301}";
        assert_eq!(preprocessor.normalize(decomposed), "caf\u{e9}");
    }
}
