//! # Data Module
//!
//! Text normalization and sample texts for sentiment scoring.

pub mod gallery;
mod preprocessing;

pub use gallery::{ExampleCategory, ExampleText};
pub use preprocessing::TextPreprocessor;
