//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it reaches the
//! tokenizer. The pipeline applies the punctuation filter first, then the
//! symbol filter, so that by the time text is split on whitespace only
//! word characters remain.
//!
//! # Available Filters
//!
//! - [`PunctuationCharFilter`] - deletes punctuation or replaces it with a
//!   space
//! - [`SymbolCharFilter`] - removes Unicode symbol-category characters

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;
pub mod symbol;

pub use punctuation::{DEFAULT_PUNCTUATION, PunctuationCharFilter};
pub use symbol::SymbolCharFilter;
