//! # Kotoba
//!
//! A locale-aware word counting and reading time estimation library.
//!
//! ## Features
//!
//! - Word detection across mixed writing systems: space-delimited scripts
//!   such as Latin, and no-space scripts (Han, Katakana, Hiragana, Hangul)
//!   where every character counts as one word
//! - Configurable punctuation handling: delete punctuation or treat it as
//!   a word break
//! - Position-weighted keyword search scoring
//! - Reading time estimation at average and relaxed reading speeds
//!
//! ## Quick start
//!
//! ```
//! let words = kotoba::parse("helloさようなら");
//! assert_eq!(words, ["hello", "さ", "よ", "う", "な", "ら"]);
//!
//! let metrics = kotoba::metrics("one two");
//! assert_eq!(metrics.word_count, 2);
//! ```
//!
//! The functions at the crate root use the default configuration. Build a
//! [`WordCounter`] from a [`CounterConfig`] for custom punctuation or
//! reading speeds.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod metrics;
pub mod search;

pub use analysis::token::{Token, TokenType};
pub use config::CounterConfig;
pub use counter::WordCounter;
pub use error::{KotobaError, Result};
pub use metrics::{
    AVERAGE_WORDS_PER_MINUTE, RELAXED_WORDS_PER_MINUTE, ReadingEstimate, ReadingMetrics,
};
pub use search::SearchResult;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Split the input into space-separated tokens using the default
/// configuration.
///
/// Words of no-space scripts are still clumped together in the returned
/// tokens; use [`parse`] for the fully segmented word list.
pub fn tokenize(input: &str) -> Vec<String> {
    WordCounter::default().tokenize(input)
}

/// Iterate over every word in the input using the default configuration,
/// calling `f` once per word.
pub fn range_words<F: FnMut(&Token)>(input: &str, f: F) {
    WordCounter::default().range_words(input, f)
}

/// Count the words in the input using the default configuration.
pub fn count(input: &str) -> usize {
    WordCounter::default().count(input)
}

/// Return every word in the input, in order, using the default
/// configuration.
pub fn parse(input: &str) -> Vec<String> {
    WordCounter::default().parse(input)
}

/// Score `content` against the keywords of `query` using the default
/// configuration.
pub fn search(query: &str, content: &str) -> SearchResult {
    WordCounter::default().search(query, content)
}

/// Count the words of `content` and derive reading time estimates using
/// the default configuration.
pub fn metrics(content: &str) -> ReadingMetrics {
    WordCounter::default().metrics(content)
}
