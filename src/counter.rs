//! The word counting facade.
//!
//! [`WordCounter`] wires the analysis pipeline together: punctuation
//! handling, symbol stripping, whitespace tokenization and script
//! segmentation, with keyword scoring and reading metrics layered on
//! top.

use crate::analysis::char_filter::{CharFilter, PunctuationCharFilter, SymbolCharFilter};
use crate::analysis::segmenter::ScriptSegmenter;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::config::{CounterConfig, EffectiveConfig};
use crate::metrics::ReadingMetrics;
use crate::search::{SearchResult, score_keywords};

/// Counts words, scores keywords and estimates reading times.
///
/// Every operation derives its working state fresh from the
/// configuration, so a single counter can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use kotoba::{CounterConfig, WordCounter};
///
/// let counter = WordCounter::new();
/// assert_eq!(counter.count("one two"), 2);
/// assert_eq!(counter.count("さらに「やり遂げる」ためのEnjin"), 12);
///
/// let breaker = WordCounter::with_config(
///     CounterConfig::new().with_punctuation_as_breaker(true),
/// );
/// assert_eq!(breaker.parse("they're"), ["they", "re"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordCounter {
    config: CounterConfig,
}

impl WordCounter {
    /// Create a counter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with the given configuration.
    pub fn with_config(config: CounterConfig) -> Self {
        WordCounter { config }
    }

    /// The configuration this counter was built with.
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Split the input into space-separated tokens with punctuation and
    /// symbols removed.
    ///
    /// Words of no-space scripts are still clumped together here, since
    /// nothing separates them in the source text; use
    /// [`parse`](WordCounter::parse) for the fully segmented list.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let effective = self.config.normalize();
        self.raw_tokens(input, &effective)
            .map(|token| token.text)
            .collect()
    }

    /// Call `f` for every word detected in the input, in order.
    pub fn range_words<F>(&self, input: &str, mut f: F)
    where
        F: FnMut(&Token),
    {
        let effective = self.config.normalize();
        let tokens = self.raw_tokens(input, &effective);
        let segmenter = ScriptSegmenter::new(effective.punctuation);
        segmenter.segment(tokens, |token| f(&token));
    }

    /// Number of words detected in the input.
    pub fn count(&self, input: &str) -> usize {
        let mut count = 0;
        self.range_words(input, |_| count += 1);
        count
    }

    /// Every word detected in the input, in order.
    pub fn parse(&self, input: &str) -> Vec<String> {
        let mut words = Vec::new();
        self.range_words(input, |token| words.push(token.text.clone()));
        words
    }

    /// Case-insensitive search of `content` for the words of `query`.
    ///
    /// Earlier query words weigh more; see
    /// [`SearchResult`](crate::SearchResult) for the scoring rules.
    pub fn search(&self, query: &str, content: &str) -> SearchResult {
        let keywords = self.parse(&query.to_lowercase());
        let haystack = self.parse(&content.to_lowercase());
        score_keywords(&keywords, &haystack)
    }

    /// Count the words of `content` and derive reading time estimates.
    pub fn metrics(&self, content: &str) -> ReadingMetrics {
        let effective = self.config.normalize();
        ReadingMetrics::estimate(
            self.count(content),
            effective.average_wpm,
            effective.relaxed_wpm,
        )
    }

    /// Run the char filters and the whitespace tokenizer, stopping short
    /// of script segmentation.
    fn raw_tokens(&self, input: &str, effective: &EffectiveConfig) -> TokenStream {
        let punctuation = PunctuationCharFilter::new(
            effective.punctuation.clone(),
            effective.punctuation_as_breaker,
        );
        let text = punctuation.filter(input);
        let text = SymbolCharFilter::new().filter(&text);
        WhitespaceTokenizer::new().tokenize(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_removes_punctuation() {
        let counter = WordCounter::new();
        assert_eq!(counter.tokenize("they're one two"), ["theyre", "one", "two"]);
    }

    #[test]
    fn test_tokenize_keeps_clumped_scripts() {
        let counter = WordCounter::new();
        assert_eq!(
            counter.tokenize("さらに「やり遂げる」ためのEnjin"),
            ["さらにやり遂げるためのEnjin"]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        let counter = WordCounter::new();
        assert!(counter.tokenize("").is_empty());
        assert!(counter.tokenize("   ").is_empty());
    }

    #[test]
    fn test_parse_segments_scripts() {
        let counter = WordCounter::new();
        assert_eq!(
            counter.parse("helloさようなら"),
            ["hello", "さ", "よ", "う", "な", "ら"]
        );
    }

    #[test]
    fn test_count_matches_parse_length() {
        let counter = WordCounter::new();
        for input in [
            "",
            "one two three",
            "さらに「やり遂げる」ためのEnjin",
            "price: $100 for 2 items",
        ] {
            assert_eq!(counter.count(input), counter.parse(input).len());
        }
    }

    #[test]
    fn test_range_words_positions() {
        let counter = WordCounter::new();
        let mut positions = Vec::new();
        counter.range_words("one 漢字 two", |token| positions.push(token.position));
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[test]
    fn test_breaker_mode_splits_contractions() {
        let counter = WordCounter::with_config(
            CounterConfig::new()
                .with_punctuation(['!'])
                .with_punctuation_as_breaker(true),
        );
        assert_eq!(
            counter.parse("they're one two"),
            ["they", "re", "one", "two"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let counter = WordCounter::new();
        let result = counter.search("enjin", "さらに「やり遂げる」ためのEnjin");
        assert_eq!(result.score, 1);
        assert_eq!(result.matched, ["enjin"]);
    }

    #[test]
    fn test_metrics_uses_configured_speeds() {
        let counter =
            WordCounter::with_config(CounterConfig::new().with_average_wpm(1.0).with_relaxed_wpm(1.0));
        let metrics = counter.metrics("one two three");
        assert_eq!(metrics.word_count, 3);
        assert_eq!(metrics.average.minutes, 3);
        assert_eq!(metrics.relaxed.minutes, 3);
    }

    #[test]
    fn test_counter_is_reusable() {
        let counter = WordCounter::new();
        for _ in 0..3 {
            assert_eq!(counter.count("one two"), 2);
        }
    }
}
