//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on runs of whitespace.
///
/// Leading and trailing whitespace is trimmed and consecutive whitespace
/// characters count as a single separator, so empty tokens are never
/// produced: empty or all-whitespace input yields an empty stream.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
