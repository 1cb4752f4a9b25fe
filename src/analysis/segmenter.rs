//! Script-boundary segmentation of mixed-script tokens.
//!
//! Writing systems like Han, Katakana, Hiragana and Hangul put no spaces
//! between words, so a whitespace token may hold an entire phrase,
//! possibly with Latin text glued onto it. The segmenter approximates
//! word boundaries for these scripts by emitting every no-space-script
//! character as a word of its own while keeping maximal runs of all other
//! characters together, which matches the informal word-count convention
//! for these languages.

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream, is_no_space_script};

/// Splits no-space-script characters out of tokens, delivering every
/// resulting word to a consumer callback in input order.
///
/// Driving a consumer instead of materializing a list lets callers count,
/// collect, or process words without an intermediate allocation.
#[derive(Clone, Debug)]
pub struct ScriptSegmenter {
    punctuation: HashSet<char>,
}

impl ScriptSegmenter {
    /// Create a segmenter that skips the given punctuation characters
    /// while accumulating runs.
    pub fn new(punctuation: HashSet<char>) -> Self {
        ScriptSegmenter { punctuation }
    }

    /// Deliver every word in `tokens` to `emit`, splitting tokens that
    /// contain no-space-script characters.
    ///
    /// For any single input token, concatenating the emitted texts in
    /// order reconstructs that token minus punctuation characters.
    pub fn segment<F>(&self, tokens: TokenStream, mut emit: F)
    where
        F: FnMut(Token),
    {
        let mut position = 0;
        for token in tokens {
            if token.token_type.needs_segmentation() {
                self.segment_token(&token.text, &mut position, &mut emit);
            } else {
                emit(token.with_position(position));
                position += 1;
            }
        }
    }

    /// Scan one token character by character. A carry buffer accumulates
    /// consecutive ordinary characters; it is flushed whenever a script
    /// character is reached and once more at the end of the token.
    fn segment_token<F>(&self, text: &str, position: &mut usize, emit: &mut F)
    where
        F: FnMut(Token),
    {
        let mut carry = String::new();
        for c in text.chars() {
            if is_no_space_script(c) {
                flush_carry(&mut carry, position, emit);
                emit(Token::new(c, *position));
                *position += 1;
            } else if !self.punctuation.contains(&c) {
                // Punctuation was already removed by the char filters;
                // re-checking keeps the invariant when a caller feeds
                // tokens from elsewhere.
                carry.push(c);
            }
        }
        flush_carry(&mut carry, position, emit);
    }
}

fn flush_carry<F>(carry: &mut String, position: &mut usize, emit: &mut F)
where
    F: FnMut(Token),
{
    if !carry.is_empty() {
        emit(Token::new(carry.as_str(), *position));
        *position += 1;
        carry.clear();
    }
}
