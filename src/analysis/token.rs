//! Token types for text analysis.
//!
//! A [`Token`] is a single word-like unit flowing through the analysis
//! pipeline, carrying its text, stream position, and a [`TokenType`]
//! classification of its content. Classification drives segmentation: a
//! token whose type involves a no-space script is split further, one
//! character per word.
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.token_type, TokenType::Alphanum);
//!
//! let token = Token::new("さようなら", 1);
//! assert_eq!(token.token_type, TokenType::Hiragana);
//! assert!(token.token_type.needs_segmentation());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text produced by the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Classification of the token's content
    pub token_type: TokenType,
}

/// Token type classification for different kinds of tokens.
///
/// The script-specific variants identify writing systems that are written
/// without spaces between words and therefore need character-level
/// segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// ASCII alphanumeric text (English and other Latin-script languages)
    Alphanum,
    /// Numeric values
    Num,
    /// Han ideographs (Chinese, Japanese kanji)
    Han,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// No-space-script characters mixed with other text
    Mixed,
    /// Other/unknown token types
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    ///
    /// The token type is classified from the text.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::classify(&text);
        Token {
            text,
            position,
            token_type,
        }
    }

    /// Clone this token with an updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TokenType {
    /// Classify a word by its character content.
    ///
    /// Single-script words map to their script variant; words that mix a
    /// no-space script with anything else are `Mixed`.
    pub fn classify(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(is_hiragana) {
            return TokenType::Hiragana;
        }

        if word.chars().all(is_katakana) {
            return TokenType::Katakana;
        }

        if word.chars().all(is_hangul) {
            return TokenType::Hangul;
        }

        if word.chars().all(is_han) {
            return TokenType::Han;
        }

        if word.chars().any(is_no_space_script) {
            return TokenType::Mixed;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return TokenType::Alphanum;
        }

        TokenType::Other
    }

    /// Whether tokens of this type contain no-space-script characters and
    /// must be split character by character.
    pub fn needs_segmentation(self) -> bool {
        matches!(
            self,
            TokenType::Han
                | TokenType::Katakana
                | TokenType::Hiragana
                | TokenType::Hangul
                | TokenType::Mixed
        )
    }
}

/// Whether `c` belongs to a writing system conventionally written without
/// spaces between words (Han, Katakana, Hiragana, Hangul).
pub fn is_no_space_script(c: char) -> bool {
    is_han(c) || is_katakana(c) || is_hiragana(c) || is_hangul(c)
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
    )
}

fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}')
}

/// A token stream represents a sequence of tokens from the analysis
/// pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
