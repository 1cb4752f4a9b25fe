//! Word counter configuration and normalization.
//!
//! [`CounterConfig`] is the caller-facing configuration: plain data,
//! cheap to clone, never mutated by the counter. Each operation derives a
//! call-local [`EffectiveConfig`] from it via
//! [`normalize`](CounterConfig::normalize); nothing derived is ever
//! written back, so one configuration can serve any number of concurrent
//! callers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::DEFAULT_PUNCTUATION;
use crate::metrics::{AVERAGE_WORDS_PER_MINUTE, RELAXED_WORDS_PER_MINUTE};

/// Configuration for a [`WordCounter`](crate::WordCounter).
///
/// Invalid reading speeds are not rejected; normalization silently
/// substitutes the documented defaults.
///
/// # Examples
///
/// ```
/// use kotoba::CounterConfig;
///
/// let config = CounterConfig::new()
///     .with_punctuation(['!'])
///     .with_punctuation_as_breaker(true);
/// assert!(config.punctuation_as_breaker);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Replace punctuation with a space instead of deleting it, so that
    /// "they're" counts as two words rather than collapsing to "theyre".
    pub punctuation_as_breaker: bool,

    /// Recognize only the caller-supplied punctuation characters.
    pub disable_default_punctuation: bool,

    /// Additional punctuation characters. Order-independent; duplicates
    /// are ignored.
    pub punctuation: Vec<char>,

    /// Reading speed for the fast estimate, in words per minute.
    pub average_wpm: f64,

    /// Reading speed for the relaxed estimate, in words per minute.
    pub relaxed_wpm: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            punctuation_as_breaker: false,
            disable_default_punctuation: false,
            punctuation: Vec::new(),
            average_wpm: AVERAGE_WORDS_PER_MINUTE,
            relaxed_wpm: RELAXED_WORDS_PER_MINUTE,
        }
    }
}

impl CounterConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set breaker mode for punctuation handling.
    pub fn with_punctuation_as_breaker(mut self, breaker: bool) -> Self {
        self.punctuation_as_breaker = breaker;
        self
    }

    /// Disable the default punctuation list.
    pub fn with_disable_default_punctuation(mut self, disable: bool) -> Self {
        self.disable_default_punctuation = disable;
        self
    }

    /// Add punctuation characters to recognize.
    pub fn with_punctuation<I>(mut self, punctuation: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.punctuation.extend(punctuation);
        self
    }

    /// Set the average reading speed in words per minute.
    pub fn with_average_wpm(mut self, wpm: f64) -> Self {
        self.average_wpm = wpm;
        self
    }

    /// Set the relaxed reading speed in words per minute.
    pub fn with_relaxed_wpm(mut self, wpm: f64) -> Self {
        self.relaxed_wpm = wpm;
        self
    }

    /// Derive the effective settings for one operation.
    ///
    /// Returns a fresh value every time: the union of the default and
    /// caller punctuation sets is rebuilt from scratch, so repeated calls
    /// never accumulate state, and reading speeds that are not strictly
    /// positive fall back to the defaults.
    pub fn normalize(&self) -> EffectiveConfig {
        let mut punctuation: HashSet<char> = if self.disable_default_punctuation {
            HashSet::new()
        } else {
            DEFAULT_PUNCTUATION.iter().copied().collect()
        };
        punctuation.extend(self.punctuation.iter().copied());

        EffectiveConfig {
            punctuation,
            punctuation_as_breaker: self.punctuation_as_breaker,
            average_wpm: if self.average_wpm > 0.0 {
                self.average_wpm
            } else {
                AVERAGE_WORDS_PER_MINUTE
            },
            relaxed_wpm: if self.relaxed_wpm > 0.0 {
                self.relaxed_wpm
            } else {
                RELAXED_WORDS_PER_MINUTE
            },
        }
    }
}

/// The settings actually used by one operation, derived from a
/// [`CounterConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    /// Union of the default and caller punctuation sets.
    pub punctuation: HashSet<char>,

    /// Whether punctuation becomes a word break instead of vanishing.
    pub punctuation_as_breaker: bool,

    /// Validated average reading speed.
    pub average_wpm: f64,

    /// Validated relaxed reading speed.
    pub relaxed_wpm: f64,
}
