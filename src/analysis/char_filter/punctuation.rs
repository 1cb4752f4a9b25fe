//! Punctuation char filter and the default punctuation list.

use std::collections::HashSet;

use crate::analysis::char_filter::CharFilter;

/// Punctuation characters recognized by default.
///
/// Covers ASCII punctuation together with the CJK, fullwidth and
/// typographic forms commonly found in Japanese, Chinese and Korean text.
/// Unicode symbol-category characters ($, +, <, ~ and the like) are not
/// listed here because [`SymbolCharFilter`](super::SymbolCharFilter)
/// removes them in every mode.
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '!', '"', '#', '%', '&', '\'', '(', ')', '*', ',', '-', '.', '/', ':', ';', '?', '@', '[',
    '\\', ']', '_', '{', '}', '¡', '«', '·', '»', '¿', '‐', '–', '—', '―', '‘', '’', '‚', '‹',
    '›', '“', '”', '„', '…', '、', '。', '〈', '〉', '《', '》', '「', '」', '『', '』', '【',
    '】', '〔', '〕', '・', '！', '＃', '％', '＆', '（', '）', '＊', '，', '－', '．', '／',
    '：', '；', '？', '＠', '［', '］', '＿', '｛', '｝', '｡', '｢', '｣', '､', '･',
];

/// A char filter that removes punctuation characters, or replaces each of
/// them with a space when breaker mode is enabled.
///
/// With deletion, "they're" collapses to "theyre" and counts as one word;
/// with breaker mode it becomes "they re" and counts as two.
#[derive(Clone, Debug)]
pub struct PunctuationCharFilter {
    punctuation: HashSet<char>,
    breaker: bool,
}

impl PunctuationCharFilter {
    /// Create a filter over the given punctuation set.
    pub fn new(punctuation: HashSet<char>, breaker: bool) -> Self {
        PunctuationCharFilter {
            punctuation,
            breaker,
        }
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for c in input.chars() {
            if self.punctuation.contains(&c) {
                if self.breaker {
                    output.push(' ');
                }
            } else {
                output.push(c);
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> HashSet<char> {
        DEFAULT_PUNCTUATION.iter().copied().collect()
    }

    #[test]
    fn test_punctuation_deleted() {
        let filter = PunctuationCharFilter::new(default_set(), false);
        assert_eq!(filter.filter("they're"), "theyre");
        assert_eq!(filter.filter("「やり遂げる」"), "やり遂げる");
    }

    #[test]
    fn test_punctuation_as_breaker() {
        let filter = PunctuationCharFilter::new(default_set(), true);
        assert_eq!(filter.filter("they're"), "they re");
    }

    #[test]
    fn test_custom_set_only() {
        let filter = PunctuationCharFilter::new(HashSet::from(['!']), false);
        assert_eq!(filter.filter("it's up!"), "it's up");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(
            PunctuationCharFilter::new(HashSet::new(), false).name(),
            "punctuation"
        );
    }
}
