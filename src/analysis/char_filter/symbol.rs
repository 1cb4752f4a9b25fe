//! Symbol-stripping char filter.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::char_filter::CharFilter;

// \p{S} covers currency signs, math operators, modifier symbols and
// pictographs. The pattern is a literal and always compiles.
static SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{S}").expect("symbol character class compiles"));

/// A char filter that removes Unicode symbol-category characters.
///
/// Symbols are removed outright in every mode, unlike punctuation, which
/// may be turned into a word break.
#[derive(Clone, Debug, Default)]
pub struct SymbolCharFilter;

impl SymbolCharFilter {
    /// Create a new symbol filter.
    pub fn new() -> Self {
        SymbolCharFilter
    }
}

impl CharFilter for SymbolCharFilter {
    fn filter(&self, input: &str) -> String {
        SYMBOLS.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "symbol"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_removed() {
        let filter = SymbolCharFilter::new();
        assert_eq!(filter.filter("price: $100"), "price: 100");
        assert_eq!(filter.filter("a+b=c"), "abc");
        assert_eq!(filter.filter("1<2 and 3>2"), "12 and 32");
        assert_eq!(filter.filter("～caf～"), "caf");
    }

    #[test]
    fn test_text_without_symbols_unchanged() {
        let filter = SymbolCharFilter::new();
        assert_eq!(filter.filter("plain words here"), "plain words here");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(SymbolCharFilter::new().name(), "symbol");
    }
}
