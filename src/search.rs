//! Position-weighted keyword scoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Outcome of a keyword search: a relevance score and the distinct words
/// that matched, in order of first appearance in the content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Sum of the weights of every keyword occurrence found.
    pub score: usize,

    /// The matching words, deduplicated, first occurrence first.
    pub matched: Vec<String>,
}

/// Score `haystack` words against `keywords`.
///
/// A keyword at position `i` carries weight `keywords.len() - i`: earlier
/// query terms count for more, and every occurrence in the haystack
/// contributes its weight again. A keyword repeated in the query is
/// counted at each of its positions, so duplicates compound the score.
pub(crate) fn score_keywords(keywords: &[String], haystack: &[String]) -> SearchResult {
    let keyword_count = keywords.len();
    let mut score = 0;
    let mut matches: Vec<&str> = Vec::new();

    for word in haystack {
        for (idx, keyword) in keywords.iter().enumerate() {
            if word == keyword {
                score += keyword_count - idx;
                matches.push(word.as_str());
            }
        }
    }

    let mut seen = HashSet::new();
    let matched = matches
        .into_iter()
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect();

    SearchResult { score, matched }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_keyword_counts_occurrences() {
        let result = score_keywords(&words(&["word"]), &words(&["one", "word", "two", "word"]));
        assert_eq!(result.score, 2);
        assert_eq!(result.matched, ["word"]);
    }

    #[test]
    fn test_earlier_keywords_weigh_more() {
        let result = score_keywords(&words(&["alpha", "beta"]), &words(&["alpha"]));
        assert_eq!(result.score, 2);

        let result = score_keywords(&words(&["alpha", "beta"]), &words(&["beta"]));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_duplicate_query_keywords_compound() {
        let result = score_keywords(&words(&["a", "a"]), &words(&["a"]));
        assert_eq!(result.score, 3);
        assert_eq!(result.matched, ["a"]);
    }

    #[test]
    fn test_matched_preserves_first_occurrence_order() {
        let result = score_keywords(
            &words(&["two", "one"]),
            &words(&["one", "two", "one", "two"]),
        );
        assert_eq!(result.matched, ["one", "two"]);
    }

    #[test]
    fn test_no_matches() {
        let result = score_keywords(&words(&["missing"]), &words(&["one", "two"]));
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_empty_keywords() {
        let result = score_keywords(&[], &words(&["one"]));
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }
}
