//! Query tokenization.

use std::collections::HashSet;

/// Function words that carry no topical signal.
pub const STOP_WORDS: [&str; 20] = [
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by", "this", "that", "it",
];

/// Minimum number of characters a query term must exceed.
const MIN_TERM_CHARS: usize = 2;

/// Distinct, lower-cased terms extracted from a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    /// Tokenizes a query.
    ///
    /// Lower-cases, splits on whitespace, drops stop words and tokens of two
    /// characters or fewer. Repeated terms are kept once, in first-seen order.
    pub fn parse(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let mut seen = HashSet::new();
        let mut terms: Vec<String> = Vec::new();

        for token in lowered.split_whitespace() {
            if token.chars().count() <= MIN_TERM_CHARS || STOP_WORDS.contains(&token) {
                continue;
            }

            if seen.insert(token) {
                terms.push(token.to_owned());
            }
        }

        Self { terms }
    }

    /// Returns true if the query carries no usable terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Iterates over the terms.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_stop_words_and_short_tokens() {
        let terms = QueryTerms::parse("What is the Role of ATP in a cell?");
        let collected: Vec<&str> = terms.iter().collect();
        assert_eq!(collected, vec!["what", "role", "atp", "cell?"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let terms = QueryTerms::parse("Enzyme enzyme ENZYME kinetics");
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_parse_deduplicates_long_queries_in_order() {
        let query = ["gamma", "alpha", "beta"].repeat(500).join(" ");
        let terms = QueryTerms::parse(&query);
        let collected: Vec<&str> = terms.iter().collect();
        assert_eq!(collected, ["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_parse_stop_words_only() {
        assert!(QueryTerms::parse("the and of").is_empty());
        assert!(QueryTerms::parse("   ").is_empty());
        assert!(QueryTerms::parse("is it ok").is_empty());
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        assert!(QueryTerms::parse("日本").is_empty());
        assert_eq!(QueryTerms::parse("日本語").len(), 1);
    }
}
