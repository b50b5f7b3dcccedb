//! Vocabulary Extractor — the set of significant terms in a cleaned document.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::normalizer::CleanedText;
use crate::scoring::stop_words::is_stop_word;

/// Two or more word characters between word boundaries.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Splits cleaned text into tokens. Single-character tokens are skipped.
pub fn tokenize(text: &CleanedText) -> impl Iterator<Item = &str> {
    TOKEN.find_iter(text.as_str()).map(|m| m.as_str())
}

/// Deduplicated, stop-word-free terms of one document.
///
/// Backed by a `BTreeSet` so iteration (and anything derived from it) is
/// lexicographic and reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary(BTreeSet<String>);

impl Vocabulary {
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Terms in `self` that `other` lacks, in lexicographic order.
    pub fn difference<'a>(&'a self, other: &'a Vocabulary) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }
}

pub fn extract_vocabulary(text: &CleanedText) -> Vocabulary {
    Vocabulary(
        tokenize(text)
            .filter(|token| !is_stop_word(token))
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalizer::normalize;

    fn vocab(text: &str) -> Vocabulary {
        extract_vocabulary(&normalize(text))
    }

    #[test]
    fn test_removes_stop_words_and_deduplicates() {
        let v = vocab("The Rust engineer and the Rust team");
        let terms: Vec<&str> = v.iter().collect();
        assert_eq!(terms, vec!["engineer", "rust", "team"]);
    }

    #[test]
    fn test_single_character_tokens_are_ignored() {
        let v = vocab("C R x Go");
        let terms: Vec<&str> = v.iter().collect();
        assert_eq!(terms, vec!["go"]);
    }

    #[test]
    fn test_empty_text_yields_empty_vocabulary() {
        assert!(vocab("").is_empty());
        assert!(vocab("   \n\t ").is_empty());
    }

    #[test]
    fn test_stop_words_only_yields_empty_vocabulary() {
        assert!(vocab("and the of with for is").is_empty());
    }

    #[test]
    fn test_tolerates_whitespace_runs() {
        let v = vocab("python\n\n\n   kubernetes\t\tdocker");
        assert_eq!(v.len(), 3);
        assert!(v.contains("kubernetes"));
    }

    #[test]
    fn test_terms_are_lowercase_and_non_empty() {
        let v = vocab("Senior ENGINEER, Distributed-Systems; Ünïcode!");
        assert!(v.iter().all(|t| !t.is_empty()));
        assert!(v.iter().all(|t| !t.chars().any(char::is_uppercase)));
        assert!(v.contains("distributedsystems"));
        assert!(v.contains("ünïcode"));
    }

    #[test]
    fn test_tokenize_keeps_stop_words() {
        let cleaned = normalize("the cat and the hat");
        let tokens: Vec<&str> = tokenize(&cleaned).collect();
        assert_eq!(tokens, vec!["the", "cat", "and", "the", "hat"]);
    }
}
