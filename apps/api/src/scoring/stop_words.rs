//! Fixed English stop-word table.
//!
//! Closed-class words only: articles, conjunctions, prepositions, pronouns,
//! determiners, auxiliaries and modals. Content words ("go", "system", "work")
//! are deliberately absent so they can surface as missing keywords.
//! Initialised once per process, read-only afterwards.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "any", "some", "all", "both", "few", "more", "most", "other", "such", "same", "own", "no",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "than", "then", "because", "while", "although",
    "though", "whether", "once", "until",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "below", "between", "by", "down", "during", "for", "from", "in", "into", "of",
    "off", "on", "onto", "out", "over", "per", "through", "to", "toward", "towards", "under",
    "up", "upon", "via", "with", "within", "without",
    // pronouns
    "i", "me", "my", "myself", "we", "us", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "whose",
    // auxiliaries & modals
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must",
    // adverbs of degree, place and question words
    "again", "also", "further", "here", "there", "how", "just", "not", "only", "too", "very",
    "when", "where", "why", "etc",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// `true` if `term` (already lower-cased) is on the stop-word list.
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORD_SET.contains(term)
}
