//! Normalizer — strips punctuation and lower-cases raw document text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither a (Unicode) word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Document text after normalization.
///
/// Only lower-case word characters and whitespace. Whitespace runs are kept
/// as-is; tokenizers downstream split on word boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanedText(String);

impl CleanedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Removes punctuation and symbols, then lower-cases. Never fails.
pub fn normalize(text: &str) -> CleanedText {
    let stripped = NON_WORD.replace_all(text, "");
    CleanedText(stripped.to_lowercase())
}
