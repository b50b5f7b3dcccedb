//! Vectorizer — bag-of-words count vectors over a joint term axis.
//!
//! The axis is built from *both* documents of a comparison, so the two
//! vectors always share dimensionality and term order. Unlike vocabulary
//! extraction, stop words stay on the axis unless the vectorizer is built
//! with [`Vectorizer::ignoring_stop_words`].

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::scoring::normalizer::CleanedText;
use crate::scoring::stop_words::is_stop_word;
use crate::scoring::vocabulary::tokenize;
use crate::scoring::{DegenerateCause, ScoringError};

/// Raw occurrence counts, one slot per term on the owning [`VectorSpace`] axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFrequencyVector(Vec<u64>);

impl TermFrequencyVector {
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn squared_norm(&self) -> u64 {
        self.0.iter().map(|c| c * c).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Dot product. Both vectors come from the same [`VectorSpace`], so the
    /// lengths always agree.
    pub fn dot(&self, other: &TermFrequencyVector) -> u64 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }
}

/// Joint term axis plus the candidate and target vectors laid out on it.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    terms: Vec<String>,
    candidate: TermFrequencyVector,
    target: TermFrequencyVector,
}

impl VectorSpace {
    /// Axis terms in sorted order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn candidate(&self) -> &TermFrequencyVector {
        &self.candidate
    }

    pub fn target(&self) -> &TermFrequencyVector {
        &self.target
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorizer {
    ignore_stop_words: bool,
}

impl Vectorizer {
    /// Stop words are kept on the axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops stop words from the axis, matching the keyword tokenization.
    pub fn ignoring_stop_words() -> Self {
        Self {
            ignore_stop_words: true,
        }
    }

    pub fn vectorize(
        &self,
        candidate: &CleanedText,
        target: &CleanedText,
    ) -> Result<VectorSpace, ScoringError> {
        let candidate_counts = self.count_terms(candidate);
        let target_counts = self.count_terms(target);

        let axis: BTreeSet<&str> = candidate_counts
            .keys()
            .chain(target_counts.keys())
            .copied()
            .collect();

        if axis.is_empty() {
            return Err(ScoringError::DegenerateVocabulary(
                DegenerateCause::EmptyJointVocabulary,
            ));
        }

        let project = |counts: &BTreeMap<&str, u64>| {
            TermFrequencyVector(
                axis.iter()
                    .map(|term| counts.get(term).copied().unwrap_or(0))
                    .collect(),
            )
        };
        let candidate_vector = project(&candidate_counts);
        let target_vector = project(&target_counts);

        debug!(
            dimension = axis.len(),
            candidate_terms = candidate_counts.len(),
            target_terms = target_counts.len(),
            "Built joint term axis"
        );

        Ok(VectorSpace {
            terms: axis.into_iter().map(str::to_owned).collect(),
            candidate: candidate_vector,
            target: target_vector,
        })
    }

    fn count_terms<'a>(&self, text: &'a CleanedText) -> BTreeMap<&'a str, u64> {
        let mut counts = BTreeMap::new();
        for token in tokenize(text) {
            if self.ignore_stop_words && is_stop_word(token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }
}

/// Vectorizes with the default (stop-word-retaining) configuration.
pub fn vectorize(
    candidate: &CleanedText,
    target: &CleanedText,
) -> Result<VectorSpace, ScoringError> {
    Vectorizer::new().vectorize(candidate, target)
}
