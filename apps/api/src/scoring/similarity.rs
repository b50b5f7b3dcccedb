//! Similarity Scorer — cosine similarity between two count vectors.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::scoring::vectorizer::TermFrequencyVector;
use crate::scoring::{DegenerateCause, DocumentRole, ScoringError};

/// Cosine similarity scaled to a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Percentage rounded to two decimals.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

/// Renders as `"87.50%"`.
impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl Serialize for SimilarityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// `dot(a, b) / (‖a‖·‖b‖) × 100`.
///
/// An all-zero vector has no direction, so the similarity is undefined and
/// reported as [`ScoringError::DegenerateVocabulary`].
pub fn score(
    candidate: &TermFrequencyVector,
    target: &TermFrequencyVector,
) -> Result<SimilarityScore, ScoringError> {
    let candidate_norm = candidate.squared_norm();
    if candidate_norm == 0 {
        return Err(ScoringError::DegenerateVocabulary(
            DegenerateCause::ZeroMagnitude(DocumentRole::Candidate),
        ));
    }
    let target_norm = target.squared_norm();
    if target_norm == 0 {
        return Err(ScoringError::DegenerateVocabulary(
            DegenerateCause::ZeroMagnitude(DocumentRole::Target),
        ));
    }

    // sqrt(|a|² · |b|²) rather than |a| · |b|: identical vectors give an exact
    // perfect square and therefore exactly 1.0.
    let dot = candidate.dot(target) as f64;
    let cosine = dot / (candidate_norm as f64 * target_norm as f64).sqrt();

    Ok(SimilarityScore((cosine * 100.0).clamp(0.0, 100.0)))
}
