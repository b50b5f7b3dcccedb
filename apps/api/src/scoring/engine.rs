//! Scoring Engine — composes normalization, vectorization, cosine scoring and
//! keyword diffing into a single `evaluate` call.
//!
//! `AppState` holds an `Arc<dyn DocumentScorer>`; `CosineScorer` is the
//! default backend.

use serde::Serialize;
use tracing::debug;

use crate::scoring::keywords::missing_keywords;
use crate::scoring::normalizer::normalize;
use crate::scoring::similarity::{score, SimilarityScore};
use crate::scoring::vectorizer::Vectorizer;
use crate::scoring::vocabulary::extract_vocabulary;
use crate::scoring::ScoringError;

/// Outcome of one résumé vs job-description comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResult {
    pub similarity: SimilarityScore,
    /// Target terms absent from the candidate, lexicographically ordered.
    pub missing_keywords: Vec<String>,
}

/// Swap scoring backends without touching handlers.
///
/// Implementations are pure and CPU-bound; callers run them on a blocking
/// worker.
pub trait DocumentScorer: Send + Sync {
    fn evaluate(&self, candidate: &str, target: &str) -> Result<ScoringResult, ScoringError>;
}

/// Bag-of-words cosine scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineScorer {
    vectorizer: Vectorizer,
}

impl CosineScorer {
    pub fn new(vectorizer: Vectorizer) -> Self {
        Self { vectorizer }
    }
}

impl DocumentScorer for CosineScorer {
    fn evaluate(&self, candidate: &str, target: &str) -> Result<ScoringResult, ScoringError> {
        let candidate = normalize(candidate);
        let target = normalize(target);

        let space = self.vectorizer.vectorize(&candidate, &target)?;
        let similarity = score(space.candidate(), space.target())?;

        let target_vocab = extract_vocabulary(&target);
        let candidate_vocab = extract_vocabulary(&candidate);
        let missing_keywords = missing_keywords(&target_vocab, &candidate_vocab);

        debug!(
            %similarity,
            target_vocab = target_vocab.len(),
            candidate_vocab = candidate_vocab.len(),
            missing = missing_keywords.len(),
            "Scored candidate against target"
        );

        Ok(ScoringResult {
            similarity,
            missing_keywords,
        })
    }
}

/// Evaluates with the default `CosineScorer`.
pub fn evaluate(candidate: &str, target: &str) -> Result<ScoringResult, ScoringError> {
    CosineScorer::default().evaluate(candidate, target)
}
