#![allow(dead_code)]

// Text-scoring engine: résumé vs job description.
// Pure computation over in-memory strings. No I/O happens below this module;
// ingestion and transport live in `crate::ingest` and `handlers`.

pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod similarity;
pub mod stop_words;
pub mod vectorizer;
pub mod vocabulary;

use std::fmt;

use thiserror::Error;

/// Which side of a comparison a vector or vocabulary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Candidate,
    Target,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Candidate => f.write_str("candidate"),
            DocumentRole::Target => f.write_str("target"),
        }
    }
}

/// Why a comparison has no defined cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateCause {
    /// Neither document contributes a single term to the joint vocabulary.
    EmptyJointVocabulary,
    /// One document has no terms on the shared axis (all-zero vector).
    ZeroMagnitude(DocumentRole),
}

impl fmt::Display for DegenerateCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateCause::EmptyJointVocabulary => {
                f.write_str("neither document contains a scorable term")
            }
            DegenerateCause::ZeroMagnitude(role) => {
                write!(f, "the {role} document contains no scorable terms")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Degenerate vocabulary: {0}")]
    DegenerateVocabulary(DegenerateCause),
}
