use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ingest::IngestError;
use crate::scoring::ScoringError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Empty document: {0}")]
    EmptyDocument(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Degenerate vocabulary: {0}")]
    DegenerateVocabulary(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<IngestError> for AppError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::UnsupportedFormat { .. } => AppError::UnsupportedFormat(e.to_string()),
            IngestError::EmptyDocument(msg) => AppError::EmptyDocument(msg.to_string()),
            IngestError::Extraction { .. } => AppError::Extraction(e.to_string()),
        }
    }
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::DegenerateVocabulary(cause) => AppError::DegenerateVocabulary(format!(
                "Cannot compute a score: {cause}. Check that both the resume and the job description contain readable text."
            )),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::UnsupportedFormat(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", msg.clone())
            }
            AppError::EmptyDocument(msg) => {
                (StatusCode::BAD_REQUEST, "EMPTY_DOCUMENT", msg.clone())
            }
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    msg.clone(),
                )
            }
            AppError::DegenerateVocabulary(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DEGENERATE_VOCABULARY",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
