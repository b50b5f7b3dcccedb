//! Axum route handlers for the scoring API.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::{extract_text, DocumentFormat, IngestError};
use crate::scoring::engine::{DocumentScorer, ScoringResult};
use crate::scoring::similarity::SimilarityScore;
use crate::state::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing 'resume' file or 'job_description' field.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    /// Two-decimal percentage string, e.g. `"72.41%"`.
    pub ats_score: SimilarityScore,
    pub missing_keywords: Vec<String>,
}

impl From<ScoringResult> for AtsScoreResponse {
    fn from(result: ScoringResult) -> Self {
        Self {
            ats_score: result.similarity,
            missing_keywords: result.missing_keywords,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ats-score
///
/// Multipart upload: `resume` (PDF or DOCX file) and `job_description` (text).
pub async fn handle_ats_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let mut resume: Option<(Option<String>, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Could not read 'resume'", e))?;
                resume = Some((filename, data));
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Could not read 'job_description'", e))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (Some((filename, data)), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let format = DocumentFormat::from_filename(filename.as_deref()).inspect_err(|e| {
        if let IngestError::UnsupportedFormat { filename } = e {
            warn!(%request_id, ?filename, "Rejected unsupported resume format");
        }
    })?;

    info!(
        %request_id,
        %format,
        resume_bytes = data.len(),
        job_description_chars = job_description.chars().count(),
        "Scoring uploaded resume"
    );

    let result = run_scoring(request_id, Arc::clone(&state.scorer), move |scorer| {
        let resume_text = extract_text(&data, format)?;
        Ok(scorer.evaluate(&resume_text, &job_description)?)
    })
    .await?;

    Ok(Json(result.into()))
}

/// POST /api/v1/score
///
/// Same scoring for callers that already hold the résumé as plain text.
pub async fn handle_score_text(
    State(state): State<AppState>,
    payload: Result<Json<ScoreTextRequest>, JsonRejection>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        resume_chars = request.resume_text.chars().count(),
        job_description_chars = request.job_description.chars().count(),
        "Scoring plain-text resume"
    );

    let result = run_scoring(request_id, Arc::clone(&state.scorer), move |scorer| {
        Ok(scorer.evaluate(&request.resume_text, &request.job_description)?)
    })
    .await?;

    Ok(Json(result.into()))
}

/// Oversized uploads keep their 413; every other multipart failure is the
/// client's malformed request.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", e.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}

/// Runs extraction + scoring on the blocking pool. A panicking worker is
/// reported as an internal error instead of taking the request down with it.
async fn run_scoring<F>(
    request_id: Uuid,
    scorer: Arc<dyn DocumentScorer>,
    job: F,
) -> Result<ScoringResult, AppError>
where
    F: FnOnce(&dyn DocumentScorer) -> Result<ScoringResult, AppError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || job(scorer.as_ref()))
        .await
        .context("scoring worker failed")?;

    match &outcome {
        Ok(result) => info!(
            %request_id,
            score = %result.similarity,
            missing_keywords = result.missing_keywords.len(),
            "Scored resume"
        ),
        Err(e) => warn!(%request_id, error = %e, "Scoring failed"),
    }
    outcome
}
