pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ats-score", post(handlers::handle_ats_score))
        .route("/api/v1/score", post(handlers::handle_score_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
