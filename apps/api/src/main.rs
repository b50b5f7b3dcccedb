mod config;
mod errors;
mod ingest;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::engine::{CosineScorer, DocumentScorer};
use crate::scoring::vectorizer::Vectorizer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let vectorizer = if config.similarity_ignore_stop_words {
        Vectorizer::ignoring_stop_words()
    } else {
        Vectorizer::new()
    };
    let scorer: Arc<dyn DocumentScorer> = Arc::new(CosineScorer::new(vectorizer));
    info!(
        ignore_stop_words = config.similarity_ignore_stop_words,
        max_upload_bytes = config.max_upload_bytes,
        "Scorer initialized"
    );

    let state = AppState {
        config: config.clone(),
        scorer,
    };

    // The résumé upload page is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
