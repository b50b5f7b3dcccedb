use std::sync::Arc;

use crate::config::Config;
use crate::scoring::engine::DocumentScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: CosineScorer.
    pub scorer: Arc<dyn DocumentScorer>,
}
