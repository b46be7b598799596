//! API route handlers for the Speedpack backend.

pub mod logs;
pub mod root;
pub mod stats;

use std::sync::Arc;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// Simple `{message}` acknowledgment body for the write endpoints.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the combined router: banner at `/`, API routes under `/api`.
///
/// Routes:
/// - GET  /                             - Plain-text banner
/// - POST /api/log-job                  - Log a job, update counters if it has a category
/// - GET  /api/logs                     - Full live log
/// - GET  /api/search?jobNumber=...     - Exact job-number filter
/// - POST /api/update-performance-stats - Overwrite a category's counters
/// - GET  /api/performance-stats        - All counter rows
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/api", logs::router())
        .nest("/api", stats::router())
        .with_state(state)
}
