// crates/speedpack-server/src/lib.rs
//! Speedpack backend server library.
//!
//! This crate provides the Axum-based HTTP server for the Speedpack job
//! logging backend. It serves a REST API for submitting job records and
//! reading per-category upload statistics.

pub mod error;
pub mod routes;
pub mod state;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - The banner route and API routes (job log, performance stats)
/// - CORS (allows any origin; the upload clients run on other hosts)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
