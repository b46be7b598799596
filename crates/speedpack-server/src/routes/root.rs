// crates/speedpack-server/src/routes/root.rs
//! Root banner route.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / - Plain-text liveness banner.
pub async fn banner() -> &'static str {
    "Speedpack backend is running!"
}

/// Create the root route router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(banner))
}
