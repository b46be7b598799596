// crates/speedpack-server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;

use speedpack_core::JobLog;
use speedpack_db::Database;

use crate::error::{ApiError, ApiResult};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Live job log (in-memory, optionally file-backed).
    pub log: JobLog,
    /// Category counter store. `None` when no DATABASE_URL was configured;
    /// counter operations then fail with `ApiError::StatsUnconfigured`.
    pub stats: Option<Database>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(log: JobLog, stats: Option<Database>) -> Arc<Self> {
        Arc::new(Self { log, stats })
    }

    /// The counter store, or the unconfigured error.
    pub fn stats(&self) -> ApiResult<&Database> {
        self.stats.as_ref().ok_or(ApiError::StatsUnconfigured)
    }
}
