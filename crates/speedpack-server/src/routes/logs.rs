// crates/speedpack-server/src/routes/logs.rs
//! Live job log endpoints.
//!
//! - POST /log-job — validate and append a job record, update category counters
//! - GET  /logs — full log in insertion order
//! - GET  /search?jobNumber=... — exact-match filter

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use speedpack_core::JobRecord;

use crate::error::{ApiError, ApiResult};
use crate::routes::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Exact job number to match. Required.
    pub job_number: Option<String>,
}

/// Create the job log routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/log-job", post(log_job))
        .route("/logs", get(list_logs))
        .route("/search", get(search_logs))
}

/// POST /api/log-job — validate and append a job record.
///
/// The record lands in the live log first; if it names a non-empty category
/// the matching counter is then incremented. A counter failure reports 500
/// but leaves the appended record in place.
async fn log_job(
    State(state): State<Arc<AppState>>,
    Json(record): Json<JobRecord>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let succeeded = record.is_success();
    let category = record.category.clone();

    state.log.append(record)?;

    if let Some(category) = category.as_deref().filter(|c| !c.trim().is_empty()) {
        state
            .stats()?
            .record_upload_outcome(category, succeeded)
            .await?;
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Job logged successfully")),
    ))
}

/// GET /api/logs — snapshot of every logged record in insertion order.
async fn list_logs(State(state): State<Arc<AppState>>) -> Json<Vec<JobRecord>> {
    Json(state.log.list_all())
}

/// GET /api/search — records whose job number exactly matches the
/// `jobNumber` query parameter. A miss is an empty array, not an error.
async fn search_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<JobRecord>>> {
    let job_number = match query.job_number.as_deref() {
        Some(n) if !n.trim().is_empty() => n,
        _ => {
            return Err(ApiError::BadRequest(
                "jobNumber query parameter is required".to_string(),
            ))
        }
    };

    Ok(Json(state.log.find_by_job_number(job_number)))
}
