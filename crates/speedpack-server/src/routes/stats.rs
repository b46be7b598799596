// crates/speedpack-server/src/routes/stats.rs
//! Performance statistics endpoints.
//!
//! - POST /update-performance-stats — overwrite a category's counters
//! - GET  /performance-stats — every counter row

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use speedpack_db::CategoryStats;

use crate::error::{ApiError, ApiResult};
use crate::routes::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateStatsRequest {
    /// Category whose counters are overwritten. Required.
    pub category: Option<String>,
    /// Missing counter values default to 0.
    pub successful_uploads: Option<i64>,
    pub failed_uploads: Option<i64>,
}

/// Create the performance stats routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/update-performance-stats", post(update_stats))
        .route("/performance-stats", get(list_stats))
}

/// POST /api/update-performance-stats — overwrite both counters for a
/// category. Last-writer-wins; no merge with prior values.
async fn update_stats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateStatsRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let category = match req.category.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(ApiError::BadRequest("category is required".to_string())),
    };

    state
        .stats()?
        .set_category_stats(
            category,
            req.successful_uploads.unwrap_or(0),
            req.failed_uploads.unwrap_or(0),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Performance stats updated")),
    ))
}

/// GET /api/performance-stats — all counter rows verbatim.
async fn list_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<CategoryStats>>> {
    Ok(Json(state.stats()?.list_category_stats().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_counters_default_to_none() {
        let req: UpdateStatsRequest = serde_json::from_str(r#"{"category":"paper"}"#).unwrap();
        assert_eq!(req.category.as_deref(), Some("paper"));
        assert!(req.successful_uploads.is_none());
        assert!(req.failed_uploads.is_none());
    }

    #[test]
    fn test_update_request_full_body() {
        let req: UpdateStatsRequest = serde_json::from_str(
            r#"{"category":"paper","successful_uploads":5,"failed_uploads":2}"#,
        )
        .unwrap();
        assert_eq!(req.successful_uploads, Some(5));
        assert_eq!(req.failed_uploads, Some(2));
    }
}
