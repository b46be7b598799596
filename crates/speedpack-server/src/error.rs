// crates/speedpack-server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use speedpack_core::LogError;
use speedpack_db::DbError;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Job log error: {0}")]
    Log(#[from] LogError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Performance stats store is not configured")]
    StatsUnconfigured,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::Log(log_err) => match log_err {
                LogError::MissingField { field } => {
                    tracing::warn!(field, "Rejected job record");
                    (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse::with_details(
                            "Missing required job data",
                            format!("Field: {}", field),
                        ),
                    )
                }
                LogError::Io { .. } | LogError::MalformedFile { .. } => {
                    tracing::error!(error = %log_err, "Job log storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::with_details("Job log storage error", log_err.to_string()),
                    )
                }
            },
            ApiError::Database(DbError::EmptyCategory) => {
                tracing::warn!("Rejected stats update without category");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Category is required"),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
            ApiError::StatsUnconfigured => {
                tracing::error!("Performance stats store is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Performance stats store is not configured"),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let error = ApiError::Log(LogError::MissingField { field: "jobNumber" });
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required job data");
        assert!(body.details.unwrap().contains("jobNumber"));
    }

    #[tokio::test]
    async fn test_log_io_error_returns_500() {
        let error = ApiError::Log(LogError::io(
            "/var/lib/speedpack/jobs.json",
            std::io::Error::new(std::io::ErrorKind::Other, "disk error"),
        ));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Job log storage error");
    }

    #[tokio::test]
    async fn test_empty_category_returns_400() {
        let error = ApiError::Database(DbError::EmptyCategory);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Category is required");
    }

    #[tokio::test]
    async fn test_unconfigured_stats_returns_500() {
        let (status, body) = extract_response(ApiError::StatsUnconfigured.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Performance stats store is not configured");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_bad_request_returns_400() {
        let error = ApiError::BadRequest("jobNumber query parameter is required".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Bad request");
        assert!(body.details.unwrap().contains("jobNumber"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details")); // None should be skipped

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }

    #[test]
    fn test_api_error_from_log_error() {
        let log_err = LogError::MissingField { field: "status" };
        let api_err: ApiError = log_err.into();
        assert!(matches!(api_err, ApiError::Log(_)));
    }

    #[test]
    fn test_api_error_from_db_error() {
        let db_err = DbError::EmptyCategory;
        let api_err: ApiError = db_err.into();
        assert!(matches!(api_err, ApiError::Database(_)));
    }
}
