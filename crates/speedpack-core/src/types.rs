// crates/speedpack-core/src/types.rs
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// A single submitted job record.
///
/// Wire keys are camelCase. Clients may send extra fields (`error`,
/// `orderType`, ...); they are captured in `extra` and round-trip
/// unchanged through every read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    // Required keys are defaulted so a missing key reaches validate()
    // as an empty string instead of failing body deserialization.
    #[serde(default)]
    pub job_number: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JobRecord {
    /// Check that `jobNumber`, `dateTime` and `status` are present and
    /// non-blank.
    pub fn validate(&self) -> Result<(), LogError> {
        for (field, value) in [
            ("jobNumber", &self.job_number),
            ("dateTime", &self.date_time),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                return Err(LogError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Whether this record counts as a successful upload.
    /// Anything other than a case-insensitive "success" is a failure.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(job_number: &str, date_time: &str, status: &str) -> JobRecord {
        JobRecord {
            job_number: job_number.to_string(),
            date_time: date_time.to_string(),
            status: status.to_string(),
            category: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        let r = record("JOB-1", "2025-06-01T10:00:00Z", "success");
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        for (job_number, date_time, status, field) in [
            ("", "t", "s", "jobNumber"),
            ("j", "", "s", "dateTime"),
            ("j", "t", "", "status"),
            ("   ", "t", "s", "jobNumber"),
        ] {
            let err = record(job_number, date_time, status)
                .validate()
                .unwrap_err();
            match err {
                LogError::MissingField { field: f } => assert_eq!(f, field),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_is_success_case_insensitive() {
        assert!(record("j", "t", "success").is_success());
        assert!(record("j", "t", "Success").is_success());
        assert!(record("j", "t", "SUCCESS").is_success());
        assert!(!record("j", "t", "failure").is_success());
        assert!(!record("j", "t", "error").is_success());
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let r = record("JOB-1", "2025-06-01T10:00:00Z", "success");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"jobNumber\":\"JOB-1\""));
        assert!(json.contains("\"dateTime\""));
        // No category submitted — key should be absent, not null
        assert!(!json.contains("category"));
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let body = r#"{
            "jobNumber": "TEST123",
            "dateTime": "2025-06-01T10:00:00Z",
            "status": "failure",
            "error": "Test error message",
            "orderType": "Local Delivery"
        }"#;
        let r: JobRecord = serde_json::from_str(body).unwrap();
        assert_eq!(r.extra["error"], "Test error message");
        assert_eq!(r.extra["orderType"], "Local Delivery");

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"orderType\":\"Local Delivery\""));
    }

    #[test]
    fn test_missing_keys_deserialize_as_empty() {
        let r: JobRecord = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(r.job_number, "");
        assert!(r.validate().is_err());
    }
}
