// crates/speedpack-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors from validating or persisting job records
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Missing required job field: {field}")]
    MissingField { field: &'static str },

    #[error("IO error writing log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed log file {path}: {message}")]
    MalformedFile { path: PathBuf, message: String },
}

impl LogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
