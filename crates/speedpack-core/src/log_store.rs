// crates/speedpack-core/src/log_store.rs
//! Live job log: an append-only, insertion-ordered record of submitted jobs.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::error::LogError;
use crate::types::JobRecord;

#[derive(Debug)]
struct Inner {
    records: RwLock<Vec<JobRecord>>,
    /// Backing file, rewritten in full on every append. `None` = in-memory only.
    file: Option<PathBuf>,
}

/// Ordered live log of submitted jobs, held for the process lifetime.
///
/// Uses `std::sync::RwLock` — the lock is never held across an `.await`
/// point. The file rewrite happens under the write lock, so in-process
/// appends serialize; there is no cross-process coordination.
#[derive(Debug, Clone)]
pub struct JobLog {
    inner: Arc<Inner>,
}

impl JobLog {
    /// Create an empty in-memory log.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                records: RwLock::new(Vec::new()),
                file: None,
            }),
        }
    }

    /// Create a file-backed log, loading any records already in `path`.
    ///
    /// A missing file starts the log empty; an unreadable or malformed
    /// file is an error.
    pub fn with_file(path: impl Into<PathBuf>) -> Result<Self, LogError> {
        let path = path.into();
        let records: Vec<JobRecord> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| LogError::MalformedFile {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(LogError::io(path, e)),
        };

        info!(path = %path.display(), records = records.len(), "Loaded job log");
        Ok(Self {
            inner: Arc::new(Inner {
                records: RwLock::new(records),
                file: Some(path),
            }),
        })
    }

    /// Validate and append a record.
    ///
    /// On a file-backed log the whole backing file is rewritten before
    /// returning. If the rewrite fails the record is still in memory;
    /// there is no partial-write recovery.
    pub fn append(&self, record: JobRecord) -> Result<(), LogError> {
        record.validate()?;

        let mut records = self.inner.records.write().expect("job log lock poisoned");
        records.push(record);

        if let Some(path) = &self.inner.file {
            let json =
                serde_json::to_vec_pretty(&*records).expect("job records serialize to JSON");
            std::fs::write(path, json).map_err(|e| LogError::io(path.clone(), e))?;
        }

        Ok(())
    }

    /// Snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<JobRecord> {
        self.inner
            .records
            .read()
            .expect("job log lock poisoned")
            .clone()
    }

    /// Records whose job number exactly equals `job_number` (possibly empty).
    pub fn find_by_job_number(&self, job_number: &str) -> Vec<JobRecord> {
        self.inner
            .records
            .read()
            .expect("job log lock poisoned")
            .iter()
            .filter(|r| r.job_number == job_number)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.records.read().expect("job log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobLog {
    fn default() -> Self {
        Self::new()
    }
}
