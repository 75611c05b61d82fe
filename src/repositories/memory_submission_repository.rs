use crate::domain::SubmissionId;
use crate::error::{StoreError, StoreResult};
use crate::models::{ContactPayload, StoredSubmission, SubmissionStatus};
use crate::repositories::traits::SubmissionRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Document store for submissions held in memory.
///
/// Records are kept in insertion order behind a single `RwLock`, so the
/// `(email, phone)` uniqueness check and the insert happen atomically.
/// When a snapshot path is configured, every write is flushed to that JSON
/// file before the lock is released; a failed flush rolls the write back.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    records: RwLock<Vec<StoredSubmission>>,
    snapshot: Option<PathBuf>,
}

impl InMemorySubmissionRepository {
    /// Create an empty, memory-only repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository backed by a JSON snapshot file.
    ///
    /// Existing records are loaded from `path`; a missing file starts empty.
    pub async fn with_snapshot(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(io_error(&path, e)),
        };

        tracing::info!(
            path = %path.display(),
            count = records.len(),
            "Loaded submissions snapshot"
        );

        Ok(Self {
            records: RwLock::new(records),
            snapshot: Some(path),
        })
    }

    /// Write all records to the snapshot file, if one is configured.
    async fn persist(&self, records: &[StoredSubmission]) -> StoreResult<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };

        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| io_error(path, e))
    }
}

fn io_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), e))
}

fn not_found(id: &SubmissionId) -> StoreError {
    StoreError::NotFound(id.to_string())
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn create(&self, payload: &ContactPayload) -> StoreResult<StoredSubmission> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.same_sender(payload)) {
            return Err(StoreError::Conflict(format!(
                "{} / {}",
                payload.email(),
                payload.phone()
            )));
        }

        let stored = StoredSubmission::new(SubmissionId::generate(), payload.clone());
        records.push(stored.clone());

        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        Ok(stored)
    }

    async fn get(&self, id: &SubmissionId) -> StoreResult<StoredSubmission> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self, status: Option<SubmissionStatus>) -> StoreResult<Vec<StoredSubmission>> {
        let records = self.records.read().await;

        // Newest inserts first; the stable sort keeps that order for equal timestamps
        let mut result: Vec<StoredSubmission> = records
            .iter()
            .rev()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> StoreResult<StoredSubmission> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| not_found(id))?;

        let previous = records[index].clone();
        records[index].status = status;
        records[index].updated_at = Utc::now();

        if let Err(e) = self.persist(&records).await {
            records[index] = previous;
            return Err(e);
        }

        Ok(records[index].clone())
    }

    async fn delete(&self, id: &SubmissionId) -> StoreResult<()> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = records.remove(index);

        if let Err(e) = self.persist(&records).await {
            records.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }
}
