use crate::domain::SubmissionId;
use crate::error::StoreResult;
use crate::models::{ContactPayload, StoredSubmission, SubmissionStatus};
use async_trait::async_trait;

/// Repository for contact submissions.
///
/// Provides abstraction over the document store, enabling different
/// implementations (in-memory, file-backed, mock).
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a new submission and return the stored record.
    ///
    /// Fails with `StoreError::Conflict` if a submission with the same
    /// email and phone is already on file.
    async fn create(&self, payload: &ContactPayload) -> StoreResult<StoredSubmission>;

    /// Retrieve a single submission by ID.
    async fn get(&self, id: &SubmissionId) -> StoreResult<StoredSubmission>;

    /// List submissions, newest first, optionally filtered by status.
    async fn list(&self, status: Option<SubmissionStatus>) -> StoreResult<Vec<StoredSubmission>>;

    /// Change the handling status of a submission.
    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> StoreResult<StoredSubmission>;

    /// Delete a submission.
    async fn delete(&self, id: &SubmissionId) -> StoreResult<()>;
}
