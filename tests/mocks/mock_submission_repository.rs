use async_trait::async_trait;
use contact_desk::domain::SubmissionId;
use contact_desk::error::{StoreError, StoreResult};
use contact_desk::models::{ContactPayload, StoredSubmission, SubmissionStatus};
use contact_desk::repositories::SubmissionRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock submission repository for testing.
///
/// Keeps records in a map, enforces `(email, phone)` uniqueness like a real
/// store and tracks method calls for verification. It can be switched into
/// an unavailable mode where every call fails.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmissionRepository {
    submissions: Arc<Mutex<HashMap<String, StoredSubmission>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSubmissionRepository {
    /// Create a new empty MockSubmissionRepository.
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Add a stored submission directly.
    pub fn add_submission(&self, submission: StoredSubmission) {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.insert(submission.id.to_string(), submission);
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored submissions.
    pub fn len(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

impl Default for MockSubmissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn create(&self, payload: &ContactPayload) -> StoreResult<StoredSubmission> {
        self.track_call("create")?;

        let mut submissions = self.submissions.lock().unwrap();
        if submissions.values().any(|s| s.same_sender(payload)) {
            return Err(StoreError::Conflict(payload.email().to_string()));
        }

        let stored = StoredSubmission::new(SubmissionId::generate(), payload.clone());
        submissions.insert(stored.id.to_string(), stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: &SubmissionId) -> StoreResult<StoredSubmission> {
        self.track_call("get")?;

        let submissions = self.submissions.lock().unwrap();
        submissions
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self, status: Option<SubmissionStatus>) -> StoreResult<Vec<StoredSubmission>> {
        self.track_call("list")?;

        let submissions = self.submissions.lock().unwrap();
        let mut result: Vec<StoredSubmission> = submissions
            .values()
            .filter(|s| status.map_or(true, |st| s.status == st))
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
        self.track_call("update_status")?;

        let mut submissions = self.submissions.lock().unwrap();
        let submission = submissions
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        submission.status = status;
        Ok(submission.clone())
    }

    async fn delete(&self, id: &SubmissionId) -> StoreResult<()> {
        self.track_call("delete")?;

        let mut submissions = self.submissions.lock().unwrap();
        submissions
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
