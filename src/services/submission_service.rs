//! Submission service layer.
//!
//! Business logic for accepting contact submissions and for the back-office
//! operations on stored submissions.

use crate::domain::{SubmissionId, ValidationError};
use crate::error::{StoreError, StoreResult};
use crate::intake::ContactIntake;
use crate::mailer::{admin_notification, submitter_confirmation, Mailer};
use crate::metrics::Metrics;
use crate::models::{ContactPayload, RawContactFields, StoredSubmission, SubmissionStatus};
use crate::repositories::SubmissionRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Message returned when the `(email, phone)` pair is already on file.
pub const DUPLICATE_MESSAGE: &str = "A submission with this email and phone number already exists.";

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    InvalidPayload,
    MissingField,
    InvalidEmail,
    EmailTypo,
    InvalidPhone,
    Duplicate,
}

impl From<&ValidationError> for RejectionKind {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::InvalidPayload(_) | ValidationError::EmptyId => Self::InvalidPayload,
            ValidationError::MissingField(_) => Self::MissingField,
            ValidationError::InvalidEmail(_) => Self::InvalidEmail,
            ValidationError::EmailTypo { .. } => Self::EmailTypo,
            ValidationError::EmptyPhone | ValidationError::InvalidPhone(_) => Self::InvalidPhone,
        }
    }
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Stored; `notified` is false if either email could not be sent.
    Accepted { id: SubmissionId, notified: bool },
    /// Not stored; `reason` is the user-facing message.
    Rejected { kind: RejectionKind, reason: String },
}

impl SubmitOutcome {
    fn rejected(err: &ValidationError) -> Self {
        Self::Rejected {
            kind: err.into(),
            reason: err.to_string(),
        }
    }

    fn duplicate() -> Self {
        Self::Rejected {
            kind: RejectionKind::Duplicate,
            reason: DUPLICATE_MESSAGE.to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Stored submissions with summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListing {
    /// Number of submissions returned
    pub total: usize,
    /// Number of unread submissions in the whole store
    pub unread: usize,
    /// Submissions, newest first
    pub submissions: Vec<StoredSubmission>,
}

/// Submission service trait for business operations.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Validate, store and notify.
    ///
    /// Validation failures and duplicates come back as `Ok(Rejected)`; only
    /// store faults are errors.
    async fn submit(&self, raw: RawContactFields) -> StoreResult<SubmitOutcome>;

    /// Decode a JSON body, then behave like [`SubmissionService::submit`].
    async fn submit_json(&self, body: serde_json::Value) -> StoreResult<SubmitOutcome>;

    /// List stored submissions, newest first.
    async fn list_submissions(&self, status: Option<&str>) -> StoreResult<SubmissionListing>;

    /// Get a stored submission by ID.
    async fn get_submission(&self, id: &str) -> StoreResult<StoredSubmission>;

    /// Change the status of a stored submission.
    async fn update_status(&self, id: &str, status: &str) -> StoreResult<StoredSubmission>;

    /// Delete a stored submission.
    async fn delete_submission(&self, id: &str) -> StoreResult<()>;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    intake: ContactIntake,
    repository: Arc<dyn SubmissionRepository>,
    mailer: Arc<dyn Mailer>,
    admin_email: String,
    metrics: Metrics,
}

/// Validation helper functions.
impl SubmissionServiceImpl {
    fn parse_id(id: &str) -> StoreResult<SubmissionId> {
        SubmissionId::new(id).map_err(|e| StoreError::InvalidRequest(e.to_string()))
    }

    fn parse_status(status: &str) -> StoreResult<SubmissionStatus> {
        status.parse().map_err(StoreError::InvalidRequest)
    }
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(
        intake: ContactIntake,
        repository: Arc<dyn SubmissionRepository>,
        mailer: Arc<dyn Mailer>,
        admin_email: impl Into<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            intake,
            repository,
            mailer,
            admin_email: admin_email.into(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Turn an intake result into an outcome, storing and notifying on success.
    async fn process(
        &self,
        validated: Result<ContactPayload, ValidationError>,
    ) -> StoreResult<SubmitOutcome> {
        self.metrics.record_submission_received();

        match validated {
            Ok(payload) => self.accept(payload).await,
            Err(e) => {
                tracing::debug!(rule = e.kind(), "Submission rejected: {}", e);
                self.metrics.record_submission_rejected();
                Ok(SubmitOutcome::rejected(&e))
            }
        }
    }

    /// Persist a validated payload and send both emails.
    async fn accept(&self, payload: ContactPayload) -> StoreResult<SubmitOutcome> {
        let stored = match self.repository.create(&payload).await {
            Ok(stored) => stored,
            Err(StoreError::Conflict(detail)) => {
                tracing::info!(detail = %detail, "Duplicate submission rejected");
                self.metrics.record_submission_duplicate();
                return Ok(SubmitOutcome::duplicate());
            }
            Err(e) => {
                tracing::error!("Failed to store submission: {}", e);
                return Err(e);
            }
        };
        self.metrics.record_submission_accepted();

        let notified = self.notify(&payload).await;
        tracing::info!(
            submission_id = %stored.id,
            notified = notified,
            "Submission accepted"
        );

        Ok(SubmitOutcome::Accepted {
            id: stored.id,
            notified,
        })
    }

    /// Send the operator copy, then the submitter confirmation.
    ///
    /// Stops at the first failure; the submission stays stored either way.
    async fn notify(&self, payload: &ContactPayload) -> bool {
        let admin = admin_notification(payload);
        let confirmation = submitter_confirmation(payload);

        let deliveries = [
            (self.admin_email.as_str(), &admin),
            (payload.email().as_str(), &confirmation),
        ];

        for (to, content) in deliveries {
            if let Err(e) = self.mailer.send(to, &content.subject, &content.html).await {
                tracing::warn!(to = %to, "Submission saved but email sending failed: {}", e);
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    async fn submit(&self, raw: RawContactFields) -> StoreResult<SubmitOutcome> {
        self.process(self.intake.validate(&raw)).await
    }

    async fn submit_json(&self, body: serde_json::Value) -> StoreResult<SubmitOutcome> {
        self.process(self.intake.validate_json(body)).await
    }

    async fn list_submissions(&self, status: Option<&str>) -> StoreResult<SubmissionListing> {
        let status = status.map(Self::parse_status).transpose()?;

        let submissions = self.repository.list(status).await?;
        let unread = match status {
            Some(SubmissionStatus::New) => submissions.len(),
            _ => self
                .repository
                .list(Some(SubmissionStatus::New))
                .await?
                .len(),
        };

        Ok(SubmissionListing {
            total: submissions.len(),
            unread,
            submissions,
        })
    }

    async fn get_submission(&self, id: &str) -> StoreResult<StoredSubmission> {
        let id = Self::parse_id(id)?;
        self.repository.get(&id).await
    }

    async fn update_status(&self, id: &str, status: &str) -> StoreResult<StoredSubmission> {
        let id = Self::parse_id(id)?;
        let status = Self::parse_status(status)?;

        let updated = self.repository.update_status(&id, status).await?;
        tracing::info!(submission_id = %id, status = %status, "Submission status updated");
        Ok(updated)
    }

    async fn delete_submission(&self, id: &str) -> StoreResult<()> {
        let id = Self::parse_id(id)?;
        self.repository.delete(&id).await?;
        tracing::info!(submission_id = %id, "Submission deleted");
        Ok(())
    }
}
