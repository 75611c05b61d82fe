//! Data models for contact submissions.

pub mod submission;

pub use submission::{ContactPayload, RawContactFields, StoredSubmission, SubmissionStatus};
