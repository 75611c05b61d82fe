//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! intake pipeline, the submission store and the mailer. They provide a clean
//! boundary between the MCP handlers and the data access layer.

mod submission_service;

pub use submission_service::{
    RejectionKind, SubmissionListing, SubmissionService, SubmissionServiceImpl, SubmitOutcome,
    DUPLICATE_MESSAGE,
};
