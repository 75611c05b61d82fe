//! In-memory test doubles for the submission store and the mailer.

mod mock_mailer;
mod mock_submission_repository;

#[allow(unused_imports)]
pub use mock_mailer::{MockMailer, SentEmail};
#[allow(unused_imports)]
pub use mock_submission_repository::MockSubmissionRepository;
