mod memory_submission_repository;
mod traits;

pub use memory_submission_repository::InMemorySubmissionRepository;
pub use traits::SubmissionRepository;
