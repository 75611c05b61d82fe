//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact submission. Each value
//! object normalizes and validates at construction time, so a value that
//! exists is always in canonical form.

pub mod email;
pub mod errors;
pub mod phone;
pub mod submission_id;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use submission_id::SubmissionId;
