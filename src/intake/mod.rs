//! Contact-form intake pipeline.
//!
//! Runs the validation stages in order and stops at the first failure:
//!
//! 1. normalize (trim, lower-case email, reject empty fields)
//! 2. email syntax
//! 3. email provider typo guard
//! 4. phone classification and formatting
//! 5. payload assembly
//!
//! No I/O happens here; persistence and notification are the job of
//! [`crate::services::SubmissionService`].

pub mod assembler;
pub mod normalizer;

pub use normalizer::{decode, normalize, NormalizedFields};

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::matching::{TypoCheck, TypoGuard};
use crate::models::{ContactPayload, RawContactFields};

/// The stateless validation pipeline.
#[derive(Debug, Clone, Default)]
pub struct ContactIntake {
    typo_guard: TypoGuard,
}

impl ContactIntake {
    /// Create a pipeline using the given typo guard.
    pub fn new(typo_guard: TypoGuard) -> Self {
        Self { typo_guard }
    }

    /// Validate raw fields into a payload, or return the first violated rule.
    pub fn validate(&self, raw: &RawContactFields) -> Result<ContactPayload, ValidationError> {
        let fields = normalize(raw)?;

        let email = EmailAddress::new(&fields.email)?;

        if let TypoCheck {
            is_typo: true,
            suggestion: Some(suggestion),
        } = self.typo_guard.check_address(&email)
        {
            return Err(ValidationError::EmailTypo { suggestion });
        }

        let phone = PhoneNumber::new(&fields.phone)?;

        Ok(assembler::assemble(fields, email, phone))
    }

    /// Decode a JSON body and validate it.
    pub fn validate_json(&self, body: serde_json::Value) -> Result<ContactPayload, ValidationError> {
        let raw = decode(body)?;
        self.validate(&raw)
    }
}
