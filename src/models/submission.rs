//! Contact submission models.
//!
//! Three shapes of the same form entry:
//! - [`RawContactFields`]: what the caller sent, decoded structurally but not validated
//! - [`ContactPayload`]: the validated, normalized, immutable submission
//! - [`StoredSubmission`]: a payload as persisted, with id, status and timestamps

use crate::domain::{EmailAddress, PhoneNumber, SubmissionId, ValidationError};
use crate::intake::{assembler, normalize};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw contact-form fields as submitted.
///
/// Every field must be a string when present; missing fields decode as empty
/// strings and are rejected later by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RawContactFields {
    /// Submitter's name
    pub name: String,
    /// Submitter's email address
    pub email: String,
    /// Submitter's phone number, any common formatting
    pub phone: String,
    /// Requested service (free-form category label)
    pub service: String,
    /// Message body
    pub message: String,
}

/// A fully validated contact submission.
///
/// Fields are private: a payload can only be produced by the intake
/// pipeline, and is read-only afterwards. Deserialization goes through the
/// same normalization and format rules, minus the provider typo guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContactFields")]
pub struct ContactPayload {
    name: String,
    email: EmailAddress,
    phone: PhoneNumber,
    service: String,
    message: String,
}

impl ContactPayload {
    pub(crate) fn new(
        name: String,
        email: EmailAddress,
        phone: PhoneNumber,
        service: String,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            service,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<RawContactFields> for ContactPayload {
    type Error = ValidationError;

    fn try_from(raw: RawContactFields) -> Result<Self, Self::Error> {
        let fields = normalize(&raw)?;
        let email = EmailAddress::new(&fields.email)?;
        let phone = PhoneNumber::new(&fields.phone)?;
        Ok(assembler::assemble(fields, email, phone))
    }
}

/// Back-office handling status of a submission.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Not yet opened by an operator
    #[default]
    New,
    /// Opened
    Read,
    /// Answered
    Replied,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            other => Err(format!(
                "Unknown status '{}' (expected new, read or replied)",
                other
            )),
        }
    }
}

/// A submission as persisted by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    /// Store-assigned identifier
    pub id: SubmissionId,

    /// The validated form contents
    #[serde(flatten)]
    pub payload: ContactPayload,

    /// Handling status
    #[serde(default)]
    pub status: SubmissionStatus,

    /// When the submission was stored
    pub created_at: DateTime<Utc>,

    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl StoredSubmission {
    /// Wrap a payload as a new, unread record.
    pub fn new(id: SubmissionId, payload: ContactPayload) -> Self {
        let now = Utc::now();
        Self {
            id,
            payload,
            status: SubmissionStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this record carries the same `(email, phone)` pair as `payload`.
    ///
    /// Phones are compared by digits, so `+44 20 7946 0958` and
    /// `+442079460958` are the same number.
    pub fn same_sender(&self, payload: &ContactPayload) -> bool {
        self.payload.email() == payload.email()
            && self.payload.phone().digits_only() == payload.phone().digits_only()
    }
}
