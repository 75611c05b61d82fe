//! Validation errors for contact submissions.
//!
//! Every variant is a user-facing rejection: the `Display` text is returned
//! verbatim to whoever submitted the form.

use std::fmt;

/// Errors that can occur while validating a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload does not have the expected shape.
    InvalidPayload(String),

    /// A required field is empty after trimming.
    MissingField(&'static str),

    /// The email address does not match the accepted syntax.
    InvalidEmail(String),

    /// The email domain looks like a misspelling of a common provider.
    EmailTypo { suggestion: String },

    /// The phone number contains no digits.
    EmptyPhone,

    /// The phone number has an unsupported number of digits.
    InvalidPhone(String),

    /// The provided ID is empty.
    EmptyId,
}

impl ValidationError {
    /// Name of the failed rule, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "invalid_payload",
            Self::MissingField(_) => "missing_field",
            Self::InvalidEmail(_) => "invalid_email",
            Self::EmailTypo { .. } => "email_typo",
            Self::EmptyPhone => "empty_phone",
            Self::InvalidPhone(_) => "invalid_phone",
            Self::EmptyId => "empty_id",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload(_) => write!(f, "Invalid contact payload"),
            Self::MissingField(_) => {
                write!(f, "Name, email, phone, service and message are required.")
            }
            Self::InvalidEmail(_) => write!(
                f,
                "Invalid email format. Please provide a properly formatted email address."
            ),
            Self::EmailTypo { suggestion } => write!(
                f,
                "Did you mean {}? Please check your email address.",
                suggestion
            ),
            Self::EmptyPhone => write!(f, "Phone number cannot be empty."),
            Self::InvalidPhone(_) => write!(
                f,
                "Invalid phone number. Please provide a valid phone number \
                 (10 digits for US/Canada, or international format with country code)."
            ),
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
