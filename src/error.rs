//! Error types for the contact desk.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures live in [`crate::domain::ValidationError`]; these types cover
//! the collaborators (store, mailer) and configuration.

use thiserror::Error;

/// Errors raised by a submission store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A submission with the same email and phone is already on file
    #[error("Duplicate submission: {0}")]
    Conflict(String),

    /// Record not found
    #[error("Submission not found: {0}")]
    NotFound(String),

    /// Malformed request (bad id, unknown status)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Backing storage could not be read or written
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to (de)serialize stored records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur when sending email.
#[derive(Error, Debug)]
pub enum MailError {
    /// Mail delivery is not configured
    #[error("Email not configured")]
    NotConfigured,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Mail API returned an error status code
    #[error("Mail API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Credentials rejected by the mail API
    #[error("Mail API authentication failed")]
    Unauthorized,

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to encode the request
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with MailError
pub type MailResult<T> = Result<T, MailError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
