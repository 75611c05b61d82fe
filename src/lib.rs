//! Contact Desk - an MCP server for website contact-form intake.
//!
//! Validates visitor submissions, guards against mistyped email providers,
//! stores each submission once per `(email, phone)` pair and emails both the
//! operator and the submitter.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (email, phone, submission id)
//! - **matching**: Edit distance and the email provider typo guard
//! - **intake**: The pure validation pipeline producing a [`ContactPayload`]
//! - **models**: Raw input, validated payloads and stored submissions
//! - **repositories**: Submission storage behind an async trait
//! - **mailer**: HTTP mail API client and email templates
//! - **services**: Submission workflow and inbox operations
//! - **server**: MCP protocol server
//! - **config**, **error**, **metrics**: Ambient plumbing

pub mod config;
pub mod domain;
pub mod error;
pub mod intake;
pub mod mailer;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::{Config, MailConfig};
pub use domain::{EmailAddress, PhoneNumber, SubmissionId, ValidationError};
pub use error::{ConfigError, MailError, StoreError};
pub use intake::ContactIntake;
pub use mailer::{AsyncHttpMailer, DisabledMailer, HttpMailer, Mailer};
pub use matching::{levenshtein, TypoCheck, TypoGuard};
pub use metrics::{MailTimer, Metrics, MetricsSummary};
pub use models::{ContactPayload, RawContactFields, StoredSubmission, SubmissionStatus};
pub use repositories::{InMemorySubmissionRepository, SubmissionRepository};
pub use server::ContactDeskServer;
pub use services::{SubmissionService, SubmissionServiceImpl, SubmitOutcome};
