//! Async mail delivery.
//!
//! [`Mailer`] is the notification collaborator consumed by the submission
//! service. [`AsyncHttpMailer`] runs the blocking [`HttpMailer`] on tokio's
//! blocking pool; [`DisabledMailer`] stands in when no mail API is configured.

use crate::error::{MailError, MailResult};
use crate::mailer::HttpMailer;
use crate::metrics::Metrics;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends HTML email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> MailResult<()>;
}

/// Async wrapper around the synchronous HttpMailer.
#[derive(Clone)]
pub struct AsyncHttpMailer {
    mailer: Arc<HttpMailer>,
}

impl AsyncHttpMailer {
    pub fn new(mailer: HttpMailer) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }
}

#[async_trait]
impl Mailer for AsyncHttpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> MailResult<()> {
        let mailer = self.mailer.clone();
        let to = to.to_string();
        let subject = subject.to_string();
        let html = html.to_string();

        tokio::task::spawn_blocking(move || mailer.send_html(&to, &subject, &html))
            .await
            .map_err(|e| MailError::HttpError(format!("Task join error: {}", e)))?
    }
}

/// Mailer used when delivery is not configured.
///
/// Every send fails with `MailError::NotConfigured` and is counted as
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct DisabledMailer {
    metrics: Metrics,
}

impl DisabledMailer {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, to: &str, _subject: &str, _html: &str) -> MailResult<()> {
        tracing::debug!(to = %to, "Email skipped: mail API not configured");
        self.metrics.record_email_skipped();
        Err(MailError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_always_fails() {
        let metrics = Metrics::new();
        let mailer = DisabledMailer::new(metrics.clone());

        let result = mailer
            .send("someone@example.com", "Hello", "<p>Hi</p>")
            .await;
        assert!(matches!(result, Err(MailError::NotConfigured)));
        assert_eq!(metrics.emails_skipped_total(), 1);
        assert_eq!(metrics.emails_failed_total(), 0);
    }
}
