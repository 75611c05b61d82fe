use async_trait::async_trait;
use contact_desk::error::{MailError, MailResult};
use contact_desk::mailer::Mailer;
use std::sync::{Arc, Mutex};

/// One email captured by [`MockMailer`].
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mock mailer that records every delivery.
///
/// `fail_from(n)` makes the n-th send (0-based) and every later one fail,
/// so tests can break the operator copy or only the confirmation.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    attempts: Arc<Mutex<usize>>,
    fail_from: Arc<Mutex<Option<usize>>>,
}

#[allow(dead_code)]
impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails.
    pub fn failing() -> Self {
        let mailer = Self::new();
        mailer.fail_from(0);
        mailer
    }

    pub fn fail_from(&self, attempt: usize) {
        *self.fail_from.lock().unwrap() = Some(attempt);
    }

    /// Successfully delivered emails, in send order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send calls, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> MailResult<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if matches!(*self.fail_from.lock().unwrap(), Some(n) if attempt >= n) {
            return Err(MailError::ApiError {
                status: 503,
                message: "mock mail outage".to_string(),
            });
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
