//! HTTP client for the transactional mail API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncHttpMailer`]). The client posts one
//! JSON message per call to `{base_url}/send` with bearer authentication and maps
//! HTTP failures onto [`MailError`].

mod async_wrapper;
pub mod templates;

pub use async_wrapper::{AsyncHttpMailer, DisabledMailer, Mailer};
pub use templates::{admin_notification, escape_html, submitter_confirmation, EmailContent};

use crate::config::MailConfig;
use crate::error::{MailError, MailResult};
use crate::metrics::{MailTimer, Metrics};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Request body accepted by the mail API.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// HTTP client for the mail API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct HttpMailer {
    /// Base URL for the mail API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// Sender header, `"Name" <address>`
    from: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl HttpMailer {
    /// Create a new HttpMailer from configuration.
    pub fn new(config: &MailConfig, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.sender(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create an HttpMailer with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, from: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            from,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one HTML email.
    pub fn send_html(&self, to: &str, subject: &str, html: &str) -> MailResult<()> {
        let request = SendRequest {
            from: &self.from,
            to,
            subject,
            html,
        };
        let body = serde_json::to_value(&request)?;
        self.post("/send", &body)?;

        tracing::debug!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, MailError> {
        let timer = MailTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete(true);
            }
            Err(e) => {
                tracing::warn!("POST {} - Error: {}", url, e);
                timer.complete(false);
            }
        }

        result
    }

    /// Map a ureq error to a MailError.
    fn map_error(&self, error: ureq::Error) -> MailError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => MailError::Unauthorized,
                    _ => MailError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    MailError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    MailError::Timeout
                } else {
                    MailError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let mailer = HttpMailer::with_base_url(
            "https://mail.example.com/v1/".to_string(),
            "key".to_string(),
            "Site <noreply@example.com>".to_string(),
        );
        assert_eq!(mailer.build_url("/send"), "https://mail.example.com/v1/send");
        assert_eq!(mailer.build_url("send"), "https://mail.example.com/v1/send");
    }
}
