//! Basic metrics instrumentation for the intake pipeline.
//!
//! Provides counters for submission outcomes and mail delivery, plus duration
//! tracking for mail API requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for submissions and outbound mail.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions received, valid or not
    submissions_received_total: Arc<AtomicU64>,

    /// Submissions persisted
    submissions_accepted_total: Arc<AtomicU64>,

    /// Submissions rejected by validation
    submissions_rejected_total: Arc<AtomicU64>,

    /// Submissions rejected as duplicates by the store
    submissions_duplicate_total: Arc<AtomicU64>,

    /// Emails delivered
    emails_sent_total: Arc<AtomicU64>,

    /// Emails that failed to deliver
    emails_failed_total: Arc<AtomicU64>,

    /// Emails not attempted because no mail API is configured
    emails_skipped_total: Arc<AtomicU64>,

    /// Total duration of all mail API requests in milliseconds
    mail_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_received_total: Arc::new(AtomicU64::new(0)),
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_duplicate_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
            emails_skipped_total: Arc::new(AtomicU64::new(0)),
            mail_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_submission_received(&self) {
        self.submissions_received_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_duplicate(&self) {
        self.submissions_duplicate_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a mail delivery attempt with its duration.
    pub fn record_email(&self, duration: Duration, success: bool) {
        self.mail_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
        if success {
            self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.emails_failed_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an email dropped without a delivery attempt.
    ///
    /// Kept apart from `emails_failed_total` so the average request
    /// duration only covers real API calls.
    pub fn record_email_skipped(&self) {
        self.emails_skipped_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_received_total(&self) -> u64 {
        self.submissions_received_total.load(Ordering::Relaxed)
    }

    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_duplicate_total(&self) -> u64 {
        self.submissions_duplicate_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    pub fn emails_skipped_total(&self) -> u64 {
        self.emails_skipped_total.load(Ordering::Relaxed)
    }

    /// Get average mail request duration in milliseconds.
    pub fn mail_duration_avg_ms(&self) -> f64 {
        let total = self.mail_duration_total_ms.load(Ordering::Relaxed);
        let count = self.emails_sent_total() + self.emails_failed_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_received_total: self.submissions_received_total(),
            submissions_accepted_total: self.submissions_accepted_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            submissions_duplicate_total: self.submissions_duplicate_total(),
            emails_sent_total: self.emails_sent_total(),
            emails_failed_total: self.emails_failed_total(),
            emails_skipped_total: self.emails_skipped_total(),
            mail_duration_avg_ms: self.mail_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub submissions_received_total: u64,
    pub submissions_accepted_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_duplicate_total: u64,
    pub emails_sent_total: u64,
    pub emails_failed_total: u64,
    pub emails_skipped_total: u64,
    pub mail_duration_avg_ms: f64,
}

/// Helper for timing mail API requests.
pub struct MailTimer {
    start: Instant,
    metrics: Metrics,
}

impl MailTimer {
    /// Start timing a mail request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the outcome.
    pub fn complete(self, success: bool) {
        self.metrics.record_email(self.start.elapsed(), success);
    }
}
