//! Contact Desk - Main entry point
//!
//! Runs the contact-form intake MCP server over stdio.

use anyhow::Result;
use contact_desk::mailer::{AsyncHttpMailer, DisabledMailer, HttpMailer, Mailer};
use contact_desk::repositories::{InMemorySubmissionRepository, SubmissionRepository};
use contact_desk::services::{SubmissionService, SubmissionServiceImpl};
use contact_desk::{Config, ContactDeskServer, ContactIntake, Metrics, TypoGuard};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // stderr only; stdout carries MCP traffic
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    let repository = match &config.submissions_file {
        Some(path) => {
            info!("Persisting submissions to {}", path.display());
            Arc::new(InMemorySubmissionRepository::with_snapshot(path).await?)
                as Arc<dyn SubmissionRepository>
        }
        None => {
            warn!("SUBMISSIONS_FILE not set; submissions are kept in memory only");
            Arc::new(InMemorySubmissionRepository::new()) as Arc<dyn SubmissionRepository>
        }
    };

    let mailer = match &config.mail {
        Some(mail) => {
            info!("Mail API: {}", mail.api_url);
            Arc::new(AsyncHttpMailer::new(HttpMailer::new(mail, metrics.clone())))
                as Arc<dyn Mailer>
        }
        None => {
            warn!("MAIL_API_URL not set; submissions will be stored without email notification");
            Arc::new(DisabledMailer::new(metrics.clone())) as Arc<dyn Mailer>
        }
    };

    let intake = ContactIntake::new(TypoGuard::new(config.typo_providers.iter()));

    let service = Arc::new(SubmissionServiceImpl::new(
        intake,
        repository,
        mailer,
        config.admin_email.clone(),
        metrics.clone(),
    )) as Arc<dyn SubmissionService>;

    let server = ContactDeskServer::new(service);

    info!("Starting MCP server with stdio transport");
    contact_desk::server::run_server(server).await?;

    info!(summary = ?metrics.summary(), "Contact Desk shutdown complete");
    Ok(())
}
