//! Configuration management for the contact desk.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded if present; `dotenvy` does not print to stdout, which MCP
//! uses for communication.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use crate::matching::DEFAULT_PROVIDERS;
use std::env;
use std::path::PathBuf;

/// Settings for the HTTP mail API.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Mail API base URL
    pub api_url: String,

    /// Bearer token for the mail API
    pub api_key: String,

    /// Sender display name (default: "Contact Form")
    pub from_name: String,

    /// Sender address (default: the operator address)
    pub from_address: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl MailConfig {
    /// The sender header, `"Name" <address>`.
    pub fn sender(&self) -> String {
        format!("\"{}\" <{}>", self.from_name, self.from_address)
    }
}

/// Configuration for the contact desk.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operator address that receives a copy of every submission
    pub admin_email: String,

    /// Mail delivery settings; `None` disables email
    pub mail: Option<MailConfig>,

    /// Provider domains used by the typo guard, in tie-break order
    pub typo_providers: Vec<String>,

    /// JSON snapshot file for stored submissions; `None` keeps them in memory only
    pub submissions_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ADMIN_EMAIL`: operator address for submission copies
    ///
    /// Optional environment variables:
    /// - `MAIL_API_URL`: mail API base URL (unset disables email)
    /// - `MAIL_API_KEY`: mail API token (required when `MAIL_API_URL` is set)
    /// - `MAIL_FROM_NAME`: sender name (default: "Contact Form")
    /// - `MAIL_FROM_ADDRESS`: sender address (default: `ADMIN_EMAIL`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `EMAIL_TYPO_PROVIDERS`: comma-separated provider domains (default: built-in list)
    /// - `SUBMISSIONS_FILE`: path of the JSON snapshot file
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let admin_email = env::var("ADMIN_EMAIL")
            .map_err(|_| ConfigError::MissingVar("ADMIN_EMAIL".to_string()))?;
        let admin_email = Self::parse_email("ADMIN_EMAIL", &admin_email)?;

        let mail = match Self::non_empty_var("MAIL_API_URL") {
            Some(api_url) => Some(Self::load_mail_config(api_url, &admin_email)?),
            None => None,
        };

        let typo_providers = match Self::non_empty_var("EMAIL_TYPO_PROVIDERS") {
            Some(list) => Self::parse_providers(&list)?,
            None => DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
        };

        let submissions_file = Self::non_empty_var("SUBMISSIONS_FILE").map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            admin_email,
            mail,
            typo_providers,
            submissions_file,
            log_level,
        })
    }

    fn load_mail_config(api_url: String, admin_email: &str) -> ConfigResult<MailConfig> {
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MAIL_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let api_key = Self::non_empty_var("MAIL_API_KEY").ok_or_else(|| {
            ConfigError::MissingVar("MAIL_API_KEY".to_string())
        })?;

        let from_name =
            Self::non_empty_var("MAIL_FROM_NAME").unwrap_or_else(|| "Contact Form".to_string());

        let from_address = match Self::non_empty_var("MAIL_FROM_ADDRESS") {
            Some(address) => Self::parse_email("MAIL_FROM_ADDRESS", &address)?,
            None => admin_email.to_string(),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        Ok(MailConfig {
            api_url,
            api_key,
            from_name,
            from_address,
            request_timeout,
        })
    }

    /// Read a variable, treating blank values as unset.
    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_email(var_name: &str, value: &str) -> ConfigResult<String> {
        EmailAddress::new(value)
            .map(EmailAddress::into_inner)
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Not a valid email address: {}", value),
            })
    }

    fn parse_providers(list: &str) -> ConfigResult<Vec<String>> {
        let providers: Vec<String> = list
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        if providers.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "EMAIL_TYPO_PROVIDERS".to_string(),
                reason: "Must list at least one domain".to_string(),
            });
        }
        Ok(providers)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            admin_email: String::new(),
            mail: None,
            typo_providers: DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            submissions_file: None,
            log_level: "error".to_string(),
        }
    }
}
