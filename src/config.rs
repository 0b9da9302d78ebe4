//! Application configuration
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Runtime configuration for the portal core
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Limpiar backend API
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Cadence for re-fetching the open thread's messages
    pub message_poll_interval: Duration,
    /// Cadence for re-fetching the thread list
    pub thread_poll_interval: Duration,
    /// Cadence for re-fetching analytics
    pub analytics_poll_interval: Duration,
    /// Ceiling for poll backoff after repeated failures
    pub max_poll_backoff: Duration,
    /// Path of the persisted session file
    pub session_file: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("LIMPIAR_API_BASE_URL")
            .unwrap_or_else(|_| "https://limpiar-backend.onrender.com/api".to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "LIMPIAR_API_BASE_URL must be an http(s) URL, got '{}'",
                api_base_url
            )));
        }

        Ok(Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: seconds_var("LIMPIAR_REQUEST_TIMEOUT_SECS", 30)?,
            message_poll_interval: seconds_var("LIMPIAR_MESSAGE_POLL_SECS", 5)?,
            thread_poll_interval: seconds_var("LIMPIAR_THREAD_POLL_SECS", 5)?,
            analytics_poll_interval: seconds_var("LIMPIAR_ANALYTICS_POLL_SECS", 30)?,
            max_poll_backoff: seconds_var("LIMPIAR_MAX_POLL_BACKOFF_SECS", 300)?,
            session_file: env::var("LIMPIAR_SESSION_FILE")
                .unwrap_or_else(|_| "session.json".to_string()),
        })
    }
}

fn seconds_var(name: &str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            ConfigError::Invalid(format!("{} must be a number of seconds, got '{}'", name, raw))
        }),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}
