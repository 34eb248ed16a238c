//! Server configuration read from the environment

use pronunciation_core::FeedbackLocale;

use crate::error::{ApiError, Result};

/// Runtime configuration for the backend
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// tracing EnvFilter directive
    pub log_filter: String,
    /// Locale feedback is rendered in when a request does not ask for one
    pub feedback_locale: FeedbackLocale,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            feedback_locale: FeedbackLocale::default(),
        }
    }
}

impl ServerConfig {
    /// Load from process environment (after `.env` has been applied)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ApiError::Config(format!("invalid PORT: {}", raw)))?,
            None => defaults.port,
        };

        let feedback_locale = match lookup("FEEDBACK_LOCALE") {
            Some(raw) => FeedbackLocale::from_code(&raw)
                .ok_or_else(|| ApiError::Config(format!("unknown FEEDBACK_LOCALE: {}", raw)))?,
            None => defaults.feedback_locale,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            feedback_locale,
        })
    }

    /// Address to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
