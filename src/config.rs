//! Runtime configuration from command-line flags and environment variables.

use crate::logging::LogProfile;
use clap::Parser;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by configuration validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The pool must hold at least one connection.
    #[error("pool size must be at least 1, got {0}")]
    InvalidPoolSize(u32),

    /// Connecting must be allowed at least one second.
    #[error("connect timeout must be at least 1 second, got {0}")]
    InvalidConnectTimeout(u64),

    /// `DATABASE_URL` was set but blank.
    #[error("database URL must not be blank")]
    BlankDatabaseUrl,
}

/// Settings for the console desk.
#[derive(Debug, Clone, Parser)]
#[command(name = "margiana", version, about = "Read-only logistics query desk")]
pub struct AppConfig {
    /// `PostgreSQL` URL of the shared logistics database. Without it every
    /// view reports the database as unavailable.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections.
    #[arg(long, env = "MARGIANA_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Seconds to wait for a connection before reporting the store down.
    #[arg(long, env = "MARGIANA_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,

    /// Log output format.
    #[arg(long, env = "MARGIANA_LOG_FORMAT", value_enum, default_value_t = LogProfile::Pretty)]
    pub log_format: LogProfile,
}

impl AppConfig {
    /// Checks values clap cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero pool size, a zero timeout, or a
    /// blank database URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize(self.pool_size));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidConnectTimeout(self.connect_timeout_secs));
        }
        if self
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::BlankDatabaseUrl);
        }
        Ok(())
    }

    /// Returns the trimmed database URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().map(str::trim)
    }

    /// Returns the pool connection timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Hides the password in a connection URL so it can be logged.
///
/// `postgres://desk:secret@db:5432/logistics` becomes
/// `postgres://desk:***@db:5432/logistics`. URLs without a password are
/// returned unchanged.
#[must_use]
pub fn redact_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let (authority, path) = rest
        .split_once('/')
        .map_or((rest, None), |(authority, path)| (authority, Some(path)));
    let Some((userinfo, host)) = authority.rsplit_once('@') else {
        return url.to_owned();
    };
    let Some((user, _password)) = userinfo.split_once(':') else {
        return url.to_owned();
    };

    let mut redacted = format!("{scheme}://{user}:***@{host}");
    if let Some(remainder) = path {
        redacted.push('/');
        redacted.push_str(remainder);
    }
    redacted
}
