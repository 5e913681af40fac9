//! Tracing subscriber setup.
//!
//! Installed once per process. `RUST_LOG` overrides the profile's default
//! filter.

use clap::ValueEnum;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

/// Output profile for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    /// Human-readable lines, `margiana=debug` by default.
    #[default]
    Pretty,
    /// JSON records, `margiana=info` by default.
    Json,
}

impl LogProfile {
    /// Filter used when `RUST_LOG` is unset or invalid.
    #[must_use]
    pub const fn default_directive(self) -> &'static str {
        match self {
            Self::Pretty => "margiana=debug",
            Self::Json => "margiana=info",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs the global subscriber for `profile`.
///
/// Only the first call has any effect. Returns `true` when this crate's
/// subscriber is the global one, `false` when another was already set.
#[must_use]
pub fn init(profile: LogProfile) -> bool {
    *INSTALLED.get_or_init(|| {
        let installed = match profile {
            LogProfile::Pretty => tracing_subscriber::fmt()
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
            LogProfile::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
        };
        installed.is_ok()
    })
}
