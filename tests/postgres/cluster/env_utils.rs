//! Environment helpers for the embedded cluster.

use super::BoxError;
use std::net::TcpListener;

/// Picks a free local port unless `PG_PORT` is already set.
pub(super) fn resolve_pg_port() -> Result<Option<String>, BoxError> {
    if std::env::var_os("PG_PORT").is_some() {
        return Ok(None);
    }
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(Some(port.to_string()))
}

/// Borrows owned variable pairs in the shape `EnvVarGuard` takes.
pub(super) fn env_pairs(env_vars: &[(String, Option<String>)]) -> Vec<(&str, Option<&str>)> {
    env_vars
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_deref()))
        .collect()
}
