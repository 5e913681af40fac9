//! Console transport for the logistics query desk.
//!
//! Reads one command per line from stdin and writes each reply to stdout,
//! followed by a blank line:
//!
//! ```text
//! $ DATABASE_URL=postgres://desk:secret@db/logistics margiana
//! /status
//! 🗺 *STATUS BY LANE*
//! ...
//! ```

use clap::Parser;
use margiana::{
    config::{AppConfig, redact_database_url},
    dispatch::CommandDispatcher,
    logging,
    shipment::{
        adapters::postgres::{PostgresShipmentRepository, lazy_pool},
        ports::{ShipmentRepository, ShipmentSession},
        render::ViewRenderer,
        services::QueryProjector,
    },
};
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::parse();
    let installed = logging::init(config.log_format);
    debug!(subscriber_installed = installed, "logging ready");
    config.validate()?;

    let repository = build_repository(&config);
    probe(&repository).await;

    let projector = QueryProjector::new(Arc::new(repository), Arc::new(DefaultClock));
    let dispatcher = CommandDispatcher::new(projector, ViewRenderer::new()?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = dispatcher.handle_line(&line).await;
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n\n").await?;
        stdout.flush().await?;
    }
    info!("input closed, shutting down");
    Ok(())
}

fn build_repository(config: &AppConfig) -> PostgresShipmentRepository {
    let Some(url) = config.database_url() else {
        warn!("DATABASE_URL not set; every view will report the database as unavailable");
        return PostgresShipmentRepository::disconnected();
    };
    info!(
        database = %redact_database_url(url),
        pool_size = config.pool_size,
        connect_timeout_secs = config.connect_timeout_secs,
        "using shared logistics database"
    );
    PostgresShipmentRepository::new(lazy_pool(
        url,
        config.pool_size,
        config.connect_timeout(),
    ))
}

/// Checks connectivity once so operators see problems in the log at
/// startup. The desk keeps running either way.
async fn probe(repository: &PostgresShipmentRepository) {
    match repository.open().await {
        Ok(session) => {
            session.close();
            info!("database reachable");
        }
        Err(err) => warn!(error = %err, "database unreachable, starting anyway"),
    }
}
