//! Query projector: one read-only view per operator command.
//!
//! Each view opens its own repository session, runs its queries and closes
//! the session before the outcome is inspected, so a failed query never
//! leaks the connection it was running on.

use super::views::{
    ActiveOrderRecord, DriverRecord, LaneSection, LaneStatus, SearchHit, StatusCount,
    SummaryReport,
};
use crate::shipment::{
    domain::{Lane, LifecycleStatus, ResultLimit, SearchTerm, ShipmentDomainError},
    ports::{
        ContainerFilter, OrderFilter, ShipmentRepository, ShipmentRepositoryError,
        ShipmentRepositoryResult, ShipmentSession,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Views the projector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Headline counts.
    SummaryReport,
    /// Newest active orders.
    ActiveOrders,
    /// Drivers currently carrying containers.
    DriversInTransit,
    /// Counts grouped by route lane.
    LaneStatus,
    /// Order lookup by number or client.
    Search,
}

impl View {
    /// Stable name used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SummaryReport => "summary_report",
            Self::ActiveOrders => "active_orders",
            Self::DriversInTransit => "drivers_in_transit",
            Self::LaneStatus => "lane_status",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by projector views.
#[derive(Debug, Clone, Error)]
pub enum ProjectionError {
    /// No session could be opened; nothing was queried.
    #[error("shipment store unavailable: {0}")]
    RepositoryUnavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// A query failed after the session was opened.
    #[error("shipment query failed: {0}")]
    QueryFailed(Arc<dyn std::error::Error + Send + Sync>),

    /// The caller passed an argument the view cannot accept.
    #[error(transparent)]
    InvalidArgument(#[from] ShipmentDomainError),
}

impl From<ShipmentRepositoryError> for ProjectionError {
    fn from(err: ShipmentRepositoryError) -> Self {
        match err {
            ShipmentRepositoryError::Unavailable(source) => Self::RepositoryUnavailable(source),
            ShipmentRepositoryError::QueryFailed(source) => Self::QueryFailed(source),
        }
    }
}

/// Result type for projector views.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Read-only projector over a shipment repository.
#[derive(Clone)]
pub struct QueryProjector<R, C>
where
    R: ShipmentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> QueryProjector<R, C>
where
    R: ShipmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a projector.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Headline counts over the whole store.
    ///
    /// `active_count` is its own filtered count over the active states.
    /// `per_status` lists known states only, skipping zero counts, so orders
    /// with an unrecognised status show up in `total_orders` alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::RepositoryUnavailable`] or
    /// [`ProjectionError::QueryFailed`] from the repository.
    pub async fn summary_report(&self) -> ProjectionResult<SummaryReport> {
        let generated_at = self.clock.utc();
        let mut session = self.repository.open().await?;
        let outcome = summarise(&mut session, generated_at).await;
        session.close();
        let report = outcome?;
        debug!(
            view = %View::SummaryReport,
            total_orders = report.total_orders,
            active = report.active_count,
            "view projected"
        );
        Ok(report)
    }

    /// Newest active orders first, undated orders last.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::RepositoryUnavailable`] or
    /// [`ProjectionError::QueryFailed`] from the repository.
    pub async fn active_orders(
        &self,
        limit: ResultLimit,
    ) -> ProjectionResult<Vec<ActiveOrderRecord>> {
        let mut session = self.repository.open().await?;
        let outcome = session.list_orders(&OrderFilter::active(), limit).await;
        session.close();
        let records: Vec<ActiveOrderRecord> =
            outcome?.iter().map(ActiveOrderRecord::from).collect();
        debug!(view = %View::ActiveOrders, %limit, rows = records.len(), "view projected");
        Ok(records)
    }

    /// Containers on the road whose driver is known.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::RepositoryUnavailable`] or
    /// [`ProjectionError::QueryFailed`] from the repository.
    pub async fn drivers_in_transit(
        &self,
        limit: ResultLimit,
    ) -> ProjectionResult<Vec<DriverRecord>> {
        let filter = ContainerFilter::new()
            .with_order_statuses(LifecycleStatus::in_transit_with_driver().iter().copied())
            .with_driver();
        let mut session = self.repository.open().await?;
        let outcome = session.list_containers(&filter, limit).await;
        session.close();
        let records: Vec<DriverRecord> = outcome?.iter().map(DriverRecord::from).collect();
        debug!(view = %View::DriversInTransit, %limit, rows = records.len(), "view projected");
        Ok(records)
    }

    /// Order counts per route lane plus the completed total.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::RepositoryUnavailable`] or
    /// [`ProjectionError::QueryFailed`] from the repository.
    pub async fn lane_status(&self) -> ProjectionResult<LaneStatus> {
        let mut session = self.repository.open().await?;
        let outcome = count_lanes(&mut session).await;
        session.close();
        let status = outcome?;
        debug!(view = %View::LaneStatus, completed = status.completed, "view projected");
        Ok(status)
    }

    /// Orders whose number or client contains `term`, ignoring case.
    ///
    /// The term is trimmed first. No session is opened for a blank term.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidArgument`] for a blank term, or a
    /// repository failure.
    pub async fn search(&self, term: &str, limit: ResultLimit) -> ProjectionResult<Vec<SearchHit>> {
        let search_term = SearchTerm::new(term)?;
        let mut session = self.repository.open().await?;
        let outcome = session.search_orders(&search_term, limit).await;
        session.close();
        let hits: Vec<SearchHit> = outcome?.iter().map(SearchHit::from).collect();
        debug!(view = %View::Search, %limit, rows = hits.len(), "view projected");
        Ok(hits)
    }
}

async fn summarise<S: ShipmentSession>(
    session: &mut S,
    generated_at: DateTime<Utc>,
) -> ShipmentRepositoryResult<SummaryReport> {
    let total_orders = session.count_orders(&OrderFilter::All).await?;
    let active_count = session.count_orders(&OrderFilter::active()).await?;

    let mut per_status = Vec::new();
    for status in LifecycleStatus::ALL {
        let count = session.count_orders(&OrderFilter::status(status)).await?;
        if count > 0 {
            per_status.push(StatusCount::new(status, count));
        }
    }

    let total_containers = session.count_containers().await?;
    Ok(SummaryReport {
        generated_at,
        total_orders,
        total_containers,
        active_count,
        per_status,
    })
}

async fn count_lanes<S: ShipmentSession>(session: &mut S) -> ShipmentRepositoryResult<LaneStatus> {
    let mut sections = Vec::with_capacity(Lane::ALL.len());
    for lane in Lane::ALL {
        let mut counts = Vec::new();
        for status in lane.statuses() {
            let count = session.count_orders(&OrderFilter::status(status)).await?;
            counts.push(StatusCount::new(status, count));
        }
        sections.push(LaneSection {
            title: lane.title(),
            counts,
        });
    }
    let completed = session
        .count_orders(&OrderFilter::status(LifecycleStatus::Completed))
        .await?;
    Ok(LaneStatus {
        sections,
        completed,
    })
}
