//! Read-only repository port over orders, containers and tasks.
//!
//! A [`ShipmentRepository`] hands out one [`ShipmentSession`] per view
//! invocation. The session owns whatever connection the adapter needs and
//! releases it when closed or dropped.

use crate::shipment::domain::{
    Container, LifecycleStatus, Order, OrderStatus, ResultLimit, SearchTerm, lifecycle,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for shipment repository operations.
pub type ShipmentRepositoryResult<T> = Result<T, ShipmentRepositoryError>;

/// Source of scoped read sessions.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Session type produced by [`ShipmentRepository::open`].
    type Session: ShipmentSession;

    /// Acquires a session.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::Unavailable`] when no connection
    /// can be obtained. No query has been attempted in that case.
    async fn open(&self) -> ShipmentRepositoryResult<Self::Session>;
}

/// Read operations available within one session.
#[async_trait]
pub trait ShipmentSession: Send {
    /// Counts orders matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when execution fails.
    async fn count_orders(&mut self, filter: &OrderFilter) -> ShipmentRepositoryResult<u64>;

    /// Counts all containers.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when execution fails.
    async fn count_containers(&mut self) -> ShipmentRepositoryResult<u64>;

    /// Lists orders newest first with their containers loaded in the same
    /// call.
    ///
    /// Orders are sorted by creation timestamp descending, undated orders
    /// last, with ties broken by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when execution fails.
    async fn list_orders(
        &mut self,
        filter: &OrderFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>>;

    /// Lists containers with their parent order resolved when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when execution fails.
    async fn list_containers(
        &mut self,
        filter: &ContainerFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Container>>;

    /// Finds orders whose number or client name contains the term,
    /// ignoring case. Containers are not loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when execution fails.
    async fn search_orders(
        &mut self,
        term: &SearchTerm,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>>;

    /// Releases the session.
    fn close(self);
}

/// Status filter applied to orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// Every order regardless of status.
    All,
    /// Orders whose stored status equals one of the listed states.
    AnyOf(Vec<LifecycleStatus>),
}

impl OrderFilter {
    /// Orders with exactly this status.
    #[must_use]
    pub fn status(status: LifecycleStatus) -> Self {
        Self::AnyOf(vec![status])
    }

    /// Orders in any active lifecycle state.
    #[must_use]
    pub fn active() -> Self {
        Self::AnyOf(lifecycle::active_statuses().to_vec())
    }

    /// Returns `true` when an order with `status` passes the filter.
    #[must_use]
    pub fn matches(&self, status: &OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::AnyOf(statuses) => status
                .lifecycle()
                .is_some_and(|known| statuses.contains(&known)),
        }
    }
}

/// Filter applied to containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerFilter {
    order_statuses: Vec<LifecycleStatus>,
    require_driver: bool,
}

impl ContainerFilter {
    /// Creates a filter that matches every container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps containers whose parent order is in one of these states.
    #[must_use]
    pub fn with_order_statuses(
        mut self,
        statuses: impl IntoIterator<Item = LifecycleStatus>,
    ) -> Self {
        self.order_statuses = statuses.into_iter().collect();
        self
    }

    /// Keeps containers with at least one driver name recorded.
    #[must_use]
    pub fn with_driver(mut self) -> Self {
        self.require_driver = true;
        self
    }

    /// Parent-order states to match; empty means no status constraint.
    #[must_use]
    pub fn order_statuses(&self) -> &[LifecycleStatus] {
        &self.order_statuses
    }

    /// Whether a driver name is required.
    #[must_use]
    pub const fn requires_driver(&self) -> bool {
        self.require_driver
    }

    /// Returns `true` when the container passes the filter.
    ///
    /// A container whose parent is unknown never passes a status constraint.
    #[must_use]
    pub fn matches(&self, container: &Container, parent_status: Option<&OrderStatus>) -> bool {
        if self.require_driver && !container.driver().has_driver() {
            return false;
        }
        if self.order_statuses.is_empty() {
            return true;
        }
        parent_status
            .and_then(OrderStatus::lifecycle)
            .is_some_and(|status| self.order_statuses.contains(&status))
    }
}

/// Errors returned by shipment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ShipmentRepositoryError {
    /// No connection or session could be obtained.
    #[error("repository unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// A query failed while executing.
    #[error("query failed: {0}")]
    QueryFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl ShipmentRepositoryError {
    /// Wraps a connection acquisition error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a query execution error.
    pub fn query_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::QueryFailed(Arc::new(err))
    }
}
