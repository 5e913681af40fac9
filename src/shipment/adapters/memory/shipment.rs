//! In-memory shipment repository for tests and demos.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::shipment::{
    domain::{
        Container, Order, OrderSummary, PersistedContainerData, PersistedOrderData, ResultLimit,
        SearchTerm,
    },
    ports::{
        ContainerFilter, OrderFilter, ShipmentRepository, ShipmentRepositoryError,
        ShipmentRepositoryResult, ShipmentSession,
    },
};

/// Failure to simulate on the next sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Behave normally.
    #[default]
    None,
    /// Refuse to open sessions.
    Unavailable,
    /// Open sessions but fail every query.
    QueryFailure,
}

/// Thread-safe in-memory shipment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentRepository {
    state: Arc<RwLock<InMemoryShipmentState>>,
    ledger: Arc<SessionLedger>,
}

#[derive(Debug, Default)]
struct InMemoryShipmentState {
    orders: Vec<PersistedOrderData>,
    containers: Vec<PersistedContainerData>,
    failure: FailureMode,
}

#[derive(Debug, Default)]
struct SessionLedger {
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl InMemoryShipmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order row.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when the state lock
    /// is poisoned.
    pub fn insert_order(&self, order: PersistedOrderData) -> ShipmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ShipmentRepositoryError::query_failed(std::io::Error::other(err.to_string()))
        })?;
        state.orders.push(order);
        Ok(())
    }

    /// Adds a container row. The parent reference is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when the state lock
    /// is poisoned.
    pub fn insert_container(
        &self,
        container: PersistedContainerData,
    ) -> ShipmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ShipmentRepositoryError::query_failed(std::io::Error::other(err.to_string()))
        })?;
        state.containers.push(container);
        Ok(())
    }

    /// Switches the simulated failure mode.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentRepositoryError::QueryFailed`] when the state lock
    /// is poisoned.
    pub fn set_failure_mode(&self, failure: FailureMode) -> ShipmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ShipmentRepositoryError::query_failed(std::io::Error::other(err.to_string()))
        })?;
        state.failure = failure;
        Ok(())
    }

    /// Number of sessions handed out so far.
    #[must_use]
    pub fn sessions_opened(&self) -> usize {
        self.ledger.opened.load(Ordering::SeqCst)
    }

    /// Number of sessions handed out and not yet released.
    #[must_use]
    pub fn sessions_outstanding(&self) -> usize {
        self.sessions_opened()
            .saturating_sub(self.ledger.released.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    type Session = InMemoryShipmentSession;

    async fn open(&self) -> ShipmentRepositoryResult<Self::Session> {
        let failure = self
            .state
            .read()
            .map_err(|err| {
                ShipmentRepositoryError::unavailable(std::io::Error::other(err.to_string()))
            })?
            .failure;
        if failure == FailureMode::Unavailable {
            return Err(ShipmentRepositoryError::unavailable(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "in-memory store marked unavailable",
            )));
        }

        self.ledger.opened.fetch_add(1, Ordering::SeqCst);
        Ok(InMemoryShipmentSession {
            state: Arc::clone(&self.state),
            ledger: Arc::clone(&self.ledger),
        })
    }
}

/// Session over the in-memory store. Counts itself released on drop.
#[derive(Debug)]
pub struct InMemoryShipmentSession {
    state: Arc<RwLock<InMemoryShipmentState>>,
    ledger: Arc<SessionLedger>,
}

impl InMemoryShipmentSession {
    fn read(&self) -> ShipmentRepositoryResult<RwLockReadGuard<'_, InMemoryShipmentState>> {
        let state = self.state.read().map_err(|err| {
            ShipmentRepositoryError::query_failed(std::io::Error::other(err.to_string()))
        })?;
        if state.failure == FailureMode::QueryFailure {
            return Err(ShipmentRepositoryError::query_failed(std::io::Error::other(
                "injected query failure",
            )));
        }
        Ok(state)
    }
}

impl Drop for InMemoryShipmentSession {
    fn drop(&mut self) {
        self.ledger.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Creation timestamps descending, missing timestamps last.
fn newest_first(left: Option<NaiveDateTime>, right: Option<NaiveDateTime>) -> CmpOrdering {
    match (left, right) {
        (Some(left_at), Some(right_at)) => right_at.cmp(&left_at),
        (Some(_), None) => CmpOrdering::Less,
        (None, Some(_)) => CmpOrdering::Greater,
        (None, None) => CmpOrdering::Equal,
    }
}

fn containers_of(state: &InMemoryShipmentState, order: &PersistedOrderData) -> Vec<Container> {
    state
        .containers
        .iter()
        .filter(|container| container.order_id == Some(order.id))
        .cloned()
        .map(Container::from_persisted)
        .collect()
}

fn parent_of(
    state: &InMemoryShipmentState,
    container: &PersistedContainerData,
) -> Option<OrderSummary> {
    let parent_id = container.order_id?;
    state
        .orders
        .iter()
        .find(|order| order.id == parent_id)
        .map(|order| OrderSummary {
            id: order.id,
            order_number: order.order_number.clone(),
            status: order.status.clone(),
        })
}

fn count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}

#[async_trait]
impl ShipmentSession for InMemoryShipmentSession {
    async fn count_orders(&mut self, filter: &OrderFilter) -> ShipmentRepositoryResult<u64> {
        let state = self.read()?;
        let matching = state
            .orders
            .iter()
            .filter(|order| filter.matches(&order.status))
            .count();
        Ok(count(matching))
    }

    async fn count_containers(&mut self) -> ShipmentRepositoryResult<u64> {
        let state = self.read()?;
        Ok(count(state.containers.len()))
    }

    async fn list_orders(
        &mut self,
        filter: &OrderFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>> {
        let state = self.read()?;
        let mut matching: Vec<&PersistedOrderData> = state
            .orders
            .iter()
            .filter(|order| filter.matches(&order.status))
            .collect();
        matching.sort_by(|left, right| {
            newest_first(left.timeline.created_at, right.timeline.created_at)
                .then_with(|| right.id.cmp(&left.id))
        });

        Ok(matching
            .into_iter()
            .take(limit.as_usize())
            .map(|order| {
                Order::from_persisted(order.clone()).with_containers(containers_of(&state, order))
            })
            .collect())
    }

    async fn list_containers(
        &mut self,
        filter: &ContainerFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Container>> {
        let state = self.read()?;
        Ok(state
            .containers
            .iter()
            .filter_map(|data| {
                let container = Container::from_persisted(data.clone());
                let parent = parent_of(&state, data);
                if !filter.matches(&container, parent.as_ref().map(|summary| &summary.status)) {
                    return None;
                }
                Some(match parent {
                    Some(summary) => container.with_order(summary),
                    None => container,
                })
            })
            .take(limit.as_usize())
            .collect())
    }

    async fn search_orders(
        &mut self,
        term: &SearchTerm,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>> {
        let state = self.read()?;
        Ok(state
            .orders
            .iter()
            .filter(|order| {
                order
                    .order_number
                    .as_deref()
                    .is_some_and(|number| term.matches(number))
                    || order
                        .client_name
                        .as_deref()
                        .is_some_and(|client| term.matches(client))
            })
            .take(limit.as_usize())
            .cloned()
            .map(Order::from_persisted)
            .collect())
    }

    fn close(self) {
        drop(self);
    }
}
