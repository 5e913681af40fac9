//! `PostgreSQL` repository implementation over the shared logistics tables.

use super::{
    models::{ContainerRow, OrderRow, OrderSummaryRow},
    schema::{containers, orders},
};
use crate::shipment::{
    domain::{
        Container, LifecycleStatus, Order, OrderId, OrderSummary, PersistedContainerData,
        PersistedOrderData, ResultLimit, SearchTerm,
    },
    ports::{
        ContainerFilter, OrderFilter, ShipmentRepository, ShipmentRepositoryError,
        ShipmentRepositoryResult, ShipmentSession,
    },
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// `PostgreSQL` connection pool type used by shipment adapters.
pub type ShipmentPgPool = Pool<ConnectionManager<PgConnection>>;

type PooledPgConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a pool that connects on first use rather than at construction.
#[must_use]
pub fn lazy_pool(database_url: &str, max_size: u32, connect_timeout: Duration) -> ShipmentPgPool {
    Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .connection_timeout(connect_timeout)
        .test_on_check_out(true)
        .build_unchecked(ConnectionManager::new(database_url))
}

#[derive(Debug, Error)]
#[error("no database configured")]
struct NotConfigured;

#[derive(Debug, Error)]
#[error("session already released")]
struct SessionReleased;

/// `PostgreSQL`-backed shipment repository.
#[derive(Debug, Clone)]
pub struct PostgresShipmentRepository {
    pool: Option<ShipmentPgPool>,
}

impl PostgresShipmentRepository {
    /// Creates a repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ShipmentPgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a repository with no database behind it.
    ///
    /// Every [`ShipmentRepository::open`] call reports the store as
    /// unavailable, so the desk keeps answering without a database.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self { pool: None }
    }
}

#[async_trait]
impl ShipmentRepository for PostgresShipmentRepository {
    type Session = PostgresShipmentSession;

    async fn open(&self) -> ShipmentRepositoryResult<Self::Session> {
        let pool = self
            .pool
            .clone()
            .ok_or_else(|| ShipmentRepositoryError::unavailable(NotConfigured))?;
        let connection = tokio::task::spawn_blocking(move || pool.get())
            .await
            .map_err(ShipmentRepositoryError::unavailable)?
            .map_err(ShipmentRepositoryError::unavailable)?;
        Ok(PostgresShipmentSession {
            connection: Some(connection),
        })
    }
}

/// Session holding one pooled connection until closed or dropped.
pub struct PostgresShipmentSession {
    connection: Option<PooledPgConnection>,
}

impl std::fmt::Debug for PostgresShipmentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresShipmentSession")
            .field("open", &self.connection.is_some())
            .finish()
    }
}

impl PostgresShipmentSession {
    /// Runs synchronous Diesel work on the blocking pool, handing the
    /// connection back to the session afterwards.
    async fn run_blocking<F, T>(&mut self, f: F) -> ShipmentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ShipmentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut connection = self
            .connection
            .take()
            .ok_or_else(|| ShipmentRepositoryError::query_failed(SessionReleased))?;
        let (connection, result) = tokio::task::spawn_blocking(move || {
            let result = f(&mut connection);
            (connection, result)
        })
        .await
        .map_err(ShipmentRepositoryError::query_failed)?;
        self.connection = Some(connection);
        result
    }
}

#[async_trait]
impl ShipmentSession for PostgresShipmentSession {
    async fn count_orders(&mut self, filter: &OrderFilter) -> ShipmentRepositoryResult<u64> {
        let filter = filter.clone();
        self.run_blocking(move |connection| {
            let total = filtered_orders(&filter)
                .count()
                .get_result::<i64>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?;
            to_count(total)
        })
        .await
    }

    async fn count_containers(&mut self) -> ShipmentRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let total = containers::table
                .count()
                .get_result::<i64>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?;
            to_count(total)
        })
        .await
    }

    async fn list_orders(
        &mut self,
        filter: &OrderFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>> {
        let filter = filter.clone();
        self.run_blocking(move |connection| {
            let rows = filtered_orders(&filter)
                .order(orders::creation_date.desc().nulls_last())
                .then_order_by(orders::id.desc())
                .limit(limit.as_i64())
                .select(OrderRow::as_select())
                .load::<OrderRow>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?;

            let order_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
            let mut containers_by_order = load_containers_for(connection, &order_ids)?;
            Ok(rows
                .into_iter()
                .map(|row| {
                    let containers = containers_by_order.remove(&row.id).unwrap_or_default();
                    Order::from_persisted(PersistedOrderData::from(row))
                        .with_containers(containers)
                })
                .collect())
        })
        .await
    }

    async fn list_containers(
        &mut self,
        filter: &ContainerFilter,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Container>> {
        let filter = filter.clone();
        self.run_blocking(move |connection| {
            let mut query: containers::BoxedQuery<'static, Pg> = containers::table.into_boxed();
            if !filter.order_statuses().is_empty() {
                let parents = orders::table
                    .filter(orders::status.eq_any(status_texts(filter.order_statuses())))
                    .select(orders::id.nullable());
                query = query.filter(containers::order_id.eq_any(parents));
            }
            if filter.requires_driver() {
                query = query.filter(
                    containers::driver_first_name
                        .is_not_null()
                        .or(containers::driver_last_name.is_not_null()),
                );
            }
            let rows = query
                .order(containers::id.asc())
                .limit(limit.as_i64())
                .select(ContainerRow::as_select())
                .load::<ContainerRow>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?;

            let parent_ids: Vec<i32> = rows.iter().filter_map(|row| row.order_id).collect();
            let parents: HashMap<OrderId, OrderSummary> = orders::table
                .filter(orders::id.eq_any(parent_ids))
                .select(OrderSummaryRow::as_select())
                .load::<OrderSummaryRow>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?
                .into_iter()
                .map(|row| {
                    let summary = OrderSummary::from(row);
                    (summary.id, summary)
                })
                .collect();

            Ok(rows
                .into_iter()
                .map(|row| {
                    let data = PersistedContainerData::from(row);
                    let parent = data.order_id.and_then(|id| parents.get(&id).cloned());
                    let container = Container::from_persisted(data);
                    match parent {
                        Some(summary) => container.with_order(summary),
                        None => container,
                    }
                })
                .collect())
        })
        .await
    }

    async fn search_orders(
        &mut self,
        term: &SearchTerm,
        limit: ResultLimit,
    ) -> ShipmentRepositoryResult<Vec<Order>> {
        let pattern = like_pattern(term);
        self.run_blocking(move |connection| {
            let rows = orders::table
                .filter(
                    orders::order_number
                        .ilike(pattern.clone())
                        .or(orders::client_name.ilike(pattern)),
                )
                .order(orders::id.asc())
                .limit(limit.as_i64())
                .select(OrderRow::as_select())
                .load::<OrderRow>(connection)
                .map_err(ShipmentRepositoryError::query_failed)?;
            Ok(rows
                .into_iter()
                .map(|row| Order::from_persisted(PersistedOrderData::from(row)))
                .collect())
        })
        .await
    }

    fn close(self) {
        drop(self);
    }
}

fn status_texts(statuses: &[LifecycleStatus]) -> Vec<&'static str> {
    statuses.iter().map(|status| status.as_str()).collect()
}

fn filtered_orders(filter: &OrderFilter) -> orders::BoxedQuery<'static, Pg> {
    let query = orders::table.into_boxed();
    match filter {
        OrderFilter::All => query,
        OrderFilter::AnyOf(statuses) => {
            query.filter(orders::status.eq_any(status_texts(statuses)))
        }
    }
}

fn load_containers_for(
    connection: &mut PgConnection,
    order_ids: &[i32],
) -> ShipmentRepositoryResult<HashMap<i32, Vec<Container>>> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = containers::table
        .filter(containers::order_id.eq_any(order_ids.to_vec()))
        .order(containers::id.asc())
        .select(ContainerRow::as_select())
        .load::<ContainerRow>(connection)
        .map_err(ShipmentRepositoryError::query_failed)?;

    let mut grouped: HashMap<i32, Vec<Container>> = HashMap::new();
    for row in rows {
        if let Some(order_id) = row.order_id {
            grouped
                .entry(order_id)
                .or_default()
                .push(Container::from_persisted(PersistedContainerData::from(row)));
        }
    }
    Ok(grouped)
}

fn to_count(total: i64) -> ShipmentRepositoryResult<u64> {
    u64::try_from(total).map_err(ShipmentRepositoryError::query_failed)
}

/// Builds an `ILIKE` pattern that matches the term as a literal substring.
pub(super) fn like_pattern(term: &SearchTerm) -> String {
    let mut pattern = String::with_capacity(term.as_str().len() + 2);
    pattern.push('%');
    for character in term.as_str().chars() {
        if matches!(character, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(character);
    }
    pattern.push('%');
    pattern
}
