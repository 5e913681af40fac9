//! Diesel row models for the shared logistics tables.

use super::schema::{containers, orders, tasks};
use crate::shipment::domain::{
    ContainerId, DriverAssignment, OrderId, OrderStatus, OrderSummary, OrderTask, OrderTaskId,
    OrderTimeline, PersistedContainerData, PersistedOrderData,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for order records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub order_number: Option<String>,
    pub client_name: Option<String>,
    pub container_count: Option<i32>,
    pub goods_type: Option<String>,
    pub route: Option<String>,
    pub status: Option<String>,
    pub creation_date: Option<NaiveDateTime>,
    pub departure_date: Option<NaiveDateTime>,
    pub arrival_iran_date: Option<NaiveDateTime>,
    pub eta_date: Option<NaiveDateTime>,
    pub arrival_notice_date: Option<NaiveDateTime>,
    pub tkm_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub last_sync: Option<NaiveDateTime>,
}

/// Parent-order columns fetched alongside containers.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderSummaryRow {
    pub id: i32,
    pub order_number: Option<String>,
    pub status: Option<String>,
}

/// Query result row for container records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = containers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContainerRow {
    pub id: i32,
    pub order_id: Option<i32>,
    pub container_number: Option<String>,
    pub driver_first_name: Option<String>,
    pub driver_last_name: Option<String>,
    pub driver_company: Option<String>,
    pub truck_number: Option<String>,
    pub driver_iran_phone: Option<String>,
    pub driver_turkmenistan_phone: Option<String>,
    pub client_receiving_date: Option<NaiveDateTime>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderTaskRow {
    pub id: i32,
    pub order_id: Option<i32>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDateTime>,
}

fn stored_status(status: Option<&str>) -> OrderStatus {
    OrderStatus::from_stored(status.unwrap_or_default())
}

impl From<OrderRow> for PersistedOrderData {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            order_number: row.order_number,
            client_name: row.client_name,
            // Negative counts are data-entry noise; treat them as unknown.
            container_count: row
                .container_count
                .and_then(|count| u32::try_from(count).ok())
                .unwrap_or_default(),
            goods_type: row.goods_type,
            route: row.route,
            status: stored_status(row.status.as_deref()),
            timeline: OrderTimeline {
                created_at: row.creation_date,
                departed_at: row.departure_date,
                arrived_iran_at: row.arrival_iran_date,
                eta: row.eta_date,
                arrival_notice_at: row.arrival_notice_date,
                arrived_tkm_at: row.tkm_date,
            },
            notes: row.notes,
            last_sync: row.last_sync,
        }
    }
}

impl From<OrderSummaryRow> for OrderSummary {
    fn from(row: OrderSummaryRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            order_number: row.order_number,
            status: stored_status(row.status.as_deref()),
        }
    }
}

impl From<ContainerRow> for PersistedContainerData {
    fn from(row: ContainerRow) -> Self {
        Self {
            id: ContainerId::new(row.id),
            order_id: row.order_id.map(OrderId::new),
            container_number: row.container_number,
            driver: DriverAssignment {
                first_name: row.driver_first_name,
                last_name: row.driver_last_name,
                company: row.driver_company,
                truck_number: row.truck_number,
                iran_phone: row.driver_iran_phone,
                turkmenistan_phone: row.driver_turkmenistan_phone,
            },
            client_receiving_date: row.client_receiving_date,
        }
    }
}

impl From<OrderTaskRow> for OrderTask {
    fn from(row: OrderTaskRow) -> Self {
        Self {
            id: OrderTaskId::new(row.id),
            order_id: row.order_id.map(OrderId::new),
            description: row.description,
            assigned_to: row.assigned_to,
            status: row.status,
            priority: row.priority,
            due_date: row.due_date,
        }
    }
}
