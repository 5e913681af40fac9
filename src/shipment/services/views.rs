//! Presentation models returned by the query projector.
//!
//! Every field is already resolved to display text or a number so the
//! renderer never needs to reach back into the domain.

use crate::shipment::domain::{Container, LifecycleStatus, Order};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Placeholder printed for any missing value.
pub const MISSING: &str = "—";

/// Longest notes preview shown in search results, in characters.
pub const NOTES_PREVIEW_CHARS: usize = 100;

fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(MISSING)
        .to_owned()
}

/// Order count for one lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Lifecycle state being counted.
    pub status: LifecycleStatus,
    /// Glyph for the state.
    pub glyph: &'static str,
    /// Operator-facing label for the state.
    pub label: &'static str,
    /// Number of orders in the state.
    pub count: u64,
}

impl StatusCount {
    /// Creates a count for `status`.
    #[must_use]
    pub const fn new(status: LifecycleStatus, count: u64) -> Self {
        Self {
            status,
            glyph: status.glyph(),
            label: status.description(),
            count,
        }
    }
}

/// Headline numbers for the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Every order, whatever its status.
    pub total_orders: u64,
    /// Every container row.
    pub total_containers: u64,
    /// Orders in one of the active states.
    pub active_count: u64,
    /// Non-zero counts per known state, in lifecycle order.
    pub per_status: Vec<StatusCount>,
}

/// One line of the active orders listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveOrderRecord {
    /// Order number.
    pub order_number: String,
    /// Client name.
    pub client_name: String,
    /// Related container rows, or the stored count when none exist.
    pub container_count: u64,
    /// Goods description.
    pub goods_type: String,
    /// Status text as stored.
    pub status: String,
    /// Status glyph.
    pub glyph: &'static str,
}

impl From<&Order> for ActiveOrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            order_number: or_missing(order.order_number()),
            client_name: or_missing(order.client_name()),
            container_count: order.effective_container_count(),
            goods_type: or_missing(order.goods_type()),
            status: order.status().as_str().to_owned(),
            glyph: order.status().glyph(),
        }
    }
}

/// One driver on the road.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverRecord {
    /// First and last name joined.
    pub driver_name: String,
    /// Trucking company.
    pub company: String,
    /// Truck plate number.
    pub truck_number: String,
    /// Container carried.
    pub container_number: String,
    /// Phone number valid in Iran.
    pub iran_phone: String,
    /// Phone number valid in Turkmenistan.
    pub turkmenistan_phone: String,
    /// Number of the parent order.
    pub order_number: String,
    /// Proof-of-delivery date as `dd.mm`.
    pub delivery_date: String,
}

impl From<&Container> for DriverRecord {
    fn from(container: &Container) -> Self {
        let driver = container.driver();
        Self {
            driver_name: or_missing(driver.display_name().as_deref()),
            company: or_missing(driver.company.as_deref()),
            truck_number: or_missing(driver.truck_number.as_deref()),
            container_number: or_missing(container.container_number()),
            iran_phone: or_missing(driver.iran_phone.as_deref()),
            turkmenistan_phone: or_missing(driver.turkmenistan_phone.as_deref()),
            order_number: or_missing(
                container
                    .order()
                    .and_then(|summary| summary.order_number.as_deref()),
            ),
            delivery_date: container
                .client_receiving_date()
                .as_ref()
                .map_or_else(|| MISSING.to_owned(), day_and_month),
        }
    }
}

fn day_and_month(date: &NaiveDateTime) -> String {
    date.format("%d.%m").to_string()
}

/// Counts for one route lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneSection {
    /// Section heading.
    pub title: &'static str,
    /// One count per state in the lane, zeros included.
    pub counts: Vec<StatusCount>,
}

/// Order counts grouped by route lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneStatus {
    /// Lanes in route order.
    pub sections: Vec<LaneSection>,
    /// Completed orders.
    pub completed: u64,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Order number.
    pub order_number: String,
    /// Client name.
    pub client_name: String,
    /// Status text as stored.
    pub status: String,
    /// Status glyph.
    pub glyph: &'static str,
    /// Container count typed into the order row.
    pub container_count: u32,
    /// Notes cut to [`NOTES_PREVIEW_CHARS`] characters.
    pub notes: String,
}

impl From<&Order> for SearchHit {
    fn from(order: &Order) -> Self {
        Self {
            order_number: or_missing(order.order_number()),
            client_name: or_missing(order.client_name()),
            status: order.status().as_str().to_owned(),
            glyph: order.status().glyph(),
            container_count: order.stored_container_count(),
            notes: order
                .notes()
                .filter(|notes| !notes.is_empty())
                .map_or_else(|| MISSING.to_owned(), notes_preview),
        }
    }
}

/// Cuts notes on a character boundary.
fn notes_preview(notes: &str) -> String {
    notes.chars().take(NOTES_PREVIEW_CHARS).collect()
}
