//! Order aggregate as read from the shared logistics database.

use super::{Container, OrderId, OrderStatus};
use chrono::NaiveDateTime;

/// Milestone timestamps recorded along an order's route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTimeline {
    /// When the order was registered.
    pub created_at: Option<NaiveDateTime>,
    /// Departure from the origin port.
    pub departed_at: Option<NaiveDateTime>,
    /// Arrival at the Iranian port.
    pub arrived_iran_at: Option<NaiveDateTime>,
    /// Estimated arrival.
    pub eta: Option<NaiveDateTime>,
    /// When the arrival notice was issued.
    pub arrival_notice_at: Option<NaiveDateTime>,
    /// Arrival in Turkmenistan.
    pub arrived_tkm_at: Option<NaiveDateTime>,
}

/// Parameter object for reconstructing a persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderData {
    /// Primary key.
    pub id: OrderId,
    /// Human-readable order number such as `ORD-001`.
    pub order_number: Option<String>,
    /// Client the shipment belongs to.
    pub client_name: Option<String>,
    /// Container count as typed in by the office.
    pub container_count: u32,
    /// Goods description.
    pub goods_type: Option<String>,
    /// Route description.
    pub route: Option<String>,
    /// Stored lifecycle status.
    pub status: OrderStatus,
    /// Milestone timestamps.
    pub timeline: OrderTimeline,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Last synchronisation from the office application.
    pub last_sync: Option<NaiveDateTime>,
}

impl PersistedOrderData {
    /// Creates order data with only the identifying fields populated.
    #[must_use]
    pub fn new(id: OrderId, order_number: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            id,
            order_number: Some(order_number.into()),
            client_name: None,
            container_count: 0,
            goods_type: None,
            route: None,
            status,
            timeline: OrderTimeline::default(),
            notes: None,
            last_sync: None,
        }
    }

    /// Sets the client name.
    #[must_use]
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Sets the stored container count.
    #[must_use]
    pub fn with_container_count(mut self, container_count: u32) -> Self {
        self.container_count = container_count;
        self
    }

    /// Sets the goods description.
    #[must_use]
    pub fn with_goods_type(mut self, goods_type: impl Into<String>) -> Self {
        self.goods_type = Some(goods_type.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.timeline.created_at = Some(created_at);
        self
    }

    /// Sets the notes text.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Read-only order with its containers materialised up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    data: PersistedOrderData,
    containers: Vec<Container>,
}

impl Order {
    /// Reconstructs an order from persisted storage without containers.
    #[must_use]
    pub const fn from_persisted(data: PersistedOrderData) -> Self {
        Self {
            data,
            containers: Vec::new(),
        }
    }

    /// Attaches the containers that reference this order.
    #[must_use]
    pub fn with_containers(mut self, containers: Vec<Container>) -> Self {
        self.containers = containers;
        self
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.data.id
    }

    /// Returns the order number, if recorded.
    #[must_use]
    pub fn order_number(&self) -> Option<&str> {
        self.data.order_number.as_deref()
    }

    /// Returns the client name, if recorded.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.data.client_name.as_deref()
    }

    /// Returns the container count stored on the order row.
    #[must_use]
    pub const fn stored_container_count(&self) -> u32 {
        self.data.container_count
    }

    /// Returns the goods description, if recorded.
    #[must_use]
    pub fn goods_type(&self) -> Option<&str> {
        self.data.goods_type.as_deref()
    }

    /// Returns the route description, if recorded.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.data.route.as_deref()
    }

    /// Returns the stored status.
    #[must_use]
    pub const fn status(&self) -> &OrderStatus {
        &self.data.status
    }

    /// Returns the milestone timestamps.
    #[must_use]
    pub const fn timeline(&self) -> &OrderTimeline {
        &self.data.timeline
    }

    /// Returns the notes, if recorded.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.data.notes.as_deref()
    }

    /// Returns the last synchronisation timestamp.
    #[must_use]
    pub const fn last_sync(&self) -> Option<NaiveDateTime> {
        self.data.last_sync
    }

    /// Returns the containers loaded with the order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Number of containers on the order.
    ///
    /// The related container rows win when any exist; otherwise the count
    /// typed into the order row is used. The two may disagree.
    #[must_use]
    pub fn effective_container_count(&self) -> u64 {
        if self.containers.is_empty() {
            u64::from(self.data.container_count)
        } else {
            self.containers.len() as u64
        }
    }
}
