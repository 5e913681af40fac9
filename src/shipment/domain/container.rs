//! Containers and their trucking assignment.

use super::{ContainerId, OrderId, OrderStatus};
use chrono::NaiveDateTime;

/// Driver and truck assigned to a container. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverAssignment {
    /// Driver first name.
    pub first_name: Option<String>,
    /// Driver last name.
    pub last_name: Option<String>,
    /// Trucking company.
    pub company: Option<String>,
    /// Truck plate number.
    pub truck_number: Option<String>,
    /// Phone number valid in Iran.
    pub iran_phone: Option<String>,
    /// Phone number valid in Turkmenistan.
    pub turkmenistan_phone: Option<String>,
}

impl DriverAssignment {
    /// Creates an assignment with the driver's name.
    #[must_use]
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Returns `true` when at least one name field is recorded.
    #[must_use]
    pub const fn has_driver(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    /// Returns "first last", skipping whichever part is missing.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if !self.has_driver() {
            return None;
        }
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        Some(joined.trim().to_owned())
    }
}

/// Parameter object for reconstructing a persisted container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedContainerData {
    /// Primary key.
    pub id: ContainerId,
    /// Parent order, if the row references one.
    pub order_id: Option<OrderId>,
    /// Container number painted on the box.
    pub container_number: Option<String>,
    /// Trucking assignment.
    pub driver: DriverAssignment,
    /// Date the client received the goods.
    pub client_receiving_date: Option<NaiveDateTime>,
}

impl PersistedContainerData {
    /// Creates container data without a driver.
    #[must_use]
    pub fn new(id: ContainerId, order_id: Option<OrderId>) -> Self {
        Self {
            id,
            order_id,
            container_number: None,
            driver: DriverAssignment::default(),
            client_receiving_date: None,
        }
    }

    /// Sets the container number.
    #[must_use]
    pub fn with_container_number(mut self, container_number: impl Into<String>) -> Self {
        self.container_number = Some(container_number.into());
        self
    }

    /// Sets the trucking assignment.
    #[must_use]
    pub fn with_driver(mut self, driver: DriverAssignment) -> Self {
        self.driver = driver;
        self
    }

    /// Sets the client receiving date.
    #[must_use]
    pub fn with_client_receiving_date(mut self, date: NaiveDateTime) -> Self {
        self.client_receiving_date = Some(date);
        self
    }
}

/// Parent-order fields resolved together with a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Parent primary key.
    pub id: OrderId,
    /// Parent order number, if recorded.
    pub order_number: Option<String>,
    /// Parent status.
    pub status: OrderStatus,
}

/// Read-only container, optionally carrying its resolved parent order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    data: PersistedContainerData,
    order: Option<OrderSummary>,
}

impl Container {
    /// Reconstructs a container from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedContainerData) -> Self {
        Self { data, order: None }
    }

    /// Attaches the resolved parent order.
    #[must_use]
    pub fn with_order(mut self, order: OrderSummary) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn id(&self) -> ContainerId {
        self.data.id
    }

    /// Returns the parent order reference as stored.
    #[must_use]
    pub const fn order_id(&self) -> Option<OrderId> {
        self.data.order_id
    }

    /// Returns the container number, if recorded.
    #[must_use]
    pub fn container_number(&self) -> Option<&str> {
        self.data.container_number.as_deref()
    }

    /// Returns the trucking assignment.
    #[must_use]
    pub const fn driver(&self) -> &DriverAssignment {
        &self.data.driver
    }

    /// Returns the client receiving date, if recorded.
    #[must_use]
    pub const fn client_receiving_date(&self) -> Option<NaiveDateTime> {
        self.data.client_receiving_date
    }

    /// Returns the parent order when it was resolved.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderSummary> {
        self.order.as_ref()
    }
}
