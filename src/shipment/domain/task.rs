//! Follow-up tasks recorded against orders.
//!
//! No view reads tasks today; the type keeps the `tasks` table mapped so the
//! data model stays complete.

use super::{OrderId, OrderTaskId};
use chrono::NaiveDateTime;

/// Office follow-up attached to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTask {
    /// Primary key.
    pub id: OrderTaskId,
    /// Parent order, if the row references one.
    pub order_id: Option<OrderId>,
    /// What needs doing.
    pub description: Option<String>,
    /// Person responsible.
    pub assigned_to: Option<String>,
    /// Free-text task status.
    pub status: Option<String>,
    /// Free-text priority.
    pub priority: Option<String>,
    /// Deadline.
    pub due_date: Option<NaiveDateTime>,
}
