//! Domain model for the logistics query desk.
//!
//! Orders, containers and tasks are read-only snapshots of the shared
//! database. The lifecycle classifier in [`lifecycle`] is the only place
//! that knows the status vocabulary.

mod container;
mod error;
mod ids;
pub mod lifecycle;
mod order;
mod query;
mod task;

pub use container::{Container, DriverAssignment, OrderSummary, PersistedContainerData};
pub use error::{ParseLifecycleStatusError, ShipmentDomainError};
pub use ids::{ContainerId, OrderId, OrderTaskId};
pub use lifecycle::{GENERIC_GLYPH, Lane, LifecycleStatus, OrderStatus};
pub use order::{Order, OrderTimeline, PersistedOrderData};
pub use query::{ResultLimit, SearchTerm};
pub use task::OrderTask;
