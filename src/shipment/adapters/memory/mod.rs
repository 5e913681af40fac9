//! In-memory adapters for the logistics query desk.

mod shipment;

pub use shipment::{FailureMode, InMemoryShipmentRepository, InMemoryShipmentSession};
