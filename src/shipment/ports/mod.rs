//! Port contracts for the logistics query desk.
//!
//! Ports define infrastructure-agnostic interfaces used by the projector.

pub mod repository;

pub use repository::{
    ContainerFilter, OrderFilter, ShipmentRepository, ShipmentRepositoryError,
    ShipmentRepositoryResult, ShipmentSession,
};
