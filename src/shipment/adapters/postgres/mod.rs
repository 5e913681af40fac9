//! `PostgreSQL` adapters for the shared logistics tables.

mod models;
mod repository;
mod schema;

pub use repository::{
    PostgresShipmentRepository, PostgresShipmentSession, ShipmentPgPool, lazy_pool,
};
