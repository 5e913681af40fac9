//! Margiana: read-only logistics query desk.
//!
//! Operators send slash commands and get back one text block per command,
//! built from the shared logistics database that the office application
//! writes to. Nothing here ever writes.
//!
//! # Architecture
//!
//! The [`shipment`] module follows hexagonal architecture principles:
//!
//! - **Domain**: orders, containers and the lifecycle classifier
//! - **Ports**: the read-only repository contract
//! - **Adapters**: in-memory and `PostgreSQL` repositories
//! - **Services**: the query projector producing view models
//!
//! # Modules
//!
//! - [`shipment`]: lifecycle classification, projection and rendering
//! - [`dispatch`]: command parsing and failure-to-reply mapping
//! - [`config`]: flags and environment variables
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod shipment;
