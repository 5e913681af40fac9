//! Shipment reporting for the logistics query desk.
//!
//! Classifies orders into lifecycle states and projects counts and listings
//! over the shared logistics database. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the lifecycle classifier in [`domain`]
//! - The read-only repository port in [`ports`]
//! - In-memory and `PostgreSQL` repositories in [`adapters`]
//! - The query projector in [`services`]
//! - Text rendering of projected views in [`render`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod tests;
