//! Adapter implementations for the shipment repository port.

pub mod memory;
pub mod postgres;
