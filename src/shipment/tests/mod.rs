//! Unit tests for the shipment module.
