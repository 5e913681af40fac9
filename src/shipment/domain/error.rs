//! Error types for shipment domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing shipment query values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShipmentDomainError {
    /// The search term is empty after trimming.
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// The requested result limit is outside the accepted range.
    #[error("invalid result limit {value}, expected 1..={max}")]
    InvalidLimit {
        /// Rejected value.
        value: u64,
        /// Largest accepted value.
        max: u32,
    },
}

/// Error returned when text is not an exact lifecycle status value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lifecycle status: {0}")]
pub struct ParseLifecycleStatusError(pub String);
