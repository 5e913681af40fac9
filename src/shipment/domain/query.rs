//! Validated query inputs shared by the projector and repository adapters.

use super::ShipmentDomainError;
use std::fmt;

/// Positive cap on the number of rows a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultLimit(u32);

impl ResultLimit {
    /// Largest limit an operator may request.
    pub const MAX: u32 = 50;

    /// Default cap for the active orders listing.
    pub const ACTIVE_ORDERS: Self = Self(10);

    /// Default cap for the drivers-in-transit listing.
    pub const DRIVERS_IN_TRANSIT: Self = Self(20);

    /// Default cap for search results.
    pub const SEARCH: Self = Self(5);

    /// Creates a validated limit.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentDomainError::InvalidLimit`] when the value is zero
    /// or larger than [`ResultLimit::MAX`].
    pub fn new(value: u64) -> Result<Self, ShipmentDomainError> {
        u32::try_from(value)
            .ok()
            .filter(|candidate| (1..=Self::MAX).contains(candidate))
            .map(Self)
            .ok_or(ShipmentDomainError::InvalidLimit {
                value,
                max: Self::MAX,
            })
    }

    /// Returns the limit as `usize` for in-memory slicing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the limit as `i64` for SQL `LIMIT` clauses.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty free-text search term, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Creates a validated search term.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentDomainError::EmptySearchTerm`] when the input is
    /// empty or whitespace only.
    pub fn new(raw: &str) -> Result<Self, ShipmentDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShipmentDomainError::EmptySearchTerm);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the term text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test used by adapters without SQL.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
