//! Identifier types for shipment records.
//!
//! Identifiers mirror the integer primary keys of the shared database.

use std::fmt;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a stored primary key.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the stored primary key.
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Primary key of an order row.
    OrderId
);

integer_id!(
    /// Primary key of a container row.
    ContainerId
);

integer_id!(
    /// Primary key of an order task row.
    OrderTaskId
);
