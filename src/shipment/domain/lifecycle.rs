//! Lifecycle classification for orders.
//!
//! Every view that needs to know whether an order is still moving, which
//! lane it sits in, or which glyph to print asks this module. Status strings
//! are not repeated anywhere else in the crate.

use super::ParseLifecycleStatusError;
use serde::Serialize;
use std::fmt;

/// Glyph used for status values outside the known lifecycle.
pub const GENERIC_GLYPH: &str = "📋";

/// Fixed lifecycle stage of an order, in route order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LifecycleStatus {
    /// Order registered, nothing shipped yet.
    #[serde(rename = "New")]
    New,
    /// Goods are being prepared in China.
    #[serde(rename = "In Progress CHN")]
    InProgressChn,
    /// Containers are at sea between China and Iran.
    #[serde(rename = "In Transit CHN-IR")]
    InTransitChnIr,
    /// Containers are being handled in Iran.
    #[serde(rename = "In Progress IR")]
    InProgressIr,
    /// Containers are trucked from Iran to Turkmenistan.
    #[serde(rename = "In Transit IR-TKM")]
    InTransitIrTkm,
    /// Delivered to the client.
    #[serde(rename = "Completed")]
    Completed,
}

const ACTIVE: [LifecycleStatus; 5] = [
    LifecycleStatus::New,
    LifecycleStatus::InProgressChn,
    LifecycleStatus::InTransitChnIr,
    LifecycleStatus::InProgressIr,
    LifecycleStatus::InTransitIrTkm,
];

const ON_THE_ROAD: [LifecycleStatus; 3] = [
    LifecycleStatus::InTransitChnIr,
    LifecycleStatus::InTransitIrTkm,
    LifecycleStatus::InProgressIr,
];

impl LifecycleStatus {
    /// All states in lifecycle order, terminal state last.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::InProgressChn,
        Self::InTransitChnIr,
        Self::InProgressIr,
        Self::InTransitIrTkm,
        Self::Completed,
    ];

    /// Returns the text stored in the `orders.status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgressChn => "In Progress CHN",
            Self::InTransitChnIr => "In Transit CHN-IR",
            Self::InProgressIr => "In Progress IR",
            Self::InTransitIrTkm => "In Transit IR-TKM",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` for every state that still needs operator attention.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed)
    }

    /// Returns the short glyph shown next to the status.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::New => "🆕",
            Self::InProgressChn => "🇨🇳",
            Self::InTransitChnIr => "🚢",
            Self::InProgressIr => "🇮🇷",
            Self::InTransitIrTkm => "🚛",
            Self::Completed => "✅",
        }
    }

    /// Returns the operator-facing label for the state.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgressChn => "In China",
            Self::InTransitChnIr => "By sea",
            Self::InProgressIr => "In Iran",
            Self::InTransitIrTkm => "To Turkmenistan",
            Self::Completed => "Completed",
        }
    }

    /// Returns the route lane the state belongs to.
    ///
    /// The terminal state belongs to no lane.
    #[must_use]
    pub const fn lane(self) -> Option<Lane> {
        match self {
            Self::New | Self::InProgressChn => Some(Lane::Origin),
            Self::InTransitChnIr => Some(Lane::Sea),
            Self::InProgressIr | Self::InTransitIrTkm => Some(Lane::Destination),
            Self::Completed => None,
        }
    }

    /// States whose containers are on the road with an assigned driver.
    #[must_use]
    pub const fn in_transit_with_driver() -> &'static [Self] {
        &ON_THE_ROAD
    }
}

impl TryFrom<&str> for LifecycleStatus {
    type Error = ParseLifecycleStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseLifecycleStatusError(value.to_owned()))
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route section used to group the lane status view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Work still happening in the origin country.
    Origin,
    /// Sea leg between origin and destination ports.
    Sea,
    /// Handling and trucking on the destination side.
    Destination,
}

impl Lane {
    /// Lanes in route order.
    pub const ALL: [Self; 3] = [Self::Origin, Self::Sea, Self::Destination];

    /// Section title printed above the lane's counts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Origin => "China",
            Self::Sea => "In transit",
            Self::Destination => "Iran / Turkmenistan",
        }
    }

    /// Statuses counted in this lane, in lifecycle order.
    #[must_use]
    pub fn statuses(self) -> Vec<LifecycleStatus> {
        LifecycleStatus::ALL
            .into_iter()
            .filter(|status| status.lane() == Some(self))
            .collect()
    }
}

/// Status as read from storage.
///
/// Storage does not enforce the lifecycle enumeration, so anything that is
/// not an exact lifecycle value is kept verbatim and classified as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// One of the lifecycle states.
    Known(LifecycleStatus),
    /// Any other stored text, including an empty or missing value.
    Unrecognized(String),
}

impl OrderStatus {
    /// Classifies a stored status value. Never fails.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        LifecycleStatus::try_from(value)
            .map_or_else(|_| Self::Unrecognized(value.to_owned()), Self::Known)
    }

    /// Returns the lifecycle state when the value is recognised.
    #[must_use]
    pub const fn lifecycle(&self) -> Option<LifecycleStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the status text as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` when the order is in an active lifecycle state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        match self {
            Self::Known(status) => status.is_active(),
            Self::Unrecognized(_) => false,
        }
    }

    /// Returns the display glyph, falling back to [`GENERIC_GLYPH`].
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Known(status) => status.glyph(),
            Self::Unrecognized(_) => GENERIC_GLYPH,
        }
    }
}

impl From<LifecycleStatus> for OrderStatus {
    fn from(status: LifecycleStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` iff `status` is one of the five non-terminal states.
#[must_use]
pub const fn is_active(status: &OrderStatus) -> bool {
    status.is_active()
}

/// Active states in lifecycle order.
#[must_use]
pub const fn active_statuses() -> &'static [LifecycleStatus] {
    &ACTIVE
}

/// Glyph for any stored status value.
#[must_use]
pub const fn display_glyph(status: &OrderStatus) -> &'static str {
    status.glyph()
}
