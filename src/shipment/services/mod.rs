//! Application services projecting shipment data into operator views.

mod projector;
mod views;

pub use projector::{ProjectionError, ProjectionResult, QueryProjector, View};
pub use views::{
    ActiveOrderRecord, DriverRecord, LaneSection, LaneStatus, MISSING, NOTES_PREVIEW_CHARS,
    SearchHit, StatusCount, SummaryReport,
};
