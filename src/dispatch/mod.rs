//! Command dispatch for the logistics query desk.
//!
//! Turns operator command events into projector calls and renders every
//! outcome, failures included, as a single text response.

mod catalog;
mod dispatcher;
mod error;
mod event;

pub use catalog::{Command, CommandCatalog, CommandDefinition};
pub use dispatcher::{CommandDispatcher, DATABASE_UNAVAILABLE};
pub use error::CommandParseError;
pub use event::CommandEvent;
