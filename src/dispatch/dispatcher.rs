//! Maps command events to projector views and failures to replies.

use super::{Command, CommandCatalog, CommandEvent};
use crate::shipment::{
    domain::{ResultLimit, ShipmentDomainError},
    ports::ShipmentRepository,
    render::{RenderError, ViewRenderer},
    services::{ProjectionError, QueryProjector, View},
};
use mockable::Clock;
use tracing::{debug, error, warn};

/// Reply sent whenever no repository session can be opened.
pub const DATABASE_UNAVAILABLE: &str = "❌ Database unavailable";

const RENDER_FAILED: &str = "❌ Could not format the reply";
const SEARCH_USAGE: &str = "🔍 Enter an order number or client name:\n/search ORD-001";

/// Why a command produced no view.
enum Failure {
    Projection(View, ProjectionError),
    Usage(String),
    Render(RenderError),
}

impl From<RenderError> for Failure {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// Sequential command handler producing one text reply per event.
pub struct CommandDispatcher<R, C>
where
    R: ShipmentRepository,
    C: Clock + Send + Sync,
{
    projector: QueryProjector<R, C>,
    renderer: ViewRenderer,
    catalog: CommandCatalog,
}

impl<R, C> CommandDispatcher<R, C>
where
    R: ShipmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher over the built-in command catalogue.
    #[must_use]
    pub fn new(projector: QueryProjector<R, C>, renderer: ViewRenderer) -> Self {
        Self {
            projector,
            renderer,
            catalog: CommandCatalog::builtin(),
        }
    }

    /// Parses a raw command line and answers it.
    pub async fn handle_line(&self, line: &str) -> String {
        match CommandEvent::parse(line) {
            Ok(event) => self.handle(&event).await,
            Err(err) => {
                debug!(error = %err, "unparseable command line");
                format!("❓ {err}. Send /help for the list of commands.")
            }
        }
    }

    /// Answers events strictly one after another, in order.
    pub async fn handle_all<I>(&self, events: I) -> Vec<String>
    where
        I: IntoIterator<Item = CommandEvent>,
    {
        let mut replies = Vec::new();
        for event in events {
            replies.push(self.handle(&event).await);
        }
        replies
    }

    /// Answers one event. Never fails: every error becomes a reply.
    pub async fn handle(&self, event: &CommandEvent) -> String {
        let Some(command) = Command::from_name(event.command()) else {
            debug!(command = event.command(), "unknown command");
            return format!(
                "❓ Unknown command /{}. Send /help for the list of commands.",
                event.command()
            );
        };

        debug!(
            command = command.name(),
            arguments = event.arguments().len(),
            "handling command"
        );
        match self.respond(command, event).await {
            Ok(reply) => reply,
            Err(failure) => failure_reply(command, failure),
        }
    }

    async fn respond(&self, command: Command, event: &CommandEvent) -> Result<String, Failure> {
        let reply = match command {
            Command::Start => self.renderer.start(self.catalog.definitions())?,
            Command::Help => self.renderer.help()?,
            Command::Report => {
                let report = self
                    .projector
                    .summary_report()
                    .await
                    .map_err(|err| Failure::Projection(View::SummaryReport, err))?;
                self.renderer.summary_report(&report)?
            }
            Command::Orders => {
                let limit = limit_argument(command, event, ResultLimit::ACTIVE_ORDERS)?;
                let orders = self
                    .projector
                    .active_orders(limit)
                    .await
                    .map_err(|err| Failure::Projection(View::ActiveOrders, err))?;
                self.renderer.active_orders(&orders)?
            }
            Command::Drivers => {
                let limit = limit_argument(command, event, ResultLimit::DRIVERS_IN_TRANSIT)?;
                let drivers = self
                    .projector
                    .drivers_in_transit(limit)
                    .await
                    .map_err(|err| Failure::Projection(View::DriversInTransit, err))?;
                self.renderer.drivers_in_transit(&drivers)?
            }
            Command::Status => {
                let lanes = self
                    .projector
                    .lane_status()
                    .await
                    .map_err(|err| Failure::Projection(View::LaneStatus, err))?;
                self.renderer.lane_status(&lanes)?
            }
            Command::Search => {
                let term = event.joined_arguments();
                let hits = self
                    .projector
                    .search(&term, ResultLimit::SEARCH)
                    .await
                    .map_err(|err| Failure::Projection(View::Search, err))?;
                self.renderer.search(&term, &hits)?
            }
        };
        Ok(reply)
    }
}

/// Reads the optional `[limit]` argument.
fn limit_argument(
    command: Command,
    event: &CommandEvent,
    default: ResultLimit,
) -> Result<ResultLimit, Failure> {
    let usage = || {
        Failure::Usage(format!(
            "⚠️ Limit must be a whole number from 1 to {}\nUsage: {}",
            ResultLimit::MAX,
            command.definition().usage
        ))
    };
    match event.arguments() {
        [] => Ok(default),
        [raw] => {
            let value = raw.parse::<u64>().map_err(|_| usage())?;
            ResultLimit::new(value).map_err(|_| usage())
        }
        _ => Err(usage()),
    }
}

fn failure_reply(command: Command, failure: Failure) -> String {
    match failure {
        Failure::Projection(view, ProjectionError::RepositoryUnavailable(source)) => {
            warn!(view = %view, error = %source, "shipment store unavailable");
            DATABASE_UNAVAILABLE.to_owned()
        }
        Failure::Projection(view, ProjectionError::QueryFailed(source)) => {
            error!(view = %view, error = %source, "view query failed");
            query_failed_reply(view).to_owned()
        }
        Failure::Projection(view, ProjectionError::InvalidArgument(reason)) => {
            debug!(view = %view, error = %reason, "rejected view argument");
            invalid_argument_reply(command, &reason)
        }
        Failure::Usage(hint) => {
            debug!(command = command.name(), "rejected command arguments");
            hint
        }
        Failure::Render(err) => {
            error!(command = command.name(), error = %err, "reply rendering failed");
            RENDER_FAILED.to_owned()
        }
    }
}

const fn query_failed_reply(view: View) -> &'static str {
    match view {
        View::SummaryReport => "❌ Report generation failed",
        View::ActiveOrders => "❌ Active orders query failed",
        View::DriversInTransit => "❌ Drivers query failed",
        View::LaneStatus => "❌ Status query failed",
        View::Search => "❌ Search failed",
    }
}

fn invalid_argument_reply(command: Command, reason: &ShipmentDomainError) -> String {
    match reason {
        ShipmentDomainError::EmptySearchTerm => SEARCH_USAGE.to_owned(),
        ShipmentDomainError::InvalidLimit { .. } => {
            format!("⚠️ {reason}\nUsage: {}", command.definition().usage)
        }
    }
}
