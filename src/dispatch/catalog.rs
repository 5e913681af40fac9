//! Built-in command catalogue.

use serde::Serialize;

/// Commands the desk answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Greeting with the command list.
    Start,
    /// Usage examples and status legend.
    Help,
    /// Summary report.
    Report,
    /// Active orders listing.
    Orders,
    /// Drivers on the road.
    Drivers,
    /// Counts by route lane.
    Status,
    /// Order lookup.
    Search,
}

impl Command {
    /// Every command in the order shown to operators.
    pub const ALL: [Self; 7] = [
        Self::Report,
        Self::Orders,
        Self::Drivers,
        Self::Status,
        Self::Search,
        Self::Help,
        Self::Start,
    ];

    /// Command name without the slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Report => "report",
            Self::Orders => "orders",
            Self::Drivers => "drivers",
            Self::Status => "status",
            Self::Search => "search",
        }
    }

    /// Looks a command up by its lowercased name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Describes the command for listings.
    #[must_use]
    pub const fn definition(self) -> CommandDefinition {
        let (usage, description) = match self {
            Self::Start => ("/start", "Welcome and command list"),
            Self::Help => ("/help", "Usage examples and status legend"),
            Self::Report => ("/report", "Summary report"),
            Self::Orders => ("/orders [limit]", "Active orders"),
            Self::Drivers => ("/drivers [limit]", "Drivers on the road"),
            Self::Status => ("/status", "Status by lane"),
            Self::Search => ("/search <term>", "Find an order by number or client"),
        };
        CommandDefinition {
            name: self.name(),
            usage,
            description,
        }
    }
}

/// Name, usage line and description of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    /// Command name without the slash.
    pub name: &'static str,
    /// Usage line including the slash and arguments.
    pub usage: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Commands offered on the greeting screen.
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    definitions: Vec<CommandDefinition>,
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandCatalog {
    /// Catalogue of every built-in command except `/start` itself.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            definitions: Command::ALL
                .into_iter()
                .filter(|command| *command != Command::Start)
                .map(Command::definition)
                .collect(),
        }
    }

    /// Returns the listed definitions.
    #[must_use]
    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }
}
