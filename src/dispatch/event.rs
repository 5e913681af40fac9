//! Command events as delivered by a chat transport.

use super::CommandParseError;

/// A command name with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    command: String,
    arguments: Vec<String>,
}

impl CommandEvent {
    /// Creates an event from parts a transport has already split.
    ///
    /// The command name is lowercased and a leading `/` is dropped.
    #[must_use]
    pub fn new(command: impl Into<String>, arguments: impl IntoIterator<Item = String>) -> Self {
        let raw: String = command.into();
        Self {
            command: raw.trim_start_matches('/').to_ascii_lowercase(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Parses `/<command>[@bot] word word ...` input.
    ///
    /// Arguments are the whitespace-separated words after the command,
    /// kept verbatim: quotes, apostrophes and backslashes are ordinary
    /// characters, so `/search 40" HC` searches for `40" HC`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] when the input is empty or the
    /// command token is malformed.
    pub fn parse(raw_input: &str) -> Result<Self, CommandParseError> {
        let mut words = raw_input.split_whitespace();
        let command_token = words.next().ok_or(CommandParseError::EmptyInput)?;
        let command = parse_command_token(command_token)?;
        Ok(Self {
            command,
            arguments: words.map(str::to_owned).collect(),
        })
    }

    /// Returns the lowercased command name without the slash.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the arguments joined by single spaces.
    #[must_use]
    pub fn joined_arguments(&self) -> String {
        self.arguments.join(" ")
    }
}

fn parse_command_token(token: &str) -> Result<String, CommandParseError> {
    let addressed = token
        .strip_prefix('/')
        .ok_or(CommandParseError::MissingLeadingSlash)?;
    // Group chats address commands as `/report@some_bot`.
    let command = addressed
        .split_once('@')
        .map_or(addressed, |(name, _bot)| name);
    if command.is_empty() || !is_valid_identifier(command) {
        return Err(CommandParseError::InvalidCommandName(command.to_owned()));
    }
    Ok(command.to_ascii_lowercase())
}

fn is_valid_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
