//! Errors raised while parsing command lines.

use thiserror::Error;

/// Errors for command-line parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// Input was empty.
    #[error("command input cannot be empty")]
    EmptyInput,

    /// Input does not start with `/`.
    #[error("commands must start with '/'")]
    MissingLeadingSlash,

    /// Command name contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),
}
