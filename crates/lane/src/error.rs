//! Error types for lane.

use thiserror::Error;

/// Errors in user input to the CLI.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command: {0}. Type 'help' for the command list.")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a supported decade: {0}")]
    UnsupportedDecade(String),

    #[error("Memory not found: {0}")]
    MemoryNotFound(String),
}

impl InputError {
    pub fn missing(command: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument { command, argument }
    }
}
