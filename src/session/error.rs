//! Session errors.

use crate::config::ConfigError;
use crate::game::GameError;
use thiserror::Error;

/// Errors surfaced to the player by a session.
///
/// None of these end the session; the player is shown the message and
/// may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Enter a valid number!")]
    InvalidGuess(String),

    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },

    #[error("'{0}' is not a valid attempt count")]
    InvalidAttempts(String),

    #[error("Nothing to do. Type 'help' for the list of commands")]
    EmptyInput,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Setup(#[from] ConfigError),
}
