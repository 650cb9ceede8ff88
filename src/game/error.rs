//! Game operation errors.

use crate::core::Phase;
use thiserror::Error;

/// Errors returned when an operation is called out of order.
///
/// Out-of-range guesses are not errors; they come back as a normal
/// [`GuessResult`](super::GuessResult) with `counted == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No level selected. Choose a level before starting a round")]
    LevelNotConfigured,

    #[error("A round needs at least one attempt")]
    ZeroAttempts,

    #[error("No round in progress (phase: {phase})")]
    NoActiveRound { phase: Phase },
}
