//! Game phases.
//!
//! A game is always in exactly one phase. The phase decides which
//! operations the game accepts, replacing per-widget visibility flags
//! with a single explicit value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a game in its lifecycle.
///
/// ```text
/// Unconfigured --configure_level--> Configured --start_round--> InRound
///      ^                                ^                          |
///      |                                |                    win / exhausted
///    reset                       configure_level                   v
///      +-------------------------------+------------------------ Finished
/// ```
///
/// # Example
///
/// ```rust
/// use magic_number::core::Phase;
///
/// assert!(Phase::InRound.accepts_guesses());
/// assert!(Phase::Finished.is_final());
/// assert_eq!(Phase::Configured.name(), "Configured");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No level chosen yet.
    #[default]
    Unconfigured,
    /// Level chosen, no target drawn.
    Configured,
    /// Target drawn, attempts counting down.
    InRound,
    /// Round won or attempts exhausted.
    Finished,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unconfigured => "Unconfigured",
            Self::Configured => "Configured",
            Self::InRound => "InRound",
            Self::Finished => "Finished",
        }
    }

    /// Check if the round has ended.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Check if a level has been chosen.
    pub fn has_level(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }

    /// Check if guesses are evaluated in this phase.
    pub fn accepts_guesses(&self) -> bool {
        matches!(self, Self::InRound)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
