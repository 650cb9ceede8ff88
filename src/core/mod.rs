//! Core state machine types.
//!
//! This module contains the pure part of the game lifecycle:
//! - `Phase`, the explicit position of a game
//! - Guard predicates deciding which operations a phase accepts
//! - Immutable round history
//!
//! Nothing here draws random numbers or talks to the terminal.

pub mod guard;
mod history;
mod phase;

pub use guard::PhaseGuard;
pub use history::{GuessRecord, LogEntry, PhaseTransition, RoundLog};
pub use phase::Phase;
