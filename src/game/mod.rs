//! The guessing game itself.
//!
//! [`GameState`] owns a level, a hidden target and the attempt counters,
//! and exposes three operations:
//!
//! - **configure_level**: pick a preset, get the allowed attempt budgets
//! - **start_round**: draw a target and reset the counters
//! - **evaluate_guess**: compare a guess, get a [`GuessResult`]
//!
//! The random draw goes through [`TargetPicker`], so tests and replays
//! can fix the target.

mod error;
mod outcome;
mod state;
mod target;

pub use error::GameError;
pub use outcome::{GuessResult, Hint, RoundInfo, Tone};
pub use state::GameState;
pub use target::{FixedPicker, RandomPicker, TargetPicker};
