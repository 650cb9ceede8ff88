//! Magic Number: a number-guessing game around a small, explicit state machine.
//!
//! The player picks a difficulty level, which fixes the range, chooses an
//! attempt budget, and guesses until they hit the hidden number or run
//! out of attempts. Each wrong guess gets a "higher" or "lower" hint.
//!
//! # Layout
//!
//! - [`core`]: game phases, the guards that gate each operation, round history
//! - [`level`]: the four difficulty presets
//! - [`game`]: [`GameState`] and the records its operations return
//! - [`config`]: session settings and accumulated setup validation
//! - [`session`]: text commands and responses for a terminal front-end
//!
//! # Example
//!
//! ```rust
//! use magic_number::game::{FixedPicker, GameState, Hint};
//! use magic_number::level::Level;
//!
//! let mut game = GameState::with_picker(FixedPicker::new(7));
//! let bounds = game.configure_level(Level::Easy);
//! assert_eq!((bounds.min, bounds.max), (1, 4));
//!
//! let round = game.start_round(3).unwrap();
//! assert_eq!((round.range_min, round.range_max), (1, 10));
//!
//! // Out of range: reported, not counted.
//! let result = game.evaluate_guess(42).unwrap();
//! assert!(!result.counted);
//! assert_eq!(result.attempts_remaining, 3);
//!
//! let result = game.evaluate_guess(3).unwrap();
//! assert_eq!(result.hint, Some(Hint::Higher));
//!
//! let result = game.evaluate_guess(7).unwrap();
//! assert!(result.correct);
//! assert_eq!(result.message, "Got it in 2 attempt(s)!");
//! ```

pub mod config;
pub mod core;
pub mod game;
pub mod level;
pub mod session;

// Re-export commonly used types
pub use crate::config::SessionConfig;
pub use crate::core::Phase;
pub use crate::game::{GameError, GameState, GuessResult, Hint, RoundInfo, Tone};
pub use crate::level::{AttemptBounds, Level};
pub use crate::session::{Response, Session, SessionError};
