//! Records returned by game operations.
//!
//! These are plain data for the presentation layer: it decides how to
//! render a message and which color a [`Tone`] maps to.

use crate::level::Level;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction hint after a wrong guess.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// The hidden number is greater than the guess.
    Higher,
    /// The hidden number is smaller than the guess.
    Lower,
}

impl Hint {
    pub fn message(self) -> &'static str {
        match self {
            Self::Higher => "Higher!",
            Self::Lower => "Lower!",
        }
    }
}

/// Semantic severity of a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Neutral information or a recoverable mistake.
    Warning,
    Success,
    Failure,
}

/// Summary of a freshly started round. The target is not part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub round_id: Uuid,
    pub level: Level,
    pub range_min: i64,
    pub range_max: i64,
    pub attempts_total: u32,
}

impl RoundInfo {
    pub fn prompt(&self) -> String {
        format!("Guess between {} and {}", self.range_min, self.range_max)
    }
}

/// Result of evaluating one guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    /// Whether the guess was in range and consumed an attempt.
    pub counted: bool,
    pub correct: bool,
    pub hint: Option<Hint>,
    pub message: String,
    pub tone: Tone,
    pub attempts_remaining: u32,
    pub attempts_total: u32,
    pub game_over: bool,
    /// Only set once the round is over.
    pub revealed_target: Option<i64>,
}

impl GuessResult {
    pub(crate) fn out_of_range(
        range_min: i64,
        range_max: i64,
        attempts_remaining: u32,
        attempts_total: u32,
    ) -> Self {
        Self {
            counted: false,
            correct: false,
            hint: None,
            message: format!(
                "Enter a number between {range_min} and {range_max}! This attempt was not counted."
            ),
            tone: Tone::Warning,
            attempts_remaining,
            attempts_total,
            game_over: false,
            revealed_target: None,
        }
    }

    pub(crate) fn won(target: i64, attempts_remaining: u32, attempts_total: u32) -> Self {
        let attempt = attempts_total - attempts_remaining;
        Self {
            counted: true,
            correct: true,
            hint: None,
            message: format!("Got it in {attempt} attempt(s)!"),
            tone: Tone::Success,
            attempts_remaining,
            attempts_total,
            game_over: true,
            revealed_target: Some(target),
        }
    }

    pub(crate) fn missed(
        hint: Hint,
        target: i64,
        attempts_remaining: u32,
        attempts_total: u32,
    ) -> Self {
        let game_over = attempts_remaining == 0;
        let message = if game_over {
            format!("Game over! The number was {target}.")
        } else {
            hint.message().to_string()
        };
        Self {
            counted: true,
            correct: false,
            hint: Some(hint),
            message,
            tone: Tone::Failure,
            attempts_remaining,
            attempts_total,
            game_over,
            revealed_target: game_over.then_some(target),
        }
    }

    /// Number of counted attempts used so far, including this one.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_total - self.attempts_remaining
    }
}
