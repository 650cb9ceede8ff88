//! Responses rendered by the presentation layer.

use crate::core::Phase;
use crate::game::{GuessResult, RoundInfo, Tone};
use crate::level::{AttemptBounds, Level};
use serde::Serialize;

pub const HELP: &str = "\
Commands:
  level <name>   choose a level: easy, medium, hard, very-hard
  start <n>      start a round with n attempts
  <number>       submit a guess
  status         show the current round
  restart        back to level selection
  quit           leave the game";

/// What a session did in reply to one command.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    LevelSelected {
        level: Level,
        bounds: AttemptBounds,
    },
    RoundStarted(RoundInfo),
    Guess(GuessResult),
    Reset,
    Status {
        phase: Phase,
        level: Option<Level>,
        attempts_remaining: u32,
        attempts_total: u32,
    },
    Help,
    Quit,
}

impl Response {
    /// Main line to show the player.
    pub fn message(&self) -> String {
        match self {
            Self::LevelSelected { level, bounds } => format!(
                "{level} selected. Choose between {} and {} attempts.",
                bounds.min, bounds.max
            ),
            Self::RoundStarted(info) => info.prompt(),
            Self::Guess(result) => result.message.clone(),
            Self::Reset => "Configure the game to begin!".to_string(),
            Self::Status {
                phase,
                level,
                attempts_remaining,
                attempts_total,
            } => match level {
                Some(level) => format!(
                    "{phase} on {level}. Attempts: {attempts_remaining}/{attempts_total}"
                ),
                None => format!("{phase}. Choose a level to begin."),
            },
            Self::Help => HELP.to_string(),
            Self::Quit => "Bye!".to_string(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Guess(result) => result.tone,
            _ => Tone::Warning,
        }
    }

    /// Attempt counter line, for responses that change it.
    pub fn counter(&self) -> Option<String> {
        match self {
            Self::RoundStarted(info) => Some(format!(
                "Attempts: {0}/{0}",
                info.attempts_total
            )),
            Self::Guess(result) if result.counted => Some(format!(
                "Attempts: {}/{}",
                result.attempts_remaining, result.attempts_total
            )),
            Self::Reset => Some("Attempts: 0/0".to_string()),
            _ => None,
        }
    }

    /// True when the round just ended and the player may play again.
    pub fn ends_round(&self) -> bool {
        matches!(self, Self::Guess(result) if result.game_over)
    }
}
