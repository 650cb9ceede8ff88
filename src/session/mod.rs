//! Interactive play session.
//!
//! A [`Session`] sits between raw player input and the [`GameState`]:
//! it parses text into [`Command`]s, catches non-numeric guesses before
//! they reach the game, checks attempt budgets against the level, and
//! answers with [`Response`] records.

mod command;
mod error;
mod response;

pub use command::Command;
pub use error::SessionError;
pub use response::{Response, HELP};

use crate::config::{validate_setup, SessionConfig};
use crate::game::{GameState, RandomPicker, TargetPicker};
use crate::level::Level;

/// One player's session around a single game.
///
/// # Example
///
/// ```rust
/// use magic_number::game::{FixedPicker, GameState};
/// use magic_number::session::{Response, Session};
///
/// let mut session = Session::with_game(GameState::with_picker(FixedPicker::new(7)));
/// session.handle_line("level easy").unwrap();
/// session.handle_line("start 3").unwrap();
///
/// // Not a number: reported, no attempt used.
/// assert!(session.handle_line("seven").is_err());
/// assert_eq!(session.game().attempts_remaining(), 3);
///
/// let response = session.handle_line("7").unwrap();
/// assert!(response.ends_round());
/// ```
#[derive(Debug)]
pub struct Session<P = RandomPicker> {
    game: GameState<P>,
}

impl Session<RandomPicker> {
    pub fn new() -> Self {
        Self::with_game(GameState::new())
    }

    /// Session whose targets are reproducible, or random without a seed.
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_game(GameState::seeded(seed)),
            None => Self::new(),
        }
    }
}

impl Default for Session<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TargetPicker> Session<P> {
    pub fn with_game(game: GameState<P>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &GameState<P> {
        &self.game
    }

    /// Apply the startup part of a config: select the level and, when an
    /// attempt budget is given too, start the first round.
    ///
    /// Returns the responses produced, in order.
    pub fn apply_config(&mut self, config: &SessionConfig) -> Result<Vec<Response>, SessionError> {
        config.validate()?;

        let mut responses = Vec::new();
        if let Some(level) = config.level {
            responses.push(self.select_level(level));
            if let Some(attempts) = config.attempts {
                responses.push(self.start(attempts)?);
            }
        }
        Ok(responses)
    }

    /// Parse and execute one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<Response, SessionError> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(SessionError::UnknownCommand(text)) if self.game.phase().accepts_guesses() => {
                tracing::debug!(input = %text, "non-numeric guess ignored");
                Err(SessionError::InvalidGuess(text))
            }
            Err(err) => Err(err),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Response, SessionError> {
        match command {
            Command::Level(label) => Ok(self.select_level(Level::from_label(&label))),
            Command::Start(attempts) => self.start(attempts),
            Command::Guess(guess) => {
                let result = self.game.evaluate_guess(guess)?;
                Ok(Response::Guess(result))
            }
            Command::Restart => {
                self.game.reset();
                Ok(Response::Reset)
            }
            Command::Status => Ok(Response::Status {
                phase: self.game.phase(),
                level: self.game.level(),
                attempts_remaining: self.game.attempts_remaining(),
                attempts_total: self.game.attempts_total(),
            }),
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
        }
    }

    fn select_level(&mut self, level: Level) -> Response {
        let bounds = self.game.configure_level(level);
        Response::LevelSelected { level, bounds }
    }

    fn start(&mut self, attempts: u32) -> Result<Response, SessionError> {
        validate_setup(self.game.level(), Some(attempts))?;
        let info = self.game.start_round(attempts)?;
        Ok(Response::RoundStarted(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ConfigViolation};
    use crate::core::Phase;
    use crate::game::{FixedPicker, GameError, Hint};

    fn session(target: i64) -> Session<FixedPicker> {
        Session::with_game(GameState::with_picker(FixedPicker::new(target)))
    }

    #[test]
    fn full_round_through_text() {
        let mut session = session(7);

        let response = session.handle_line("level Fácil (1-10)").unwrap();
        assert!(matches!(
            response,
            Response::LevelSelected {
                level: Level::Easy,
                ..
            }
        ));

        let response = session.handle_line("start 3").unwrap();
        assert_eq!(response.counter().as_deref(), Some("Attempts: 3/3"));

        let hints: Vec<_> = ["3", "9"]
            .iter()
            .map(|line| match session.handle_line(line).unwrap() {
                Response::Guess(result) => result.hint,
                other => panic!("Expected guess result, got {other:?}"),
            })
            .collect();
        assert_eq!(hints, vec![Some(Hint::Higher), Some(Hint::Lower)]);

        let response = session.handle_line("7").unwrap();
        assert!(response.ends_round());
        assert_eq!(response.message(), "Got it in 3 attempt(s)!");
    }

    #[test]
    fn non_numeric_guess_does_not_consume_attempt() {
        let mut session = session(7);
        session.handle_line("level easy").unwrap();
        session.handle_line("start 2").unwrap();

        assert_eq!(
            session.handle_line("abc"),
            Err(SessionError::InvalidGuess("abc".to_string()))
        );
        assert_eq!(session.game().attempts_remaining(), 2);
    }

    #[test]
    fn unknown_word_outside_round_is_unknown_command() {
        let mut session = session(7);
        assert_eq!(
            session.handle_line("abc"),
            Err(SessionError::UnknownCommand("abc".to_string()))
        );
    }

    #[test]
    fn start_checks_level_bounds() {
        let mut session = session(7);
        session.handle_line("level easy").unwrap();

        let err = session.handle_line("start 9").unwrap_err();
        assert_eq!(
            err,
            SessionError::Setup(ConfigError {
                violations: vec![ConfigViolation::AttemptsOutOfBounds {
                    level: Level::Easy,
                    attempts: 9,
                    min: 1,
                    max: 4,
                }]
            })
        );
        assert_eq!(session.game().phase(), Phase::Configured);
    }

    #[test]
    fn start_without_level_is_rejected() {
        let mut session = session(7);
        let err = session.handle_line("start 3").unwrap_err();
        assert!(matches!(err, SessionError::Setup(_)));
    }

    #[test]
    fn guess_without_round_is_game_error() {
        let mut session = session(7);
        session.handle_line("level hard").unwrap();
        assert_eq!(
            session.handle_line("5"),
            Err(SessionError::Game(GameError::NoActiveRound {
                phase: Phase::Configured
            }))
        );
    }

    #[test]
    fn restart_goes_back_to_level_selection() {
        let mut session = session(7);
        session.handle_line("level easy").unwrap();
        session.handle_line("start 1").unwrap();
        session.handle_line("1").unwrap();

        let response = session.handle_line("restart").unwrap();
        assert_eq!(response, Response::Reset);
        assert_eq!(session.game().phase(), Phase::Unconfigured);
    }

    #[test]
    fn status_reports_counters() {
        let mut session = session(7);
        session.handle_line("level medium").unwrap();
        session.handle_line("start 5").unwrap();
        session.handle_line("2").unwrap();

        let response = session.handle_line("status").unwrap();
        assert_eq!(
            response,
            Response::Status {
                phase: Phase::InRound,
                level: Some(Level::Medium),
                attempts_remaining: 4,
                attempts_total: 5,
            }
        );
    }

    #[test]
    fn apply_config_starts_round() {
        let mut session = session(7);
        let config = SessionConfig {
            level: Some(Level::Hard),
            attempts: Some(8),
            ..SessionConfig::default()
        };

        let responses = session.apply_config(&config).unwrap();
        assert_eq!(responses.len(), 2);
        assert!(matches!(responses[1], Response::RoundStarted(_)));
        assert_eq!(session.game().phase(), Phase::InRound);
    }

    #[test]
    fn apply_config_rejects_invalid_setup() {
        let mut session = session(7);
        let config = SessionConfig {
            attempts: Some(0),
            ..SessionConfig::default()
        };

        let err = session.apply_config(&config).unwrap_err();
        match err {
            SessionError::Setup(err) => assert_eq!(err.violations.len(), 2),
            other => panic!("Expected setup error, got {other:?}"),
        }
        assert_eq!(session.game().phase(), Phase::Unconfigured);
    }
}
