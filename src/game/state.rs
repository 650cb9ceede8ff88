//! The game-state machine.

use crate::core::{guard, GuessRecord, LogEntry, Phase, PhaseTransition, RoundLog};
use crate::game::error::GameError;
use crate::game::outcome::{GuessResult, Hint, RoundInfo};
use crate::game::target::{RandomPicker, TargetPicker};
use crate::level::{AttemptBounds, Level};
use chrono::Utc;
use std::cmp::Ordering;
use uuid::Uuid;

/// State of one guessing game.
///
/// Holds the chosen level, the hidden target and the attempt counters.
/// Every operation checks its [`guard`] first; a rejected call leaves
/// the state untouched.
///
/// # Example
///
/// ```rust
/// use magic_number::game::{FixedPicker, GameState, Hint};
/// use magic_number::level::Level;
///
/// let mut game = GameState::with_picker(FixedPicker::new(7));
/// game.configure_level(Level::Easy);
/// game.start_round(3).unwrap();
///
/// let result = game.evaluate_guess(3).unwrap();
/// assert_eq!(result.hint, Some(Hint::Higher));
/// assert_eq!(result.attempts_remaining, 2);
///
/// let result = game.evaluate_guess(7).unwrap();
/// assert!(result.correct && result.game_over);
/// ```
#[derive(Debug)]
pub struct GameState<P = RandomPicker> {
    picker: P,
    phase: Phase,
    level: Option<Level>,
    target: Option<i64>,
    attempts_total: u32,
    attempts_remaining: u32,
    log: RoundLog,
}

impl GameState<RandomPicker> {
    /// Game whose targets come from operating system entropy.
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::from_entropy())
    }

    /// Game with reproducible targets.
    pub fn seeded(seed: u64) -> Self {
        Self::with_picker(RandomPicker::seeded(seed))
    }
}

impl Default for GameState<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TargetPicker> GameState<P> {
    pub fn with_picker(picker: P) -> Self {
        Self {
            picker,
            phase: Phase::Unconfigured,
            level: None,
            target: None,
            attempts_total: 0,
            attempts_remaining: 0,
            log: RoundLog::new(),
        }
    }

    /// Choose a level, returning the attempt budgets it allows.
    ///
    /// Clears any target and counters; a running round is abandoned.
    pub fn configure_level(&mut self, level: Level) -> AttemptBounds {
        debug_assert!(guard::CONFIGURE_LEVEL.check(self.phase));

        self.level = Some(level);
        self.target = None;
        self.attempts_total = 0;
        self.attempts_remaining = 0;
        self.log = RoundLog::new();
        self.transition(Phase::Configured);

        tracing::debug!(level = level.name(), "level configured");
        level.attempt_bounds()
    }

    /// Choose a level by label. Unrecognized labels select very-hard.
    pub fn configure_label(&mut self, label: &str) -> AttemptBounds {
        self.configure_level(Level::from_label(label))
    }

    /// Draw a new target and reset the counters to `attempts`.
    ///
    /// The level's attempt bounds are not enforced here.
    pub fn start_round(&mut self, attempts: u32) -> Result<RoundInfo, GameError> {
        if !guard::START_ROUND.check(self.phase) {
            return Err(GameError::LevelNotConfigured);
        }
        let level = self.level.ok_or(GameError::LevelNotConfigured)?;
        if attempts == 0 {
            return Err(GameError::ZeroAttempts);
        }

        let (range_min, range_max) = level.range();
        let target = self.picker.pick(range_min, range_max);
        let round_id = Uuid::new_v4();

        self.target = Some(target);
        self.attempts_total = attempts;
        self.attempts_remaining = attempts;
        self.log = RoundLog::for_round(round_id);
        self.transition(Phase::InRound);

        tracing::debug!(%round_id, level = level.name(), attempts, "round started");
        tracing::trace!(%round_id, target, "target drawn");

        Ok(RoundInfo {
            round_id,
            level,
            range_min,
            range_max,
            attempts_total: attempts,
        })
    }

    /// Evaluate a guess against the hidden number.
    ///
    /// Guesses outside the level's range are reported but do not consume
    /// an attempt.
    pub fn evaluate_guess(&mut self, guess: i64) -> Result<GuessResult, GameError> {
        if !guard::EVALUATE_GUESS.check(self.phase) {
            return Err(GameError::NoActiveRound { phase: self.phase });
        }
        let (Some(level), Some(target)) = (self.level, self.target) else {
            return Err(GameError::NoActiveRound { phase: self.phase });
        };

        let (range_min, range_max) = level.range();
        if guess < range_min || guess > range_max {
            self.record_guess(guess, false);
            tracing::debug!(guess, range_min, range_max, "guess out of range, not counted");
            return Ok(GuessResult::out_of_range(
                range_min,
                range_max,
                self.attempts_remaining,
                self.attempts_total,
            ));
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.record_guess(guess, true);

        let result = match guess.cmp(&target) {
            Ordering::Equal => {
                GuessResult::won(target, self.attempts_remaining, self.attempts_total)
            }
            Ordering::Less => GuessResult::missed(
                Hint::Higher,
                target,
                self.attempts_remaining,
                self.attempts_total,
            ),
            Ordering::Greater => GuessResult::missed(
                Hint::Lower,
                target,
                self.attempts_remaining,
                self.attempts_total,
            ),
        };

        if result.game_over {
            self.transition(Phase::Finished);
            tracing::info!(
                won = result.correct,
                attempts_used = result.attempts_used(),
                attempts_total = self.attempts_total,
                "round finished"
            );
        }

        Ok(result)
    }

    /// Go back to level selection, forgetting the level and any round.
    pub fn reset(&mut self) {
        debug_assert!(guard::RESET.check(self.phase));

        self.level = None;
        self.target = None;
        self.attempts_total = 0;
        self.attempts_remaining = 0;
        self.log = RoundLog::new();
        self.transition(Phase::Unconfigured);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    /// Inclusive guessable interval, once a level is chosen.
    pub fn range(&self) -> Option<(i64, i64)> {
        self.level.map(Level::range)
    }

    pub fn attempts_total(&self) -> u32 {
        self.attempts_total
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// The hidden number, but only once the round is over.
    pub fn revealed_target(&self) -> Option<i64> {
        if self.phase.is_final() {
            self.target
        } else {
            None
        }
    }

    pub fn log(&self) -> &RoundLog {
        &self.log
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        self.log = self.log.record(LogEntry::Transition(PhaseTransition {
            from,
            to,
            timestamp: Utc::now(),
        }));
        self.phase = to;
    }

    fn record_guess(&mut self, guess: i64, counted: bool) {
        self.log = self.log.record(LogEntry::Guess(GuessRecord {
            guess,
            counted,
            attempts_remaining: self.attempts_remaining,
            timestamp: Utc::now(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::Tone;
    use crate::game::target::FixedPicker;

    fn easy_round(target: i64, attempts: u32) -> GameState<FixedPicker> {
        let mut game = GameState::with_picker(FixedPicker::new(target));
        game.configure_label("Fácil (1-10)");
        game.start_round(attempts).unwrap();
        game
    }

    #[test]
    fn new_game_is_unconfigured() {
        let game = GameState::seeded(1);
        assert_eq!(game.phase(), Phase::Unconfigured);
        assert_eq!(game.level(), None);
        assert_eq!(game.range(), None);
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn configure_level_returns_bounds() {
        let mut game = GameState::seeded(1);
        let bounds = game.configure_level(Level::Hard);
        assert_eq!(
            bounds,
            AttemptBounds {
                min: 1,
                max: 8,
                divisions: 7
            }
        );
        assert_eq!(game.phase(), Phase::Configured);
        assert_eq!(game.range(), Some((1, 50)));
    }

    #[test]
    fn unknown_label_configures_very_hard() {
        let mut game = GameState::seeded(1);
        let bounds = game.configure_label("Lendário");
        assert_eq!(game.level(), Some(Level::VeryHard));
        assert_eq!(bounds.max, 10);
    }

    #[test]
    fn start_round_requires_level() {
        let mut game = GameState::seeded(1);
        assert_eq!(game.start_round(3), Err(GameError::LevelNotConfigured));
        assert_eq!(game.phase(), Phase::Unconfigured);
    }

    #[test]
    fn start_round_rejects_zero_attempts() {
        let mut game = GameState::seeded(1);
        game.configure_level(Level::Easy);
        assert_eq!(game.start_round(0), Err(GameError::ZeroAttempts));
        assert_eq!(game.phase(), Phase::Configured);
    }

    #[test]
    fn start_round_does_not_enforce_level_bounds() {
        let mut game = GameState::seeded(1);
        game.configure_level(Level::Easy);
        let info = game.start_round(20).unwrap();
        assert_eq!(info.attempts_total, 20);
        assert_eq!(game.attempts_remaining(), 20);
    }

    #[test]
    fn round_info_describes_round() {
        let mut game = GameState::seeded(3);
        game.configure_level(Level::Medium);
        let info = game.start_round(5).unwrap();

        assert_eq!(info.level, Level::Medium);
        assert_eq!((info.range_min, info.range_max), (1, 30));
        assert_eq!(info.attempts_total, 5);
        assert_eq!(game.log().round_id(), Some(info.round_id));
        assert_eq!(game.phase(), Phase::InRound);
    }

    #[test]
    fn guess_before_round_is_rejected() {
        let mut game = GameState::seeded(1);
        assert_eq!(
            game.evaluate_guess(5),
            Err(GameError::NoActiveRound {
                phase: Phase::Unconfigured
            })
        );

        game.configure_level(Level::Easy);
        assert_eq!(
            game.evaluate_guess(5),
            Err(GameError::NoActiveRound {
                phase: Phase::Configured
            })
        );
    }

    #[test]
    fn out_of_range_guess_keeps_attempts() {
        let mut game = easy_round(7, 3);

        for guess in [0, 11, -5, 1_000] {
            let result = game.evaluate_guess(guess).unwrap();
            assert!(!result.counted);
            assert_eq!(result.tone, Tone::Warning);
            assert_eq!(result.attempts_remaining, 3);
        }
        assert_eq!(game.attempts_remaining(), 3);
        assert_eq!(game.phase(), Phase::InRound);
    }

    #[test]
    fn range_endpoints_are_counted() {
        let mut game = easy_round(5, 3);
        assert!(game.evaluate_guess(1).unwrap().counted);
        assert!(game.evaluate_guess(10).unwrap().counted);
        assert_eq!(game.attempts_remaining(), 1);
    }

    #[test]
    fn winning_sequence() {
        let mut game = easy_round(7, 3);

        let first = game.evaluate_guess(3).unwrap();
        assert_eq!(first.hint, Some(Hint::Higher));
        assert_eq!(first.attempts_remaining, 2);
        assert!(!first.game_over);

        let second = game.evaluate_guess(9).unwrap();
        assert_eq!(second.hint, Some(Hint::Lower));
        assert_eq!(second.attempts_remaining, 1);

        let third = game.evaluate_guess(7).unwrap();
        assert!(third.correct);
        assert!(third.game_over);
        assert_eq!(third.attempts_remaining, 0);
        assert_eq!(third.message, "Got it in 3 attempt(s)!");
        assert_eq!(game.phase(), Phase::Finished);
    }

    #[test]
    fn losing_sequence_reveals_target() {
        let mut game = easy_round(7, 3);

        game.evaluate_guess(1).unwrap();
        game.evaluate_guess(2).unwrap();
        assert_eq!(game.revealed_target(), None);

        let last = game.evaluate_guess(3).unwrap();
        assert!(!last.correct);
        assert!(last.game_over);
        assert_eq!(last.revealed_target, Some(7));
        assert_eq!(last.message, "Game over! The number was 7.");
        assert_eq!(game.revealed_target(), Some(7));
    }

    #[test]
    fn first_attempt_win() {
        let mut game = easy_round(4, 4);
        let result = game.evaluate_guess(4).unwrap();
        assert!(result.correct);
        assert_eq!(result.attempts_used(), 1);
        assert_eq!(result.message, "Got it in 1 attempt(s)!");
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut game = easy_round(2, 1);
        let result = game.evaluate_guess(2).unwrap();
        assert!(result.correct);
        assert_eq!(result.revealed_target, Some(2));
    }

    #[test]
    fn finished_round_rejects_guesses() {
        let mut game = easy_round(7, 1);
        game.evaluate_guess(7).unwrap();
        assert_eq!(
            game.evaluate_guess(7),
            Err(GameError::NoActiveRound {
                phase: Phase::Finished
            })
        );
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn restart_resets_counters() {
        let mut game = easy_round(7, 2);
        game.evaluate_guess(1).unwrap();
        game.evaluate_guess(2).unwrap();
        assert_eq!(game.phase(), Phase::Finished);

        game.start_round(4).unwrap();
        assert_eq!(game.phase(), Phase::InRound);
        assert_eq!(game.attempts_remaining(), 4);
        assert_eq!(game.attempts_total(), 4);
        assert!(game.log().guesses().next().is_none());
    }

    #[test]
    fn configure_level_invalidates_round() {
        let mut game = easy_round(7, 3);
        game.configure_level(Level::Medium);

        assert_eq!(game.phase(), Phase::Configured);
        assert_eq!(game.attempts_remaining(), 0);
        assert!(game.evaluate_guess(7).is_err());
    }

    #[test]
    fn reset_returns_to_unconfigured() {
        let mut game = easy_round(7, 3);
        game.reset();
        assert_eq!(game.phase(), Phase::Unconfigured);
        assert_eq!(game.level(), None);
        assert_eq!(game.start_round(3), Err(GameError::LevelNotConfigured));
    }

    #[test]
    fn log_tracks_round() {
        let mut game = easy_round(7, 3);
        game.evaluate_guess(50).unwrap();
        game.evaluate_guess(3).unwrap();
        game.evaluate_guess(7).unwrap();

        let log = game.log();
        assert_eq!(log.get_path(), vec![Phase::Configured, Phase::InRound, Phase::Finished]);
        assert_eq!(log.guesses().count(), 3);
        assert_eq!(log.counted_guesses(), vec![3, 7]);
    }
}
