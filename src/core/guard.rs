//! Guard predicates for game operations.
//!
//! Each game operation is gated by a pure predicate over the current
//! phase. The game checks the guard before touching any state, so a
//! rejected call leaves the game exactly as it was.

use super::phase::Phase;

/// Pure predicate that decides whether an operation may run in a phase.
///
/// # Example
///
/// ```rust
/// use magic_number::core::{guard, Phase};
///
/// assert!(guard::START_ROUND.check(Phase::Configured));
/// assert!(!guard::START_ROUND.check(Phase::Unconfigured));
/// assert!(!guard::EVALUATE_GUESS.check(Phase::Finished));
/// ```
#[derive(Clone, Copy)]
pub struct PhaseGuard {
    operation: &'static str,
    predicate: fn(Phase) -> bool,
}

impl PhaseGuard {
    /// Create a guard for a named operation.
    pub const fn new(operation: &'static str, predicate: fn(Phase) -> bool) -> Self {
        Self {
            operation,
            predicate,
        }
    }

    /// Check if the guard allows the operation from this phase.
    pub fn check(&self, phase: Phase) -> bool {
        (self.predicate)(phase)
    }

    /// Name of the guarded operation.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl std::fmt::Debug for PhaseGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseGuard")
            .field("operation", &self.operation)
            .finish()
    }
}

fn always(_: Phase) -> bool {
    true
}

fn level_chosen(phase: Phase) -> bool {
    phase.has_level()
}

fn round_active(phase: Phase) -> bool {
    phase.accepts_guesses()
}

/// Choosing a level is allowed at any time; it abandons a running round.
pub const CONFIGURE_LEVEL: PhaseGuard = PhaseGuard::new("configure_level", always);

/// Starting (or restarting) a round needs a level.
pub const START_ROUND: PhaseGuard = PhaseGuard::new("start_round", level_chosen);

/// Guesses are only evaluated while a round is running.
pub const EVALUATE_GUESS: PhaseGuard = PhaseGuard::new("evaluate_guess", round_active);

/// Going back to level selection is always allowed.
pub const RESET: PhaseGuard = PhaseGuard::new("reset", always);
