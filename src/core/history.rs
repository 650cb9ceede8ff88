//! Round history tracking.
//!
//! Every phase change and every evaluated guess is appended to a
//! [`RoundLog`]. The log is immutable: `record` returns a new log.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Record of a single evaluated guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: i64,
    /// Whether the guess consumed an attempt
    pub counted: bool,
    pub attempts_remaining: u32,
    pub timestamp: DateTime<Utc>,
}

/// One line of a round log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    Transition(PhaseTransition),
    Guess(GuessRecord),
}

impl LogEntry {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Transition(t) => t.timestamp,
            Self::Guess(g) => g.timestamp,
        }
    }
}

/// Ordered history of one round.
///
/// # Example
///
/// ```rust
/// use magic_number::core::{LogEntry, Phase, PhaseTransition, RoundLog};
/// use chrono::Utc;
///
/// let log = RoundLog::new();
/// let log = log.record(LogEntry::Transition(PhaseTransition {
///     from: Phase::Unconfigured,
///     to: Phase::Configured,
///     timestamp: Utc::now(),
/// }));
///
/// assert_eq!(log.get_path(), vec![Phase::Unconfigured, Phase::Configured]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    round_id: Option<Uuid>,
    entries: Vec<LogEntry>,
}

impl RoundLog {
    /// Create an empty log that belongs to no round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log for a started round.
    pub fn for_round(round_id: Uuid) -> Self {
        Self {
            round_id: Some(round_id),
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// The existing log is left unchanged.
    pub fn record(&self, entry: LogEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self {
            round_id: self.round_id,
            entries,
        }
    }

    pub fn round_id(&self) -> Option<Uuid> {
        self.round_id
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut transitions = self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Transition(t) => Some(t),
            LogEntry::Guess(_) => None,
        });

        let mut path = Vec::new();
        if let Some(first) = transitions.next() {
            path.push(first.from);
            path.push(first.to);
        }
        path.extend(transitions.map(|t| t.to));
        path
    }

    /// All guesses in submission order, counted or not.
    pub fn guesses(&self) -> impl Iterator<Item = &GuessRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Guess(g) => Some(g),
            LogEntry::Transition(_) => None,
        })
    }

    /// Guesses that consumed an attempt.
    pub fn counted_guesses(&self) -> Vec<i64> {
        self.guesses().filter(|g| g.counted).map(|g| g.guess).collect()
    }

    /// Time between the first and last entry, or `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp()
            .signed_duration_since(first.timestamp())
            .to_std()
            .ok()
    }
}
