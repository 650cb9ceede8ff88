//! Difficulty presets.
//!
//! A level fixes the guessable range and the attempt budgets the player
//! may pick from. The table is closed: four presets, no tuning.
//!
//! | Level    | Range  | Attempts | Divisions |
//! |----------|--------|----------|-----------|
//! | Easy     | 1–10   | 1–4      | 3         |
//! | Medium   | 1–30   | 1–6      | 5         |
//! | Hard     | 1–50   | 1–8      | 7         |
//! | VeryHard | 1–100  | 1–10     | 9         |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub use error::LevelError;

/// One of the four difficulty presets.
///
/// # Example
///
/// ```rust
/// use magic_number::level::Level;
///
/// assert_eq!(Level::from_label("Fácil (1-10)"), Level::Easy);
/// assert_eq!(Level::Medium.range(), (1, 30));
/// assert_eq!(Level::Hard.attempt_bounds().max, 8);
///
/// // Unrecognized labels fall back to the hardest preset.
/// assert_eq!(Level::from_label("nightmare"), Level::VeryHard);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

/// Attempt budgets a player may choose for a level.
///
/// `divisions` is the number of steps between `min` and `max`, which is
/// what a slider widget needs to snap to whole attempts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AttemptBounds {
    pub min: u32,
    pub max: u32,
    pub divisions: u32,
}

impl AttemptBounds {
    const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            divisions: max - min,
        }
    }

    pub fn contains(&self, attempts: u32) -> bool {
        (self.min..=self.max).contains(&attempts)
    }

    pub fn clamp(&self, attempts: u32) -> u32 {
        attempts.clamp(self.min, self.max)
    }
}

/// Everything a level fixes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LevelPreset {
    pub range_min: i64,
    pub range_max: i64,
    pub attempts: AttemptBounds,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::VeryHard];

    pub fn preset(self) -> LevelPreset {
        let (range_max, max_attempts) = match self {
            Self::Easy => (10, 4),
            Self::Medium => (30, 6),
            Self::Hard => (50, 8),
            Self::VeryHard => (100, 10),
        };
        LevelPreset {
            range_min: 1,
            range_max,
            attempts: AttemptBounds::new(1, max_attempts),
        }
    }

    /// Inclusive guessable interval.
    pub fn range(self) -> (i64, i64) {
        let preset = self.preset();
        (preset.range_min, preset.range_max)
    }

    pub fn attempt_bounds(self) -> AttemptBounds {
        self.preset().attempts
    }

    /// Short machine-friendly name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very-hard",
        }
    }

    /// Display label including the range.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (1-10)",
            Self::Medium => "Medium (1-30)",
            Self::Hard => "Hard (1-50)",
            Self::VeryHard => "Very Hard (1-100)",
        }
    }

    /// Resolve a level from a name or display label.
    ///
    /// Accepts short names, English labels and the Portuguese dropdown
    /// labels, ignoring case and surrounding whitespace.
    pub fn lookup(label: &str) -> Option<Level> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "easy" | "easy (1-10)" | "fácil" | "facil" | "fácil (1-10)" | "facil (1-10)" => {
                Some(Self::Easy)
            }
            "medium" | "medium (1-30)" | "médio" | "medio" | "médio (1-30)" | "medio (1-30)" => {
                Some(Self::Medium)
            }
            "hard" | "hard (1-50)" | "difícil" | "dificil" | "difícil (1-50)"
            | "dificil (1-50)" => Some(Self::Hard),
            "very-hard" | "very_hard" | "veryhard" | "very hard" | "very hard (1-100)"
            | "muito difícil" | "muito dificil" | "muito difícil (1-100)"
            | "muito dificil (1-100)" => Some(Self::VeryHard),
            _ => None,
        }
    }

    /// Resolve a level from a label, never failing.
    pub fn from_label(label: &str) -> Level {
        match Self::lookup(label) {
            Some(level) => level,
            // Anything unrecognized plays on the widest range.
            None => {
                tracing::debug!(label, "unrecognized level label, using very-hard");
                Self::VeryHard
            }
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Strict parsing: unknown labels are an error rather than very-hard.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| LevelError::Unknown(s.to_string()))
    }
}
