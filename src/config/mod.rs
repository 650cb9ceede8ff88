//! Session configuration.
//!
//! The binary maps its command line onto a [`SessionConfig`]; the
//! session validates it before touching the game.

use crate::level::Level;
use serde::{Deserialize, Serialize};

pub mod validation;
pub mod violations;

pub use validation::{check_setup, validate_setup};
pub use violations::{ConfigError, ConfigViolation};

/// How responses are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Colored, human-readable lines.
    #[default]
    Text,
    /// One JSON object per response.
    Json,
}

/// Settings for one play session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Level to select on startup.
    pub level: Option<Level>,
    /// Attempt budget for the first round; needs `level`.
    pub attempts: Option<u32>,
    /// Seed for reproducible targets.
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_setup(self.level, self.attempts)
    }

    /// True when the first round can start without asking the player.
    pub fn starts_immediately(&self) -> bool {
        self.level.is_some() && self.attempts.is_some()
    }
}
