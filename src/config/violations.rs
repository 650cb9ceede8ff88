//! Setup violations.

use crate::level::Level;
use std::fmt;
use thiserror::Error;

/// A single problem with a round setup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{level} allows {min} to {max} attempts (got {attempts})")]
    AttemptsOutOfBounds {
        level: Level,
        attempts: u32,
        min: u32,
        max: u32,
    },

    #[error("The attempt budget must be at least 1")]
    ZeroAttempts,

    #[error("An attempt budget was given without a level")]
    AttemptsWithoutLevel,
}

/// Every violation found in a setup, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub violations: Vec<ConfigViolation>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid setup: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}
