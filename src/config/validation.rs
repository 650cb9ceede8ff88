//! Setup checks using Validation.
//!
//! All checks run, and every failure is reported together, so a player
//! passing `--attempts 0` without `--level` hears about both problems.

use crate::config::violations::{ConfigError, ConfigViolation};
use crate::level::Level;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub type SetupValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check_nonzero(attempts: Option<u32>) -> SetupValidation {
    match attempts {
        Some(0) => Validation::fail(ConfigViolation::ZeroAttempts),
        _ => Validation::success(()),
    }
}

fn check_level_present(level: Option<Level>, attempts: Option<u32>) -> SetupValidation {
    match (level, attempts) {
        (None, Some(_)) => Validation::fail(ConfigViolation::AttemptsWithoutLevel),
        _ => Validation::success(()),
    }
}

fn check_within_bounds(level: Option<Level>, attempts: Option<u32>) -> SetupValidation {
    match (level, attempts) {
        // Zero has its own violation.
        (Some(level), Some(attempts)) if attempts > 0 => {
            let bounds = level.attempt_bounds();
            if bounds.contains(attempts) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::AttemptsOutOfBounds {
                    level,
                    attempts,
                    min: bounds.min,
                    max: bounds.max,
                })
            }
        }
        _ => Validation::success(()),
    }
}

/// Run every setup check, accumulating all violations.
pub fn check_setup(level: Option<Level>, attempts: Option<u32>) -> SetupValidation {
    let checks = vec![
        check_nonzero(attempts),
        check_level_present(level, attempts),
        check_within_bounds(level, attempts),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// [`check_setup`] as a `Result`.
pub fn validate_setup(level: Option<Level>, attempts: Option<u32>) -> Result<(), ConfigError> {
    match check_setup(level, attempts) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(ConfigError {
            violations: errors.iter().cloned().collect(),
        }),
    }
}
