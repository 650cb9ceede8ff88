//! Level parsing errors.

use thiserror::Error;

/// Errors from strict level parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("Unknown level '{0}'. Expected one of: easy, medium, hard, very-hard")]
    Unknown(String),
}
