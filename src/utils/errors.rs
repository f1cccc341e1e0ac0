use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected exactly 4 numbers, got {0}")]
    WrongNumberCount(usize),
    #[error("Numbers must be finite, got {0}")]
    NonFiniteNumber(f64),
}
