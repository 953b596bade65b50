//! Error types for schedule computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Well-formed input that violates a scheduling invariant
    /// (empty rotation, non-positive period, inverted window, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed or missing input data (empty document, bad JSON, bad timestamp).
    #[error("Input error: {0}")]
    Input(String),
}

impl ScheduleError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
