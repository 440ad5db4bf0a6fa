//! Error types for schedule operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Core error type for schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A structural edit addressed a position outside the period list.
    /// The list is left unchanged.
    #[error("Index {index} is out of range (the schedule has {len} periods)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A field update supplied a value that does not coerce to the field's
    /// type (non-numeric or zero for numeric fields, empty for names).
    /// The entry is left unchanged.
    #[error("Invalid value for {field}: \"{value}\"")]
    InvalidValue { field: &'static str, value: String },

    /// Two or more periods share a name. Raised by the pre-save check,
    /// never by individual mutations.
    #[error("Duplicate period names: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    /// Data validation error at the persistence boundary.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ScheduleError {
    fn from(err: std::io::Error) -> Self {
        ScheduleError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Validation(err.to_string())
    }
}
