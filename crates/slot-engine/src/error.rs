//! Error types for slot-engine operations.

use thiserror::Error;

use crate::time::ClockTime;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A time string is not `HH:MM` or is out of range.
    #[error("Invalid time '{input}': {reason}")]
    Format { input: String, reason: String },

    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: ClockTime, end: ClockTime },

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    /// Busy timeslots overlap or fall outside the working window, or the
    /// provider snapshot is structurally inconsistent.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Date {0} not found in the schedule")]
    UnknownDate(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
