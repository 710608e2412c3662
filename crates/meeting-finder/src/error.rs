//! Error types for meeting-finder operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Minute {value} is outside the day (0..=1440)")]
    OutOfDay { value: u32 },
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
