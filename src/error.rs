//! Error types for the calendar core.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Error, Debug)]
pub enum PatroError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Nepali month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),

    #[error("Day {day} is out of range for BS {year}-{month:02} ({max} days)")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max: u8,
    },

    #[error("Nepali year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("Date {0} is outside the convertible range")]
    DateOutOfRange(NaiveDate),

    #[error("Invalid calendar table: {0}")]
    Table(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calendar operations.
pub type PatroResult<T> = Result<T, PatroError>;
