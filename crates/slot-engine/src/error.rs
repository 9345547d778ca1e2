//! Error types for slot-engine operations.
//!
//! The best-slot computation itself is total and never returns these. They come
//! from the helpers around it: strict clock parsing, group windows, submission
//! building and snapshot decoding.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid clock time: {0:?} (expected HH:MM)")]
    InvalidClockTime(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Window start {start} is after window end {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },

    #[error("Window spans {days} days, at most {max} are allowed")]
    WindowTooLong { days: i64, max: i64 },

    #[error("Date {0} is outside the group window")]
    DateOutsideWindow(NaiveDate),

    #[error("Availability on {date} must end after it starts ({start}-{end})")]
    InvalidInterval {
        date: NaiveDate,
        start: String,
        end: String,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
