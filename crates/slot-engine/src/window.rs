//! A group's date window.
//!
//! Groups plan over a short inclusive range of calendar dates, at most a week.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, SlotError};

/// Longest allowed window, in dates (inclusive of both ends).
pub const MAX_WINDOW_DAYS: i64 = 7;

/// Every date from `start` through `end`, inclusive. Empty if `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// A validated inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl GroupWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvertedWindow { start, end });
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_WINDOW_DAYS {
            return Err(SlotError::WindowTooLong {
                days,
                max: MAX_WINDOW_DAYS,
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Always false; a window holds at least one date.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        date_range(self.start, self.end)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}
