//! Conversion between clock strings and minutes since midnight.
//!
//! All times are naive local wall-clock times. There is no timezone or DST
//! handling anywhere in this crate: a group is assumed to share one clock, and
//! an interval never crosses midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in a day. Valid minute values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Convert a clock string to minutes since midnight.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS` (seconds are ignored; database time
/// columns usually carry them). Anything else returns `None` rather than an
/// error, so callers can treat an unparseable time exactly like a missing one.
pub fn clock_to_minutes(s: &str) -> Option<u16> {
    let mut parts = s.split(':');
    let hour = parse_component(parts.next()?, 23)?;
    let minute = parse_component(parts.next()?, 59)?;
    if let Some(seconds) = parts.next() {
        parse_component(seconds, 59)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Format minutes since midnight as a zero-padded `HH:MM` string.
pub fn minutes_to_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_component(part: &str, max: u16) -> Option<u16> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u16>().ok().filter(|v| *v <= max)
}

/// A naive wall-clock time with minute precision.
///
/// Serializes as `"HH:MM"`. The upper bound is exclusive of midnight, so
/// `24:00` is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight. Returns `None` past `23:59`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        clock_to_minutes(s)
            .map(Self)
            .ok_or_else(|| SlotError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}
