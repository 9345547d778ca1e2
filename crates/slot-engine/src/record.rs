//! Availability records as read from the external store.
//!
//! A record is one user's answer for one date of one group. Times stay as the
//! raw strings the store handed over; they are resolved to minutes lazily so a
//! malformed value degrades to "no range" instead of failing the whole
//! snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::time::clock_to_minutes;

/// One submission of one user for one date within one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub date_id: String,
    #[serde(default)]
    pub user_id: String,
    /// Calendar date of the record. `None` when the store could not resolve
    /// the date reference; such records are ignored by the engine.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl AvailabilityRecord {
    /// A record with no times, i.e. the user is explicitly unavailable.
    pub fn new(
        group_id: impl Into<String>,
        date_id: impl Into<String>,
        user_id: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            date_id: date_id.into(),
            user_id: user_id.into(),
            date,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn start_minutes(&self) -> Option<u16> {
        self.start_time.as_deref().and_then(clock_to_minutes)
    }

    pub fn end_minutes(&self) -> Option<u16> {
        self.end_time.as_deref().and_then(clock_to_minutes)
    }

    /// The half-open `[start, end)` interval in minutes, if both ends resolve.
    ///
    /// Inverted or empty intervals are returned as-is.
    pub fn range(&self) -> Option<(u16, u16)> {
        Some((self.start_minutes()?, self.end_minutes()?))
    }
}

/// Parse a snapshot: a JSON array of availability records.
pub fn parse_snapshot(json: &str) -> Result<Vec<AvailabilityRecord>> {
    Ok(serde_json::from_str(json)?)
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        // Accept full timestamps too; only the date part matters.
        let day = s.get(..10).unwrap_or(&s);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}
