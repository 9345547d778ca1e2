//! Build the records for one user's availability submission.
//!
//! A submission always covers the whole group window: one record per date,
//! with no times on dates the user did not mark as available. The store is
//! expected to delete the user's previous records for the group and insert
//! these in one step, so the engine never sees a mix of old and new answers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::record::AvailabilityRecord;
use crate::time::ClockTime;
use crate::window::GroupWindow;

/// A free interval on one date, as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

/// A user's answer for one date. In JSON an unavailable day is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<TimeSpan>", into = "Option<TimeSpan>")]
pub enum DayAnswer {
    Available(TimeSpan),
    Unavailable,
}

impl DayAnswer {
    pub fn available(start_time: ClockTime, end_time: ClockTime) -> Self {
        Self::Available(TimeSpan {
            start_time,
            end_time,
        })
    }
}

impl From<Option<TimeSpan>> for DayAnswer {
    fn from(span: Option<TimeSpan>) -> Self {
        span.map_or(Self::Unavailable, Self::Available)
    }
}

impl From<DayAnswer> for Option<TimeSpan> {
    fn from(answer: DayAnswer) -> Self {
        match answer {
            DayAnswer::Available(span) => Some(span),
            DayAnswer::Unavailable => None,
        }
    }
}

/// Parse answers from a JSON object keyed by `YYYY-MM-DD`.
pub fn parse_answers(json: &str) -> Result<BTreeMap<NaiveDate, DayAnswer>> {
    Ok(serde_json::from_str(json)?)
}

/// Store key for a group date.
pub fn date_id(group_id: &str, date: NaiveDate) -> String {
    format!("{group_id}:{date}")
}

/// Turn one user's answers into the replacement record set for the window.
///
/// Dates the user left unanswered become unavailable records. Answers for
/// dates outside the window, or intervals that do not end after they start,
/// are rejected.
pub fn build_submission(
    group_id: &str,
    user_id: &str,
    window: &GroupWindow,
    answers: &BTreeMap<NaiveDate, DayAnswer>,
) -> Result<Vec<AvailabilityRecord>> {
    for (date, answer) in answers {
        if !window.contains(*date) {
            return Err(SlotError::DateOutsideWindow(*date));
        }
        if let DayAnswer::Available(span) = answer {
            if span.start_time >= span.end_time {
                return Err(SlotError::InvalidInterval {
                    date: *date,
                    start: span.start_time.to_string(),
                    end: span.end_time.to_string(),
                });
            }
        }
    }

    let records: Vec<AvailabilityRecord> = window
        .dates()
        .into_iter()
        .map(|date| {
            let record = AvailabilityRecord::new(group_id, date_id(group_id, date), user_id, Some(date));
            match answers.get(&date) {
                Some(DayAnswer::Available(span)) => {
                    record.with_times(span.start_time.to_string(), span.end_time.to_string())
                }
                _ => record,
            }
        })
        .collect();

    tracing::debug!(group_id, user_id, dates = records.len(), "built submission");
    Ok(records)
}
