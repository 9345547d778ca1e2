//! Per-date classification into full or partial consensus.
//!
//! Full consensus ("everyone") means every submitter gave a range and all
//! ranges share a window of at least the minimum duration. When that fails the
//! fallback is the longest window where at least `min_overlap_users` ranges
//! overlap ("most").

use serde::{Deserialize, Serialize};

use crate::coverage::Coverage;
use crate::record::AvailabilityRecord;
use crate::time::ClockTime;

/// Tunables for the classification. Missing fields take their defaults when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Shortest window worth recommending, in minutes.
    pub min_duration_minutes: u16,
    /// How many overlapping ranges a partial-consensus window needs.
    pub min_overlap_users: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_duration_minutes: 60,
            min_overlap_users: 2,
        }
    }
}

/// Which kind of agreement a recommendation represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapType {
    /// Every submitter is free for the whole window.
    Everyone,
    /// The longest window shared by at least `min_overlap_users` submitters.
    Most,
}

/// The recommended window for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecommendation {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub overlap_type: OverlapType,
    /// Users free for the whole window. Exact for `Everyone`; for `Most` it is
    /// the lowest coverage inside the window. Display only, never used to pick
    /// between windows.
    pub approx_users: usize,
}

impl SlotRecommendation {
    fn from_minutes(start: u16, end: u16, overlap_type: OverlapType, approx_users: usize) -> Option<Self> {
        Some(Self {
            start_time: ClockTime::from_minutes(start)?,
            end_time: ClockTime::from_minutes(end)?,
            overlap_type,
            approx_users,
        })
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes() - self.start_time.minutes()
    }
}

/// Pick the best window for one date's records.
///
/// Every record counts toward the number of users, including those without a
/// usable range. Returns `None` when nobody gave a range or no window meets
/// the thresholds.
pub fn classify(records: &[&AvailabilityRecord], config: &EngineConfig) -> Option<SlotRecommendation> {
    let total_users = records.len();
    let ranges: Vec<(u16, u16)> = records.iter().filter_map(|r| r.range()).collect();

    if ranges.is_empty() {
        return None;
    }

    if ranges.len() == total_users {
        if let Some(slot) = full_consensus(&ranges, config) {
            return Some(slot);
        }
    }

    partial_consensus(&ranges, config)
}

/// Intersection of all ranges, if it is long enough.
fn full_consensus(ranges: &[(u16, u16)], config: &EngineConfig) -> Option<SlotRecommendation> {
    let max_start = ranges.iter().map(|&(start, _)| start).max()?;
    let min_end = ranges.iter().map(|&(_, end)| end).min()?;

    if max_start >= min_end || min_end - max_start < config.min_duration_minutes {
        return None;
    }
    SlotRecommendation::from_minutes(max_start, min_end, OverlapType::Everyone, ranges.len())
}

fn partial_consensus(ranges: &[(u16, u16)], config: &EngineConfig) -> Option<SlotRecommendation> {
    let coverage = Coverage::from_ranges(ranges.iter().copied());
    let threshold = config.min_overlap_users.max(1);
    let run = coverage.longest_run(threshold, config.min_duration_minutes)?;
    SlotRecommendation::from_minutes(run.start, run.end, OverlapType::Most, usize::from(run.min_coverage))
}
