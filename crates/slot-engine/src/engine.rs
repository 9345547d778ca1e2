//! Engine entry point: a snapshot in, one recommendation per date out.
//!
//! The engine keeps no state between calls. Callers re-run it whenever the
//! store's snapshot changes.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::consensus::{classify, EngineConfig, SlotRecommendation};
use crate::grouping::group_by_date;
use crate::record::AvailabilityRecord;

/// Recommendations keyed by date, in order of each date's first appearance in
/// the snapshot.
///
/// Serializes as a JSON object with `null` for dates without a viable slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestSlots {
    entries: Vec<(NaiveDate, Option<SlotRecommendation>)>,
}

impl BestSlots {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recommendation for `date`. The outer `None` means the date was not in
    /// the snapshot; `Some(None)` means it was, with no viable slot.
    pub fn get(&self, date: NaiveDate) -> Option<Option<&SlotRecommendation>> {
        self.entries
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, slot)| slot.as_ref())
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(date, _)| *date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<&SlotRecommendation>)> + '_ {
        self.entries.iter().map(|(date, slot)| (*date, slot.as_ref()))
    }

    /// Reorder entries by calendar date.
    pub fn into_sorted(mut self) -> Self {
        self.entries.sort_by_key(|(date, _)| *date);
        self
    }
}

impl IntoIterator for BestSlots {
    type Item = (NaiveDate, Option<SlotRecommendation>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for BestSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, slot) in &self.entries {
            map.serialize_entry(date, slot)?;
        }
        map.end()
    }
}

/// Compute the best slot for every date in `records` with the default
/// thresholds (one hour, two people).
pub fn compute_best_slots(records: &[AvailabilityRecord]) -> BestSlots {
    compute_best_slots_with(records, &EngineConfig::default())
}

/// Compute the best slot for every date in `records`.
///
/// Total over all inputs: records without a date are skipped, malformed times
/// count as "no range", and an empty snapshot gives an empty result.
pub fn compute_best_slots_with(records: &[AvailabilityRecord], config: &EngineConfig) -> BestSlots {
    let entries = group_by_date(records)
        .into_iter()
        .map(|group| {
            let slot = classify(&group.records, config);
            tracing::debug!(
                date = %group.date,
                users = group.records.len(),
                slot = ?slot,
                "classified date"
            );
            (group.date, slot)
        })
        .collect();

    BestSlots { entries }
}
