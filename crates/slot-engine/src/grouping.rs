//! Group a snapshot's records by calendar date.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::record::AvailabilityRecord;

/// All records of a snapshot that share one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub records: Vec<&'a AvailabilityRecord>,
}

/// Split records into per-date groups.
///
/// Groups come out in order of each date's first appearance in `records`, not
/// calendar order. Records without a date are dropped.
pub fn group_by_date(records: &[AvailabilityRecord]) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records {
        let Some(date) = record.date else {
            tracing::trace!(user_id = %record.user_id, "dropping record without a date");
            continue;
        };
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DateGroup {
                date,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}
