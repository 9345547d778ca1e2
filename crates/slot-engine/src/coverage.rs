//! Per-minute coverage counting over one day.
//!
//! Each submitted range adds one to every minute it covers. Scanning the
//! counters for contiguous runs above a threshold finds windows where at least
//! that many people are free at once.

use crate::time::MINUTES_PER_DAY;

const DAY: usize = MINUTES_PER_DAY as usize;

/// A contiguous run of minutes `[start, end)` whose coverage never drops below
/// the scan threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRun {
    pub start: u16,
    pub end: u16,
    /// Lowest coverage seen inside the run.
    pub min_coverage: u16,
}

impl CoverageRun {
    pub fn len(&self) -> u16 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Counter array indexed by minute of day.
#[derive(Clone)]
pub struct Coverage {
    counts: Box<[u16; DAY]>,
}

impl Default for Coverage {
    fn default() -> Self {
        Self::new()
    }
}

impl Coverage {
    pub fn new() -> Self {
        Self {
            counts: Box::new([0; DAY]),
        }
    }

    /// Build coverage from `[start, end)` ranges.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (u16, u16)>,
    {
        let mut coverage = Self::new();
        for (start, end) in ranges {
            coverage.add(start, end);
        }
        coverage
    }

    /// Count one more person free during `[start, end)`.
    ///
    /// Inverted or empty ranges add nothing. Bounds past the end of the day
    /// are clipped.
    pub fn add(&mut self, start: u16, end: u16) {
        let end = usize::from(end).min(DAY);
        let start = usize::from(start).min(end);
        for count in &mut self.counts[start..end] {
            *count = count.saturating_add(1);
        }
    }

    /// Coverage at `minute`. Minutes outside the day have coverage zero.
    pub fn at(&self, minute: usize) -> u16 {
        self.counts.get(minute).copied().unwrap_or(0)
    }

    /// Find the longest run with coverage `>= threshold` lasting at least
    /// `min_len` minutes.
    ///
    /// The scan runs one minute past the end of the day so a run reaching
    /// midnight still closes. A later run only replaces the best one when it is
    /// strictly longer, so among equal lengths the earliest wins. Coverage depth
    /// plays no part in the choice.
    pub fn longest_run(&self, threshold: u16, min_len: u16) -> Option<CoverageRun> {
        let mut best: Option<CoverageRun> = None;
        let mut current: Option<(usize, u16)> = None;

        for minute in 0..=DAY {
            let users = self.at(minute);
            if users >= threshold {
                current = match current {
                    None => Some((minute, users)),
                    Some((start, lowest)) => Some((start, lowest.min(users))),
                };
                continue;
            }

            if let Some((start, lowest)) = current.take() {
                let run = CoverageRun {
                    start: start as u16,
                    end: minute as u16,
                    min_coverage: lowest,
                };
                let longer = best.is_none_or(|b| run.len() > b.len());
                if run.len() >= min_len && longer {
                    best = Some(run);
                }
            }
        }

        best.filter(|run| !run.is_empty())
    }
}
