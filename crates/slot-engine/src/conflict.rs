//! Detect overlapping busy intervals within a day.
//!
//! Adjacent intervals (where one ends exactly when another starts) are NOT
//! conflicts.

use crate::time::Interval;

/// A detected overlap between two busy intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub first: Interval,
    pub second: Interval,
    pub overlap_minutes: u32,
}

/// Find all pairs of overlapping intervals in a list sorted by start time.
///
/// Pairs are reported in input order (`first` precedes `second`). Because the
/// input is sorted, the inner scan for `first` stops at the first interval
/// starting at or after `first.end`.
pub fn find_conflicts(sorted: &[Interval]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, first) in sorted.iter().enumerate() {
        for second in &sorted[i + 1..] {
            if second.start() >= first.end() {
                break;
            }
            conflicts.push(Conflict {
                first: *first,
                second: *second,
                overlap_minutes: first.overlap_minutes(second),
            });
        }
    }

    conflicts
}
