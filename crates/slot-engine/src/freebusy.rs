//! Free-slot sweep and first-fit search over a sorted busy list.
//!
//! Both functions expect busy intervals that are sorted by start, pairwise
//! non-overlapping, and contained in the window. `DaySchedule` establishes
//! that before calling in.

use crate::time::Interval;

/// Gaps between busy intervals within `window`, in ascending order.
///
/// One pass with a cursor starting at the window start: every gap before a
/// busy interval is emitted, then the cursor jumps past it. Zero-length gaps
/// are never emitted.
pub fn free_intervals(window: Interval, sorted_busy: &[Interval]) -> Vec<Interval> {
    let mut free = Vec::with_capacity(sorted_busy.len() + 1);
    let mut cursor = window.start();

    for busy in sorted_busy {
        if cursor < busy.start() {
            if let Ok(gap) = Interval::new(cursor, busy.start()) {
                free.push(gap);
            }
        }
        cursor = cursor.max(busy.end());
    }

    // Trailing free slot after the last busy interval.
    if cursor < window.end() {
        if let Ok(gap) = Interval::new(cursor, window.end()) {
            free.push(gap);
        }
    }

    free
}

/// The first free interval at least `duration_minutes` long, cut down to
/// exactly `[f.start, f.start + duration_minutes)`.
///
/// `duration_minutes` must be positive; `DaySchedule` rejects zero first.
pub fn first_fit(free: &[Interval], duration_minutes: u32) -> Option<Interval> {
    free.iter()
        .find(|slot| slot.duration_minutes() >= duration_minutes)
        .map(|slot| slot.truncated(duration_minutes))
}
