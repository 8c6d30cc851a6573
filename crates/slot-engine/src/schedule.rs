//! The day-availability engine.
//!
//! A `DaySchedule` is an immutable snapshot of one date: the working window
//! plus its busy intervals, validated and sorted once at construction. Every
//! query is computed from that snapshot, so repeated calls always agree.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::conflict::find_conflicts;
use crate::error::{Result, SlotError};
use crate::freebusy;
use crate::provider::ScheduleProvider;
use crate::time::{ClockTime, Interval};

#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    window: Interval,
    busy: Vec<Interval>,
    free: Vec<Interval>,
}

impl DaySchedule {
    /// Validate and sort the busy intervals for one working window.
    ///
    /// Construction is atomic: either every busy interval lies inside the
    /// window and no two overlap, or nothing is built.
    ///
    /// # Errors
    /// Returns `SlotError::DataIntegrity` if a busy interval falls outside the
    /// window or two busy intervals overlap. Adjacent intervals are accepted.
    pub fn new(window: Interval, busy: impl IntoIterator<Item = Interval>) -> Result<Self> {
        let mut busy: Vec<Interval> = busy.into_iter().collect();

        if let Some(outside) = busy.iter().find(|b| !window.covers(b)) {
            warn!(%window, busy = %outside, "busy timeslot outside working window");
            return Err(SlotError::DataIntegrity(format!(
                "busy timeslot {} lies outside working window {}",
                outside, window
            )));
        }

        busy.sort_by_key(|b| (b.start(), b.end()));

        if let Some(conflict) = find_conflicts(&busy).first() {
            warn!(
                first = %conflict.first,
                second = %conflict.second,
                overlap_minutes = conflict.overlap_minutes,
                "overlapping busy timeslots"
            );
            return Err(SlotError::DataIntegrity(format!(
                "busy timeslots {} and {} overlap by {} minutes",
                conflict.first, conflict.second, conflict.overlap_minutes
            )));
        }

        let free = freebusy::free_intervals(window, &busy);
        debug!(%window, busy = busy.len(), free = free.len(), "built day schedule");

        Ok(Self { window, busy, free })
    }

    /// Build from `HH:MM` strings, as the provider delivers them.
    pub fn parse(window: (&str, &str), busy: &[(&str, &str)]) -> Result<Self> {
        let window = Interval::parse(window.0, window.1)?;
        let busy = busy
            .iter()
            .map(|(start, end)| Interval::parse(start, end))
            .collect::<Result<Vec<_>>>()?;
        Self::new(window, busy)
    }

    /// Fetch one date from `provider` and build its schedule.
    ///
    /// # Errors
    /// Propagates the provider's error (e.g. `SlotError::UnknownDate`), then
    /// any parse or validation error from the returned records.
    pub fn from_provider<P: ScheduleProvider + ?Sized>(provider: &P, date: NaiveDate) -> Result<Self> {
        let records = provider.day(date)?;
        debug!(%date, busy = records.busy.len(), "fetched day from provider");

        let window = records.window.to_interval()?;
        let busy = records
            .busy
            .iter()
            .map(|range| range.to_interval())
            .collect::<Result<Vec<_>>>()?;
        Self::new(window, busy)
    }

    pub fn window(&self) -> Interval {
        self.window
    }

    /// Busy intervals sorted by start, exactly as validated.
    pub fn busy_slots(&self) -> &[Interval] {
        &self.busy
    }

    /// Maximal free intervals of the window, sorted and non-overlapping.
    pub fn free_slots(&self) -> &[Interval] {
        &self.free
    }

    /// True iff `[start, end)` fits inside a single free interval.
    ///
    /// A range spanning two free intervals is unavailable even if only a
    /// busy interval separates them.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `start >= end`.
    pub fn is_available(&self, start: ClockTime, end: ClockTime) -> Result<bool> {
        let requested = Interval::new(start, end)?;
        Ok(self.is_available_interval(&requested))
    }

    pub fn is_available_interval(&self, requested: &Interval) -> bool {
        self.free.iter().any(|slot| slot.covers(requested))
    }

    /// The earliest slot of exactly `duration_minutes`, or `None` when no free
    /// interval is long enough.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` if `duration_minutes <= 0`.
    pub fn find_slot_for_duration(&self, duration_minutes: i64) -> Result<Option<Interval>> {
        if duration_minutes <= 0 {
            return Err(SlotError::InvalidDuration(duration_minutes));
        }
        // Longer than any day: cannot fit.
        let Ok(minutes) = u32::try_from(duration_minutes) else {
            return Ok(None);
        };
        Ok(freebusy::first_fit(&self.free, minutes))
    }

    /// A new schedule with `interval` booked as busy.
    ///
    /// `self` is left untouched; the result goes through the same validation
    /// as [`DaySchedule::new`].
    pub fn book(&self, interval: Interval) -> Result<Self> {
        Self::new(
            self.window,
            self.busy.iter().copied().chain(std::iter::once(interval)),
        )
    }
}
