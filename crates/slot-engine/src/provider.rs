//! The schedule provider boundary.
//!
//! The provider hands out, per date, a working window and the busy
//! timeslots booked inside it, as `HH:MM` strings. `ScheduleResponse` is the
//! JSON document a schedule API returns for every date at once:
//!
//! ```json
//! {
//!   "days":      [{"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"}],
//!   "timeslots": [{"id": 1, "day_id": 1, "start": "11:00", "end": "12:00"}]
//! }
//! ```
//!
//! Transport is the caller's concern; this module only parses and checks the
//! document's structure. Times stay strings here and are validated when a
//! `DaySchedule` is built from them.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SlotError};
use crate::time::Interval;

/// Anything that can return the records for one date.
pub trait ScheduleProvider {
    /// # Errors
    /// Returns `SlotError::UnknownDate` when the provider has no such date.
    fn day(&self, date: NaiveDate) -> Result<DayRecordSet>;
}

/// A `{start, end}` record with unvalidated `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn to_interval(&self) -> Result<Interval> {
        Interval::parse(&self.start, &self.end)
    }
}

/// The provider's answer for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecordSet {
    pub window: TimeRange,
    pub busy: Vec<TimeRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: u64,
    pub date: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotRecord {
    pub id: u64,
    pub day_id: u64,
    pub start: String,
    pub end: String,
}

/// A full schedule document covering one or more dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub days: Vec<DayRecord>,
    #[serde(default)]
    pub timeslots: Vec<TimeslotRecord>,
}

impl ScheduleResponse {
    /// Parse a schedule document and check its structure.
    ///
    /// # Errors
    /// - `SlotError::Json` if the text is not a schedule document.
    /// - `SlotError::InvalidDate` if a day's date is not `YYYY-MM-DD`.
    /// - `SlotError::DataIntegrity` on duplicate day ids, duplicate dates, or
    ///   a timeslot whose `day_id` names no day.
    pub fn from_json(text: &str) -> Result<Self> {
        let response: ScheduleResponse = serde_json::from_str(text)?;
        response.validate()?;
        debug!(
            days = response.days.len(),
            timeslots = response.timeslots.len(),
            "parsed schedule document"
        );
        Ok(response)
    }

    /// Check the cross-record structure; time strings are checked later.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut dates = HashSet::new();

        for day in &self.days {
            let date = parse_date(&day.date)?;
            if !ids.insert(day.id) {
                warn!(day_id = day.id, "duplicate day id");
                return Err(SlotError::DataIntegrity(format!(
                    "day id {} appears more than once",
                    day.id
                )));
            }
            if !dates.insert(date) {
                warn!(%date, "duplicate date");
                return Err(SlotError::DataIntegrity(format!(
                    "date {} appears more than once",
                    date
                )));
            }
        }

        if let Some(orphan) = self.timeslots.iter().find(|t| !ids.contains(&t.day_id)) {
            warn!(timeslot_id = orphan.id, day_id = orphan.day_id, "timeslot references unknown day");
            return Err(SlotError::DataIntegrity(format!(
                "timeslot {} references unknown day {}",
                orphan.id, orphan.day_id
            )));
        }

        Ok(())
    }

    /// Every date in the document, ascending.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let dates = self
            .days
            .iter()
            .map(|d| parse_date(&d.date))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(dates.into_iter().collect())
    }
}

impl ScheduleProvider for ScheduleResponse {
    fn day(&self, date: NaiveDate) -> Result<DayRecordSet> {
        let day = self
            .days
            .iter()
            .find(|d| parse_date(&d.date).is_ok_and(|parsed| parsed == date))
            .ok_or_else(|| SlotError::UnknownDate(date.to_string()))?;

        let busy = self
            .timeslots
            .iter()
            .filter(|slot| slot.day_id == day.id)
            .map(|slot| TimeRange::new(slot.start.clone(), slot.end.clone()))
            .collect();

        Ok(DayRecordSet {
            window: TimeRange::new(day.start.clone(), day.end.clone()),
            busy,
        })
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(text.to_string()))
}
