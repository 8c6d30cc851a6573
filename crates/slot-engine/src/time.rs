//! Clock-time points and half-open intervals within a single day.
//!
//! `ClockTime` is stored as minutes since midnight, so ordering and arithmetic
//! are plain integer operations. `Interval` is `[start, end)` with `start < end`
//! enforced at construction; adjacent intervals share an endpoint but never a
//! point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A point in time within a single day, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minute_of_day: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minute_of_day: 0 };

    /// Build a time from hour and minute components.
    ///
    /// # Errors
    /// Returns `SlotError::Format` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(SlotError::Format {
                input: format!("{:02}:{:02}", hour, minute),
                reason: format!("hour {} out of range 00-23", hour),
            });
        }
        if minute > 59 {
            return Err(SlotError::Format {
                input: format!("{:02}:{:02}", hour, minute),
                reason: format!("minute {} out of range 00-59", minute),
            });
        }
        Ok(Self {
            minute_of_day: u16::from(hour) * MINUTES_PER_HOUR + u16::from(minute),
        })
    }

    /// Parse a strict `HH:MM` string (two digits, colon, two digits).
    ///
    /// # Errors
    /// Returns `SlotError::Format` on any other shape, on non-numeric fields,
    /// or on an out-of-range hour or minute.
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = |reason: &str| SlotError::Format {
            input: text.to_string(),
            reason: reason.to_string(),
        };

        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(malformed("expected HH:MM"));
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(malformed("hour and minute must be numeric"));
        }

        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute).map_err(|err| match err {
            SlotError::Format { reason, .. } => SlotError::Format {
                input: text.to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn hour(self) -> u8 {
        (self.minute_of_day / MINUTES_PER_HOUR) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minute_of_day % MINUTES_PER_HOUR) as u8
    }

    /// Minutes elapsed since `00:00`.
    pub fn minute_of_day(self) -> u16 {
        self.minute_of_day
    }

    /// Advance by `minutes`, or `None` if the result would pass `23:59`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.minute_of_day).checked_add(minutes)?;
        if total < u32::from(MINUTES_PER_DAY) {
            Some(Self {
                minute_of_day: total as u16,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A half-open range `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: ClockTime,
    end: ClockTime,
}

/// Unvalidated wire shape; becomes an `Interval` only through `Interval::new`.
#[derive(Deserialize)]
struct RawInterval {
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawInterval> for Interval {
    type Error = SlotError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::new(raw.start, raw.end)
    }
}

impl Interval {
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `start >= end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both endpoints from `HH:MM` strings, then validate the range.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Length in minutes; always at least 1.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minute_of_day() - self.start.minute_of_day())
    }

    /// True iff the two half-open ranges share any point.
    ///
    /// Adjacent intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `start <= point < end`.
    pub fn contains(&self, point: ClockTime) -> bool {
        self.start <= point && point < self.end
    }

    /// True iff `other` lies entirely inside `self`.
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The parts of `self` not covered by `other`.
    ///
    /// Yields no interval when `other` covers `self`, two when `other` is
    /// strictly interior, and `self` unchanged when they do not overlap.
    pub fn subtract(&self, other: &Interval) -> Vec<Interval> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut rest = Vec::with_capacity(2);
        if self.start < other.start {
            rest.push(Interval {
                start: self.start,
                end: other.start,
            });
        }
        if other.end < self.end {
            rest.push(Interval {
                start: other.end,
                end: self.end,
            });
        }
        rest
    }

    /// Overlap length in minutes, zero when disjoint or adjacent.
    pub(crate) fn overlap_minutes(&self, other: &Interval) -> u32 {
        if !self.overlaps(other) {
            return 0;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        u32::from(end.minute_of_day() - start.minute_of_day())
    }

    /// `[start, start + minutes)`, assuming the caller checked it fits.
    pub(crate) fn truncated(&self, minutes: u32) -> Interval {
        let end = self
            .start
            .checked_add_minutes(minutes)
            .filter(|end| *end <= self.end)
            .unwrap_or(self.end);
        Interval {
            start: self.start,
            end,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
