//! # slot-engine
//!
//! Free/busy interval arithmetic for a single working day.
//!
//! Given a day's working window and the timeslots already booked inside it,
//! the engine computes the free intervals, checks whether a requested range
//! is available, and finds the earliest slot of a requested duration.
//!
//! ```rust
//! use slot_engine::DaySchedule;
//!
//! let day = DaySchedule::parse(("09:00", "18:00"), &[("11:00", "12:00"), ("14:00", "15:00")]).unwrap();
//! let free: Vec<String> = day.free_slots().iter().map(|s| s.to_string()).collect();
//! assert_eq!(free, ["09:00-11:00", "12:00-14:00", "15:00-18:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] -- `ClockTime` points and half-open `Interval`s
//! - [`conflict`] -- Detect overlapping busy intervals
//! - [`freebusy`] -- Free-slot sweep and first-fit search
//! - [`schedule`] -- `DaySchedule`, the per-date query surface
//! - [`provider`] -- Schedule document shape and the `ScheduleProvider` trait
//! - [`error`] -- Error types

pub mod conflict;
pub mod error;
pub mod freebusy;
pub mod provider;
pub mod schedule;
pub mod time;

pub use conflict::{find_conflicts, Conflict};
pub use error::SlotError;
pub use provider::{parse_date, DayRecordSet, ScheduleProvider, ScheduleResponse, TimeRange};
pub use schedule::DaySchedule;
pub use time::{ClockTime, Interval};
