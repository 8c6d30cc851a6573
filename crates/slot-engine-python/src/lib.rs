//! # slot-engine-python
//!
//! Python bindings for slot-engine, built with PyO3.
//!
//! Exposes the following functions to Python as the `day_slots` module. Each
//! takes the schedule document as a JSON string plus a `YYYY-MM-DD` date:
//!
//! - `get_busy_slots(schedule_json, date)` -- list of `(start, end)` tuples
//! - `get_free_slots(schedule_json, date)` -- list of `(start, end)` tuples
//! - `is_available(schedule_json, date, start, end)` -- bool
//! - `find_slot_for_duration(schedule_json, date, duration_minutes)` --
//!   `(start, end)` or `None`

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use slot_engine::{ClockTime, DaySchedule, Interval, ScheduleResponse};

fn to_py_err(e: slot_engine::SlotError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Parse the document and build the schedule for one date.
fn load_day(schedule_json: &str, date: &str) -> PyResult<DaySchedule> {
    let date = slot_engine::parse_date(date).map_err(to_py_err)?;
    let response = ScheduleResponse::from_json(schedule_json).map_err(to_py_err)?;
    DaySchedule::from_provider(&response, date).map_err(to_py_err)
}

fn as_pair(slot: &Interval) -> (String, String) {
    (slot.start().to_string(), slot.end().to_string())
}

/// Busy timeslots for a date, sorted by start.
///
/// Raises:
///     ValueError: If the document is malformed, the date is unknown, or the
///         day's timeslots overlap or fall outside the working window.
#[pyfunction]
fn get_busy_slots(schedule_json: &str, date: &str) -> PyResult<Vec<(String, String)>> {
    let day = load_day(schedule_json, date)?;
    Ok(day.busy_slots().iter().map(as_pair).collect())
}

/// Free intervals within the working window for a date.
///
/// Raises:
///     ValueError: As for `get_busy_slots`.
#[pyfunction]
fn get_free_slots(schedule_json: &str, date: &str) -> PyResult<Vec<(String, String)>> {
    let day = load_day(schedule_json, date)?;
    Ok(day.free_slots().iter().map(as_pair).collect())
}

/// Whether `[start, end)` fits inside a single free interval.
///
/// Args:
///     start: Range start as "HH:MM".
///     end: Range end as "HH:MM" (exclusive).
///
/// Raises:
///     ValueError: As for `get_busy_slots`, or if the range is malformed.
#[pyfunction]
fn is_available(schedule_json: &str, date: &str, start: &str, end: &str) -> PyResult<bool> {
    let day = load_day(schedule_json, date)?;
    let start = ClockTime::parse(start).map_err(to_py_err)?;
    let end = ClockTime::parse(end).map_err(to_py_err)?;
    day.is_available(start, end).map_err(to_py_err)
}

/// The earliest free slot of exactly `duration_minutes`, or `None`.
///
/// Raises:
///     ValueError: As for `get_busy_slots`, or if the duration is not positive.
#[pyfunction]
fn find_slot_for_duration(
    schedule_json: &str,
    date: &str,
    duration_minutes: i64,
) -> PyResult<Option<(String, String)>> {
    let day = load_day(schedule_json, date)?;
    let slot = day
        .find_slot_for_duration(duration_minutes)
        .map_err(to_py_err)?;
    Ok(slot.as_ref().map(as_pair))
}

/// The `day_slots` Python module, implemented in Rust via PyO3.
#[pymodule]
fn day_slots(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_busy_slots, m)?)?;
    m.add_function(wrap_pyfunction!(get_free_slots, m)?)?;
    m.add_function(wrap_pyfunction!(is_available, m)?)?;
    m.add_function(wrap_pyfunction!(find_slot_for_duration, m)?)?;
    Ok(())
}
