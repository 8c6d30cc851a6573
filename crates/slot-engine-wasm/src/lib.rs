//! WASM bindings for slot-engine.
//!
//! Exposes the per-date query surface to JavaScript via `wasm-bindgen`. The
//! schedule document and every interval list cross the boundary as JSON
//! strings; intervals are `{start, end}` objects with `HH:MM` strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::{ClockTime, DaySchedule, ScheduleResponse, SlotError};
use wasm_bindgen::prelude::*;

fn to_js_err(e: SlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse the schedule document and build the schedule for `date`.
fn load_day(schedule_json: &str, date: &str) -> Result<DaySchedule, JsValue> {
    let date = slot_engine::parse_date(date).map_err(to_js_err)?;
    let response = ScheduleResponse::from_json(schedule_json).map_err(to_js_err)?;
    DaySchedule::from_provider(&response, date).map_err(to_js_err)
}

/// Busy timeslots for a date, sorted by start.
///
/// Returns a JSON array of `{start, end}` objects. Throws if the document is
/// malformed, the date is unknown, or the day's timeslots overlap or fall
/// outside the working window.
#[wasm_bindgen(js_name = "busySlots")]
pub fn busy_slots(schedule_json: &str, date: &str) -> Result<String, JsValue> {
    let day = load_day(schedule_json, date)?;
    to_json(day.busy_slots())
}

/// Free intervals within the working window for a date.
///
/// Returns a JSON array of `{start, end}` objects.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(schedule_json: &str, date: &str) -> Result<String, JsValue> {
    let day = load_day(schedule_json, date)?;
    to_json(day.free_slots())
}

/// Whether `[start, end)` fits inside a single free interval.
#[wasm_bindgen(js_name = "isAvailable")]
pub fn is_available(schedule_json: &str, date: &str, start: &str, end: &str) -> Result<bool, JsValue> {
    let day = load_day(schedule_json, date)?;
    let start = ClockTime::parse(start).map_err(to_js_err)?;
    let end = ClockTime::parse(end).map_err(to_js_err)?;
    day.is_available(start, end).map_err(to_js_err)
}

/// The earliest free slot of exactly `duration_minutes`.
///
/// Returns a JSON `{start, end}` object, or the JSON string `null` when no
/// free interval is long enough.
#[wasm_bindgen(js_name = "findSlotForDuration")]
pub fn find_slot_for_duration(
    schedule_json: &str,
    date: &str,
    duration_minutes: i32,
) -> Result<String, JsValue> {
    let day = load_day(schedule_json, date)?;
    let slot = day
        .find_slot_for_duration(i64::from(duration_minutes))
        .map_err(to_js_err)?;
    to_json(&slot)
}
