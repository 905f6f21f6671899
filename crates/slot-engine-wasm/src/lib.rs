//! WASM bindings for slot-engine.
//!
//! Exposes the day-availability computation to JavaScript via `wasm-bindgen`.
//! All structured inputs and outputs cross the boundary as JSON strings with
//! camelCase field names, so the browser-side booking flow can pass its wire
//! payloads through unchanged.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use slot_engine::{
    compute_day_availability, AvailabilityQuery, AvailabilityRule, BookedAppointment,
    DayAvailability, HolidayOverride,
};

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn compute(
    query_json: &str,
    rules_json: &str,
    bookings_json: &str,
    holidays_json: &str,
) -> Result<DayAvailability, JsValue> {
    let query: AvailabilityQuery = parse_json(query_json, "query")?;
    let rules: Vec<AvailabilityRule> = parse_json(rules_json, "rules")?;
    let bookings: Vec<BookedAppointment> = parse_json(bookings_json, "bookings")?;
    let holidays: Vec<HolidayOverride> = parse_json(holidays_json, "holidays")?;

    compute_day_availability(&query, &rules, &bookings, &holidays)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute one day's availability grid.
///
/// `query_json` is an object like
/// `{"facilityId":"gate-7","date":"2026-03-16","mode":"live"}`;
/// `rules_json`, `bookings_json`, and `holidays_json` are JSON arrays.
/// Returns the serialized day availability (slots, first-available pointer,
/// and diagnostics), or throws a string error.
#[wasm_bindgen(js_name = "computeDayAvailability")]
pub fn compute_day_availability_js(
    query_json: &str,
    rules_json: &str,
    bookings_json: &str,
    holidays_json: &str,
) -> Result<String, JsValue> {
    let day = compute(query_json, rules_json, bookings_json, holidays_json)?;
    serde_json::to_string(&day)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// First bookable start time for the day as `HH:MM`, or `null` when the day
/// has no available slot.
///
/// Takes the same inputs as [`compute_day_availability_js`].
#[wasm_bindgen(js_name = "firstAvailable")]
pub fn first_available_js(
    query_json: &str,
    rules_json: &str,
    bookings_json: &str,
    holidays_json: &str,
) -> Result<Option<String>, JsValue> {
    let day = compute(query_json, rules_json, bookings_json, holidays_json)?;
    Ok(day.first_available.map(|t| t.to_string()))
}
