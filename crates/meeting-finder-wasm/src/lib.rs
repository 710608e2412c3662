//! WASM bindings for meeting-finder.
//!
//! Exposes the meeting slot search and busy-range merging to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-finder-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_finder_wasm.wasm
//! ```

use meeting_finder::{Event, MeetingRequest, QueryCase, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    start: u32,
    end: u32,
    duration: u32,
}

impl From<&TimeRange> for SlotDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

#[derive(Serialize)]
struct QueryDto {
    case: QueryCase,
    slots: Vec<SlotDto>,
}

// ---------------------------------------------------------------------------
// JSON-level implementations, kept free of `JsValue` so they run natively
// ---------------------------------------------------------------------------

fn find_meeting_times_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let events: Vec<Event> =
        serde_json::from_str(events_json).map_err(|e| format!("Invalid events JSON: {}", e))?;
    let request: MeetingRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {}", e))?;

    let outcome = meeting_finder::query_with_outcome(&events, &request);
    let dto = QueryDto {
        case: outcome.case,
        slots: outcome.ranges.iter().map(SlotDto::from).collect(),
    };

    serde_json::to_string(&dto).map_err(|e| format!("Serialization error: {}", e))
}

fn normalize_busy_json(ranges_json: &str) -> Result<String, String> {
    let ranges: Vec<TimeRange> =
        serde_json::from_str(ranges_json).map_err(|e| format!("Invalid ranges JSON: {}", e))?;

    let merged: Vec<SlotDto> = meeting_finder::normalize(ranges)
        .iter()
        .map(SlotDto::from)
        .collect();

    serde_json::to_string(&merged).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot in the day that can hold the requested meeting.
///
/// `events_json` is a JSON array of
/// `{title, when: {start, end}, attendees: [..]}` objects, with times in
/// minutes since midnight. `request_json` is
/// `{duration, attendees: [..], optional_attendees: [..]}`. Returns a JSON
/// string `{case, slots: [{start, end, duration}]}`.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    find_meeting_times_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Sort and merge a JSON array of `{start, end}` ranges into disjoint busy ranges.
#[wasm_bindgen(js_name = "normalizeBusy")]
pub fn normalize_busy(ranges_json: &str) -> Result<String, JsValue> {
    normalize_busy_json(ranges_json).map_err(|e| JsValue::from_str(&e))
}
