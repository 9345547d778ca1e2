//! WASM bindings for slot-engine.
//!
//! Exposes best-slot computation, group window expansion and submission
//! building to JavaScript via `wasm-bindgen`. All complex types are passed as
//! JSON strings, using the same camelCase shapes as the store rows the web UI
//! already handles.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Deserialize;
use slot_engine::submission::{build_submission as build_records, parse_answers};
use slot_engine::{compute_best_slots_with, parse_snapshot, EngineConfig, GroupWindow};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Options for `computeBestSlots`, e.g. `{"sorted":true,"minDurationMinutes":30}`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct BestSlotsOptions {
    sorted: bool,
    #[serde(flatten)]
    config: EngineConfig,
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations (string errors, testable off-wasm)
// ---------------------------------------------------------------------------

fn best_slots_json(records_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let records = parse_snapshot(records_json).map_err(|e| e.to_string())?;
    let options: BestSlotsOptions = match options_json {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(json).map_err(|e| format!("Invalid options JSON: {}", e))?
        }
        _ => BestSlotsOptions::default(),
    };

    let mut best = compute_best_slots_with(&records, &options.config);
    if options.sorted {
        best = best.into_sorted();
    }

    serde_json::to_string(&best).map_err(|e| format!("Serialization error: {}", e))
}

fn date_range_json(start: &str, end: &str) -> Result<String, String> {
    let window = GroupWindow::parse(start, end).map_err(|e| e.to_string())?;
    serde_json::to_string(&window.dates()).map_err(|e| format!("Serialization error: {}", e))
}

fn submission_json(
    group_id: &str,
    user_id: &str,
    start: &str,
    end: &str,
    answers_json: &str,
) -> Result<String, String> {
    let window = GroupWindow::parse(start, end).map_err(|e| e.to_string())?;
    let answers = parse_answers(answers_json).map_err(|e| e.to_string())?;
    let records = build_records(group_id, user_id, &window, &answers).map_err(|e| e.to_string())?;
    serde_json::to_string(&records).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the best meeting slot for every date in a snapshot.
///
/// `records_json` is a JSON array of availability records
/// (`{groupId, dateId, userId, date, startTime, endTime}`). `options_json` may
/// set `sorted`, `minDurationMinutes` and `minOverlapUsers`. Returns a JSON
/// object keyed by date whose values are either `null` or
/// `{startTime, endTime, overlapType, approxUsers}`.
#[wasm_bindgen(js_name = "computeBestSlots")]
pub fn compute_best_slots(records_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    best_slots_json(records_json, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// List every date from `start` through `end` (`YYYY-MM-DD`) as a JSON array.
///
/// Fails when the window is inverted or longer than seven days.
#[wasm_bindgen(js_name = "generateDateRange")]
pub fn generate_date_range(start: &str, end: &str) -> Result<String, JsValue> {
    date_range_json(start, end).map_err(|e| JsValue::from_str(&e))
}

/// Build the records that replace a user's submission for a group.
///
/// `answers_json` maps `YYYY-MM-DD` to `{startTime, endTime}` or `null`.
/// Returns a JSON array with one record per date of the window.
#[wasm_bindgen(js_name = "buildSubmission")]
pub fn build_submission(
    group_id: &str,
    user_id: &str,
    start: &str,
    end: &str,
    answers_json: &str,
) -> Result<String, JsValue> {
    submission_json(group_id, user_id, start, end, answers_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"[
        {"userId":"a","date":"2026-03-17","startTime":"09:00","endTime":"12:00"},
        {"userId":"b","date":"2026-03-17","startTime":"10:00","endTime":"13:00"},
        {"userId":"a","date":"2026-03-16","startTime":null,"endTime":null}
    ]"#;

    #[test]
    fn best_slots_default_options() {
        let json = best_slots_json(SNAPSHOT, None).unwrap();
        assert_eq!(
            json,
            r#"{"2026-03-17":{"startTime":"10:00","endTime":"12:00","overlapType":"everyone","approxUsers":2},"2026-03-16":null}"#
        );
    }

    #[test]
    fn best_slots_sorted_with_custom_minimum() {
        let json = best_slots_json(SNAPSHOT, Some(r#"{"sorted":true,"minDurationMinutes":150}"#)).unwrap();
        assert_eq!(json, r#"{"2026-03-16":null,"2026-03-17":null}"#);
    }

    #[test]
    fn best_slots_bad_input() {
        assert!(best_slots_json("{", None).unwrap_err().contains("Invalid JSON"));
        assert!(best_slots_json("[]", Some("[1]"))
            .unwrap_err()
            .contains("Invalid options JSON"));
    }

    #[test]
    fn date_range_window() {
        assert_eq!(
            date_range_json("2026-03-16", "2026-03-18").unwrap(),
            r#"["2026-03-16","2026-03-17","2026-03-18"]"#
        );
        assert!(date_range_json("2026-03-16", "2026-03-30").is_err());
    }

    #[test]
    fn submission_records() {
        let json = submission_json(
            "g1",
            "alice",
            "2026-03-16",
            "2026-03-17",
            r#"{"2026-03-17":{"startTime":"09:00","endTime":"10:00"}}"#,
        )
        .unwrap();
        let records: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 2);
        assert_eq!(records[0]["startTime"], serde_json::Value::Null);
        assert_eq!(records[1]["startTime"], "09:00");
    }
}
