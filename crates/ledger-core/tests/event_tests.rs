//! Tests for raw event marker parsing and the payload shape.

use chrono::NaiveDateTime;
use ledger_core::{EventMarker, LedgerError, RawEvent};

#[test]
fn instant_discards_offset_and_zulu() {
    let with_offset = EventMarker::timed("2025-01-06T09:00:00+01:00");
    let with_zulu = EventMarker::timed("2025-01-06T09:00:00Z");
    let with_fraction = EventMarker::timed("2025-01-06T09:00:00.500-05:00");
    let bare = EventMarker::timed("2025-01-06T09:00:00");

    let expected: NaiveDateTime = "2025-01-06T09:00:00".parse().unwrap();
    assert_eq!(with_offset.resolve_instant().unwrap(), expected);
    assert_eq!(with_zulu.resolve_instant().unwrap(), expected);
    assert_eq!(with_fraction.resolve_instant().unwrap(), expected);
    assert_eq!(bare.resolve_instant().unwrap(), expected);
}

#[test]
fn whole_day_marker_resolves_to_midnight() {
    let marker = EventMarker::all_day("2025-01-06");
    assert!(marker.is_all_day());
    assert_eq!(
        marker.resolve_instant().unwrap().to_string(),
        "2025-01-06 00:00:00"
    );
    assert_eq!(marker.resolve_date().unwrap().to_string(), "2025-01-06");
}

#[test]
fn timed_marker_is_not_all_day() {
    assert!(!EventMarker::timed("2025-01-06T09:00:00").is_all_day());
}

#[test]
fn empty_marker_is_malformed() {
    let marker = EventMarker::default();
    assert!(matches!(
        marker.resolve_instant(),
        Err(LedgerError::MalformedEvent(_))
    ));
    assert!(matches!(
        marker.resolve_date(),
        Err(LedgerError::MalformedEvent(_))
    ));
}

#[test]
fn garbage_instant_is_malformed() {
    assert!(EventMarker::timed("not-a-timestamp").resolve_instant().is_err());
    assert!(EventMarker::all_day("06/01/2025").resolve_date().is_err());
}

#[test]
fn deserializes_google_calendar_shape() {
    let json = r#"{
        "summary": "Morning shift",
        "start": {"dateTime": "2025-01-06T09:00:00+01:00"},
        "end": {"dateTime": "2025-01-06T17:00:00+01:00"}
    }"#;
    let event: RawEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.summary, "Morning shift");
    assert!(!event.is_all_day());

    let all_day = r#"{
        "summary": "Vacation",
        "start": {"date": "2025-01-06"},
        "end": {"date": "2025-01-09"}
    }"#;
    let event: RawEvent = serde_json::from_str(all_day).unwrap();
    assert!(event.is_all_day());
}

#[test]
fn missing_summary_defaults_to_empty() {
    let json = r#"{
        "start": {"date": "2025-01-06"},
        "end": {"date": "2025-01-07"}
    }"#;
    let event: RawEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.summary, "");
}
