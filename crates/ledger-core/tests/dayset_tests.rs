//! Tests for absence day-set building: exclusive-end handling, range
//! clipping, and the holiday-map conversion.

use chrono::NaiveDate;
use ledger_core::dayset::{build_day_set, build_day_set_with, day_set_from_holiday_map};
use ledger_core::{EventMarker, RawEvent};
use std::collections::{BTreeMap, BTreeSet};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn days(texts: &[&str]) -> BTreeSet<NaiveDate> {
    texts.iter().map(|t| day(t)).collect()
}

fn all_day_event(summary: &str, start: &str, end: &str) -> RawEvent {
    RawEvent::new(summary, EventMarker::all_day(start), EventMarker::all_day(end))
}

// ── Exclusive-end convention ────────────────────────────────────────────────

#[test]
fn all_day_span_end_is_exclusive() {
    // Whole-day markers 01-06 to 01-09 cover exactly 01-06, 01-07, 01-08.
    let events = vec![all_day_event("Vacation", "2025-01-06", "2025-01-09")];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert_eq!(set, days(&["2025-01-06", "2025-01-07", "2025-01-08"]));
}

#[test]
fn single_all_day_event_covers_one_date() {
    let events = vec![all_day_event("Day off", "2025-01-06", "2025-01-07")];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert_eq!(set, days(&["2025-01-06"]));
}

#[test]
fn timed_markers_use_their_date_component_unadjusted() {
    let events = vec![RawEvent::new(
        "Timed leave",
        EventMarker::timed("2025-01-06T08:00:00"),
        EventMarker::timed("2025-01-08T16:00:00+01:00"),
    )];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert_eq!(set, days(&["2025-01-06", "2025-01-07", "2025-01-08"]));
}

// ── Clipping ────────────────────────────────────────────────────────────────

#[test]
fn span_is_clipped_to_the_range() {
    let events = vec![all_day_event("Long leave", "2024-12-20", "2025-01-11")];
    let set = build_day_set(&events, day("2025-01-06"), day("2025-01-08"));
    assert_eq!(set, days(&["2025-01-06", "2025-01-07", "2025-01-08"]));
}

#[test]
fn event_entirely_outside_the_range_contributes_nothing() {
    let events = vec![all_day_event("Elsewhere", "2025-02-01", "2025-02-05")];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert!(set.is_empty());
}

#[test]
fn overlapping_events_collapse_into_one_set() {
    let events = vec![
        all_day_event("First", "2025-01-06", "2025-01-08"),
        all_day_event("Second", "2025-01-07", "2025-01-10"),
    ];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert_eq!(
        set,
        days(&["2025-01-06", "2025-01-07", "2025-01-08", "2025-01-09"])
    );
}

#[test]
fn unparseable_event_is_skipped_individually() {
    let events = vec![
        all_day_event("Good", "2025-01-06", "2025-01-07"),
        all_day_event("Bad", "garbage", "2025-01-10"),
        all_day_event("Also good", "2025-01-09", "2025-01-10"),
    ];
    let set = build_day_set(&events, day("2025-01-01"), day("2025-01-31"));
    assert_eq!(set, days(&["2025-01-06", "2025-01-09"]));
}

#[test]
fn empty_event_list_yields_empty_set() {
    let set = build_day_set(&[], day("2025-01-01"), day("2025-01-31"));
    assert!(set.is_empty());
}

// ── Parametrized mapper ─────────────────────────────────────────────────────

#[test]
fn custom_mapper_replaces_the_default_span_resolution() {
    // A mapper that charges only the first day of each event.
    let events = vec![all_day_event("Leave", "2025-01-06", "2025-01-09")];
    let set = build_day_set_with(&events, day("2025-01-01"), day("2025-01-31"), |event| {
        let start = event.start.resolve_date()?;
        Ok((start, start))
    });
    assert_eq!(set, days(&["2025-01-06"]));
}

// ── Holiday map conversion ──────────────────────────────────────────────────

#[test]
fn holiday_map_converts_and_clips() {
    let mut holidays = BTreeMap::new();
    holidays.insert(day("2025-01-01"), "New Year".to_string());
    holidays.insert(day("2025-01-06"), "Epiphany".to_string());
    holidays.insert(day("2025-12-25"), "Christmas".to_string());

    let set = day_set_from_holiday_map(&holidays, day("2025-01-01"), day("2025-06-30"));
    assert_eq!(set, days(&["2025-01-01", "2025-01-06"]));
}
