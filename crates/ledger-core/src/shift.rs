//! Shift extraction -- clipped, duration-bearing records from raw events.
//!
//! A timed event becomes a shift when it intersects the query window; its
//! start and end are clipped to the window so boundary-straddling events
//! contribute only their in-window fraction. All-day events follow a caller
//! policy: dropped, or credited with a fixed number of hours.

use crate::error::LedgerError;
use crate::event::RawEvent;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Policy for events whose start and end are both whole-day markers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AllDayPolicy {
    /// Drop all-day events entirely.
    #[default]
    Omit,
    /// Credit each all-day event with a fixed number of hours
    /// (conventionally 8.0 or 24.0), unclipped.
    FixedHours(f64),
}

/// A clipped, duration-bearing record derived from one qualifying event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_hours: f64,
    pub is_all_day: bool,
}

/// Result of one extraction pass over a batch of raw events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftExtraction {
    /// Qualifying shifts, in input order.
    pub shifts: Vec<Shift>,
    /// Records dropped because their markers were malformed or their end
    /// preceded their start. One bad record never aborts the batch.
    pub skipped: usize,
}

impl ShiftExtraction {
    /// Sum of `duration_hours` over all shifts.
    pub fn total_hours(&self) -> f64 {
        self.shifts.iter().map(|s| s.duration_hours).sum()
    }
}

/// Extract shifts from raw events for the window `[window_start, window_end]`.
///
/// Timed events are parsed as naive local instants, discarded when they are
/// zero-length, inverted, or strictly outside the window, and clipped
/// otherwise. All-day events follow `policy`. Unparseable records are
/// counted in [`ShiftExtraction::skipped`] and processing continues.
pub fn extract_shifts(
    events: &[RawEvent],
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    policy: AllDayPolicy,
) -> ShiftExtraction {
    let mut extraction = ShiftExtraction::default();

    for event in events {
        match shift_from_event(event, window_start, window_end, policy) {
            Ok(Some(shift)) => extraction.shifts.push(shift),
            // Dropped by policy, zero-length, or outside the window.
            Ok(None) => {}
            Err(_) => extraction.skipped += 1,
        }
    }

    extraction
}

fn shift_from_event(
    event: &RawEvent,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    policy: AllDayPolicy,
) -> Result<Option<Shift>, LedgerError> {
    if event.is_all_day() {
        return match policy {
            AllDayPolicy::Omit => Ok(None),
            AllDayPolicy::FixedHours(hours) => Ok(Some(Shift {
                summary: event.summary.clone(),
                // Copied verbatim, unclipped: the fixed credit stands in for
                // the real duration.
                start: event.start.resolve_instant()?,
                end: event.end.resolve_instant()?,
                duration_hours: hours,
                is_all_day: true,
            })),
        };
    }

    let start = event.start.resolve_instant()?;
    let end = event.end.resolve_instant()?;

    if end < start {
        return Err(LedgerError::MalformedEvent(format!(
            "event '{}' ends before it starts",
            event.summary
        )));
    }
    // Zero-length, or no strict overlap with the window.
    if end == start || end <= window_start || start >= window_end {
        return Ok(None);
    }

    let clipped_start = start.max(window_start);
    let clipped_end = end.min(window_end);
    let duration_hours = (clipped_end - clipped_start).num_seconds() as f64 / 3600.0;

    Ok(Some(Shift {
        summary: event.summary.clone(),
        start: clipped_start,
        end: clipped_end,
        duration_hours,
        is_all_day: false,
    }))
}
