//! Raw calendar event payloads.
//!
//! Mirrors the Google Calendar API event shape: a summary plus start/end
//! markers that are either an instant (`dateTime`, RFC 3339) or a whole-day
//! marker (`date`, end-exclusive per calendar-export convention). The engine
//! normalizes instants to naive local time; offset and zone annotations are
//! discarded.

use crate::error::{LedgerError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One boundary of a calendar event: either a whole-day date or an instant.
///
/// Exactly one of the two fields is expected to be set; a marker with
/// neither is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventMarker {
    /// Whole-day marker, `YYYY-MM-DD`. An end marker in this form is
    /// exclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Instant marker, RFC 3339 (e.g. `2025-01-06T09:00:00+01:00`).
    #[serde(default, rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl EventMarker {
    /// A whole-day marker.
    pub fn all_day(date: &str) -> Self {
        EventMarker {
            date: Some(date.to_string()),
            date_time: None,
        }
    }

    /// An instant marker.
    pub fn timed(date_time: &str) -> Self {
        EventMarker {
            date: None,
            date_time: Some(date_time.to_string()),
        }
    }

    /// True when this marker carries a date only, no time-of-day.
    pub fn is_all_day(&self) -> bool {
        self.date.is_some() && self.date_time.is_none()
    }

    /// Resolve this marker to a naive local instant.
    ///
    /// Instant markers keep their wall-clock reading; any trailing offset or
    /// `Z` annotation is discarded. Whole-day markers resolve to midnight.
    pub fn resolve_instant(&self) -> Result<NaiveDateTime> {
        if let Some(text) = &self.date_time {
            return parse_naive_instant(text);
        }
        if let Some(text) = &self.date {
            let date = parse_naive_date(text)?;
            return Ok(date.and_time(NaiveTime::MIN));
        }
        Err(LedgerError::MalformedEvent(
            "event marker has neither date nor dateTime".to_string(),
        ))
    }

    /// Resolve this marker to its date component.
    pub fn resolve_date(&self) -> Result<NaiveDate> {
        if let Some(text) = &self.date {
            return parse_naive_date(text);
        }
        if let Some(text) = &self.date_time {
            return Ok(parse_naive_instant(text)?.date());
        }
        Err(LedgerError::MalformedEvent(
            "event marker has neither date nor dateTime".to_string(),
        ))
    }
}

/// A raw calendar event as handed over by the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event title.
    #[serde(default)]
    pub summary: String,
    pub start: EventMarker,
    pub end: EventMarker,
}

impl RawEvent {
    pub fn new(summary: &str, start: EventMarker, end: EventMarker) -> Self {
        RawEvent {
            summary: summary.to_string(),
            start,
            end,
        }
    }

    /// True when both boundaries are whole-day markers.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day() && self.end.is_all_day()
    }
}

/// Parse an instant as naive local time, discarding any offset or zone.
///
/// Accepts `2025-01-06T09:00:00`, the same with a trailing `Z` or
/// `+hh:mm`/`-hh:mm` offset, and fractional seconds. The wall-clock prefix
/// is what counts.
fn parse_naive_instant(text: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    // Slice off fractional seconds and offset/zone annotations.
    if let Some(prefix) = text.get(..19) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt);
        }
    }
    Err(LedgerError::MalformedEvent(format!(
        "unparseable instant: {}",
        text
    )))
}

fn parse_naive_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| LedgerError::MalformedEvent(format!("unparseable date: {}", text)))
}
