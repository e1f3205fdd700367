//! Absence day-set building.
//!
//! Converts vacation or holiday sources into canonical sets of whole
//! calendar dates, clipped to a closed date range. Vacation and holiday
//! events share one parametrized builder; a precomputed {date -> title}
//! holiday map converts directly.

use crate::error::Result;
use crate::event::RawEvent;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Build a day-set from raw events using the default event mapper.
///
/// Every date each event covers inside `[range_start, range_end]` lands in
/// the result; duplicates across events collapse naturally. Events whose
/// markers fail to parse are skipped individually.
pub fn build_day_set(
    events: &[RawEvent],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> BTreeSet<NaiveDate> {
    build_day_set_with(events, range_start, range_end, event_day_span)
}

/// Build a day-set with a source-specific event-to-date-span mapper.
///
/// `mapper` resolves one event to the inclusive `(start, end)` date pair it
/// covers; a mapper error skips that event and the batch continues. The
/// span is clipped to the range; an inverted clip contributes nothing.
pub fn build_day_set_with<F>(
    events: &[RawEvent],
    range_start: NaiveDate,
    range_end: NaiveDate,
    mapper: F,
) -> BTreeSet<NaiveDate>
where
    F: Fn(&RawEvent) -> Result<(NaiveDate, NaiveDate)>,
{
    let mut days = BTreeSet::new();

    for event in events {
        let (start, end) = match mapper(event) {
            Ok(span) => span,
            Err(_) => continue,
        };

        let clipped_start = start.max(range_start);
        let clipped_end = end.min(range_end);
        if clipped_start > clipped_end {
            continue;
        }

        for day in clipped_start.iter_days() {
            if day > clipped_end {
                break;
            }
            days.insert(day);
        }
    }

    days
}

/// Default mapper: resolve both markers to dates and apply the
/// exclusive-end convention for all-day spans.
///
/// A whole-day end marker names the day after the last covered day, so when
/// both markers are whole-day the end date is pulled back by one. Timed
/// markers use their date component unadjusted.
pub fn event_day_span(event: &RawEvent) -> Result<(NaiveDate, NaiveDate)> {
    let start = event.start.resolve_date()?;
    let mut end = event.end.resolve_date()?;

    if event.is_all_day() {
        if let Some(inclusive_end) = end.pred_opt() {
            end = inclusive_end;
        }
    }

    Ok((start, end))
}

/// Convert a precomputed {date -> title} holiday map into a day-set,
/// clipped to `[range_start, range_end]`.
pub fn day_set_from_holiday_map(
    holidays: &BTreeMap<NaiveDate, String>,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> BTreeSet<NaiveDate> {
    holidays
        .keys()
        .filter(|&&date| date >= range_start && date <= range_end)
        .copied()
        .collect()
}
