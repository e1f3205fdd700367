//! Free-form weekday expression parsing with circular ranges.
//!
//! Turns text like `"mon-wed, fri"` or `"Fri - Mon"` into an ordered,
//! deduplicated set of weekdays. Ranges are circular: `fri-mon` wraps across
//! the week boundary and covers Fri, Sat, Sun, Mon. Any unrecognized token
//! invalidates the whole input; there is no partial acceptance.

use crate::error::{LedgerError, Result};
use chrono::Weekday;
use std::collections::BTreeSet;

/// Full English day names, Monday first. A token matches a day when it is a
/// 2-9 letter case-insensitive prefix of its name (`mo`, `mon`, `monday`).
const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// All seven weekdays, Monday first, indexable by `weekday_index`.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Monday-based index of a weekday (Mon=0 .. Sun=6).
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Weekday for a Monday-based index, modulo 7.
pub fn weekday_from_index(index: u8) -> Weekday {
    WEEKDAYS[(index % 7) as usize]
}

/// Parse a free-form weekday expression into an ordered, deduplicated set.
///
/// Tokens are separated by whitespace and/or commas. Each token is either a
/// single day alias (`mo`, `mon`, `monday`, case-insensitive) or a
/// hyphen-joined range of two aliases. Unicode dashes (en-dash, em-dash,
/// minus) are treated as hyphens, and whitespace around a dash is ignored,
/// so `"Fri – Mon"` parses the same as `"fri-mon"`.
///
/// Ranges resolve circularly by walking indices modulo 7: when the start
/// index exceeds the end index the range wraps across the week boundary.
///
/// The result is ascending by Monday-based index, each day at most once.
///
/// # Errors
/// Returns [`LedgerError::InvalidWeekdayInput`] when any token is
/// unrecognized, a range is missing a side, or no day survives parsing.
pub fn parse_weekdays(input: &str) -> Result<Vec<Weekday>> {
    let normalized = normalize(input);
    let mut indices: BTreeSet<u8> = BTreeSet::new();

    for token in normalized.split_whitespace() {
        if token.contains('-') {
            collect_range(token, &mut indices)?;
        } else {
            let index = alias_index(token).ok_or_else(|| {
                LedgerError::InvalidWeekdayInput(format!("unknown weekday: '{}'", token))
            })?;
            indices.insert(index);
        }
    }

    if indices.is_empty() {
        return Err(LedgerError::InvalidWeekdayInput(
            "no valid weekday found".to_string(),
        ));
    }

    Ok(indices
        .into_iter()
        .map(|i| WEEKDAYS[i as usize])
        .collect())
}

/// Canonical rendering of a weekday set: three-letter lowercase aliases
/// joined by `", "`. Parsing the rendering yields the same set back.
pub fn format_weekdays(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| &DAY_NAMES[weekday_index(*d) as usize][..3])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unify separators: commas become spaces, dash-like characters become `-`,
/// and whitespace around a dash is removed so a spaced range stays one token.
fn normalize(input: &str) -> String {
    let mut out: String = input
        .chars()
        .map(|c| match c {
            ',' => ' ',
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect();

    while out.contains(" -") {
        out = out.replace(" -", "-");
    }
    while out.contains("- ") {
        out = out.replace("- ", "-");
    }
    out
}

/// Resolve a single alias token to its Monday-based index.
fn alias_index(token: &str) -> Option<u8> {
    if token.len() < 2 || token.len() > 9 || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let lower = token.to_ascii_lowercase();
    DAY_NAMES
        .iter()
        .position(|name| name.starts_with(&lower))
        .map(|i| i as u8)
}

/// Expand a `start-end` range token into `indices`, walking modulo 7.
fn collect_range(token: &str, indices: &mut BTreeSet<u8>) -> Result<()> {
    let mut sides = token.split('-');
    let (start, end) = match (sides.next(), sides.next(), sides.next()) {
        (Some(start), Some(end), None) if !start.is_empty() && !end.is_empty() => (start, end),
        _ => {
            return Err(LedgerError::InvalidWeekdayInput(format!(
                "malformed weekday range: '{}'",
                token
            )))
        }
    };

    let start_index = alias_index(start).ok_or_else(|| {
        LedgerError::InvalidWeekdayInput(format!("unknown weekday: '{}'", start))
    })?;
    let end_index = alias_index(end).ok_or_else(|| {
        LedgerError::InvalidWeekdayInput(format!("unknown weekday: '{}'", end))
    })?;

    let mut index = start_index;
    loop {
        indices.insert(index);
        if index == end_index {
            break;
        }
        index = (index + 1) % 7;
    }
    Ok(())
}
