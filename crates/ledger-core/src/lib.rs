//! # ledger-core
//!
//! Working-hours reconciliation engine. Turns raw calendar-event payloads
//! and a public-holiday list into shifts, absence day-sets, and a report
//! of expected versus actual hours for an arbitrary date window.
//!
//! The engine is a pure computation library: single-threaded, synchronous,
//! no I/O. Fetching events, credentials, and presentation belong to the
//! shell that embeds it. All instants are naive local time; offset and
//! zone annotations on incoming payloads are discarded.
//!
//! ## Modules
//!
//! - [`weekday`] — free-form weekday expressions with circular ranges
//! - [`event`] — raw calendar event payloads (instant or whole-day markers)
//! - [`shift`] — clipped, duration-bearing shifts from raw events
//! - [`dayset`] — vacation/holiday events → canonical date sets
//! - [`overlap`] — priority rules between overlapping absence types
//! - [`report`] — contract parameters and the reconciled report
//! - [`error`] — error types
//!
//! ## Pipeline
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledger_core::{
//!     build_day_set, extract_shifts, resolve, AllDayPolicy, Contract, RawEvent, Report,
//! };
//!
//! # fn main() -> ledger_core::Result<()> {
//! let contract = Contract::new(25.0, &ledger_core::parse_weekdays("mon-fri")?)?;
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//!
//! let work: Vec<RawEvent> = vec![];
//! let vacation: Vec<RawEvent> = vec![];
//! let holidays: Vec<RawEvent> = vec![];
//!
//! let extraction = extract_shifts(
//!     &work,
//!     start.and_hms_opt(0, 0, 0).unwrap(),
//!     end.and_hms_opt(23, 59, 59).unwrap(),
//!     AllDayPolicy::FixedHours(8.0),
//! );
//! let vacation_days = build_day_set(&vacation, start, end);
//! let holiday_days = build_day_set(&holidays, start, end);
//! let adjusted = resolve(&vacation_days, &holiday_days, &contract.weekday_dates(start, end));
//!
//! let report = Report::build(contract, start, end, extraction.shifts, adjusted)?;
//! assert_eq!(report.expected_working_days, 5);
//! # Ok(())
//! # }
//! ```

pub mod dayset;
pub mod error;
pub mod event;
pub mod overlap;
pub mod report;
pub mod shift;
pub mod weekday;

pub use dayset::{build_day_set, build_day_set_with, day_set_from_holiday_map};
pub use error::{LedgerError, Result};
pub use event::{EventMarker, RawEvent};
pub use overlap::{resolve, AdjustedDaySets};
pub use report::{Contract, Report, VarianceLabel};
pub use shift::{extract_shifts, AllDayPolicy, Shift, ShiftExtraction};
pub use weekday::{format_weekdays, parse_weekdays};
