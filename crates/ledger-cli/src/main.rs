//! `ledger` CLI — reconcile recorded work against contracted hours.
//!
//! Consumes already-fetched calendar payloads (JSON files); it performs no
//! network calls itself.
//!
//! ## Usage
//!
//! ```sh
//! # Reconcile a week of work against a 25h Mon-Fri contract
//! ledger report --from 2025-01-06 --to 2025-01-10 \
//!     --weekly-hours 25 --weekdays mon-fri \
//!     --work work.json --vacation vacation.json --holidays holidays.json
//!
//! # All-day work events credited with 8 hours instead of being dropped
//! ledger report ... --all-day 8
//!
//! # Machine-readable output
//! ledger report ... --json
//!
//! # Normalize a weekday expression (exit code 1 on invalid input)
//! ledger weekdays "fri - mon, wed"
//! ```

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use ledger_core::{
    build_day_set, day_set_from_holiday_map, extract_shifts, format_weekdays, parse_weekdays,
    resolve, AllDayPolicy, Contract, RawEvent, Report,
};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Working-hours reconciliation from calendar exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile work, vacation, and holiday payloads against a contract
    Report {
        /// First day of the report window (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the report window, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Contracted hours per week
        #[arg(long)]
        weekly_hours: f64,
        /// Working weekdays, e.g. "mon-fri" or "mon, wed, fri-sun"
        #[arg(long)]
        weekdays: String,
        /// JSON file with work calendar events
        #[arg(long)]
        work: Option<String>,
        /// JSON file with vacation calendar events
        #[arg(long)]
        vacation: Option<String>,
        /// JSON file with holiday events, or a {"YYYY-MM-DD": "title"} map
        #[arg(long)]
        holidays: Option<String>,
        /// All-day work event policy: "omit", or the hours to credit (8, 24)
        #[arg(long, default_value = "omit")]
        all_day: String,
        /// Emit the full report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Parse a weekday expression and print its canonical form
    Weekdays {
        /// Expression such as "mon-fri" or "sat, sun"
        expr: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            from,
            to,
            weekly_hours,
            weekdays,
            work,
            vacation,
            holidays,
            all_day,
            json,
        } => run_report(ReportArgs {
            from,
            to,
            weekly_hours,
            weekdays,
            work,
            vacation,
            holidays,
            all_day,
            json,
        }),
        Commands::Weekdays { expr } => {
            let days = parse_weekdays(&expr)?;
            println!("{}", format_weekdays(&days));
            Ok(())
        }
    }
}

struct ReportArgs {
    from: NaiveDate,
    to: NaiveDate,
    weekly_hours: f64,
    weekdays: String,
    work: Option<String>,
    vacation: Option<String>,
    holidays: Option<String>,
    all_day: String,
    json: bool,
}

fn run_report(args: ReportArgs) -> Result<()> {
    let contract = Contract::new(args.weekly_hours, &parse_weekdays(&args.weekdays)?)?;
    let policy = parse_all_day_policy(&args.all_day)?;

    let work_events = load_events(args.work.as_deref())?;
    let vacation_events = load_events(args.vacation.as_deref())?;

    let (window_start, window_end) = day_window(args.from, args.to)?;
    let extraction = extract_shifts(&work_events, window_start, window_end, policy);

    let vacation_days = build_day_set(&vacation_events, args.from, args.to);
    let holiday_days = load_holiday_days(args.holidays.as_deref(), args.from, args.to)?;
    let adjusted = resolve(
        &vacation_days,
        &holiday_days,
        &contract.weekday_dates(args.from, args.to),
    );

    if extraction.skipped > 0 {
        eprintln!(
            "warning: skipped {} malformed work event record(s)",
            extraction.skipped
        );
    }

    let report = Report::build(contract, args.from, args.to, extraction.shifts, adjusted)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Instant window covering the closed date window: from midnight on the
/// first day up to midnight after the last day.
fn day_window(from: NaiveDate, to: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let start = from.and_time(NaiveTime::MIN);
    let end = to
        .succ_opt()
        .context("report window end is out of calendar range")?
        .and_time(NaiveTime::MIN);
    Ok((start, end))
}

fn parse_all_day_policy(text: &str) -> Result<AllDayPolicy> {
    if text.eq_ignore_ascii_case("omit") {
        return Ok(AllDayPolicy::Omit);
    }
    let hours: f64 = text
        .parse()
        .with_context(|| format!("invalid --all-day value: '{}'", text))?;
    if !hours.is_finite() || hours <= 0.0 {
        bail!("--all-day hours must be positive, got {}", text);
    }
    Ok(AllDayPolicy::FixedHours(hours))
}

/// Load a JSON array of raw calendar events; a missing flag means no events.
fn load_events(path: Option<&str>) -> Result<Vec<RawEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse events in {}", path))
}

/// Load holiday days from either an event array or a {date: title} map,
/// clipped to the report window.
fn load_holiday_days(
    path: Option<&str>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<BTreeSet<NaiveDate>> {
    let Some(path) = path else {
        return Ok(BTreeSet::new());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse holidays in {}", path))?;

    if value.is_array() {
        let events: Vec<RawEvent> = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse holiday events in {}", path))?;
        Ok(build_day_set(&events, from, to))
    } else {
        let map: BTreeMap<NaiveDate, String> = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse holiday map in {}", path))?;
        Ok(day_set_from_holiday_map(&map, from, to))
    }
}
