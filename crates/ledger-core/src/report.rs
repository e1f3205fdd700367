//! Contract parameters and the reconciliation report.
//!
//! A report combines a contract, a closed date window, the extracted shift
//! list, and the adjusted absence day-sets into expected/actual metrics and
//! a signed variance. Reports are built once per window and never mutated;
//! a new window requires a new report.

use crate::error::{LedgerError, Result};
use crate::overlap::AdjustedDaySets;
use crate::shift::Shift;
use crate::weekday::{format_weekdays, weekday_from_index, weekday_index};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Weekly-hours and working-weekday agreement.
///
/// Immutable after construction; `working_weekdays` is sorted ascending by
/// Monday-based index, deduplicated, and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    weekly_hours: f64,
    working_weekdays: Vec<Weekday>,
}

impl Contract {
    /// Build a contract, normalizing the weekday list.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidContract`] when `weekly_hours` is not
    /// a positive finite number or `working_weekdays` is empty.
    pub fn new(weekly_hours: f64, working_weekdays: &[Weekday]) -> Result<Self> {
        if !weekly_hours.is_finite() || weekly_hours <= 0.0 {
            return Err(LedgerError::InvalidContract(format!(
                "weekly hours must be positive, got {}",
                weekly_hours
            )));
        }
        if working_weekdays.is_empty() {
            return Err(LedgerError::InvalidContract(
                "at least one working weekday is required".to_string(),
            ));
        }

        let indices: BTreeSet<u8> = working_weekdays.iter().map(|d| weekday_index(*d)).collect();
        let working_weekdays = indices.into_iter().map(weekday_from_index).collect();

        Ok(Contract {
            weekly_hours,
            working_weekdays,
        })
    }

    pub fn weekly_hours(&self) -> f64 {
        self.weekly_hours
    }

    pub fn working_weekdays(&self) -> &[Weekday] {
        &self.working_weekdays
    }

    /// True when `date` falls on a contract working weekday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_weekdays.contains(&date.weekday())
    }

    /// All dates in `[start, end]` that fall on a contract working weekday.
    pub fn weekday_dates(&self, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_working_day(*day))
            .collect()
    }

    /// Average contracted hours per working day.
    ///
    /// # Errors
    /// Returns [`LedgerError::DivisionUndefined`] when the weekday set is
    /// empty. The constructor precludes this, but the guard stays so a
    /// hand-rolled contract can never yield an infinite result.
    pub fn hours_per_working_day(&self) -> Result<f64> {
        if self.working_weekdays.is_empty() {
            return Err(LedgerError::DivisionUndefined);
        }
        Ok(self.weekly_hours / self.working_weekdays.len() as f64)
    }
}

/// Whether actual hours landed above, below, or on the expected hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceLabel {
    Above,
    Below,
    OnTarget,
}

impl fmt::Display for VarianceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarianceLabel::Above => write!(f, "above target"),
            VarianceLabel::Below => write!(f, "below target"),
            VarianceLabel::OnTarget => write!(f, "on target"),
        }
    }
}

/// Reconciled expected-vs-actual working hours for one closed date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub contract: Contract,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// The shifts the actual metrics were derived from.
    pub shifts: Vec<Shift>,
    /// The adjusted absence day-sets the expected metrics were derived from.
    pub adjusted: AdjustedDaySets,
    /// Working-weekday dates in the window minus adjusted absence days.
    pub expected_working_days: usize,
    pub vacation_days: usize,
    pub holiday_days: usize,
    /// Distinct days off across both absence categories.
    pub total_days_off: usize,
    /// Distinct calendar dates with at least one shift start.
    pub actual_worked_days: usize,
    pub actual_worked_hours: f64,
    pub expected_working_hours: f64,
    /// `actual_worked_hours - expected_working_hours`, rounded to 2 dp.
    pub variance: f64,
}

impl Report {
    /// Derive all metrics for the closed window `[window_start, window_end]`.
    ///
    /// A single-day window is valid; empty shift lists and absence sets
    /// degrade to zero-valued metrics.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidWindow`] when the window end precedes
    /// its start, and [`LedgerError::DivisionUndefined`] when the contract
    /// weekday set is empty.
    pub fn build(
        contract: Contract,
        window_start: NaiveDate,
        window_end: NaiveDate,
        shifts: Vec<Shift>,
        adjusted: AdjustedDaySets,
    ) -> Result<Report> {
        if window_end < window_start {
            return Err(LedgerError::InvalidWindow(format!(
                "window end {} precedes start {}",
                window_end, window_start
            )));
        }

        let hours_per_day = contract.hours_per_working_day()?;

        let expected_working_days = window_start
            .iter_days()
            .take_while(|day| *day <= window_end)
            .filter(|day| {
                contract.is_working_day(*day)
                    && !adjusted.holiday.contains(day)
                    && !adjusted.vacation.contains(day)
            })
            .count();

        let worked_dates: BTreeSet<NaiveDate> = shifts.iter().map(|s| s.start.date()).collect();
        // Fold from +0.0: `Sum<f64>` starts at -0.0, which would print an
        // empty window's worked hours as "-0.00".
        let actual_worked_hours: f64 = shifts.iter().fold(0.0, |acc, s| acc + s.duration_hours);

        let expected_working_hours = round2(expected_working_days as f64 * hours_per_day);
        let variance = round2(actual_worked_hours - expected_working_hours);

        Ok(Report {
            vacation_days: adjusted.vacation.len(),
            holiday_days: adjusted.holiday.len(),
            total_days_off: adjusted.total_days_off(),
            actual_worked_days: worked_dates.len(),
            contract,
            window_start,
            window_end,
            shifts,
            adjusted,
            expected_working_days,
            actual_worked_hours,
            expected_working_hours,
            variance,
        })
    }

    pub fn variance_label(&self) -> VarianceLabel {
        if self.variance > 0.0 {
            VarianceLabel::Above
        } else if self.variance < 0.0 {
            VarianceLabel::Below
        } else {
            VarianceLabel::OnTarget
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Window:                {} to {}",
            self.window_start, self.window_end
        )?;
        writeln!(
            f,
            "Contract:              {:.2} h/week on {}",
            self.contract.weekly_hours(),
            format_weekdays(self.contract.working_weekdays())
        )?;
        writeln!(f, "Expected working days: {}", self.expected_working_days)?;
        writeln!(f, "Vacation days:         {}", self.vacation_days)?;
        writeln!(f, "Holiday days:          {}", self.holiday_days)?;
        writeln!(f, "Total days off:        {}", self.total_days_off)?;
        writeln!(f, "Worked days:           {}", self.actual_worked_days)?;
        writeln!(f, "Worked hours:          {:.2}", self.actual_worked_hours)?;
        writeln!(f, "Expected hours:        {:.2}", self.expected_working_hours)?;
        write!(
            f,
            "Variance:              {:+.2} ({})",
            self.variance,
            self.variance_label()
        )
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
