//! Overlap resolution between vacation and holiday day-sets.
//!
//! A day that is both vacation and holiday is attributed to the holiday, so
//! it is never charged twice. A holiday only counts when it falls on a day
//! the contract would otherwise require work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Vacation and holiday day-sets after priority rules removed
/// double-counted days. The two sets are disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedDaySets {
    pub vacation: BTreeSet<NaiveDate>,
    pub holiday: BTreeSet<NaiveDate>,
}

impl AdjustedDaySets {
    /// Distinct days off across both categories. The sets are disjoint, so
    /// this equals their summed sizes; the union guards the invariant.
    pub fn total_days_off(&self) -> usize {
        self.vacation.union(&self.holiday).count()
    }
}

/// Apply the priority rules between raw vacation and holiday day-sets.
///
/// - A vacation day that is also a holiday is dropped from vacation; the
///   holiday explains the absence.
/// - A holiday counts only when it lands on a contract working date and is
///   not also a raw vacation day. Holidays on days off by contract never
///   count.
///
/// The result satisfies `vacation ∩ holiday = ∅` and both adjusted sets are
/// subsets of their raw inputs.
pub fn resolve(
    vacation_days: &BTreeSet<NaiveDate>,
    holiday_days: &BTreeSet<NaiveDate>,
    contract_weekday_dates: &BTreeSet<NaiveDate>,
) -> AdjustedDaySets {
    let vacation: BTreeSet<NaiveDate> = vacation_days
        .difference(holiday_days)
        .copied()
        .collect();

    let holiday: BTreeSet<NaiveDate> = holiday_days
        .iter()
        .filter(|day| contract_weekday_dates.contains(*day) && !vacation_days.contains(*day))
        .copied()
        .collect();

    AdjustedDaySets { vacation, holiday }
}
