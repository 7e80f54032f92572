//! term.rs
//!
//! Resolves a nominal term (years, months, weeks, days) into the number of
//! calendar days it actually spans from a given anchor date, and explains how
//! far that count drifts from the naive 365/30/7-day reckoning.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::{add_ymd, CalendarDate};
use crate::error::SentenceError;

/// Naive year length used for variance reporting only.
const NAIVE_YEAR_DAYS: i64 = 365;
/// Naive month length used for variance reporting only.
const NAIVE_MONTH_DAYS: i64 = 30;

/// A nominal duration, not yet tied to a start date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
}

impl Term {
    pub fn new(years: u32, months: u32, weeks: u32, days: u32) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// A term of whole days only.
    pub fn of_days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// `years*365 + months*30 + weeks*7 + days`.
    pub fn naive_days(&self) -> i64 {
        i64::from(self.years) * NAIVE_YEAR_DAYS
            + i64::from(self.months) * NAIVE_MONTH_DAYS
            + i64::from(self.weeks) * 7
            + i64::from(self.days)
    }
}

/// How a resolved term differs from its naive day count.
///
/// Informational only; date arithmetic never reads it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceReport {
    /// Extra days contributed by 29 February within the years part.
    pub leap_days: i64,
    /// Real month lengths minus 30 days per month.
    pub month_adjustment: i64,
    /// Resolved days minus naive days.
    pub total_adjustment: i64,
}

impl Add for VarianceReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            leap_days: self.leap_days + rhs.leap_days,
            month_adjustment: self.month_adjustment + rhs.month_adjustment,
            total_adjustment: self.total_adjustment + rhs.total_adjustment,
        }
    }
}

impl Sum for VarianceReport {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A term resolved against an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermDays {
    /// Calendar days from the anchor to the end of the term (exclusive end).
    pub days: i64,
    pub variance: VarianceReport,
}

/// Resolves `term` against `anchor`.
///
/// Years are applied first, then months, then weeks as blocks of seven days,
/// then days, each on the result of the previous step.
///
/// ```
/// # use sentence_calc::date::parse_date_only;
/// # use sentence_calc::term::{term_to_calendar_days, Term};
/// let anchor = parse_date_only("2024-01-01").unwrap();
/// let resolved = term_to_calendar_days(anchor, &Term::new(0, 1, 0, 0)).unwrap();
/// assert_eq!(resolved.days, 31);
/// assert_eq!(resolved.variance.month_adjustment, 1);
/// ```
pub fn term_to_calendar_days(anchor: CalendarDate, term: &Term) -> Result<TermDays, SentenceError> {
    let after_years = add_ymd(anchor, i64::from(term.years), 0, 0)?;
    let after_months = add_ymd(after_years, 0, i64::from(term.months), 0)?;
    let after_weeks = add_ymd(after_months, 0, 0, i64::from(term.weeks) * 7)?;
    let after_all = add_ymd(after_weeks, 0, 0, i64::from(term.days))?;

    let days = after_all - anchor;
    let days_from_years = after_years - anchor;
    let days_from_months = after_months - after_years;

    let variance = VarianceReport {
        leap_days: days_from_years - i64::from(term.years) * NAIVE_YEAR_DAYS,
        month_adjustment: days_from_months - i64::from(term.months) * NAIVE_MONTH_DAYS,
        total_adjustment: days - term.naive_days(),
    };
    trace!(%anchor, ?term, days, ?variance, "resolved term");

    Ok(TermDays { days, variance })
}
