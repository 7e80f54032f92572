//! period.rs
//!
//! Human-readable length of an inclusive date range, both as
//! "years, months, weeks, days" and as "years, days".

use serde::{Deserialize, Serialize};

use crate::date::{add_ymd, make_date, CalendarDate};
use crate::error::SentenceError;

/// Text renderings of an inclusive period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodText {
    /// e.g. `"1 year, 2 months, 1 week, 3 days"`.
    pub period_str: String,
    /// e.g. `"1 year, 68 days"`.
    pub period_years_days_str: String,
}

impl PeriodText {
    /// The rendering of an empty period.
    pub fn zero() -> Self {
        Self {
            period_str: ZERO_DAYS.to_string(),
            period_years_days_str: ZERO_DAYS.to_string(),
        }
    }
}

const ZERO_DAYS: &str = "0 days";

fn unit(n: i64, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// Describes the period from `start` to `end`, both days included.
///
/// `end` is expected to be on or after `start`; an `end` of the day before
/// `start` describes an empty period.
///
/// ```
/// # use sentence_calc::date::parse_date_only;
/// # use sentence_calc::period::period_between_inclusive;
/// let start = parse_date_only("2024-01-01").unwrap();
/// let end = parse_date_only("2024-01-31").unwrap();
/// let text = period_between_inclusive(start, end).unwrap();
/// assert_eq!(text.period_str, "1 month");
/// assert_eq!(text.period_years_days_str, "31 days");
/// ```
pub fn period_between_inclusive(
    start: CalendarDate,
    end: CalendarDate,
) -> Result<PeriodText, SentenceError> {
    let end_exclusive = add_ymd(end, 0, 0, 1)?;

    let mut years = i64::from(end_exclusive.year()) - i64::from(start.year());
    let mut months = i64::from(end_exclusive.month()) - i64::from(start.month());
    let mut days = i64::from(end_exclusive.day()) - i64::from(start.day());

    if days < 0 {
        months -= 1;
        // day 0 of end_exclusive's month is the last day of the month before it
        let prev_month_end = make_date(
            i64::from(end_exclusive.year()),
            i64::from(end_exclusive.month()),
            0,
        )?;
        days += i64::from(prev_month_end.day());
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // A month-end start can leave `days` negative after the single borrow;
    // weeks floor while the remainder truncates, e.g. -1 -> -1 weeks, -1 days.
    let weeks = days.div_euclid(7);
    let rem_days = days % 7;

    let parts: Vec<String> = [
        (years, "year"),
        (months, "month"),
        (weeks, "week"),
        (rem_days, "day"),
    ]
    .into_iter()
    .filter(|(n, _)| *n != 0)
    .map(|(n, name)| unit(n, name))
    .collect();
    let period_str = if parts.is_empty() {
        ZERO_DAYS.to_string()
    } else {
        parts.join(", ")
    };

    let after_years = add_ymd(start, years, 0, 0)?;
    let days_from_non_years = end_exclusive - after_years;
    let years_days: Vec<String> = [(years, "year"), (days_from_non_years, "day")]
        .into_iter()
        .filter(|(n, _)| *n != 0)
        .map(|(n, name)| unit(n, name))
        .collect();
    let period_years_days_str = if years_days.is_empty() {
        ZERO_DAYS.to_string()
    } else {
        years_days.join(", ")
    };

    Ok(PeriodText {
        period_str,
        period_years_days_str,
    })
}
