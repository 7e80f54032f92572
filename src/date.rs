//! date.rs
//!
//! Date-only calendar arithmetic for the sentence engine. Every value is a
//! plain proleptic Gregorian date with no time of day and no timezone, so
//! differences are always whole days and never need rounding.
//!
//! # Overview
//!
//! - **`CalendarDate`**: the date value itself, ordered and subtractable to a day count.
//! - **`make_date(year, month, day)`**: builds a date, rolling out-of-range months and days over.
//! - **`add_ymd(base, years, months, days)`**: calendar-aware addition, applied years → months → days.
//! - **`subtract_days(base, n)`**: shorthand for `add_ymd(base, 0, 0, -n)`.
//! - **`parse_date_only(text)`**: strict `YYYY-MM-DD` parsing.
//! - **`leap_year(year)`** and **`days_in_month(year, month)`**.
//!
//! Month roll-over is deliberate: 31 January plus one month is "31 February",
//! which normalises to 2 or 3 March. Day offsets added afterwards apply to the
//! normalised date.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SentenceError;

/// `YYYY-MM-DD`, nothing before or after.
static DATE_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date pattern compiles"));

/// A calendar date with no time-of-day component.
///
/// Subtracting two dates gives the signed number of whole days between them:
///
/// ```
/// # use sentence_calc::date::parse_date_only;
/// let a = parse_date_only("2024-01-01").unwrap();
/// let b = parse_date_only("2024-12-31").unwrap();
/// assert_eq!(b - a, 365);
/// assert_eq!(a - b, -365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Strict constructor; `None` when the triple is not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// `DD/MM/YYYY`, the form used on printed summaries.
    pub fn format_uk(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Sub for CalendarDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.0.signed_duration_since(rhs.0).num_days()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = SentenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_only(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = SentenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_date_only(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Returns `true` if the given year is a leap year under the Gregorian rules.
///
/// ```
/// # use sentence_calc::date::leap_year;
/// assert!(leap_year(2000));  // divisible by 400
/// assert!(!leap_year(1900)); // divisible by 100 but not 400
/// assert!(leap_year(2024));  // divisible by 4 but not 100
/// assert!(!leap_year(2023));
/// ```
pub fn leap_year(year: i32) -> bool {
    (year % 4 == 0) && ((year % 100 != 0) || (year % 400 == 0))
}

/// Number of days in `month` (1-based) of `year`.
///
/// ```
/// # use sentence_calc::date::days_in_month;
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2023, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Builds a date from a possibly out-of-range `(year, month, day)` triple.
///
/// Months outside `1..=12` carry into the year and days outside the month
/// carry into neighbouring months, so `month = 13` is January of the next
/// year and `day = 0` is the last day of the previous month.
///
/// ```
/// # use sentence_calc::date::make_date;
/// assert_eq!(make_date(2024, 13, 1).unwrap().to_string(), "2025-01-01");
/// assert_eq!(make_date(2024, 3, 0).unwrap().to_string(), "2024-02-29");
/// ```
pub fn make_date(year: i64, month: i64, day: i64) -> Result<CalendarDate, SentenceError> {
    let month0 = month.checked_sub(1).ok_or(SentenceError::DateOutOfRange)?;
    let year = year
        .checked_add(month0.div_euclid(12))
        .and_then(|y| i32::try_from(y).ok())
        .ok_or(SentenceError::DateOutOfRange)?;
    let month = (month0.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(SentenceError::DateOutOfRange)?;

    let offset = day.checked_sub(1).ok_or(SentenceError::DateOutOfRange)?;
    let shifted = if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.map(CalendarDate).ok_or(SentenceError::DateOutOfRange)
}

/// Adds years, then months, then days to `base`, normalising after each step.
///
/// Weeks are not taken here; callers pass `weeks * 7` as days.
///
/// ```
/// # use sentence_calc::date::{add_ymd, parse_date_only};
/// let base = parse_date_only("2024-01-31").unwrap();
/// // "31 February 2024" rolls over to 2 March.
/// assert_eq!(add_ymd(base, 0, 1, 0).unwrap().to_string(), "2024-03-02");
/// ```
pub fn add_ymd(
    base: CalendarDate,
    years: i64,
    months: i64,
    days: i64,
) -> Result<CalendarDate, SentenceError> {
    let after_years = make_date(
        i64::from(base.year())
            .checked_add(years)
            .ok_or(SentenceError::DateOutOfRange)?,
        i64::from(base.month()),
        i64::from(base.day()),
    )?;
    let after_months = make_date(
        i64::from(after_years.year()),
        i64::from(after_years.month())
            .checked_add(months)
            .ok_or(SentenceError::DateOutOfRange)?,
        i64::from(after_years.day()),
    )?;
    make_date(
        i64::from(after_months.year()),
        i64::from(after_months.month()),
        i64::from(after_months.day())
            .checked_add(days)
            .ok_or(SentenceError::DateOutOfRange)?,
    )
}

/// Moves `base` back by `days` calendar days.
pub fn subtract_days(base: CalendarDate, days: i64) -> Result<CalendarDate, SentenceError> {
    let days = days.checked_neg().ok_or(SentenceError::DateOutOfRange)?;
    add_ymd(base, 0, 0, days)
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// Anything else, including impossible dates such as `2023-02-30`, is
/// rejected with [`SentenceError::InvalidDate`].
pub fn parse_date_only(text: &str) -> Result<CalendarDate, SentenceError> {
    let invalid = || SentenceError::InvalidDate {
        input: text.to_string(),
    };
    let caps = DATE_ONLY.captures(text).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let day: u32 = caps[3].parse().map_err(|_| invalid())?;
    CalendarDate::from_ymd(year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> CalendarDate {
        parse_date_only(s).unwrap()
    }

    #[test]
    fn test_make_date_rolls_months() {
        assert_eq!(make_date(2024, 13, 1).unwrap(), d("2025-01-01"));
        assert_eq!(make_date(2024, 0, 15).unwrap(), d("2023-12-15"));
        assert_eq!(make_date(2024, -11, 1).unwrap(), d("2023-01-01"));
        assert_eq!(make_date(2024, 25, 1).unwrap(), d("2026-01-01"));
    }

    #[test]
    fn test_make_date_rolls_days() {
        assert_eq!(make_date(2024, 3, 0).unwrap(), d("2024-02-29"));
        assert_eq!(make_date(2023, 3, 0).unwrap(), d("2023-02-28"));
        assert_eq!(make_date(2024, 1, 32).unwrap(), d("2024-02-01"));
        assert_eq!(make_date(2024, 1, -30).unwrap(), d("2023-12-01"));
        assert_eq!(make_date(2024, 1, 367).unwrap(), d("2025-01-01"));
    }

    #[test]
    fn test_add_ymd_month_end_rolls_over() {
        assert_eq!(add_ymd(d("2024-01-31"), 0, 1, 0).unwrap(), d("2024-03-02"));
        assert_eq!(add_ymd(d("2023-01-31"), 0, 1, 0).unwrap(), d("2023-03-03"));
        assert_eq!(add_ymd(d("2024-02-29"), 1, 0, 0).unwrap(), d("2025-03-01"));
        assert_eq!(add_ymd(d("2024-02-29"), 4, 0, 0).unwrap(), d("2028-02-29"));
    }

    #[test]
    fn test_add_ymd_applies_days_after_months() {
        // months first: 31 Jan -> 3 Mar, then one more day
        assert_eq!(add_ymd(d("2023-01-31"), 0, 1, 1).unwrap(), d("2023-03-04"));
        assert_eq!(add_ymd(d("2020-08-08"), 0, 9, 0).unwrap(), d("2021-05-08"));
        assert_eq!(add_ymd(d("2023-11-15"), 0, 3, 0).unwrap(), d("2024-02-15"));
    }

    #[test]
    fn test_add_ymd_never_yields_invalid_fields() {
        let base = d("2024-01-31");
        for years in 0..5 {
            for months in 0..30 {
                let r = add_ymd(base, years, months, 0).unwrap();
                assert!((1..=12).contains(&r.month()));
                assert!(r.day() >= 1 && r.day() <= days_in_month(r.year(), r.month()));
            }
        }
    }

    #[test]
    fn test_subtract_days() {
        assert_eq!(subtract_days(d("2024-03-01"), 1).unwrap(), d("2024-02-29"));
        assert_eq!(subtract_days(d("2024-01-01"), 1).unwrap(), d("2023-12-31"));
        assert_eq!(subtract_days(d("2024-01-01"), 0).unwrap(), d("2024-01-01"));
        assert_eq!(subtract_days(d("2024-01-01"), -31).unwrap(), d("2024-02-01"));
    }

    #[test]
    fn test_difference_in_days() {
        assert_eq!(d("2024-03-01") - d("2024-02-01"), 29);
        assert_eq!(d("2023-03-01") - d("2023-02-01"), 28);
        assert_eq!(d("2024-01-01") - d("2024-01-01"), 0);
        assert_eq!(d("2021-01-01") - d("2020-01-01"), 366);
    }

    #[test]
    fn test_parse_date_only_rejects_bad_input() {
        for bad in ["", "2024-1-1", "2024-02-30", "2023-02-29", "24-01-01", "2024-01-01T00:00"] {
            assert!(
                matches!(parse_date_only(bad), Err(SentenceError::InvalidDate { .. })),
                "accepted {bad:?}"
            );
        }
        assert_eq!(d("2024-02-29").to_string(), "2024-02-29");
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        assert_eq!(
            add_ymd(d("2024-01-01"), 1_000_000, 0, 0),
            Err(SentenceError::DateOutOfRange)
        );
    }

    #[test]
    fn test_format_uk() {
        assert_eq!(d("2024-01-16").format_uk(), "16/01/2024");
    }

    #[test]
    fn test_serde_uses_iso_string() {
        let json = serde_json::to_string(&d("2022-03-29")).unwrap();
        assert_eq!(json, "\"2022-03-29\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d("2022-03-29"));
        assert!(serde_json::from_str::<CalendarDate>("\"2022-13-01\"").is_err());
    }
}
