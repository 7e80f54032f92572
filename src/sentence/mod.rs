//! sentence/mod.rs
//!
//! Input and result records for a sentence calculation, the dispatcher that
//! routes an input to the calculator for its sentence kind, and the pieces
//! the four calculators share.
//!
//! - `life`: the tariff is the minimum term, shortened directly by credit.
//! - `determinate`: a fixed term; credit only brings the early release date forward.
//! - `aggregate`: several fixed terms combined consecutively or concurrently.
//! - `suspended`: a fixed term that only runs once activated, from the activation date.

pub mod aggregate;
pub mod determinate;
pub mod life;
pub mod suspended;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::Component;
use crate::credit::{compute_credits, Credits};
use crate::date::{add_ymd, subtract_days, CalendarDate};
use crate::error::SentenceError;
use crate::period::period_between_inclusive;
use crate::term::{Term, VarianceReport};

pub use aggregate::calculate_aggregate;
pub use determinate::calculate_determinate;
pub use life::calculate_life;
pub use suspended::calculate_suspended;

/// Release fraction applied when an input does not name one.
pub const DEFAULT_RELEASE_FRACTION: f64 = 0.5;

fn default_release_fraction() -> f64 {
    DEFAULT_RELEASE_FRACTION
}

/// The four kinds of custodial sentence the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    Life,
    Determinate,
    Aggregate,
    Suspended,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 4] = [
        SentenceKind::Life,
        SentenceKind::Determinate,
        SentenceKind::Aggregate,
        SentenceKind::Suspended,
    ];

    /// The tag used in inputs, e.g. `"life"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceKind::Life => "life",
            SentenceKind::Determinate => "determinate",
            SentenceKind::Aggregate => "aggregate",
            SentenceKind::Suspended => "suspended",
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentenceKind {
    type Err = SentenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SentenceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SentenceError::UnsupportedKind {
                kind: s.to_string(),
            })
    }
}

/// Everything needed to calculate one sentence.
///
/// `sentence_type` selects the calculator. `term` is read by the life,
/// determinate and suspended kinds, `components` by the aggregate kind, and
/// `release_fraction` by every kind except life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    #[serde(rename = "type")]
    pub sentence_type: String,
    pub date_of_sentence: CalendarDate,
    #[serde(default)]
    pub remand_days: u32,
    #[serde(default)]
    pub tagged_bail_days: u32,
    #[serde(default)]
    pub term: Term,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default = "default_release_fraction")]
    pub release_fraction: f64,
    #[serde(default)]
    pub is_activated: bool,
    #[serde(default)]
    pub activation_date: Option<CalendarDate>,
}

impl CalculationInput {
    /// A bare input: no term, no credit, default release fraction.
    pub fn new(kind: SentenceKind, date_of_sentence: CalendarDate) -> Self {
        Self {
            sentence_type: kind.as_str().to_string(),
            date_of_sentence,
            remand_days: 0,
            tagged_bail_days: 0,
            term: Term::default(),
            components: Vec::new(),
            release_fraction: DEFAULT_RELEASE_FRACTION,
            is_activated: false,
            activation_date: None,
        }
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.term = term;
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn with_credit(mut self, remand_days: u32, tagged_bail_days: u32) -> Self {
        self.remand_days = remand_days;
        self.tagged_bail_days = tagged_bail_days;
        self
    }

    pub fn with_release_fraction(mut self, release_fraction: f64) -> Self {
        self.release_fraction = release_fraction;
        self
    }

    /// Marks a suspended sentence as activated on `date`.
    pub fn activated_on(mut self, date: CalendarDate) -> Self {
        self.is_activated = true;
        self.activation_date = Some(date);
        self
    }
}

/// Key dates and durations for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub sentence_end: Option<CalendarDate>,
    pub erd_date: Option<CalendarDate>,
    pub tariff_expiry: Option<CalendarDate>,
    pub total_days_inclusive: i64,
    pub period_str: String,
    pub period_years_days_str: String,
    pub remand_days: u32,
    pub tagged_bail_days: u32,
    pub calendar_variance: VarianceReport,
}

impl CalculationResult {
    /// Credit recomputed from the raw remand and tagged bail counts.
    pub fn credits(&self) -> Credits {
        compute_credits(self.remand_days, self.tagged_bail_days)
    }
}

/// Calculates `input` with the calculator for its sentence type.
///
/// Fails with [`SentenceError::UnsupportedKind`] when the type tag is not one
/// of `life`, `determinate`, `aggregate` or `suspended`.
pub fn calculate_sentence(input: &CalculationInput) -> Result<CalculationResult, SentenceError> {
    let kind: SentenceKind = input.sentence_type.parse()?;
    debug!(%kind, date_of_sentence = %input.date_of_sentence, "calculating sentence");
    match kind {
        SentenceKind::Life => calculate_life(input),
        SentenceKind::Determinate => calculate_determinate(input),
        SentenceKind::Aggregate => calculate_aggregate(input),
        SentenceKind::Suspended => calculate_suspended(input),
    }
}

/// Last day of a term of `days` days starting on `anchor`.
fn term_end(anchor: CalendarDate, days: i64) -> Result<CalendarDate, SentenceError> {
    subtract_days(add_ymd(anchor, 0, 0, days)?, 1)
}

/// Days from `anchor` to `end`, both included.
fn inclusive_days(anchor: CalendarDate, end: CalendarDate) -> i64 {
    (end - anchor) + 1
}

/// The release fraction of `days`, rounded up, less credit, never negative.
fn days_to_early_release(days: i64, release_fraction: f64, credit_total: i64) -> i64 {
    let share = (release_fraction * days as f64).ceil() as i64;
    (share - credit_total).max(0)
}

/// Result for a fixed term of `days` days from `anchor`.
///
/// The sentence end ignores credit; credit only shortens the time served
/// before early release.
fn fixed_term_result(
    anchor: CalendarDate,
    days: i64,
    calendar_variance: VarianceReport,
    input: &CalculationInput,
) -> Result<CalculationResult, SentenceError> {
    let sentence_end = term_end(anchor, days)?;
    let credits = compute_credits(input.remand_days, input.tagged_bail_days);
    let to_serve = days_to_early_release(days, input.release_fraction, credits.total);
    let erd_date = term_end(anchor, to_serve)?;
    let period = period_between_inclusive(anchor, sentence_end)?;
    debug!(%anchor, days, %sentence_end, %erd_date, credit = credits.total, "fixed term resolved");

    Ok(CalculationResult {
        sentence_end: Some(sentence_end),
        erd_date: Some(erd_date),
        tariff_expiry: None,
        total_days_inclusive: inclusive_days(anchor, sentence_end),
        period_str: period.period_str,
        period_years_days_str: period.period_years_days_str,
        remand_days: input.remand_days,
        tagged_bail_days: input.tagged_bail_days,
        calendar_variance,
    })
}
