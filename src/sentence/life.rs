//! life.rs
//!
//! Indeterminate ("life") sentences. The term given is the minimum term
//! (tariff). Credit for remand and tagged bail comes straight off the tariff,
//! and there is no early release date.

use tracing::debug;

use crate::credit::compute_credits;
use crate::error::SentenceError;
use crate::period::period_between_inclusive;
use crate::term::{term_to_calendar_days, TermDays};

use super::{inclusive_days, term_end, CalculationInput, CalculationResult};

/// Tariff expiry for a life sentence.
///
/// The tariff ends `credit.total` days before the minimum term would. When
/// credit covers the whole term the expiry stops at the day before sentence,
/// leaving nothing to serve.
pub fn calculate_life(input: &CalculationInput) -> Result<CalculationResult, SentenceError> {
    let anchor = input.date_of_sentence;
    let TermDays { days, variance } = term_to_calendar_days(anchor, &input.term)?;
    let credits = compute_credits(input.remand_days, input.tagged_bail_days);

    let tariff_expiry = term_end(anchor, (days - credits.total).max(0))?;
    let period = period_between_inclusive(anchor, tariff_expiry)?;
    debug!(%anchor, days, credit = credits.total, %tariff_expiry, "life tariff resolved");

    Ok(CalculationResult {
        sentence_end: Some(tariff_expiry),
        erd_date: None,
        tariff_expiry: Some(tariff_expiry),
        total_days_inclusive: inclusive_days(anchor, tariff_expiry),
        period_str: period.period_str,
        period_years_days_str: period.period_years_days_str,
        remand_days: input.remand_days,
        tagged_bail_days: input.tagged_bail_days,
        calendar_variance: variance,
    })
}
