//! suspended.rs
//!
//! Suspended sentences only produce dates once activated; the term then runs
//! from the activation date rather than the date of sentence.

use tracing::debug;

use crate::error::SentenceError;
use crate::period::PeriodText;
use crate::term::{term_to_calendar_days, VarianceReport};

use super::{fixed_term_result, CalculationInput, CalculationResult};

/// Dates for a suspended sentence, or an empty result if not activated.
pub fn calculate_suspended(input: &CalculationInput) -> Result<CalculationResult, SentenceError> {
    if !input.is_activated {
        debug!("suspended sentence not activated");
        return Ok(not_activated(input));
    }
    let anchor = input
        .activation_date
        .ok_or(SentenceError::MissingActivationDate)?;
    let resolved = term_to_calendar_days(anchor, &input.term)?;
    fixed_term_result(anchor, resolved.days, resolved.variance, input)
}

fn not_activated(input: &CalculationInput) -> CalculationResult {
    let period = PeriodText::zero();
    CalculationResult {
        sentence_end: None,
        erd_date: None,
        tariff_expiry: None,
        total_days_inclusive: 0,
        period_str: period.period_str,
        period_years_days_str: period.period_years_days_str,
        remand_days: input.remand_days,
        tagged_bail_days: input.tagged_bail_days,
        calendar_variance: VarianceReport::default(),
    }
}
