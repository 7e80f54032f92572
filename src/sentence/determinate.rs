//! determinate.rs
//!
//! Fixed-length sentences.

use crate::error::SentenceError;
use crate::term::term_to_calendar_days;

use super::{fixed_term_result, CalculationInput, CalculationResult};

/// Sentence end and early release date for a single fixed term, counted from
/// the date of sentence.
pub fn calculate_determinate(input: &CalculationInput) -> Result<CalculationResult, SentenceError> {
    let anchor = input.date_of_sentence;
    let resolved = term_to_calendar_days(anchor, &input.term)?;
    fixed_term_result(anchor, resolved.days, resolved.variance, input)
}
