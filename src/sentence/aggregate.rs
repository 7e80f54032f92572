//! aggregate.rs
//!
//! Several terms passed together, combined by the consecutive / concurrent
//! rules in [`crate::components`].

use crate::components::{aggregate_components_to_days, sum_component_variance};
use crate::error::SentenceError;

use super::{fixed_term_result, CalculationInput, CalculationResult};

/// Sentence end and early release date for the combined components.
///
/// The reported variance is the sum of each component's own variance, not a
/// variance of the combined total.
pub fn calculate_aggregate(input: &CalculationInput) -> Result<CalculationResult, SentenceError> {
    let anchor = input.date_of_sentence;
    let days = aggregate_components_to_days(anchor, &input.components)?;
    let variance = sum_component_variance(anchor, &input.components)?;
    fixed_term_result(anchor, days, variance, input)
}
