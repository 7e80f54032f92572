//! credit.rs
//!
//! Day-for-day credit for time on remand and half-day credit for time on
//! qualifying tagged bail.

use serde::{Deserialize, Serialize};

/// Credit days earned before sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub remand: i64,
    pub tagged: i64,
    pub total: i64,
}

/// Remand counts in full; tagged bail counts half, rounded up.
///
/// ```
/// # use sentence_calc::credit::compute_credits;
/// let c = compute_credits(10, 3);
/// assert_eq!((c.remand, c.tagged, c.total), (10, 2, 12));
/// ```
pub fn compute_credits(remand_days: u32, tagged_bail_days: u32) -> Credits {
    let remand = i64::from(remand_days);
    let tagged = i64::from(tagged_bail_days.div_ceil(2));
    Credits {
        remand,
        tagged,
        total: remand + tagged,
    }
}
