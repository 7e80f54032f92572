//! error.rs
//!
//! Error types shared by the calculation engine, the form layer and the
//! configuration loader.

use std::fmt;

/// A single problem found while validating raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field, e.g. `"dateOfSentence"`.
    pub field: String,
    /// Message suitable for showing next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SentenceError {
    /// The input was tagged with a sentence type the engine does not know.
    #[error("unsupported sentence kind: {kind:?}")]
    UnsupportedKind {
        /// The tag as supplied.
        kind: String,
    },

    /// A date string was not a calendar-valid `YYYY-MM-DD` value.
    #[error("invalid date {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected text.
        input: String,
    },

    /// A suspended sentence was marked activated without an activation date.
    #[error("suspended sentence is activated but has no activation date")]
    MissingActivationDate,

    /// Date arithmetic left the representable calendar range.
    #[error("date arithmetic out of range")]
    DateOutOfRange,

    /// Raw form input failed validation; every problem is listed.
    #[error("there is a problem: {}", join_fields(.errors))]
    InvalidInput {
        /// All field problems, in form order.
        errors: Vec<FieldError>,
    },

    /// A result could not be serialised.
    #[error("failed to serialise result: {reason}")]
    Serialization {
        /// Underlying serialiser message.
        reason: String,
    },

    /// A configuration value is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
