//! This crate calculates the key dates of a custodial sentence: when it
//! ends, when early release falls due, and (for life sentences) when the
//! minimum term expires.
//!
//! 1. **`calculate_sentence(input)`**: routes a [`CalculationInput`] to the
//!    calculator for its sentence type (`life`, `determinate`, `aggregate` or
//!    `suspended`) and returns a [`CalculationResult`].
//! 2. **`SentenceForm::into_input(default_fraction)`**: validates raw,
//!    string-valued form fields into a `CalculationInput`, listing every
//!    problem it finds.
//! 3. **`render_summary(result)`**: formats a result for display.
//!
//! All arithmetic is on date-only values. Terms expressed in years and
//! months are resolved against real calendar lengths from the date they start
//! running, and the difference from a naive 365/30/7-day count is reported
//! alongside the result.
//!
//! # Usage
//!
//! ```
//! use sentence_calc::{calculate_sentence, parse_date_only, CalculationInput, SentenceKind, Term};
//!
//! let input = CalculationInput::new(SentenceKind::Determinate, parse_date_only("2024-01-01")?)
//!     .with_term(Term::new(0, 1, 0, 0))
//!     .with_release_fraction(0.5);
//! let result = calculate_sentence(&input)?;
//!
//! assert_eq!(result.sentence_end.map(|d| d.to_string()), Some("2024-01-31".to_string()));
//! assert_eq!(result.erd_date.map(|d| d.to_string()), Some("2024-01-16".to_string()));
//! assert_eq!(result.period_str, "1 month");
//! # Ok::<(), sentence_calc::SentenceError>(())
//! ```

pub mod components;
pub mod config;
pub mod credit;
pub mod date;
pub mod error;
pub mod form;
pub mod period;
pub mod presets;
pub mod sentence;
pub mod summary;
pub mod term;

pub use components::{Component, Relation};
pub use config::{CalcConfig, OutputFormat};
pub use credit::{compute_credits, Credits};
pub use date::{parse_date_only, CalendarDate};
pub use error::{FieldError, SentenceError};
pub use form::{check_input, ComponentRow, SentenceForm};
pub use sentence::{calculate_sentence, CalculationInput, CalculationResult, SentenceKind};
pub use summary::{render_json, render_summary};
pub use term::{Term, VarianceReport};
