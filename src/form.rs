//! form.rs
//!
//! Raw, string-valued sentence details as typed into a form, and their
//! validation into a [`CalculationInput`]. Validation reports every problem
//! at once rather than stopping at the first, and never substitutes a
//! default for a value it could not read.
//!
//! Component rows can also be written compactly as
//! `<relation>[@group]:[Ny][Nm][Nw][Nd]`, e.g. `concurrent@1:6m` or
//! `consecutive:1y2w`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::components::{Component, Relation};
use crate::date::{parse_date_only, CalendarDate};
use crate::error::{FieldError, SentenceError};
use crate::sentence::{CalculationInput, SentenceKind};
use crate::term::Term;

static COMPACT_COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(consecutive|concurrent)(?:@(\d+))?:(?:(\d+)y)?(?:(\d+)m)?(?:(\d+)w)?(?:(\d+)d)?$",
    )
    .expect("component pattern compiles")
});

/// One row of the aggregate components table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRow {
    /// `"consecutive"` or `"concurrent"`.
    pub relation: String,
    /// Concurrent group number; blank or `0` means no group.
    pub group: String,
    pub years: String,
    pub months: String,
    pub weeks: String,
    pub days: String,
}

impl ComponentRow {
    /// A consecutive row with every term field at `"0"`.
    pub fn new(relation: &str) -> Self {
        Self {
            relation: relation.to_string(),
            group: String::new(),
            years: "0".to_string(),
            months: "0".to_string(),
            weeks: "0".to_string(),
            days: "0".to_string(),
        }
    }

    fn validate(&self, index: usize, errors: &mut Vec<FieldError>) -> Option<Component> {
        let field = |name: &str| format!("components[{index}].{name}");
        let relation = match self.relation.trim() {
            "consecutive" => Some(Relation::Consecutive),
            "concurrent" => Some(Relation::Concurrent),
            _ => {
                errors.push(FieldError::new(
                    field("relation"),
                    "Choose consecutive or concurrent",
                ));
                None
            }
        };
        let group_id = match self.group.trim() {
            "" => Some(None),
            text => match text.parse::<u32>() {
                Ok(0) => Some(None),
                Ok(n) => Some(Some(n)),
                Err(_) => {
                    errors.push(FieldError::new(field("group"), "Enter a valid group number"));
                    None
                }
            },
        };
        let term = read_term(
            [&self.years, &self.months, &self.weeks, &self.days],
            |name| field(name),
            errors,
        );

        let (relation, group_id, term) = (relation?, group_id?, term?);
        if relation == Relation::Concurrent && group_id.is_none() {
            warn!(
                component = index,
                "concurrent component has no group; counting it consecutively"
            );
        }
        Some(Component {
            term,
            relation,
            group_id,
        })
    }
}

impl FromStr for ComponentRow {
    type Err = SentenceError;

    /// Parses the compact `<relation>[@group]:[Ny][Nm][Nw][Nd]` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = COMPACT_COMPONENT
            .captures(s.trim())
            .ok_or_else(|| SentenceError::InvalidInput {
                errors: vec![FieldError::new(
                    "component",
                    format!("expected <relation>[@group]:[Ny][Nm][Nw][Nd], got {s:?}"),
                )],
            })?;
        let number = |i: usize| caps.get(i).map_or("0", |m| m.as_str()).to_string();
        Ok(Self {
            relation: caps[1].to_lowercase(),
            group: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            years: number(3),
            months: number(4),
            weeks: number(5),
            days: number(6),
        })
    }
}

/// Sentence details exactly as entered, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceForm {
    pub sentence_type: String,
    pub date_of_sentence: String,
    pub years: String,
    pub months: String,
    pub weeks: String,
    pub days: String,
    /// Blank or absent means "use the configured default".
    pub release_fraction: Option<String>,
    pub remand_days: String,
    pub tagged_bail_days: String,
    pub components: Vec<ComponentRow>,
    pub is_activated: bool,
    pub activation_date: Option<String>,
}

impl SentenceForm {
    /// An otherwise empty form with all numeric fields at `"0"`.
    pub fn new(sentence_type: &str, date_of_sentence: &str) -> Self {
        Self {
            sentence_type: sentence_type.to_string(),
            date_of_sentence: date_of_sentence.to_string(),
            years: "0".to_string(),
            months: "0".to_string(),
            weeks: "0".to_string(),
            days: "0".to_string(),
            release_fraction: None,
            remand_days: "0".to_string(),
            tagged_bail_days: "0".to_string(),
            components: Vec::new(),
            is_activated: false,
            activation_date: None,
        }
    }

    /// Validates the form, returning every problem found.
    ///
    /// `default_release_fraction` fills a blank release fraction.
    pub fn into_input(self, default_release_fraction: f64) -> Result<CalculationInput, SentenceError> {
        let mut errors = Vec::new();

        let kind = match self.sentence_type.trim().parse::<SentenceKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push(FieldError::new("sentenceType", "Choose a sentence type"));
                None
            }
        };

        let date_of_sentence = read_date(
            &self.date_of_sentence,
            "dateOfSentence",
            "Enter a valid sentence date",
            &mut errors,
        );

        let mut term = Term::default();
        let mut components = Vec::new();
        let mut release_fraction = default_release_fraction;
        let mut activation_date = None;

        match kind {
            Some(SentenceKind::Aggregate) => {
                if self.components.is_empty() {
                    errors.push(FieldError::new("components", "Add at least one component term"));
                }
                components = self
                    .components
                    .iter()
                    .enumerate()
                    .filter_map(|(i, row)| row.validate(i + 1, &mut errors))
                    .collect();
            }
            Some(_) => {
                term = read_term(
                    [&self.years, &self.months, &self.weeks, &self.days],
                    str::to_string,
                    &mut errors,
                )
                .unwrap_or_default();
            }
            None => {}
        }

        if matches!(
            kind,
            Some(SentenceKind::Determinate | SentenceKind::Aggregate | SentenceKind::Suspended)
        ) {
            if let Some(f) = read_release_fraction(self.release_fraction.as_deref(), &mut errors) {
                release_fraction = f;
            }
        }

        if kind == Some(SentenceKind::Suspended) && self.is_activated {
            activation_date = read_date(
                self.activation_date.as_deref().unwrap_or(""),
                "activationDate",
                "Enter a valid activation date",
                &mut errors,
            );
        }

        let remand_days = read_count(&self.remand_days, "remandDays", &mut errors);
        let tagged_bail_days = read_count(&self.tagged_bail_days, "taggedBailDays", &mut errors);

        match (kind, date_of_sentence, remand_days, tagged_bail_days) {
            (Some(kind), Some(date), Some(remand), Some(tagged)) if errors.is_empty() => {
                Ok(CalculationInput {
                    sentence_type: kind.as_str().to_string(),
                    date_of_sentence: date,
                    remand_days: remand,
                    tagged_bail_days: tagged,
                    term,
                    components,
                    release_fraction,
                    is_activated: self.is_activated,
                    activation_date,
                })
            }
            _ => Err(SentenceError::InvalidInput { errors }),
        }
    }
}

fn read_date(
    value: &str,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<CalendarDate> {
    match parse_date_only(value.trim()) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

fn read_count(value: &str, field: &str, errors: &mut Vec<FieldError>) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("Enter a valid number for {field}"),
            ));
            None
        }
    }
}

fn read_term(
    [years, months, weeks, days]: [&String; 4],
    field: impl Fn(&str) -> String,
    errors: &mut Vec<FieldError>,
) -> Option<Term> {
    let years = read_count(years, &field("years"), errors);
    let months = read_count(months, &field("months"), errors);
    let weeks = read_count(weeks, &field("weeks"), errors);
    let days = read_count(days, &field("days"), errors);
    Some(Term::new(years?, months?, weeks?, days?))
}

fn valid_release_fraction(f: f64) -> bool {
    f.is_finite() && f > 0.0 && f <= 1.0
}

/// Applies the form's checks to an input that arrived already typed, such as
/// a deserialised JSON payload.
///
/// An unknown sentence type is left for [`crate::calculate_sentence`] to
/// reject.
pub fn check_input(input: &CalculationInput) -> Result<(), SentenceError> {
    let mut errors = Vec::new();
    let kind = input.sentence_type.parse::<SentenceKind>().ok();

    if kind.is_some_and(|k| k != SentenceKind::Life) && !valid_release_fraction(input.release_fraction)
    {
        errors.push(FieldError::new(
            "releaseFraction",
            "Enter a release fraction greater than 0 and at most 1",
        ));
    }
    if kind == Some(SentenceKind::Aggregate) {
        if input.components.is_empty() {
            errors.push(FieldError::new("components", "Add at least one component term"));
        }
        for (i, c) in input.components.iter().enumerate() {
            if c.relation == Relation::Concurrent && c.group_id.is_none() {
                warn!(
                    component = i + 1,
                    "concurrent component has no group; counting it consecutively"
                );
            }
        }
    }
    if kind == Some(SentenceKind::Suspended) && input.is_activated && input.activation_date.is_none() {
        errors.push(FieldError::new("activationDate", "Enter a valid activation date"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SentenceError::InvalidInput { errors })
    }
}

fn read_release_fraction(value: Option<&str>, errors: &mut Vec<FieldError>) -> Option<f64> {
    let text = value.map(str::trim).filter(|t| !t.is_empty())?;
    match text.parse::<f64>() {
        Ok(f) if valid_release_fraction(f) => Some(f),
        _ => {
            errors.push(FieldError::new(
                "releaseFraction",
                "Enter a release fraction greater than 0 and at most 1",
            ));
            None
        }
    }
}
