//! presets.rs
//!
//! Worked examples, one per sentence kind, as pre-filled forms.

use crate::form::{ComponentRow, SentenceForm};
use crate::sentence::SentenceKind;

/// A filled-in form demonstrating `kind`.
pub fn example_form(kind: SentenceKind) -> SentenceForm {
    match kind {
        SentenceKind::Life => {
            let mut form = SentenceForm::new("life", "2020-01-01");
            form.years = "15".to_string();
            form.remand_days = "157".to_string();
            form
        }
        SentenceKind::Determinate => {
            let mut form = SentenceForm::new("determinate", "2020-08-08");
            form.months = "9".to_string();
            form.release_fraction = Some("0.5".to_string());
            form.remand_days = "30".to_string();
            form.tagged_bail_days = "10".to_string();
            form
        }
        SentenceKind::Aggregate => {
            let mut form = SentenceForm::new("aggregate", "2020-01-01");
            let mut year = ComponentRow::new("consecutive");
            year.years = "1".to_string();
            let mut half = ComponentRow::new("concurrent");
            half.group = "1".to_string();
            half.months = "6".to_string();
            form.components = vec![year, half];
            form.release_fraction = Some("0.5".to_string());
            form
        }
        SentenceKind::Suspended => {
            let mut form = SentenceForm::new("suspended", "2021-02-15");
            form.years = "1".to_string();
            form.is_activated = true;
            form.activation_date = Some("2022-04-01".to_string());
            form.release_fraction = Some("0.5".to_string());
            form.remand_days = "10".to_string();
            form
        }
    }
}
