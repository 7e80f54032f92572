//! summary.rs
//!
//! Renders a [`CalculationResult`] for people: a plain-text summary with
//! British date and number formatting, or pretty JSON.

use std::fmt::Write;

use crate::date::CalendarDate;
use crate::error::SentenceError;
use crate::sentence::CalculationResult;
use crate::term::VarianceReport;

const NOT_APPLICABLE: &str = "-";

/// Groups digits in threes with commas, e.g. `12345` → `"12,345"`.
///
/// ```
/// # use sentence_calc::summary::group_digits;
/// assert_eq!(group_digits(1234567), "1,234,567");
/// assert_eq!(group_digits(-1000), "-1,000");
/// assert_eq!(group_digits(999), "999");
/// ```
pub fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed day count with its leap-day and month-length breakdown.
pub fn format_variance(v: &VarianceReport) -> String {
    let sign = if v.total_adjustment >= 0 { "+" } else { "" };
    format!(
        "{sign}{} days (leap days: {}, months adj: {} from real month lengths vs 30-day months)",
        v.total_adjustment, v.leap_days, v.month_adjustment
    )
}

fn date_or_dash(date: Option<CalendarDate>) -> String {
    date.map_or_else(|| NOT_APPLICABLE.to_string(), |d| d.format_uk())
}

fn text_or_dash(text: &str) -> &str {
    if text.is_empty() {
        NOT_APPLICABLE
    } else {
        text
    }
}

/// Multi-line plain-text summary of `result`.
pub fn render_summary(result: &CalculationResult) -> String {
    let credits = result.credits();
    let rows = [
        ("Sentence end", date_or_dash(result.sentence_end)),
        ("Early release date", date_or_dash(result.erd_date)),
        ("Tariff expiry", date_or_dash(result.tariff_expiry)),
        ("Total days", group_digits(result.total_days_inclusive)),
        ("Period", text_or_dash(&result.period_str).to_string()),
        ("Period (years, days)", text_or_dash(&result.period_years_days_str).to_string()),
        ("Calendar variance", format_variance(&result.calendar_variance)),
        ("Remand credit", group_digits(credits.remand)),
        ("Tagged bail credit", group_digits(credits.tagged)),
        ("Total credit", group_digits(credits.total)),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut out = String::new();
    for (label, value) in rows {
        // writing to a String cannot fail
        let _ = writeln!(out, "{:<width$} {value}", format!("{label}:"));
    }
    out
}

/// Pretty-printed JSON of `result`.
pub fn render_json(result: &CalculationResult) -> Result<String, SentenceError> {
    serde_json::to_string_pretty(result).map_err(|e| SentenceError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date_only;
    use crate::sentence::{calculate_sentence, CalculationInput, SentenceKind};
    use crate::term::Term;

    fn determinate() -> CalculationResult {
        let input = CalculationInput::new(SentenceKind::Determinate, parse_date_only("2024-01-01").unwrap())
            .with_term(Term::new(0, 1, 0, 0))
            .with_credit(0, 3);
        calculate_sentence(&input).unwrap()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(100), "100");
        assert_eq!(group_digits(5322), "5,322");
        assert_eq!(group_digits(100000), "100,000");
    }

    #[test]
    fn test_format_variance() {
        let v = VarianceReport {
            leap_days: 0,
            month_adjustment: 1,
            total_adjustment: 1,
        };
        assert_eq!(
            format_variance(&v),
            "+1 days (leap days: 0, months adj: 1 from real month lengths vs 30-day months)"
        );
        let v = VarianceReport {
            leap_days: 0,
            month_adjustment: -2,
            total_adjustment: -2,
        };
        assert!(format_variance(&v).starts_with("-2 days"));
        assert!(format_variance(&VarianceReport::default()).starts_with("+0 days"));
    }

    #[test]
    fn test_summary_lines() {
        let text = render_summary(&determinate());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Sentence end:"));
        assert!(lines[0].ends_with(" 31/01/2024"));
        // ceil(31 / 2) = 16, less 2 days tagged bail credit
        assert!(lines[1].ends_with(" 14/01/2024"));
        assert!(lines[2].ends_with(" -"));
        assert!(lines[3].ends_with(" 31"));
        assert!(lines[4].ends_with(" 1 month"));
        assert!(lines[8].ends_with(" 2"));
        assert!(lines[9].ends_with(" 2"));
    }

    #[test]
    fn test_json_uses_payload_names() {
        let json = render_json(&determinate()).unwrap();
        assert!(json.contains("\"sentenceEnd\": \"2024-01-31\""));
        assert!(json.contains("\"taggedBailDays\": 3"));
    }
}
