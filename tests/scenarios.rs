//! End-to-end sentence calculations through the public entry point.

use sentence_calc::{
    calculate_sentence, parse_date_only, CalculationInput, CalendarDate, Component,
    SentenceError, SentenceKind, Term, VarianceReport,
};

fn d(s: &str) -> CalendarDate {
    parse_date_only(s).unwrap()
}

#[test]
fn determinate_single_month_next_to_leap_year() {
    let input = CalculationInput::new(SentenceKind::Determinate, d("2024-01-01"))
        .with_term(Term::new(0, 1, 0, 0))
        .with_release_fraction(0.5)
        .with_credit(0, 0);
    let r = calculate_sentence(&input).unwrap();

    assert_eq!(
        r.calendar_variance,
        VarianceReport {
            leap_days: 0,
            month_adjustment: 1,
            total_adjustment: 1
        }
    );
    assert_eq!(r.sentence_end, Some(d("2024-01-31")));
    assert_eq!(r.erd_date, Some(d("2024-01-16")));
    assert_eq!(r.total_days_inclusive, 31);
    assert_eq!(r.period_str, "1 month");
    assert_eq!(r.period_years_days_str, "31 days");
}

#[test]
fn life_credit_reduces_tariff() {
    let input = CalculationInput::new(SentenceKind::Life, d("2022-01-01"))
        .with_term(Term::of_days(100))
        .with_credit(10, 4);
    let r = calculate_sentence(&input).unwrap();

    assert_eq!(r.calendar_variance, VarianceReport::default());
    assert_eq!(r.credits().total, 12);
    assert_eq!(r.tariff_expiry, Some(d("2022-03-29")));
    assert_eq!(r.total_days_inclusive, 88);
}

#[test]
fn aggregate_consecutive_plus_concurrent_group() {
    let input = CalculationInput::new(SentenceKind::Aggregate, d("2021-01-01")).with_components(vec![
        Component::consecutive(Term::of_days(10)),
        Component::concurrent(Term::of_days(20), Some(1)),
        Component::concurrent(Term::of_days(15), Some(1)),
    ]);
    let r = calculate_sentence(&input).unwrap();

    assert_eq!(r.sentence_end, Some(d("2021-01-30")));
    assert_eq!(r.total_days_inclusive, 30);
}

#[test]
fn suspended_not_activated_is_empty() {
    let input = CalculationInput::new(SentenceKind::Suspended, d("2021-02-15"))
        .with_term(Term::new(2, 6, 1, 3))
        .with_credit(5, 5);
    let r = calculate_sentence(&input).unwrap();

    assert_eq!(r.sentence_end, None);
    assert_eq!(r.erd_date, None);
    assert_eq!(r.tariff_expiry, None);
    assert_eq!(r.total_days_inclusive, 0);
    assert_eq!(r.period_str, "0 days");
    assert_eq!(r.period_years_days_str, "0 days");
    assert_eq!(r.calendar_variance, VarianceReport::default());
}

#[test]
fn unsupported_kind_fails() {
    let mut input = CalculationInput::new(SentenceKind::Life, d("2021-02-15"));
    input.sentence_type = "unknown".to_string();
    assert!(matches!(
        calculate_sentence(&input),
        Err(SentenceError::UnsupportedKind { kind }) if kind == "unknown"
    ));
}

#[test]
fn unsupported_kind_from_payload() {
    let input: CalculationInput =
        serde_json::from_str(r#"{"type":"unknown","dateOfSentence":"2021-02-15"}"#).unwrap();
    assert!(matches!(
        calculate_sentence(&input),
        Err(SentenceError::UnsupportedKind { .. })
    ));
}

#[test]
fn sentence_end_ignores_credit_for_fixed_terms() {
    let term = Term::new(1, 4, 2, 3);
    let anchor = d("2023-10-31");
    for kind in [SentenceKind::Determinate, SentenceKind::Aggregate, SentenceKind::Suspended] {
        let build = |remand, tagged| {
            CalculationInput::new(kind, anchor)
                .with_term(term)
                .with_components(vec![Component::consecutive(term)])
                .activated_on(anchor)
                .with_credit(remand, tagged)
        };
        let plain = calculate_sentence(&build(0, 0)).unwrap();
        let credited = calculate_sentence(&build(40, 21)).unwrap();
        assert_eq!(plain.sentence_end, credited.sentence_end, "{kind}");
        assert_eq!(plain.total_days_inclusive, credited.total_days_inclusive, "{kind}");
        // 40 remand + 11 tagged
        assert_eq!(plain.erd_date.unwrap() - credited.erd_date.unwrap(), 51, "{kind}");
    }
}

#[test]
fn life_tariff_moves_one_day_per_remand_day() {
    let anchor = d("2016-02-29");
    let tariff = |remand| {
        let input = CalculationInput::new(SentenceKind::Life, anchor)
            .with_term(Term::new(0, 0, 0, 30))
            .with_credit(remand, 0);
        calculate_sentence(&input).unwrap().tariff_expiry.unwrap()
    };
    for remand in 0..30 {
        assert_eq!(tariff(remand) - tariff(remand + 1), 1);
    }
    // floor: nothing left to serve
    assert_eq!(tariff(30), d("2016-02-28"));
    assert_eq!(tariff(31), tariff(30));
}

#[test]
fn suspended_activation_uses_activation_date_not_sentence_date() {
    let input = CalculationInput::new(SentenceKind::Suspended, d("2021-02-15"))
        .with_term(Term::new(0, 6, 0, 0))
        .activated_on(d("2022-08-31"));
    let r = calculate_sentence(&input).unwrap();
    // 31 Aug + 6 months is "31 Feb 2023", which rolls over to 3 Mar; the last day is 2 Mar
    assert_eq!(r.sentence_end, Some(d("2023-03-02")));
    assert_eq!(r.total_days_inclusive, 184);
}

#[test]
fn payload_round_trip_through_json() {
    let payload = r#"{
        "type": "aggregate",
        "dateOfSentence": "2020-01-01",
        "remandDays": 0,
        "taggedBailDays": 0,
        "components": [
            {"relation": "consecutive", "groupId": null, "years": 1, "months": 0, "weeks": 0, "days": 0},
            {"relation": "concurrent", "groupId": 1, "years": 0, "months": 6, "weeks": 0, "days": 0}
        ],
        "releaseFraction": 0.5
    }"#;
    let input: CalculationInput = serde_json::from_str(payload).unwrap();
    let r = calculate_sentence(&input).unwrap();
    assert_eq!(r.sentence_end, Some(d("2021-07-01")));
    assert_eq!(r.erd_date, Some(d("2020-09-30")));
}
