//! components.rs
//!
//! Combines the terms of an aggregate sentence. Consecutive terms are added
//! end to end; concurrent terms in the same group run alongside each other,
//! so only the longest of the group counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::SentenceError;
use crate::term::{term_to_calendar_days, Term, VarianceReport};

/// How a component relates to the rest of an aggregate sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    #[default]
    Consecutive,
    Concurrent,
}

/// One term within an aggregate sentence.
///
/// A concurrent component without a `group_id` has nothing to run alongside
/// and is counted as consecutive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(flatten)]
    pub term: Term,
    #[serde(default)]
    pub relation: Relation,
    #[serde(default)]
    pub group_id: Option<u32>,
}

impl Component {
    pub fn consecutive(term: Term) -> Self {
        Self {
            term,
            relation: Relation::Consecutive,
            group_id: None,
        }
    }

    pub fn concurrent(term: Term, group_id: Option<u32>) -> Self {
        Self {
            term,
            relation: Relation::Concurrent,
            group_id,
        }
    }

    /// The concurrent group this component is bucketed into, if any.
    pub fn concurrent_group(&self) -> Option<u32> {
        match self.relation {
            Relation::Concurrent => self.group_id,
            Relation::Consecutive => None,
        }
    }
}

/// Total days of an aggregate sentence anchored at `anchor`.
///
/// Each component is resolved on its own from `anchor`. Ungrouped components
/// are summed; each concurrent group adds only its longest member.
pub fn aggregate_components_to_days(
    anchor: CalendarDate,
    components: &[Component],
) -> Result<i64, SentenceError> {
    let mut consecutive_days = 0;
    let mut groups: BTreeMap<u32, i64> = BTreeMap::new();

    for component in components {
        let days = term_to_calendar_days(anchor, &component.term)?.days;
        match component.concurrent_group() {
            Some(group) => {
                let longest = groups.entry(group).or_insert(days);
                *longest = (*longest).max(days);
            }
            None => consecutive_days += days,
        }
    }

    Ok(consecutive_days + groups.values().sum::<i64>())
}

/// Sum of every component's own variance, each resolved from `anchor`.
pub fn sum_component_variance(
    anchor: CalendarDate,
    components: &[Component],
) -> Result<VarianceReport, SentenceError> {
    components
        .iter()
        .map(|c| term_to_calendar_days(anchor, &c.term).map(|r| r.variance))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date_only;

    fn anchor() -> CalendarDate {
        parse_date_only("2021-01-01").unwrap()
    }

    #[test]
    fn test_consecutive_terms_add() {
        let comps = [
            Component::consecutive(Term::of_days(10)),
            Component::consecutive(Term::of_days(5)),
        ];
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 15);
    }

    #[test]
    fn test_concurrent_group_takes_longest() {
        let comps = [
            Component::consecutive(Term::of_days(10)),
            Component::concurrent(Term::of_days(20), Some(1)),
            Component::concurrent(Term::of_days(15), Some(1)),
        ];
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 30);
    }

    #[test]
    fn test_group_contribution_is_max_not_sum() {
        let members = [3, 40, 17, 40, 9];
        let comps: Vec<Component> = members
            .iter()
            .map(|d| Component::concurrent(Term::of_days(*d), Some(7)))
            .collect();
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 40);
    }

    #[test]
    fn test_separate_groups_each_count_once() {
        let comps = [
            Component::concurrent(Term::of_days(20), Some(1)),
            Component::concurrent(Term::of_days(15), Some(1)),
            Component::concurrent(Term::of_days(4), Some(2)),
            Component::concurrent(Term::of_days(6), Some(2)),
        ];
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 26);
    }

    #[test]
    fn test_ungrouped_concurrent_counts_as_consecutive() {
        let comps = [
            Component::concurrent(Term::of_days(20), None),
            Component::concurrent(Term::of_days(15), None),
        ];
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 35);
    }

    #[test]
    fn test_group_id_on_consecutive_is_ignored() {
        let mut c = Component::consecutive(Term::of_days(20));
        c.group_id = Some(1);
        let comps = [c, Component::concurrent(Term::of_days(15), Some(1))];
        assert_eq!(aggregate_components_to_days(anchor(), &comps).unwrap(), 35);
    }

    #[test]
    fn test_components_resolve_from_the_same_anchor() {
        // a year from 2020-01-01 spans the leap day; both components see it
        let a = parse_date_only("2020-01-01").unwrap();
        let comps = [
            Component::consecutive(Term::new(1, 0, 0, 0)),
            Component::consecutive(Term::new(1, 0, 0, 0)),
        ];
        assert_eq!(aggregate_components_to_days(a, &comps).unwrap(), 732);
        let v = sum_component_variance(a, &comps).unwrap();
        assert_eq!(v.leap_days, 2);
        assert_eq!(v.total_adjustment, 2);
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(aggregate_components_to_days(anchor(), &[]).unwrap(), 0);
        assert_eq!(sum_component_variance(anchor(), &[]).unwrap(), VarianceReport::default());
    }

    #[test]
    fn test_component_json_shape() {
        let c: Component = serde_json::from_str(
            r#"{"relation":"concurrent","groupId":1,"years":0,"months":6,"weeks":0,"days":0}"#,
        )
        .unwrap();
        assert_eq!(c, Component::concurrent(Term::new(0, 6, 0, 0), Some(1)));
    }
}
