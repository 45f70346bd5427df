use super::common::*;
use crate::workflows::selection::domain::{ApplicationDraft, RiderChoice};
use crate::workflows::selection::{validate_draft, PlanQuery};

fn query_for(draft: &ApplicationDraft) -> PlanQuery {
    let validated = validate_draft(draft).expect("draft is valid");
    PlanQuery::from_validated(&validated)
}

#[test]
fn minimal_draft_sends_only_age_and_inpatient_limit() {
    let query = query_for(&valid_draft());
    assert_eq!(query.to_query_string(), "principalAge=30&inpatientLimit=500000");
}

#[test]
fn family_draft_sends_parameters_in_canonical_order() {
    let query = query_for(&family_draft());
    let keys: Vec<&str> = query.pairs().iter().map(|(key, _)| *key).collect();
    assert_eq!(
        keys,
        vec![
            "principalAge",
            "inpatientLimit",
            "spouseAge",
            "numberOfKids",
            "maternity",
            "dental",
            "optical",
        ]
    );
    assert_eq!(query.get("spouseAge"), Some("38"));
    assert_eq!(query.get("numberOfKids"), Some("3"));
    assert_eq!(query.get("optical"), Some("true"));
}

#[test]
fn excluded_dependents_are_not_sent() {
    let draft = ApplicationDraft {
        include_spouse: false,
        spouse_age: Some(40),
        include_children: false,
        number_of_children: Some(2),
        ..valid_draft()
    };
    let query = query_for(&draft);
    assert_eq!(query.get("spouseAge"), None);
    assert_eq!(query.get("numberOfKids"), None);
}

#[test]
fn declined_riders_are_not_sent() {
    let mut draft = valid_draft();
    draft.riders.maternity = RiderChoice::No;
    draft.riders.dental = RiderChoice::No;
    draft.riders.optical = RiderChoice::No;

    let query = query_for(&draft);
    assert_eq!(query.pairs().len(), 2);
    assert!(query.pairs().iter().all(|(_, value)| !value.is_empty()));
}

#[test]
fn optical_travels_with_dental() {
    let mut draft = family_draft();
    draft.riders.maternity = RiderChoice::Unset;
    let query = query_for(&draft);
    assert_eq!(
        query.to_string(),
        "principalAge=41&inpatientLimit=1000000&spouseAge=38&numberOfKids=3&dental=true&optical=true"
    );
}
