use std::ops::RangeInclusive;

use super::super::domain::ApplicationDraft;
use super::report::{ErrorField, ValidationReport, ValidationRule};

pub(crate) const ADULT_AGE: RangeInclusive<i64> = 18..=79;
pub(crate) const CHILDREN_COUNT: RangeInclusive<i64> = 1..=5;
pub(crate) const SENIOR_AGE: i64 = 65;

pub(crate) const AGE_MESSAGE: &str = "Age must be between 18 and 79.";
pub(crate) const INPATIENT_MESSAGE: &str = "Select an inpatient care limit.";
pub(crate) const SPOUSE_AGE_MESSAGE: &str = "Spouse age must be between 18 and 79.";
pub(crate) const PRINCIPAL_SENIOR_MESSAGE: &str =
    "Principal over 65 requires spouse also over 65, otherwise buy separate plans.";
pub(crate) const SPOUSE_SENIOR_MESSAGE: &str =
    "Spouse over 65 requires principal also over 65, otherwise buy separate plans.";
pub(crate) const CHILDREN_COUNT_MESSAGE: &str = "Number of children must be between 1 and 5.";
pub(crate) const CHILDREN_DEPENDENCY_MESSAGE: &str =
    "Enter the principal age and inpatient limit before adding children.";
pub(crate) const MATERNITY_DEPENDENCY_MESSAGE: &str =
    "Maternity cover requires the principal age and inpatient limit.";
pub(crate) const DENTAL_DEPENDENCY_MESSAGE: &str =
    "Dental cover requires the principal age, inpatient limit and outpatient limit.";

/// Runs every rule in order; no rule short-circuits another.
pub(crate) fn check_draft(draft: &ApplicationDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_principal_age(draft, &mut report);
    check_inpatient_limit(draft, &mut report);
    check_spouse_age(draft, &mut report);
    check_senior_pairing(draft, &mut report);
    check_children(draft, &mut report);
    check_maternity(draft, &mut report);
    check_dental(draft, &mut report);

    report
}

fn within(value: Option<i64>, range: &RangeInclusive<i64>) -> bool {
    value.map(|value| range.contains(&value)).unwrap_or(false)
}

fn has_core_selection(draft: &ApplicationDraft) -> bool {
    draft.principal_age.is_some() && draft.inpatient_limit.is_some()
}

fn check_principal_age(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if !within(draft.principal_age, &ADULT_AGE) {
        report.push(ErrorField::Age, ValidationRule::PrincipalAgeRange, AGE_MESSAGE);
    }
}

fn check_inpatient_limit(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if draft.inpatient_limit.is_none() {
        report.push(
            ErrorField::InpatientLimit,
            ValidationRule::InpatientLimitRequired,
            INPATIENT_MESSAGE,
        );
    }
}

fn check_spouse_age(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if draft.include_spouse && !within(draft.spouse_age, &ADULT_AGE) {
        report.push(
            ErrorField::SpouseAge,
            ValidationRule::SpouseAgeRange,
            SPOUSE_AGE_MESSAGE,
        );
    }
}

fn check_senior_pairing(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if !draft.include_spouse {
        return;
    }
    let (Some(principal), Some(spouse)) = (draft.principal_age, draft.spouse_age) else {
        return;
    };

    let principal_senior = principal > SENIOR_AGE;
    let spouse_senior = spouse > SENIOR_AGE;
    match (principal_senior, spouse_senior) {
        (true, false) => report.push(
            ErrorField::SpouseAge,
            ValidationRule::PrincipalOverSeniorAge,
            PRINCIPAL_SENIOR_MESSAGE,
        ),
        (false, true) => report.push(
            ErrorField::SpouseAge,
            ValidationRule::SpouseOverSeniorAge,
            SPOUSE_SENIOR_MESSAGE,
        ),
        _ => {}
    }
}

fn check_children(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if !draft.include_children {
        return;
    }

    if !within(draft.number_of_children, &CHILDREN_COUNT) {
        report.push(
            ErrorField::NumberOfChildren,
            ValidationRule::ChildrenCountRange,
            CHILDREN_COUNT_MESSAGE,
        );
    }

    if !has_core_selection(draft) {
        report.push(
            ErrorField::NumberOfChildren,
            ValidationRule::ChildrenDependencies,
            CHILDREN_DEPENDENCY_MESSAGE,
        );
    }
}

fn check_maternity(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if draft.riders.maternity.is_enabled() && !has_core_selection(draft) {
        report.push(
            ErrorField::Maternity,
            ValidationRule::MaternityDependencies,
            MATERNITY_DEPENDENCY_MESSAGE,
        );
    }
}

fn check_dental(draft: &ApplicationDraft, report: &mut ValidationReport) {
    if draft.riders.dental.is_enabled()
        && !(has_core_selection(draft) && draft.outpatient_limit.is_some())
    {
        report.push(
            ErrorField::Dental,
            ValidationRule::DentalDependencies,
            DENTAL_DEPENDENCY_MESSAGE,
        );
    }
}
