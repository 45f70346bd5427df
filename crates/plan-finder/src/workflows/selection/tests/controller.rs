use super::common::*;
use crate::workflows::catalog::CoverAmount;
use crate::workflows::selection::domain::{ApplicationDraft, FieldInput, FormField, RiderChoice};
use crate::workflows::selection::{ErrorField, FormController, SubmissionOutcome};

fn number(raw: &str) -> FieldInput {
    FieldInput::Number(raw.to_string())
}

fn select(raw: &str) -> FieldInput {
    FieldInput::Select(raw.to_string())
}

fn fill_minimal(controller: &mut FormController) {
    controller.apply_edit(FormField::PrincipalAge, number("30"));
    controller.apply_edit(FormField::InpatientLimit, select("500000"));
}

#[test]
fn new_controller_starts_with_empty_draft() {
    let controller = controller();
    assert_eq!(controller.draft(), &ApplicationDraft::default());
}

#[test]
fn scalar_edits_overwrite_draft_fields() {
    let mut controller = controller();
    controller.apply_edit(FormField::PrincipalAge, number(" 44 "));
    controller.apply_edit(FormField::SpouseAge, FieldInput::Text("39".to_string()));
    controller.apply_edit(FormField::NumberOfChildren, number("2"));
    controller.apply_edit(FormField::InpatientLimit, select("2000000"));
    controller.apply_edit(FormField::OutpatientLimit, select("100000"));

    let draft = controller.draft();
    assert_eq!(draft.principal_age, Some(44));
    assert_eq!(draft.spouse_age, Some(39));
    assert_eq!(draft.number_of_children, Some(2));
    assert_eq!(draft.inpatient_limit, Some(CoverAmount(2_000_000)));
    assert_eq!(draft.outpatient_limit, Some(CoverAmount(100_000)));
}

#[test]
fn clearing_or_garbling_a_number_unsets_it() {
    let mut controller = controller();
    controller.apply_edit(FormField::PrincipalAge, number("30"));
    controller.apply_edit(FormField::PrincipalAge, number(""));
    assert_eq!(controller.draft().principal_age, None);

    controller.apply_edit(FormField::PrincipalAge, number("3O"));
    assert_eq!(controller.draft().principal_age, None);
}

#[test]
fn limits_outside_catalog_are_left_unset() {
    let mut controller = controller();
    controller.apply_edit(FormField::InpatientLimit, select("123456"));
    controller.apply_edit(FormField::OutpatientLimit, select("500000"));
    assert_eq!(controller.draft().inpatient_limit, None);
    assert_eq!(controller.draft().outpatient_limit, None);
}

#[test]
fn toggles_follow_checked_state() {
    let mut controller = controller();
    controller.apply_edit(FormField::IncludeSpouse, FieldInput::Checkbox(true));
    controller.apply_edit(FormField::IncludeChildren, FieldInput::Checkbox(true));
    assert!(controller.draft().include_spouse);
    assert!(controller.draft().include_children);

    controller.apply_edit(FormField::IncludeSpouse, FieldInput::Checkbox(false));
    assert!(!controller.draft().include_spouse);
}

#[test]
fn dental_forces_optical_to_match() {
    for prior in [RiderChoice::Unset, RiderChoice::Yes, RiderChoice::No] {
        let mut draft = ApplicationDraft::default();
        draft.riders.dental = prior;
        draft.riders.optical = prior;
        let mut controller = FormController::with_draft(catalog(), draft);

        controller.apply_edit(FormField::Dental, select("Yes"));
        assert_eq!(controller.draft().riders.optical, RiderChoice::Yes, "{prior:?}");

        controller.apply_edit(FormField::Dental, select("No"));
        assert_eq!(controller.draft().riders.optical, RiderChoice::No, "{prior:?}");
    }
}

#[test]
fn dental_checkbox_spelling_is_accepted() {
    let mut controller = controller();
    controller.apply_edit(FormField::Dental, FieldInput::Checkbox(true));
    assert_eq!(controller.draft().riders.dental, RiderChoice::Yes);
    assert_eq!(controller.draft().riders.optical, RiderChoice::Yes);
}

#[test]
fn optical_cannot_be_edited_directly() {
    let mut controller = controller();
    controller.apply_edit(FormField::Dental, select("No"));
    controller.apply_edit(FormField::Optical, select("Yes"));
    assert_eq!(controller.draft().riders.optical, RiderChoice::No);
}

#[test]
fn adopted_drafts_are_normalized() {
    let mut draft = valid_draft();
    draft.riders.dental = RiderChoice::Yes;
    draft.riders.optical = RiderChoice::No;
    draft.outpatient_limit = Some(CoverAmount(1));

    let controller = FormController::with_draft(catalog(), draft);
    assert_eq!(controller.draft().riders.optical, RiderChoice::Yes);
    assert_eq!(controller.draft().outpatient_limit, None);
}

#[test]
fn edits_never_run_validation() {
    let mut controller = controller();
    controller.apply_edit(FormField::PrincipalAge, number("5"));
    assert_eq!(controller.draft().principal_age, Some(5));
    assert!(controller.validate().has_error(ErrorField::Age));
}

#[tokio::test]
async fn rejected_submission_keeps_draft_and_is_repeatable() {
    let api = static_api();
    let mut controller = controller();
    controller.apply_edit(FormField::PrincipalAge, number("90"));
    controller.apply_edit(FormField::IncludeSpouse, FieldInput::Checkbox(true));
    let before = controller.draft().clone();

    let first = controller.submit(api.as_ref()).await.expect("no api error");
    let second = controller.submit(api.as_ref()).await.expect("no api error");

    match (&first, &second) {
        (SubmissionOutcome::Rejected(a), SubmissionOutcome::Rejected(b)) => assert_eq!(a, b),
        other => panic!("expected two rejections, got {other:?}"),
    }
    assert_eq!(controller.draft(), &before);
    assert!(api.received().is_empty(), "rejected drafts never reach the api");
}

#[tokio::test]
async fn successful_submission_resets_draft() {
    let api = static_api();
    let mut controller = controller();
    fill_minimal(&mut controller);

    let outcome = controller.submit(api.as_ref()).await.expect("search succeeds");

    match outcome {
        SubmissionOutcome::Matched(result) => {
            assert_eq!(result.query, "principalAge=30&inpatientLimit=500000");
            assert_eq!(result.plans.len(), 2);
        }
        other => panic!("expected matched plans, got {other:?}"),
    }
    assert_eq!(controller.draft(), &ApplicationDraft::default());
    assert_eq!(api.received().len(), 1);
}

#[tokio::test]
async fn api_failure_preserves_draft() {
    let mut controller = controller();
    fill_minimal(&mut controller);
    let before = controller.draft().clone();

    let err = controller
        .submit(&UnavailablePlansApi)
        .await
        .expect_err("api failure surfaces");

    assert!(err.to_string().contains("upstream offline"));
    assert_eq!(controller.draft(), &before);
}
