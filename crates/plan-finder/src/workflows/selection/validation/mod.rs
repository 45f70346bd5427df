mod report;
pub(crate) mod rules;

pub use report::{ErrorField, FieldError, ValidatedDraft, ValidationReport, ValidationRule};

use super::domain::ApplicationDraft;

/// Evaluates the eligibility rules against a draft.
pub fn validate(draft: &ApplicationDraft) -> ValidationReport {
    rules::check_draft(draft)
}

/// Validates and, when every rule passes, returns the draft in a form the query builder accepts.
pub fn validate_draft(draft: &ApplicationDraft) -> Result<ValidatedDraft, ValidationReport> {
    let report = validate(draft);
    if report.is_valid() {
        Ok(ValidatedDraft::new(draft.clone()))
    } else {
        Err(report)
    }
}
