//! Applicant selection: the draft edited by the comparison form, the eligibility rules it must
//! satisfy, and the query forwarded to the remote plans API.

mod controller;
pub mod domain;
pub mod plans;
mod query;
pub mod router;
mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use controller::{FormController, PlanSearchResult, SubmissionOutcome};
pub use domain::{ApplicationDraft, FieldInput, FormField, RiderChoice, Riders};
pub use plans::{HttpPlansApi, PlanRecord, PlansApi, PlansApiError, StaticPlansApi};
pub use query::PlanQuery;
pub use router::selection_router;
pub use service::SelectionService;
pub use validation::{
    validate, validate_draft, ErrorField, FieldError, ValidatedDraft, ValidationReport,
    ValidationRule,
};
