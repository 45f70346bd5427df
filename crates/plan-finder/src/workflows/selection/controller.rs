use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{ApplicationDraft, FieldInput, FormField};
use super::plans::{PlanRecord, PlansApi, PlansApiError};
use super::query::PlanQuery;
use super::validation::{self, ValidationReport};
use crate::workflows::catalog::{Catalog, CoverAmount, LimitKind};

/// Result of a submission attempt that reached a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The draft broke one or more rules and was kept for correction.
    Rejected(ValidationReport),
    /// The plans API answered; the draft has been reset.
    Matched(PlanSearchResult),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSearchResult {
    pub query: String,
    pub plans: Vec<PlanRecord>,
    pub retrieved_at: DateTime<Utc>,
}

/// Owns one form's draft and is its only mutator.
#[derive(Debug, Clone)]
pub struct FormController {
    catalog: Arc<Catalog>,
    draft: ApplicationDraft,
}

impl FormController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_draft(catalog, ApplicationDraft::default())
    }

    /// Adopts an externally built draft, applying the same coupling and catalog checks as edits.
    pub fn with_draft(catalog: Arc<Catalog>, draft: ApplicationDraft) -> Self {
        let mut draft = draft.normalized();
        draft.inpatient_limit = draft
            .inpatient_limit
            .and_then(|amount| offered(&catalog, LimitKind::Inpatient, amount.value()));
        draft.outpatient_limit = draft
            .outpatient_limit
            .and_then(|amount| offered(&catalog, LimitKind::Outpatient, amount.value()));

        Self { catalog, draft }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reset(&mut self) {
        self.draft = ApplicationDraft::default();
    }

    /// Writes one control's value into the draft and recomputes derived fields.
    pub fn apply_edit(&mut self, field: FormField, input: FieldInput) {
        debug!(%field, ?input, "applying field edit");

        match field {
            FormField::IncludeSpouse => self.draft.include_spouse = input.as_flag(),
            FormField::IncludeChildren => self.draft.include_children = input.as_flag(),
            FormField::Maternity => self.draft.riders.maternity = input.as_rider(),
            FormField::Dental => self.draft.riders.set_dental(input.as_rider()),
            FormField::Optical => {
                debug!("optical follows the dental rider; edit ignored");
            }
            FormField::PrincipalAge => self.draft.principal_age = input.as_number(),
            FormField::SpouseAge => self.draft.spouse_age = input.as_number(),
            FormField::NumberOfChildren => self.draft.number_of_children = input.as_number(),
            FormField::InpatientLimit => {
                self.draft.inpatient_limit = self.select_limit(LimitKind::Inpatient, &input)
            }
            FormField::OutpatientLimit => {
                self.draft.outpatient_limit = self.select_limit(LimitKind::Outpatient, &input)
            }
        }
    }

    fn select_limit(&self, kind: LimitKind, input: &FieldInput) -> Option<CoverAmount> {
        offered(&self.catalog, kind, input.as_amount()?)
    }

    pub fn validate(&self) -> ValidationReport {
        validation::validate(&self.draft)
    }

    /// Builds the outbound query, or returns every violated rule.
    pub fn prepare(&self) -> Result<PlanQuery, ValidationReport> {
        let validated = validation::validate_draft(&self.draft)?;
        Ok(PlanQuery::from_validated(&validated))
    }

    /// Validates, queries the plans API, and resets the draft once the API has answered.
    ///
    /// A rejected draft or an API failure leaves the draft exactly as it was.
    pub async fn submit<P>(&mut self, plans_api: &P) -> Result<SubmissionOutcome, PlansApiError>
    where
        P: PlansApi + ?Sized,
    {
        let query = match self.prepare() {
            Ok(query) => query,
            Err(report) => {
                info!(errors = report.errors().len(), "selection rejected");
                return Ok(SubmissionOutcome::Rejected(report));
            }
        };

        let plans = match plans_api.search(&query).await {
            Ok(plans) => plans,
            Err(err) => {
                warn!(error = %err, %query, "plans search failed; draft retained");
                return Err(err);
            }
        };

        info!(%query, matches = plans.len(), "plans search completed");
        self.reset();

        Ok(SubmissionOutcome::Matched(PlanSearchResult {
            query: query.to_query_string(),
            plans,
            retrieved_at: Utc::now(),
        }))
    }
}

fn offered(catalog: &Catalog, kind: LimitKind, amount: u64) -> Option<CoverAmount> {
    let selected = catalog.lookup(kind, amount);
    if selected.is_none() {
        warn!(kind = kind.label(), amount, "limit not offered by catalog");
    }
    selected
}
