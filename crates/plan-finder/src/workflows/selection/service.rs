use std::sync::Arc;

use super::controller::{FormController, SubmissionOutcome};
use super::domain::ApplicationDraft;
use super::plans::{PlansApi, PlansApiError};
use super::query::PlanQuery;
use super::validation::ValidationReport;
use crate::workflows::catalog::Catalog;

/// Service composing the reference catalog and the plans API client.
///
/// Each call drives its own [`FormController`]; only the catalog and client are shared.
pub struct SelectionService<P: ?Sized> {
    catalog: Arc<Catalog>,
    plans_api: Arc<P>,
}

impl<P> SelectionService<P>
where
    P: PlansApi + ?Sized + 'static,
{
    pub fn new(catalog: Arc<Catalog>, plans_api: Arc<P>) -> Self {
        Self { catalog, plans_api }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controller(&self, draft: ApplicationDraft) -> FormController {
        FormController::with_draft(self.catalog.clone(), draft)
    }

    /// Check a draft without contacting the plans API.
    pub fn validate(&self, draft: ApplicationDraft) -> Result<PlanQuery, ValidationReport> {
        self.controller(draft).prepare()
    }

    /// Validate a draft and, when it passes, fetch matching plans.
    pub async fn search(
        &self,
        draft: ApplicationDraft,
    ) -> Result<SubmissionOutcome, PlansApiError> {
        let mut controller = self.controller(draft);
        controller.submit(self.plans_api.as_ref()).await
    }
}
