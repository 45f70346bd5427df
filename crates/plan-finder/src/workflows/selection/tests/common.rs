use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::{Catalog, CoverAmount};
use crate::workflows::selection::domain::{ApplicationDraft, RiderChoice, Riders};
use crate::workflows::selection::plans::{
    PlanRecord, PlansApi, PlansApiError, StaticPlansApi,
};
use crate::workflows::selection::{FormController, PlanQuery, SelectionService};

pub(super) fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::standard())
}

pub(super) fn controller() -> FormController {
    FormController::new(catalog())
}

/// Principal aged 30 on the 500k tier with nothing else selected.
pub(super) fn valid_draft() -> ApplicationDraft {
    ApplicationDraft {
        principal_age: Some(30),
        inpatient_limit: Some(CoverAmount(500_000)),
        ..ApplicationDraft::default()
    }
}

pub(super) fn family_draft() -> ApplicationDraft {
    ApplicationDraft {
        principal_age: Some(41),
        inpatient_limit: Some(CoverAmount(1_000_000)),
        outpatient_limit: Some(CoverAmount(50_000)),
        include_spouse: true,
        spouse_age: Some(38),
        include_children: true,
        number_of_children: Some(3),
        riders: Riders {
            maternity: RiderChoice::Yes,
            dental: RiderChoice::Yes,
            optical: RiderChoice::Yes,
        },
    }
}

pub(super) fn plan(company: &str, premium: f64) -> PlanRecord {
    PlanRecord {
        company_name: company.to_string(),
        plan_name: "Family Care".to_string(),
        inpatient_cover: 500_000,
        outpatient_cover: Some(50_000),
        annual_premium: premium,
        include_maternity: false,
        maternity_cover: None,
        include_dental: false,
        dental_cover: None,
        include_optical: false,
        optical_cover: None,
    }
}

pub(super) fn static_api() -> Arc<StaticPlansApi> {
    Arc::new(StaticPlansApi::new(vec![
        plan("Jubilee", 28_500.0),
        plan("Britam", 31_200.0),
    ]))
}

pub(super) fn build_service() -> (Arc<SelectionService<StaticPlansApi>>, Arc<StaticPlansApi>) {
    let api = static_api();
    let service = Arc::new(SelectionService::new(catalog(), api.clone()));
    (service, api)
}

/// Plans API that is always down.
pub(super) struct UnavailablePlansApi;

#[async_trait]
impl PlansApi for UnavailablePlansApi {
    async fn search(&self, _query: &PlanQuery) -> Result<Vec<PlanRecord>, PlansApiError> {
        Err(PlansApiError::Unavailable("upstream offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status code");
}
