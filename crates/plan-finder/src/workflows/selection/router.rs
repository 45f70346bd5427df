use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::controller::SubmissionOutcome;
use super::domain::ApplicationDraft;
use super::plans::PlansApi;
use super::service::SelectionService;
use super::validation::ValidationReport;

/// Router builder exposing catalog, validation, and plan search endpoints.
pub fn selection_router<P>(service: Arc<SelectionService<P>>) -> Router
where
    P: PlansApi + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<P>))
        .route("/api/v1/selection/validate", post(validate_handler::<P>))
        .route("/api/v1/selection/search", post(search_handler::<P>))
        .with_state(service)
}

pub(crate) async fn catalog_handler<P>(State(service): State<Arc<SelectionService<P>>>) -> Response
where
    P: PlansApi + 'static,
{
    (StatusCode::OK, Json(service.catalog().clone())).into_response()
}

pub(crate) async fn validate_handler<P>(
    State(service): State<Arc<SelectionService<P>>>,
    Json(draft): Json<ApplicationDraft>,
) -> Response
where
    P: PlansApi + 'static,
{
    match service.validate(draft) {
        Ok(query) => {
            let payload = json!({
                "valid": true,
                "query": query.to_query_string(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(report) => rejection(&report),
    }
}

pub(crate) async fn search_handler<P>(
    State(service): State<Arc<SelectionService<P>>>,
    Json(draft): Json<ApplicationDraft>,
) -> Response
where
    P: PlansApi + 'static,
{
    match service.search(draft).await {
        Ok(SubmissionOutcome::Matched(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(SubmissionOutcome::Rejected(report)) => rejection(&report),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}

fn rejection(report: &ValidationReport) -> Response {
    let payload = json!({
        "valid": false,
        "errors": report.by_field(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
