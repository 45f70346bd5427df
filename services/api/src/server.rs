use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_selection_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use plan_finder::config::AppConfig;
use plan_finder::error::AppError;
use plan_finder::telemetry;
use plan_finder::workflows::selection::{HttpPlansApi, SelectionService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(None, &config.plans)?;
    let plans_api = Arc::new(HttpPlansApi::new(config.plans.api_url.clone())?);
    let selection_service = Arc::new(SelectionService::new(catalog, plans_api));

    let app = with_selection_routes(selection_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        plans_api = %config.plans.api_url,
        "plan finder ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
