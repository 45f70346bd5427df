use metrics_exporter_prometheus::PrometheusHandle;
use plan_finder::config::PlansConfig;
use plan_finder::error::AppError;
use plan_finder::workflows::catalog::Catalog;
use plan_finder::workflows::selection::PlanRecord;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(
    override_path: Option<&Path>,
    plans: &PlansConfig,
) -> Result<Arc<Catalog>, AppError> {
    let path = override_path.or(plans.catalog_csv.as_deref());
    let catalog = match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            info!(path = %path.display(), "loaded limit catalog");
            catalog
        }
        None => Catalog::standard(),
    };
    Ok(Arc::new(catalog))
}

/// Canned plans answered by `quote --offline`.
pub(crate) fn sample_plans() -> Vec<PlanRecord> {
    vec![
        PlanRecord {
            company_name: "Jubilee Health".to_string(),
            plan_name: "J-Care Essential".to_string(),
            inpatient_cover: 500_000,
            outpatient_cover: Some(50_000),
            annual_premium: 32_150.0,
            include_maternity: true,
            maternity_cover: Some(100_000),
            include_dental: true,
            dental_cover: Some(20_000),
            include_optical: true,
            optical_cover: Some(15_000),
        },
        PlanRecord {
            company_name: "Britam".to_string(),
            plan_name: "Milele Prime".to_string(),
            inpatient_cover: 1_000_000,
            outpatient_cover: None,
            annual_premium: 41_800.0,
            include_maternity: false,
            maternity_cover: None,
            include_dental: false,
            dental_cover: None,
            include_optical: false,
            optical_cover: None,
        },
    ]
}
