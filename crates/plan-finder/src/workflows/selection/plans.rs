use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::query::PlanQuery;

/// Plan returned by the remote plans API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub company_name: String,
    pub plan_name: String,
    pub inpatient_cover: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outpatient_cover: Option<u64>,
    pub annual_premium: f64,
    #[serde(default)]
    pub include_maternity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maternity_cover: Option<u64>,
    #[serde(default)]
    pub include_dental: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dental_cover: Option<u64>,
    #[serde(default)]
    pub include_optical: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optical_cover: Option<u64>,
}

/// Boundary to the remote plans API so the controller can be exercised without a network.
#[async_trait]
pub trait PlansApi: Send + Sync {
    async fn search(&self, query: &PlanQuery) -> Result<Vec<PlanRecord>, PlansApiError>;
}

/// Failure talking to the plans API.
#[derive(Debug, thiserror::Error)]
pub enum PlansApiError {
    #[error("plans api request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("plans api responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("plans api returned an unreadable payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("plans api unavailable: {0}")]
    Unavailable(String),
}

/// Issues a single GET per search against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpPlansApi {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpPlansApi {
    pub fn new(endpoint: Url) -> Result<Self, PlansApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlansApi for HttpPlansApi {
    async fn search(&self, query: &PlanQuery) -> Result<Vec<PlanRecord>, PlansApiError> {
        debug!(endpoint = %self.endpoint, %query, "requesting plans");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(query.pairs())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlansApiError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Fixed plan list for offline runs and tests; remembers every query it answered.
#[derive(Debug, Default)]
pub struct StaticPlansApi {
    plans: Vec<PlanRecord>,
    received: Mutex<Vec<PlanQuery>>,
}

impl StaticPlansApi {
    pub fn new(plans: Vec<PlanRecord>) -> Self {
        Self {
            plans,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<PlanQuery> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl PlansApi for StaticPlansApi {
    async fn search(&self, query: &PlanQuery) -> Result<Vec<PlanRecord>, PlansApiError> {
        self.received
            .lock()
            .map_err(|_| PlansApiError::Unavailable("plans mutex poisoned".to_string()))?
            .push(query.clone());
        Ok(self.plans.clone())
    }
}
