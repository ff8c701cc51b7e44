use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_risk_assessment::RiskAssessment;
use serde::Serialize;
use serde_json::Value;

use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};

/// Score a project's risk; the payload is forwarded untouched
pub async fn compute_risk<T: Serialize + ?Sized>(api: &ApiClient, payload: &T) -> ApiResult<Value> {
    tracing::debug!(usecase = %RiskAssessment::full_name(), "risk scoring requested");
    api.send("/ai/risk", RequestOptions::post().json(payload)?).await
}

pub async fn check_ai_alerts(api: &ApiClient) -> ApiResult<Value> {
    api.send("/ai/alerts", RequestOptions::get()).await
}
