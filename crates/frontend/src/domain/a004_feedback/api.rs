use contracts::domain::a004_feedback::Feedback;
use contracts::shared::FormPayload;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::segment;
use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};

/// Feedback left on one project
pub async fn list_feedback(api: &ApiClient, project_id: &str) -> ApiResult<Vec<Feedback>> {
    let path = format!("/feedback/list/{}", segment(project_id));
    let items: Option<Vec<Feedback>> = api.send(&path, RequestOptions::get()).await?;
    Ok(items.unwrap_or_default())
}

/// Submit feedback as JSON; the payload is sent exactly as given
pub async fn submit_feedback<T: Serialize + ?Sized>(
    api: &ApiClient,
    project_id: &str,
    payload: &T,
) -> ApiResult<Value> {
    let path = format!("/feedback/add/{}", segment(project_id));
    api.send(&path, RequestOptions::post().json(payload)?).await
}

/// Submit feedback with a photo attached
pub async fn submit_feedback_with_file(
    api: &ApiClient,
    project_id: &str,
    upload: FormPayload,
) -> ApiResult<Value> {
    let path = format!("/feedback/add/{}", segment(project_id));
    tracing::debug!(project_id, with_file = upload.has_file(), "feedback upload");
    api.send(&path, RequestOptions::post().multipart(upload)).await
}

/// Feedback the AI flagged as problematic for a village
pub async fn fetch_problematic_feedbacks(api: &ApiClient, village_id: &str) -> ApiResult<Value> {
    let path = format!("/feedback/problematic/{}", segment(village_id));
    api.send(&path, RequestOptions::get()).await
}
