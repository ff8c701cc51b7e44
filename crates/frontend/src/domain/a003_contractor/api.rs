use contracts::domain::a002_project::Project;
use contracts::domain::a003_contractor::{AuthorityStatus, Contractor, NewContractorDto};
use contracts::shared::{FormPayload, LocationFilter};
use serde_json::Value;

use crate::shared::api_utils::segment;
use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};
use crate::shared::query::QueryString;

pub async fn fetch_contractors(api: &ApiClient) -> ApiResult<Vec<Contractor>> {
    let contractors: Option<Vec<Contractor>> =
        api.send("/contractors/list", RequestOptions::get()).await?;
    let contractors = contractors.unwrap_or_default();
    tracing::debug!(count = contractors.len(), "contractors loaded");
    Ok(contractors)
}

/// Register a contractor. The backend reads the fields from the query
/// string, not the body.
pub async fn add_contractor(api: &ApiClient, dto: &NewContractorDto) -> ApiResult<Value> {
    let query = dto
        .query_pairs()
        .into_iter()
        .fold(QueryString::new(), |q, (key, value)| q.push(key, value));
    api.send(&query.append_to("/contractors/add"), RequestOptions::post()).await
}

pub async fn assign_contractor(
    api: &ApiClient,
    project_id: &str,
    contractor_id: &str,
) -> ApiResult<Value> {
    let path = QueryString::new()
        .push("contractor_id", contractor_id)
        .append_to(&format!("/contractors/assign/{}", segment(project_id)));
    api.send(&path, RequestOptions::put()).await
}

pub async fn fetch_contractor_projects(
    api: &ApiClient,
    contractor_id: &str,
) -> ApiResult<Vec<Project>> {
    let path = format!("/contractors/projects/{}", segment(contractor_id));
    let projects: Option<Vec<Project>> = api.send(&path, RequestOptions::get()).await?;
    Ok(projects.unwrap_or_default())
}

/// Progress report from the field: text fields plus an optional photo
pub async fn submit_contractor_update(api: &ApiClient, form: FormPayload) -> ApiResult<Value> {
    tracing::debug!(
        project_id = form.text_value("project_id"),
        with_photo = form.has_file(),
        "progress update"
    );
    api.send("/contractors/update", RequestOptions::post().multipart(form)).await
}

/// Progress reports across the selected region
pub async fn fetch_all_updates(api: &ApiClient, filter: &LocationFilter) -> ApiResult<Value> {
    let path = QueryString::from(filter).append_to("/contractors/updates/all");
    api.send(&path, RequestOptions::get()).await
}

pub async fn delete_contractor(api: &ApiClient, contractor_id: &str) -> ApiResult<Value> {
    let path = format!("/contractors/{}", segment(contractor_id));
    api.send(&path, RequestOptions::delete()).await
}

/// Set the contractor's field PIN (sent as form data)
pub async fn update_contractor_pin(
    api: &ApiClient,
    contractor_id: &str,
    pin: &str,
) -> ApiResult<Value> {
    let path = format!("/contractors/{}/pin", segment(contractor_id));
    let form = FormPayload::new().text("pin", pin);
    api.send(&path, RequestOptions::put().multipart(form)).await
}

pub async fn verify_contractor_pin(
    api: &ApiClient,
    contractor_id: &str,
    pin: &str,
) -> ApiResult<Value> {
    let form = FormPayload::new()
        .text("contractor_id", contractor_id)
        .text("pin", pin);
    api.send("/contractors/verify-pin", RequestOptions::post().multipart(form)).await
}

/// Grant or revoke authority. Unlike the PIN endpoints the flag travels
/// in the query string.
pub async fn toggle_contractor_authority(
    api: &ApiClient,
    contractor_id: &str,
    status: AuthorityStatus,
) -> ApiResult<Value> {
    let path = QueryString::new()
        .push("is_active", status.as_flag())
        .append_to(&format!("/contractors/{}/authority", segment(contractor_id)));
    api.send(&path, RequestOptions::put()).await
}
