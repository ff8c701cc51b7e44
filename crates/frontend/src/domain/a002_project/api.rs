use contracts::domain::a002_project::{ChainRecord, Project, ProjectDto};
use serde_json::Value;

use crate::shared::api_utils::segment;
use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};

/// Projects of one village
pub async fn fetch_projects_by_village(
    api: &ApiClient,
    village_id: &str,
) -> ApiResult<Vec<Project>> {
    let path = format!("/projects/by_village/{}", segment(village_id));
    let projects: Option<Vec<Project>> = api.send(&path, RequestOptions::get()).await?;
    let projects = projects.unwrap_or_default();
    tracing::debug!(village_id, count = projects.len(), "projects loaded");
    Ok(projects)
}

pub async fn fetch_project_detail(api: &ApiClient, project_id: &str) -> ApiResult<Project> {
    let path = format!("/projects/{}", segment(project_id));
    api.send(&path, RequestOptions::get()).await
}

/// Create a project; the server's reply is passed through as is
pub async fn create_project(api: &ApiClient, dto: &ProjectDto) -> ApiResult<Value> {
    api.send("/projects/add", RequestOptions::post().json(dto)?).await
}

/// Update a project. Some backend versions reply with the stored row,
/// others with a status object only.
pub async fn update_project(
    api: &ApiClient,
    project_id: &str,
    dto: &ProjectDto,
) -> ApiResult<Option<Project>> {
    let path = format!("/projects/update/{}", segment(project_id));
    let reply: Value = api.send(&path, RequestOptions::put().json(dto)?).await?;
    Ok(serde_json::from_value::<Project>(reply)
        .ok()
        .filter(|project| !project.id.is_empty()))
}

pub async fn delete_project(api: &ApiClient, project_id: &str) -> ApiResult<Value> {
    let path = format!("/projects/delete/{}", segment(project_id));
    api.send(&path, RequestOptions::delete()).await
}

/// Read the project's record back from the chain
pub async fn verify_project_on_chain(api: &ApiClient, project_id: &str) -> ApiResult<ChainRecord> {
    let path = format!("/projects/verify/{}", segment(project_id));
    api.send(&path, RequestOptions::get()).await
}
