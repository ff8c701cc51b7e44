use contracts::domain::a001_location::{LocationLevel, LocationNode, LocationRecord};

use crate::shared::api_utils::segment;
use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};

async fn fetch_level(
    api: &ApiClient,
    level: LocationLevel,
    parent_id: Option<&str>,
) -> ApiResult<Vec<LocationNode>> {
    let path = match parent_id {
        Some(id) => format!("/locations/{}/{}", level.collection(), segment(id)),
        None => format!("/locations/{}", level.collection()),
    };

    let records: Option<Vec<LocationRecord>> = api.send(&path, RequestOptions::get()).await?;
    let records = records.unwrap_or_default();
    tracing::debug!(?level, parent_id, count = records.len(), "locations loaded");

    Ok(records
        .into_iter()
        .map(|record| record.normalize(level))
        .collect())
}

/// GET /locations/states
pub async fn fetch_states(api: &ApiClient) -> ApiResult<Vec<LocationNode>> {
    fetch_level(api, LocationLevel::State, None).await
}

/// GET /locations/districts/:state_id
pub async fn fetch_districts(api: &ApiClient, state_id: &str) -> ApiResult<Vec<LocationNode>> {
    fetch_level(api, LocationLevel::District, Some(state_id)).await
}

/// GET /locations/blocks/:district_id
pub async fn fetch_blocks(api: &ApiClient, district_id: &str) -> ApiResult<Vec<LocationNode>> {
    fetch_level(api, LocationLevel::Block, Some(district_id)).await
}

/// GET /locations/villages/:block_id
pub async fn fetch_villages(api: &ApiClient, block_id: &str) -> ApiResult<Vec<LocationNode>> {
    fetch_level(api, LocationLevel::Village, Some(block_id)).await
}
