use contracts::shared::LocationFilter;
use serde_json::Value;

use crate::shared::api_utils::segment;
use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};
use crate::shared::query::QueryString;

/// Summary cards for one village
pub async fn fetch_village_dashboard(api: &ApiClient, village_id: &str) -> ApiResult<Value> {
    let path = format!("/dashboard/village/{}", segment(village_id));
    api.send(&path, RequestOptions::get()).await
}

/// Officer-level totals narrowed by whatever part of the location filter
/// is set
pub async fn fetch_officer_stats(api: &ApiClient, filter: &LocationFilter) -> ApiResult<Value> {
    let path = QueryString::from(filter).append_to("/dashboard/officer/stats");
    api.send(&path, RequestOptions::get()).await
}
