use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_scheme_chat::{
    SchemeChat, SchemeChatRequest, SchemeChatResponse, SchemeProfile,
};

use crate::shared::error::ApiResult;
use crate::shared::http::{ApiClient, RequestOptions};

/// Ask the scheme advisor. An empty `message` falls back to the default
/// Hindi prompt.
pub async fn ask_scheme_bot(
    api: &ApiClient,
    profile: &SchemeProfile,
    message: &str,
) -> ApiResult<SchemeChatResponse> {
    let request = SchemeChatRequest::from_profile(profile, message);
    let reply: SchemeChatResponse = api
        .send("/ai/schemes/chat", RequestOptions::post().json(&request)?)
        .await?;
    tracing::debug!(
        usecase = %SchemeChat::full_name(),
        schemes = reply.schemes_found,
        "scheme advisor replied"
    );
    Ok(reply)
}
