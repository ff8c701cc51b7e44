//! Client-side logic of the infrastructure monitoring dashboard.
//!
//! `shared` holds the HTTP wrapper and ambient plumbing, the numbered
//! modules hold one API function per backend endpoint plus the headless
//! view-models a renderer binds to.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;

pub use shared::config::{load_config, Config};
pub use shared::error::{ApiError, ApiResult};
pub use shared::http::{ApiClient, RequestBody, RequestOptions};

/// Install logging and build the API client from `config`
pub fn init(config: &Config) -> anyhow::Result<ApiClient> {
    shared::logger::init_logging(&config.logging)?;
    let client = ApiClient::new(&config.api)?;
    tracing::info!(base_url = client.base_url(), "dashboard client ready");
    Ok(client)
}
