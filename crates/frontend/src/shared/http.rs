//! Thin wrapper around `reqwest` bound to one backend origin.
//!
//! Every endpoint goes through [`ApiClient::send`]: a single attempt, JSON
//! headers by default, failures logged with the request path and returned
//! as [`ApiError`]. [`ApiClient::call`] keeps the "null on failure" contract
//! for untyped callers.

use std::time::Duration;

use contracts::shared::{FormField, FormPayload};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_utils::api_url;
use super::config::ApiConfig;
use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Already serialized JSON text
    Json(String),
    Multipart(FormPayload),
}

/// Method, extra headers and body of one request.
///
/// Headers given here override the default `Content-Type: application/json`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> ApiResult<Self> {
        self.body = RequestBody::Json(serde_json::to_string(payload)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: FormPayload) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Client for `base_url` with no timeout
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            timeout_secs: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    /// Issue the request and return the parsed JSON body, or `None` when the
    /// transport fails, the status is not 2xx, or the body is not JSON.
    /// Failures are logged, never raised.
    pub async fn call(&self, path: &str, options: RequestOptions) -> Option<Value> {
        self.send::<Value>(path, options).await.ok()
    }

    /// Issue the request and decode the body into `T`.
    ///
    /// An empty success body decodes as JSON `null`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let method = options.method.clone();
        let request = self.build_request(path, options)?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                tracing::error!(%method, path, error = %source, "API fetch failed");
                return Err(ApiError::Network {
                    path: path.to_string(),
                    source,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            tracing::warn!(%method, path, status = status.as_u16(), %reason, "API error");
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                reason,
            });
        }

        let bytes = response.bytes().await.map_err(|source| {
            tracing::error!(%method, path, error = %source, "API body read failed");
            ApiError::Network {
                path: path.to_string(),
                source,
            }
        })?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|source| {
            tracing::warn!(%method, path, error = %source, "API response did not match schema");
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }

    fn build_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<reqwest::RequestBuilder> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;

        let mut merged = HeaderMap::new();
        // multipart needs the boundary reqwest generates
        if !matches!(body, RequestBody::Multipart(_)) {
            merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        // caller headers replace defaults of the same name, all values kept
        for name in headers.keys() {
            merged.remove(name);
        }
        for (name, value) in headers.iter() {
            merged.append(name.clone(), value.clone());
        }

        tracing::debug!(%method, path, "API request");
        let request = self.http.request(method, self.url(path)).headers(merged);

        Ok(match body {
            RequestBody::Empty => request,
            RequestBody::Json(text) => request.body(text),
            RequestBody::Multipart(form) => request.multipart(to_multipart(form)?),
        })
    }
}

fn to_multipart(form: FormPayload) -> ApiResult<Form> {
    let mut out = Form::new();
    for field in form.into_fields() {
        out = match field {
            FormField::Text { name, value } => out.text(name, value),
            FormField::File { name, attachment } => {
                let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
                if let Some(content_type) = attachment.content_type {
                    part = part
                        .mime_str(&content_type)
                        .map_err(|e| ApiError::Attachment(e.to_string()))?;
                }
                out.part(name, part)
            }
        };
    }
    Ok(out)
}
