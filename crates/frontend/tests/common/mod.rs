//! In-process stand-in for the monitoring backend.
//!
//! Every request is recorded and answered by a caller-supplied closure.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use frontend::ApiClient;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }

    /// Value of a text field in a multipart body
    pub fn form_field(&self, name: &str) -> Option<String> {
        let text = self.body_text();
        let marker = format!("name=\"{}\"", name);
        let start = text.find(&marker)? + marker.len();
        let rest = &text[start..];
        let value_start = rest.find("\r\n\r\n")? + 4;
        let value = &rest[value_start..];
        let end = value.find("\r\n")?;
        Some(value[..end].to_string())
    }
}

type Responder = Arc<dyn Fn(&Captured) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Captured>>>,
    respond: Responder,
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let captured = Captured {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    };
    let (status, text) = (state.respond)(&captured);
    state.requests.lock().unwrap().push(captured);
    (status, [(header::CONTENT_TYPE, "application/json")], text)
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl MockBackend {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Captured) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            respond: Arc::new(respond),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Backend answering every request with the same JSON
    pub async fn always(value: Value) -> Self {
        let text = value.to_string();
        Self::start(move |_| (StatusCode::OK, text.clone())).await
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url).unwrap()
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Captured {
        self.requests().pop().expect("no request reached the backend")
    }
}

pub fn ok(value: Value) -> (StatusCode, String) {
    (StatusCode::OK, value.to_string())
}

/// Base URL on which nothing listens
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
