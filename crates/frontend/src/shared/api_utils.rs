//! URL helpers for frontend-backend communication

use std::borrow::Cow;

/// Origin the backend listens on when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Build a full API URL from a base origin and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(
///     api_url("http://127.0.0.1:8000/", "/projects/7"),
///     "http://127.0.0.1:8000/projects/7"
/// );
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Percent-encode one path segment (an id coming from user selection)
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
