use thiserror::Error;

/// Failure of a call to the monitoring backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {path} failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} responded {status} {reason}")]
    Status {
        path: String,
        status: u16,
        reason: String,
    },

    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid attachment: {0}")]
    Attachment(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Rejected before anything was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            path: "/projects/9".into(),
            status: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "/projects/9 responded 404 Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Encode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation() {
        let err = ApiError::Validation("Missing required fields".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Missing required fields");
    }
}
