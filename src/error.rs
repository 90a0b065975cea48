use thiserror::Error;

/// Main error type for OctoPrint API operations
#[derive(Debug, Error)]
pub enum OctoError {
    /// HTTP transport error (connection refused, DNS failure, timeout)
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl OctoError {
    /// Check if this error came from the HTTP transport
    pub fn is_transport(&self) -> bool {
        matches!(self, OctoError::Reqwest(_))
    }

    /// Check if this error came from decoding a response body
    pub fn is_decode(&self) -> bool {
        matches!(self, OctoError::Json(_))
    }

    /// Get the HTTP status code if the transport reported one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OctoError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, OctoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_detection() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = OctoError::from(cause);
        assert!(error.is_decode());
        assert!(!error.is_transport());
        assert!(error.status_code().is_none());
    }

    #[test]
    fn test_request_build_display() {
        let error = OctoError::RequestBuild("bad path".to_string());
        assert_eq!(error.to_string(), "failed to build request: bad path");
    }
}
