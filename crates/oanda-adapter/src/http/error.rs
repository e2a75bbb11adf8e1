/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the OANDA adapter
#[derive(Error, Debug)]
pub enum OandaError {
    /// HTTP transport failed (connection refused, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a structured error response (status >= 400)
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OandaError {
    /// Check whether the error came from the remote API rather than transport
    pub fn is_api_error(&self) -> bool {
        matches!(self, OandaError::Api { .. })
    }

    /// Remote error code, if this is an API error
    pub fn api_code(&self) -> Option<&str> {
        match self {
            OandaError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for OANDA operations
pub type Result<T> = std::result::Result<T, OandaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = OandaError::Api {
            code: "36".to_string(),
            message: "Bad Request".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("36"));
        assert!(rendered.contains("Bad Request"));
    }

    #[test]
    fn test_error_kind_helpers() {
        let api = OandaError::Api {
            code: "4".to_string(),
            message: "rate limit".to_string(),
        };
        assert!(api.is_api_error());
        assert_eq!(api.api_code(), Some("4"));

        let config = OandaError::Config("no instruments".to_string());
        assert!(!config.is_api_error());
        assert_eq!(config.api_code(), None);
    }
}
