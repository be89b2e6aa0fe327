//! Error types for the TMDb client.

use thiserror::Error;

/// Errors that can occur while talking to TMDb.
#[derive(Error, Debug)]
pub enum TmdbError {
    /// API returned a non-success status
    #[error("TMDb API error: status {status}, {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Invalid API key or authentication failure
    #[error("TMDb authentication failed: {message}")]
    AuthenticationFailed {
        /// Response body or reason
        message: String,
    },

    /// Rate limit exceeded
    #[error("TMDb rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Response body or reason
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("failed to parse TMDb response from {endpoint}: {message}")]
    ParseError {
        /// Endpoint path that was called
        endpoint: String,
        /// Parser error message
        message: String,
    },

    /// Request validation error
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network error, with the request URL removed
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl TmdbError {
    /// Map an HTTP status and body to the matching error variant.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::AuthenticationFailed { message },
            429 => Self::RateLimitExceeded { message },
            _ => Self::ApiError { status, message },
        }
    }
}

/// Result type alias for TMDb operations.
pub type Result<T> = std::result::Result<T, TmdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TmdbError::ApiError {
            status: 404,
            message: "The resource you requested could not be found.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "TMDb API error: status 404, The resource you requested could not be found."
        );
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(
            TmdbError::from_status(401, "Invalid API key".to_string()),
            TmdbError::AuthenticationFailed { .. }
        ));
        assert!(matches!(
            TmdbError::from_status(429, String::new()),
            TmdbError::RateLimitExceeded { .. }
        ));
        assert!(matches!(
            TmdbError::from_status(500, String::new()),
            TmdbError::ApiError { status: 500, .. }
        ));
    }
}
