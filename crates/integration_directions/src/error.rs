//! Directions error types

use thiserror::Error;

/// Errors that can occur during directions lookups
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the directions service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the directions service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The provider answered with a non-OK status code
    #[error("Provider status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Provider {
        /// Status code such as `ZERO_RESULTS` or `REQUEST_DENIED`
        status: String,
        /// Optional `error_message` from the response
        message: Option<String>,
    },

    /// Status was OK but the response held no usable route
    #[error("No route found to {destination}")]
    NoRoutes {
        /// Destination as sent to the provider
        destination: String,
    },

    /// A step's travel mode did not match the data it carried
    #[error("Invalid step: {0}")]
    InvalidStep(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_)
            | Self::RequestFailed(_)
            | Self::Timeout { .. }
            | Self::RateLimitExceeded { .. } => true,
            Self::Provider { status, .. } => {
                matches!(status.as_str(), "OVER_QUERY_LIMIT" | "UNKNOWN_ERROR")
            },
            _ => false,
        }
    }
}
