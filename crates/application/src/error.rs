//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The directions provider answered with a non-OK status
    #[error("Directions provider returned {status}{}", format_detail(.message.as_deref()))]
    Provider {
        /// Provider status code, e.g. `ZERO_RESULTS`, `REQUEST_DENIED`
        status: String,
        /// Optional human-readable detail from the provider
        message: Option<String>,
    },

    /// External service error (transport, HTTP, parsing)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn format_detail(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApplicationError {
    /// Create a provider status error
    pub fn provider(status: impl Into<String>, message: Option<String>) -> Self {
        Self::Provider {
            status: status.into(),
            message,
        }
    }

    /// Provider status code, if this error came from one
    #[must_use]
    pub fn provider_status(&self) -> Option<&str> {
        match self {
            Self::Provider { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// Informational only: the retrieve flow reports once and stops.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_message_with_detail() {
        let err = ApplicationError::provider(
            "REQUEST_DENIED",
            Some("The provided API key is invalid.".into()),
        );
        assert_eq!(
            err.to_string(),
            "Directions provider returned REQUEST_DENIED: The provided API key is invalid."
        );
        assert_eq!(err.provider_status(), Some("REQUEST_DENIED"));
    }

    #[test]
    fn provider_error_message_without_detail() {
        let err = ApplicationError::provider("ZERO_RESULTS", None);
        assert_eq!(err.to_string(), "Directions provider returned ZERO_RESULTS");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::MissingDestination);
        assert_eq!(err.to_string(), "Destination is missing");
        assert!(err.provider_status().is_none());
    }

    #[test]
    fn retryable_classification() {
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::ExternalService("timeout".into()).is_retryable());
        assert!(!ApplicationError::provider("ZERO_RESULTS", None).is_retryable());
        assert!(!ApplicationError::Configuration("no key".into()).is_retryable());
    }
}
