//! Directions service configuration

use domain::TravelMode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Google Directions web service
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the Maps API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Travel mode used when none is given on the command line
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Optional response language (e.g. "en-GB")
    #[serde(default)]
    pub language: Option<String>,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("default_mode", &self.default_mode)
            .field("language", &self.language)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_mode() -> String {
    "transit".to_string()
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            default_mode: default_mode(),
            language: None,
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Replace the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Parsed default travel mode
    ///
    /// # Errors
    ///
    /// Returns an error if `default_mode` is not a requestable mode.
    pub fn default_travel_mode(&self) -> Result<TravelMode, String> {
        self.default_mode
            .parse::<TravelMode>()
            .map_err(|e| e.to_string())
    }

    /// Validate the configuration
    ///
    /// The API key is not checked here; it may still arrive from the
    /// command line after the configuration file is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        self.default_travel_mode()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectionsConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.default_mode, "transit");
        assert!(config.api_key_str().is_none());
        assert!(config.language.is_none());
    }

    #[test]
    fn test_testing_config() {
        let config = DirectionsConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_key_str(), Some("test-key"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = DirectionsConfig::default().with_api_key("   ");
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = DirectionsConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_validation_success() {
        assert!(DirectionsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = DirectionsConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = DirectionsConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_mode() {
        let config = DirectionsConfig {
            default_mode: "teleport".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_skips_api_key() {
        let config = DirectionsConfig::for_testing();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test-key"));

        let deserialized: DirectionsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert!(deserialized.api_key.is_none());
    }

    #[test]
    fn test_deserialize_api_key() {
        let json = r#"{ "api_key": "abc123", "default_mode": "walking" }"#;
        let config: DirectionsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_key_str(), Some("abc123"));
        assert_eq!(config.default_travel_mode(), Ok(TravelMode::Walking));
    }
}
