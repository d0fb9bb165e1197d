//! Application configuration
//!
//! Layered as: built-in defaults, then an optional TOML file, then
//! `TRANSIT_RETRIEVE_*` environment variables (nested keys joined with
//! `__`, e.g. `TRANSIT_RETRIEVE_DIRECTIONS__API_KEY`).

use std::path::Path;

use domain::Coordinate;
use integration_directions::DirectionsConfig;
use serde::{Deserialize, Serialize};

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_NAME: &str = "transit-retrieve";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TRANSIT_RETRIEVE";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directions provider settings
    #[serde(default)]
    pub directions: DirectionsConfig,

    /// Position settings
    #[serde(default)]
    pub location: LocationConfig,
}

/// Where the current position comes from when none is passed explicitly
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fallback position as `"lat,lon"`
    #[serde(default)]
    pub default_position: Option<String>,
}

impl LocationConfig {
    /// Parsed fallback position
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid `lat,lon` pair.
    pub fn position(&self) -> Result<Option<Coordinate>, String> {
        self.default_position
            .as_deref()
            .map(|text| {
                text.parse::<Coordinate>()
                    .map_err(|e| format!("location.default_position '{text}': {e}"))
            })
            .transpose()
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise
    /// `transit-retrieve.{toml,json,yaml}` in the working directory is used
    /// if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("directions.base_url", "https://maps.googleapis.com")?
            .set_default("directions.timeout_secs", 10)?
            .set_default("directions.default_mode", "transit")?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.directions.validate()?;
        self.location.position()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
            [directions]
            api_key = "from-file"
            default_mode = "walking"
            language = "en-GB"

            [location]
            default_position = "51.5074,-0.1278"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.directions.api_key_str(), Some("from-file"));
        assert_eq!(config.directions.default_mode, "walking");
        assert_eq!(config.directions.language.as_deref(), Some("en-GB"));
        assert_eq!(config.directions.base_url, "https://maps.googleapis.com");
        assert_eq!(config.location.position().unwrap(), Some(Coordinate::london()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/transit-retrieve.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_default_position_fails_validation() {
        let config = AppConfig {
            location: LocationConfig {
                default_position: Some("north-ish".to_string()),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.location.position().unwrap(), None);
    }
}
