//! Google Directions web-service client
//!
//! Fetches the recommended route between the device position and a
//! destination from the [Directions API](https://developers.google.com/maps/documentation/directions).

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, Destination, TravelMode};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::{DirectionsRoute, RawDirectionsResponse};

/// Path of the JSON directions endpoint below the base URL
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Fetch the first leg of the recommended route
    async fn directions(
        &self,
        origin: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> Result<DirectionsRoute, DirectionsError>;
}

/// Directions client for the Google Maps web service
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key_str().is_none() {
            return Err(DirectionsError::ConfigurationError(
                "a directions API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("transit-retrieve/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Endpoint URL; a trailing slash on the base URL is ignored
    fn directions_url(&self) -> String {
        format!(
            "{}{DIRECTIONS_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the query parameters for a request
    fn query_params(
        &self,
        origin: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> Result<Vec<(&'static str, String)>, DirectionsError> {
        let mode = mode.query_value().ok_or_else(|| {
            DirectionsError::ConfigurationError(format!("travel mode '{mode}' cannot be requested"))
        })?;
        let key = self.config.api_key_str().ok_or_else(|| {
            DirectionsError::ConfigurationError("a directions API key is required".to_string())
        })?;

        let mut params = vec![
            ("origin", origin.to_query_value()),
            ("destination", destination.query_value()),
            ("mode", mode.to_string()),
            ("key", key.to_string()),
        ];

        if let Some(language) = &self.config.language {
            params.push(("language", language.clone()));
        }

        Ok(params)
    }

    /// Parse the raw JSON body into a typed route
    fn parse_directions_response(
        body: &str,
        destination: &str,
    ) -> Result<DirectionsRoute, DirectionsError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        raw.into_route(destination)
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination, mode = %mode))]
    async fn directions(
        &self,
        origin: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> Result<DirectionsRoute, DirectionsError> {
        let url = self.directions_url();
        let params = self.query_params(origin, destination, mode)?;

        debug!(%url, "Requesting directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.without_url().to_string()))?;

        let route = Self::parse_directions_response(&body, &destination.query_value())
            .inspect_err(|e| warn!(error = %e, "Directions lookup failed"))?;

        debug!(
            steps = route.steps.len(),
            duration = ?route.duration_text,
            "Route found"
        );
        Ok(route)
    }
}
