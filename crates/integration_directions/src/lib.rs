//! Directions integration for transit-retrieve
//!
//! Fetches routes from the [Google Directions web service](https://developers.google.com/maps/documentation/directions)
//! and adapts the provider's step JSON into the domain [`RouteStep`](domain::RouteStep) model.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`DirectionsClient`] defines the
//! interface for route lookups, implemented by [`GoogleDirectionsClient`].
//! Provider status codes other than `OK` surface as
//! [`DirectionsError::Provider`] so callers can show them to the user.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{Coordinate, Destination, TravelMode};
//! use integration_directions::{DirectionsClient, DirectionsConfig, GoogleDirectionsClient};
//!
//! let config = DirectionsConfig::default().with_api_key("...");
//! let client = GoogleDirectionsClient::new(&config)?;
//!
//! let route = client.directions(
//!     Coordinate::new(51.5074, -0.1278)?,
//!     &Destination::parse("NW1 6XE")?,
//!     TravelMode::Transit,
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::{DirectionsRoute, STATUS_OK};
