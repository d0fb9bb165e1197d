//! Directions service port
//!
//! Defines the interface for fetching a route between the current position
//! and a destination. Adapters implement this port over a concrete provider.

use async_trait::async_trait;
use domain::{Coordinate, Destination, RouteStep, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A single directions request
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsQuery {
    /// Where the route starts (the device position)
    pub origin: Coordinate,
    /// Where the route ends
    pub destination: Destination,
    /// Requested travel mode
    pub mode: TravelMode,
}

impl DirectionsQuery {
    /// Create a new transit query
    #[must_use]
    pub fn new(origin: Coordinate, destination: Destination) -> Self {
        Self {
            origin,
            destination,
            mode: TravelMode::Transit,
        }
    }

    /// Set the travel mode
    #[must_use]
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Port for directions lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Fetch the ordered steps of the provider's recommended route
    ///
    /// Only the first leg of the first route is returned. Provider status
    /// failures surface as [`ApplicationError::Provider`].
    async fn route_steps(&self, query: &DirectionsQuery)
    -> Result<Vec<RouteStep>, ApplicationError>;
}
