//! Retrieve service - find the transit departure points towards a destination

use std::{fmt, sync::Arc};

use domain::{Coordinate, DepartureDisplay, Destination, TravelMode, select_departures};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{DirectionsPort, DirectionsQuery},
};

/// Result of a single retrieve request
#[derive(Debug, Clone, PartialEq)]
pub enum RetrieveOutcome {
    /// Transit route with one or two departure points (TDP1, TDP2)
    Departures(Vec<DepartureDisplay>),
    /// Transit was requested but the recommended route has no transit steps
    NoTransit,
    /// A non-transit route was found; step details are not rendered for it
    NonTransit {
        /// Requested travel mode
        mode: TravelMode,
        /// Number of steps in the route
        step_count: usize,
    },
}

/// Service that turns a destination into departure display records
///
/// Issues exactly one directions request per call and never retries.
pub struct RetrieveService {
    directions: Arc<dyn DirectionsPort>,
}

impl fmt::Debug for RetrieveService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrieveService").finish_non_exhaustive()
    }
}

impl RetrieveService {
    /// Create a new retrieve service
    pub fn new(directions: Arc<dyn DirectionsPort>) -> Self {
        Self { directions }
    }

    /// Look up the route from `current` to `destination` and select departures
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if `mode` cannot be requested
    /// and passes provider or transport failures through unchanged.
    #[instrument(skip(self), fields(current = %current, destination = %destination, mode = %mode))]
    pub async fn retrieve(
        &self,
        current: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> Result<RetrieveOutcome, ApplicationError> {
        if mode.query_value().is_none() {
            return Err(ApplicationError::Configuration(format!(
                "travel mode '{mode}' cannot be requested"
            )));
        }

        let query = DirectionsQuery::new(current, destination.clone()).with_mode(mode);
        let steps = self.directions.route_steps(&query).await?;
        debug!(step_count = steps.len(), "Route received");

        if !mode.is_transit() {
            return Ok(RetrieveOutcome::NonTransit {
                mode,
                step_count: steps.len(),
            });
        }

        let departures = select_departures(current, &steps);
        info!(departures = departures.len(), "Route analysis complete");

        if departures.is_empty() {
            Ok(RetrieveOutcome::NoTransit)
        } else {
            Ok(RetrieveOutcome::Departures(departures))
        }
    }
}
