//! Directions data models
//!
//! Raw deserialisation types for the Directions web-service JSON and their
//! conversion into the domain route model.

use domain::{
    Coordinate, RouteStep, TransitDetails, TransitLine, TransitStop, TravelMode,
};
use serde::Deserialize;

use crate::error::DirectionsError;

/// Status value of a successful response
pub const STATUS_OK: &str = "OK";

/// First leg of the provider's recommended route
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRoute {
    /// Provider's route summary (e.g. main road names)
    pub summary: Option<String>,
    /// Resolved origin address
    pub start_address: Option<String>,
    /// Resolved destination address
    pub end_address: Option<String>,
    /// Total leg distance, provider-formatted
    pub distance_text: Option<String>,
    /// Total leg duration, provider-formatted
    pub duration_text: Option<String>,
    /// Ordered steps of the leg
    pub steps: Vec<RouteStep>,
}

/// Raw Directions API response
#[derive(Debug, Deserialize)]
pub(crate) struct RawDirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    pub summary: Option<String>,
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeg {
    pub start_address: Option<String>,
    pub end_address: Option<String>,
    pub distance: Option<RawText>,
    pub duration: Option<RawText>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStep {
    pub travel_mode: String,
    pub start_location: RawLatLng,
    pub duration: Option<RawText>,
    pub transit_details: Option<RawTransitDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTransitDetails {
    pub departure_stop: RawStop,
    pub departure_time: Option<RawText>,
    pub line: Option<RawLine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStop {
    pub name: Option<String>,
    pub location: RawLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLine {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub vehicle: Option<RawVehicle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVehicle {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawText {
    pub text: String,
}

impl From<RawLatLng> for Coordinate {
    fn from(raw: RawLatLng) -> Self {
        Self::new_unchecked(raw.lat, raw.lng)
    }
}

impl RawDirectionsResponse {
    /// Convert the first leg of the first route into a typed route
    pub(crate) fn into_route(self, destination: &str) -> Result<DirectionsRoute, DirectionsError> {
        if self.status != STATUS_OK {
            return Err(DirectionsError::Provider {
                status: self.status,
                message: self.error_message,
            });
        }

        let no_route = || DirectionsError::NoRoutes {
            destination: destination.to_string(),
        };

        let route = self.routes.into_iter().next().ok_or_else(no_route)?;
        let leg = route.legs.into_iter().next().ok_or_else(no_route)?;

        let steps = leg
            .steps
            .into_iter()
            .map(RawStep::into_route_step)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DirectionsRoute {
            summary: route.summary.filter(|s| !s.is_empty()),
            start_address: leg.start_address,
            end_address: leg.end_address,
            distance_text: leg.distance.map(|d| d.text),
            duration_text: leg.duration.map(|d| d.text),
            steps,
        })
    }
}

impl RawStep {
    /// Convert a raw step, enforcing that TRANSIT steps carry transit details
    pub(crate) fn into_route_step(self) -> Result<RouteStep, DirectionsError> {
        let mode = TravelMode::from_provider(&self.travel_mode);
        let start_location = Coordinate::from(self.start_location);
        let duration_text = self.duration.map(|d| d.text).unwrap_or_default();

        if !mode.is_transit() {
            return RouteStep::basic(mode, start_location, duration_text)
                .map_err(|e| DirectionsError::InvalidStep(e.to_string()));
        }

        let raw = self.transit_details.ok_or_else(|| {
            DirectionsError::InvalidStep("TRANSIT step without transit_details".to_string())
        })?;

        Ok(RouteStep::transit(
            start_location,
            duration_text,
            raw.into_details()?,
        ))
    }
}

fn missing(field: &str) -> DirectionsError {
    DirectionsError::InvalidStep(format!("TRANSIT step without {field}"))
}

impl RawTransitDetails {
    /// Convert raw transit details; every displayed field must be present
    fn into_details(self) -> Result<TransitDetails, DirectionsError> {
        let stop_name = self
            .departure_stop
            .name
            .ok_or_else(|| missing("departure_stop.name"))?;
        let departure_time_text = self
            .departure_time
            .map(|t| t.text)
            .ok_or_else(|| missing("departure_time"))?;
        let line = self.line.ok_or_else(|| missing("line"))?;
        let vehicle = line
            .vehicle
            .and_then(|v| v.name.or(v.kind))
            .ok_or_else(|| missing("line.vehicle"))?;
        let line_name = line
            .name
            .or(line.short_name)
            .ok_or_else(|| missing("line.name"))?;

        Ok(TransitDetails {
            departure_stop: TransitStop::new(stop_name, self.departure_stop.location.into()),
            departure_time_text,
            line: TransitLine::new(vehicle, line_name),
        })
    }
}
