//! Transit departure selection
//!
//! Picks the first two transit steps of a route and turns each into a
//! [`DepartureDisplay`], measuring distance and direction from the caller's
//! current position.

use crate::entities::{DepartureDisplay, DepartureSlot, RouteStep, TransitDetails};
use crate::geo::distance_and_bearing;
use crate::value_objects::Coordinate;

/// Maximum number of departures shown for a route
pub const MAX_DEPARTURES: usize = DepartureSlot::ALL.len();

/// Select up to two transit departures from a route's steps
///
/// Order is preserved and labels are positional: the first transit step is
/// always TDP1. Distances are measured from `current` for every departure,
/// never chained from one stop to the next. Returns an empty vector when the
/// route has no transit steps.
#[must_use]
pub fn select_departures(current: Coordinate, steps: &[RouteStep]) -> Vec<DepartureDisplay> {
    steps
        .iter()
        .filter_map(|step| step.transit_details().map(|details| (step, details)))
        .zip(DepartureSlot::ALL)
        .map(|((step, details), slot)| build_display(current, slot, step, details))
        .collect()
}

fn build_display(
    current: Coordinate,
    slot: DepartureSlot,
    step: &RouteStep,
    details: &TransitDetails,
) -> DepartureDisplay {
    let measurement = distance_and_bearing(current, details.departure_stop.location);

    DepartureDisplay {
        label: slot.label().to_string(),
        stop_name: details.departure_stop.name.clone(),
        distance_text: measurement.distance_text(),
        direction: measurement.direction,
        travel_type_label: details.line.travel_type_label(),
        departure_time_text: details.departure_time_text.clone(),
        duration_text: step.duration_text().to_string(),
    }
}
