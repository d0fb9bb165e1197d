//! Route step entities
//!
//! A route returned by a directions provider is an ordered list of steps.
//! Transit steps carry boarding metadata that other steps do not, so the two
//! shapes are separate variants and transit-only fields can only be reached
//! through [`RouteStep::transit_details`].

use crate::errors::DomainError;
use crate::value_objects::{Coordinate, TravelMode};

/// A single step of a route
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStep {
    /// Driving, walking, cycling or otherwise non-transit step
    Basic(BasicStep),
    /// Public transport step
    Transit(TransitStep),
}

impl RouteStep {
    /// Create a non-transit step
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStepKind` if `travel_mode` is
    /// [`TravelMode::Transit`]; transit steps must be built with
    /// [`RouteStep::transit`] so their details are present.
    pub fn basic(
        travel_mode: TravelMode,
        start_location: Coordinate,
        duration_text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if travel_mode.is_transit() {
            return Err(DomainError::invalid_step(
                "TRANSIT step must carry transit details",
            ));
        }
        Ok(Self::Basic(BasicStep {
            travel_mode,
            start_location,
            duration_text: duration_text.into(),
        }))
    }

    /// Create a transit step
    #[must_use]
    pub fn transit(
        start_location: Coordinate,
        duration_text: impl Into<String>,
        details: TransitDetails,
    ) -> Self {
        Self::Transit(TransitStep {
            start_location,
            duration_text: duration_text.into(),
            details,
        })
    }

    /// Travel mode of this step
    #[must_use]
    pub const fn travel_mode(&self) -> TravelMode {
        match self {
            Self::Basic(step) => step.travel_mode,
            Self::Transit(_) => TravelMode::Transit,
        }
    }

    /// Whether this is a transit step
    #[must_use]
    pub const fn is_transit(&self) -> bool {
        matches!(self, Self::Transit(_))
    }

    /// Where the step starts
    #[must_use]
    pub const fn start_location(&self) -> Coordinate {
        match self {
            Self::Basic(step) => step.start_location,
            Self::Transit(step) => step.start_location,
        }
    }

    /// Provider-formatted duration (e.g. "5 mins")
    #[must_use]
    pub fn duration_text(&self) -> &str {
        match self {
            Self::Basic(step) => &step.duration_text,
            Self::Transit(step) => &step.duration_text,
        }
    }

    /// Transit metadata, present only for transit steps
    #[must_use]
    pub const fn transit_details(&self) -> Option<&TransitDetails> {
        match self {
            Self::Basic(_) => None,
            Self::Transit(step) => Some(&step.details),
        }
    }
}

/// A non-transit step
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStep {
    travel_mode: TravelMode,
    start_location: Coordinate,
    duration_text: String,
}

/// A public transport step
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStep {
    start_location: Coordinate,
    duration_text: String,
    details: TransitDetails,
}

/// Boarding metadata of a transit step
#[derive(Debug, Clone, PartialEq)]
pub struct TransitDetails {
    /// Stop where the vehicle is boarded
    pub departure_stop: TransitStop,
    /// Provider-formatted departure time (e.g. "10:32 AM")
    pub departure_time_text: String,
    /// Line being boarded
    pub line: TransitLine,
}

/// A named transit stop
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStop {
    /// Human-readable stop name
    pub name: String,
    /// Stop position
    pub location: Coordinate,
}

impl TransitStop {
    /// Create a new stop
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A transit line and the kind of vehicle serving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitLine {
    /// Vehicle type label (e.g. "Subway", "Bus")
    pub vehicle_label: String,
    /// Line name (e.g. "Bakerloo", "73")
    pub line_name: String,
}

impl TransitLine {
    /// Create a new line
    #[must_use]
    pub fn new(vehicle_label: impl Into<String>, line_name: impl Into<String>) -> Self {
        Self {
            vehicle_label: vehicle_label.into(),
            line_name: line_name.into(),
        }
    }

    /// Display label, e.g. `Subway (Bakerloo)`
    #[must_use]
    pub fn travel_type_label(&self) -> String {
        format!("{} ({})", self.vehicle_label, self.line_name)
    }
}
