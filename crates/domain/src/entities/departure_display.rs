//! Departure display record

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::CardinalDirection;

/// Position of a selected departure within a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepartureSlot {
    /// First transit boarding point (TDP1)
    First,
    /// Second transit boarding point (TDP2)
    Second,
}

impl DepartureSlot {
    /// Slots in display order
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Display label for the slot
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::First => "TDP1 (First Departure)",
            Self::Second => "TDP2 (Second Departure)",
        }
    }
}

/// Everything shown to the user about one transit departure point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureDisplay {
    /// Positional label, see [`DepartureSlot::label`]
    pub label: String,
    /// Name of the boarding stop
    pub stop_name: String,
    /// Distance from the current position, formatted
    pub distance_text: String,
    /// Compass direction from the current position
    pub direction: CardinalDirection,
    /// Vehicle and line, e.g. `Subway (Bakerloo)`
    pub travel_type_label: String,
    /// Provider-formatted departure time
    pub departure_time_text: String,
    /// Provider-formatted step duration
    pub duration_text: String,
}

impl fmt::Display for DepartureDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.label, self.stop_name)?;
        writeln!(
            f,
            "Direction/Distance: {} {}",
            self.distance_text, self.direction
        )?;
        writeln!(f, "Public Transport: {}", self.travel_type_label)?;
        writeln!(f, "Departure Time: {}", self.departure_time_text)?;
        write!(f, "Journey Duration: {}", self.duration_text)
    }
}
