//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How a route (or a single step of it) is travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    /// By car
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Bicycling,
    /// Public transport
    #[default]
    Transit,
    /// Anything the provider reports that we do not model
    Other,
}

impl TravelMode {
    /// Map a provider string (`"TRANSIT"`, `"walking"`, ...) to a mode
    ///
    /// Unknown values become [`TravelMode::Other`].
    #[must_use]
    pub fn from_provider(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "DRIVING" => Self::Driving,
            "WALKING" => Self::Walking,
            "BICYCLING" => Self::Bicycling,
            "TRANSIT" => Self::Transit,
            _ => Self::Other,
        }
    }

    /// Lowercase value used in a directions request's `mode` parameter
    ///
    /// Returns `None` for [`TravelMode::Other`], which cannot be requested.
    #[must_use]
    pub const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Driving => Some("driving"),
            Self::Walking => Some("walking"),
            Self::Bicycling => Some("bicycling"),
            Self::Transit => Some("transit"),
            Self::Other => None,
        }
    }

    /// Whether this is public transport
    #[must_use]
    pub const fn is_transit(self) -> bool {
        matches!(self, Self::Transit)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a requested travel mode is not one we can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTravelMode(pub String);

impl fmt::Display for UnknownTravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown travel mode '{}': expected driving, walking, bicycling or transit",
            self.0
        )
    }
}

impl std::error::Error for UnknownTravelMode {}

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    /// Strict parse for user input; unlike [`TravelMode::from_provider`]
    /// this never yields [`TravelMode::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_provider(s) {
            Self::Other => Err(UnknownTravelMode(s.to_string())),
            mode => Ok(mode),
        }
    }
}
