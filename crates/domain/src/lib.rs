//! Domain layer for transit-retrieve
//!
//! Contains the route model, geodesic math and the departure selection rules.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod departures;
pub mod entities;
pub mod errors;
pub mod geo;
pub mod value_objects;

pub use departures::{MAX_DEPARTURES, select_departures};
pub use entities::*;
pub use errors::DomainError;
pub use geo::{GeoMeasurement, distance_and_bearing, format_distance};
pub use value_objects::*;
