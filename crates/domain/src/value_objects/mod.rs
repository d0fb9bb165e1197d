//! Value Objects - Immutable, identity-less domain primitives

mod cardinal_direction;
mod coordinate;
mod destination;
mod travel_mode;

pub use cardinal_direction::CardinalDirection;
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use destination::Destination;
pub use travel_mode::{TravelMode, UnknownTravelMode};
