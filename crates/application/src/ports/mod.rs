//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters implement these ports.

mod directions_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::{DirectionsPort, DirectionsQuery};
