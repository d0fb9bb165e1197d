//! Application layer - Use cases and orchestration
//!
//! Contains the retrieve use case and the port it needs from the outside
//! world. Orchestrates domain objects and provider adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
