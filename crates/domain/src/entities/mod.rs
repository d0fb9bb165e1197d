//! Domain entities - Route data produced per request

mod departure_display;
mod route_step;

pub use departure_display::{DepartureDisplay, DepartureSlot};
pub use route_step::{BasicStep, RouteStep, TransitDetails, TransitLine, TransitStep, TransitStop};
