//! Application services - Use case implementations

mod retrieve_service;

pub use retrieve_service::{RetrieveOutcome, RetrieveService};
