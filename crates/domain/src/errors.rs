//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// A step's travel mode does not match the data it carries
    #[error("Invalid step kind: {0}")]
    InvalidStepKind(String),

    /// No destination was supplied
    #[error("Destination is missing")]
    MissingDestination,
}

impl DomainError {
    /// Create an invalid step kind error
    pub fn invalid_step(reason: impl Into<String>) -> Self {
        Self::InvalidStepKind(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_step_message() {
        let err = DomainError::invalid_step("TRANSIT step without transit details");
        assert_eq!(
            err.to_string(),
            "Invalid step kind: TRANSIT step without transit details"
        );
    }

    #[test]
    fn invalid_coordinates_is_transparent() {
        let err = DomainError::from(InvalidCoordinates);
        assert!(err.to_string().starts_with("Invalid coordinates"));
    }

    #[test]
    fn missing_destination_message() {
        assert_eq!(
            DomainError::MissingDestination.to_string(),
            "Destination is missing"
        );
    }
}
