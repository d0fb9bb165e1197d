//! Route destination value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;
use crate::errors::DomainError;

/// Where the user wants to go
///
/// Either an explicit `lat,lon` pair or free text (address, postcode, place
/// name) that the directions provider resolves itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Destination {
    /// Explicit coordinates
    Coordinate(Coordinate),
    /// Free-text address or postcode
    Address(String),
}

impl Destination {
    /// Parse user-supplied destination text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingDestination` if the text is empty.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::MissingDestination);
        }

        Ok(text
            .parse::<Coordinate>()
            .map_or_else(|_| Self::Address(text.to_string()), Self::Coordinate))
    }

    /// Value passed as the provider's `destination` parameter
    #[must_use]
    pub fn query_value(&self) -> String {
        match self {
            Self::Coordinate(c) => c.to_query_value(),
            Self::Address(a) => a.clone(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate(c) => write!(f, "{c}"),
            Self::Address(a) => f.write_str(a),
        }
    }
}
