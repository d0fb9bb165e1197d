//! Eight-point compass direction value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight 45° compass sectors
///
/// Variants are declared clockwise from north, so the derived ordering
/// follows the bearing sectors rather than the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    /// North, centered on 0°
    N,
    /// Northeast, centered on 45°
    NE,
    /// East, centered on 90°
    E,
    /// Southeast, centered on 135°
    SE,
    /// South, centered on 180°
    S,
    /// Southwest, centered on 225°
    SW,
    /// West, centered on 270°
    W,
    /// Northwest, centered on 315°
    NW,
}

impl CardinalDirection {
    /// All directions in sector order
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Map a bearing in degrees to its sector
    ///
    /// Sector index is `round(bearing / 45) mod 8`. Exact boundaries such as
    /// 22.5° round up into the next sector.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_bearing(bearing_degrees: f64) -> Self {
        let index = ((bearing_degrees / 45.0).round() as i64).rem_euclid(8) as usize;
        Self::ALL[index]
    }

    /// Center bearing of the sector in degrees
    #[must_use]
    pub const fn center_degrees(self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::NE => 45.0,
            Self::E => 90.0,
            Self::SE => 135.0,
            Self::S => 180.0,
            Self::SW => 225.0,
            Self::W => 270.0,
            Self::NW => 315.0,
        }
    }

    /// Short compass label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_centers_map_to_themselves() {
        for dir in CardinalDirection::ALL {
            assert_eq!(CardinalDirection::from_bearing(dir.center_degrees()), dir);
        }
    }

    #[test]
    fn north_wraps_around() {
        assert_eq!(CardinalDirection::from_bearing(0.0), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_bearing(359.9), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_bearing(337.6), CardinalDirection::N);
    }

    #[test]
    fn boundaries_round_up() {
        assert_eq!(CardinalDirection::from_bearing(22.5), CardinalDirection::NE);
        assert_eq!(CardinalDirection::from_bearing(22.4), CardinalDirection::N);
        assert_eq!(CardinalDirection::from_bearing(112.5), CardinalDirection::SE);
        assert_eq!(CardinalDirection::from_bearing(337.5), CardinalDirection::N);
    }

    #[test]
    fn ordering_follows_sectors() {
        assert!(CardinalDirection::N < CardinalDirection::NE);
        assert!(CardinalDirection::E < CardinalDirection::S);
        assert!(CardinalDirection::W < CardinalDirection::NW);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(CardinalDirection::SW.to_string(), "SW");
        assert_eq!(CardinalDirection::NW.label(), "NW");
    }
}
