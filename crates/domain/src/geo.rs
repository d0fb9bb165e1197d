//! Great-circle distance and bearing
//!
//! Spherical-earth formulas (Haversine distance, initial bearing) plus the
//! presentation helpers built on them. All functions are pure; NaN inputs
//! propagate into NaN distances and bearings.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CardinalDirection, Coordinate};

/// Mean earth radius used by the Haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance and heading from one coordinate to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoMeasurement {
    /// Great-circle distance in kilometers
    pub distance_km: f64,
    /// Initial bearing in degrees, [0, 360)
    pub bearing_degrees: f64,
    /// Eight-point compass sector of the bearing
    pub direction: CardinalDirection,
}

impl GeoMeasurement {
    /// Distance in meters
    #[must_use]
    pub fn distance_meters(&self) -> f64 {
        self.distance_km * 1000.0
    }

    /// Distance formatted with [`format_distance`]
    #[must_use]
    pub fn distance_text(&self) -> String {
        format_distance(self.distance_km)
    }
}

/// Distance and compass direction from `origin` to `target`
#[must_use]
pub fn distance_and_bearing(origin: Coordinate, target: Coordinate) -> GeoMeasurement {
    let bearing_degrees = initial_bearing(origin, target);
    GeoMeasurement {
        distance_km: haversine_km(origin, target),
        bearing_degrees,
        direction: CardinalDirection::from_bearing(bearing_degrees),
    }
}

/// Haversine great-circle distance in kilometers
#[must_use]
pub fn haversine_km(origin: Coordinate, target: Coordinate) -> f64 {
    let lat1 = origin.latitude().to_radians();
    let lat2 = target.latitude().to_radians();
    let delta_lat = (target.latitude() - origin.latitude()).to_radians();
    let delta_lon = (target.longitude() - origin.longitude()).to_radians();

    let a = (lat1.cos() * lat2.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    );
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing in degrees, normalised into [0, 360)
#[must_use]
pub fn initial_bearing(origin: Coordinate, target: Coordinate) -> f64 {
    let lat1 = origin.latitude().to_radians();
    let lat2 = target.latitude().to_radians();
    let delta_lon = (target.longitude() - origin.longitude()).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos().mul_add(
        lat2.sin(),
        -(lat1.sin() * lat2.cos() * delta_lon.cos()),
    );

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Human-readable distance
///
/// Below one kilometer the value is whole meters (`"500 m"`), otherwise
/// kilometers with one decimal (`"1.0 km"`). The threshold is exclusive, so
/// 0.9999 km renders as `"1000 m"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} m", (distance_km * 1000.0).round() as i64)
    } else {
        // Ties round up, as in the meters branch
        let tenths = (distance_km * 10.0).round() / 10.0;
        format!("{tenths:.1} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new_unchecked(lat, lon)
    }

    #[test]
    fn same_point_is_zero_distance() {
        let m = distance_and_bearing(Coordinate::london(), Coordinate::london());
        assert!(m.distance_meters().abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let m = distance_and_bearing(pt(0.0, 0.0), pt(0.0, 1.0));
        assert!((m.distance_km - 111.195).abs() < 0.01, "got {}", m.distance_km);
        assert!((m.bearing_degrees - 90.0).abs() < 1e-9);
        assert_eq!(m.direction, CardinalDirection::E);
    }

    #[test]
    fn bearing_north_and_south() {
        assert!(initial_bearing(pt(0.0, 0.0), pt(1.0, 0.0)).abs() < 1e-9);
        assert!((initial_bearing(pt(0.0, 0.0), pt(-1.0, 0.0)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_west_is_normalised() {
        let b = initial_bearing(pt(0.0, 0.0), pt(0.0, -1.0));
        assert!((b - 270.0).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn diagonal_is_northeast() {
        let m = distance_and_bearing(pt(0.0, 0.0), pt(1.0, 1.0));
        assert_eq!(m.direction, CardinalDirection::NE);
    }

    #[test]
    fn london_to_baker_street() {
        let m = distance_and_bearing(Coordinate::london(), pt(51.5155, -0.1419));
        assert!((m.distance_km - 1.3279).abs() < 0.001, "got {}", m.distance_km);
        assert!((m.bearing_degrees - 312.71).abs() < 0.01);
        assert_eq!(m.direction, CardinalDirection::NW);
        assert_eq!(m.distance_text(), "1.3 km");
    }

    #[test]
    fn format_distance_meters_below_one_km() {
        assert_eq!(format_distance(0.5), "500 m");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(0.9999), "1000 m");
        assert_eq!(format_distance(0.1234), "123 m");
    }

    #[test]
    fn format_distance_kilometers_from_one_km() {
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(12.34), "12.3 km");
        assert_eq!(format_distance(931.57), "931.6 km");
    }

    #[test]
    fn format_distance_ties_round_up() {
        assert_eq!(format_distance(1.25), "1.3 km");
        assert_eq!(format_distance(2.25), "2.3 km");
        assert_eq!(format_distance(10.25), "10.3 km");
    }

    #[test]
    fn nan_propagates() {
        let m = distance_and_bearing(pt(f64::NAN, 0.0), pt(0.0, 0.0));
        assert!(m.distance_km.is_nan());
        assert!(m.bearing_degrees.is_nan());
    }
}
