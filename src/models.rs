// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GeoError, GeoResult};

/// A validated latitude/longitude pair in decimal degrees.
///
/// Positions with more than one spelling are stored canonically: longitude
/// 180 becomes -180, and at either pole longitude is 0. Equal positions
/// therefore compare equal.
///
/// Serialized as `{ "lat": .., "lng": .. }`, the literal shape map
/// renderers expect for marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLngLiteral", into = "LatLngLiteral")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire shape of a coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLngLiteral {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::invalid(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::invalid(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        let longitude = if latitude.abs() == 90.0 {
            0.0
        } else if longitude == 180.0 {
            -180.0
        } else {
            longitude
        };
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<LatLngLiteral> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: LatLngLiteral) -> GeoResult<Self> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for LatLngLiteral {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.latitude,
            lng: c.longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A generated house location paired with its distance to the reference
/// point it was generated around. Only the proximity engine creates these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidatePoint {
    location: Coordinate,
    distance_meters: f64,
}

impl CandidatePoint {
    pub(crate) fn new(location: Coordinate, distance_meters: f64) -> Self {
        Self {
            location,
            distance_meters,
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }
}

/// A threshold distance and the number of candidates within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusBand {
    pub radius_meters: f64,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.01, 0.0).unwrap_err().is_invalid_argument());
        assert!(Coordinate::new(0.0, -180.5).unwrap_err().is_invalid_argument());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_aliased_positions_compare_equal() {
        let east = Coordinate::new(0.0, 180.0).unwrap();
        let west = Coordinate::new(0.0, -180.0).unwrap();
        assert_eq!(east, west);
        assert_eq!(east.longitude(), -180.0);

        let pole_a = Coordinate::new(90.0, 0.0).unwrap();
        let pole_b = Coordinate::new(90.0, 120.0).unwrap();
        assert_eq!(pole_a, pole_b);
        assert_eq!(Coordinate::new(-90.0, -45.0).unwrap().longitude(), 0.0);

        assert_ne!(Coordinate::new(89.0, 0.0).unwrap(), Coordinate::new(89.0, 120.0).unwrap());
    }

    #[test]
    fn test_coordinate_json_shape() {
        let c = Coordinate::new(43.0, -80.0).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 43.0, "lng": -80.0 }));

        let back: Coordinate = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);

        // Out-of-range literals are rejected during deserialization
        let bad = serde_json::from_str::<Coordinate>(r#"{"lat": 123.0, "lng": 0.0}"#);
        assert!(bad.is_err());
    }
}
