// src/proximity/distance.rs
use crate::models::Coordinate;
use crate::utils::constants::EARTH_RADIUS_KM;

/// Great-circle distance between two coordinates in meters, using the
/// haversine formula on a sphere of radius `EARTH_RADIUS_KM`.
pub fn great_circle_distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let (phi1, phi2) = (a.latitude().to_radians(), b.latitude().to_radians());
    let delta_phi = phi2 - phi1;
    let delta_lambda = b.longitude().to_radians() - a.longitude().to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for (lat, lng) in [(0.0, 0.0), (43.0, -80.0), (-33.86, 151.21), (89.9, 179.9)] {
            let c = coord(lat, lng);
            assert_eq!(great_circle_distance_meters(&c, &c), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (coord(43.0, -80.0), coord(43.4, -79.6)),
            (coord(-6.2088, 106.8456), coord(-6.9175, 107.6191)),
            (coord(51.5, -0.12), coord(48.85, 2.35)),
        ];
        for (a, b) in pairs {
            let ab = great_circle_distance_meters(&a, &b);
            let ba = great_circle_distance_meters(&b, &a);
            assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
            assert!(ab > 0.0);
        }
    }

    #[test]
    fn test_aliased_positions_are_zero_apart() {
        let pairs = [
            (coord(0.0, 180.0), coord(0.0, -180.0)),
            (coord(90.0, 0.0), coord(90.0, 120.0)),
            (coord(-90.0, 10.0), coord(-90.0, -170.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a, b);
            assert_eq!(great_circle_distance_meters(&a, &b), 0.0);
        }
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = great_circle_distance_meters(&coord(0.0, 0.0), &coord(0.0, 1.0));
        assert!((d - 111_319.0).abs() <= 50.0, "got {}", d);
    }

    #[test]
    fn test_known_city_pair() {
        // London to Paris is roughly 344 km on this sphere
        let d = great_circle_distance_meters(&coord(51.5074, -0.1278), &coord(48.8566, 2.3522));
        assert!(d > 340_000.0 && d < 348_000.0, "got {}", d);
    }
}
