// src/utils/constants.rs

/// Equatorial Earth radius in kilometers used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Number of houses generated around an address when nothing else is configured.
pub const DEFAULT_CANDIDATE_COUNT: usize = 100;

/// Upper bound on houses per survey; larger requests are rejected.
pub const MAX_CANDIDATE_COUNT: usize = 1_000_000;

/// Maximum displacement, in degrees, of a generated house from the address.
/// Half a degree matches the app's house scatter (a unit random fraction halved).
pub const DEFAULT_SPREAD_DEGREES: f64 = 0.5;

/// Close / middle / far circles drawn around the address, in meters.
pub const DEFAULT_BAND_RADII_METERS: [f64; 3] = [15_000.0, 30_000.0, 45_000.0];

/// Map centre used before any address has been entered.
pub const DEFAULT_CENTER_LAT: f64 = 43.0;
pub const DEFAULT_CENTER_LNG: f64 = -80.0;
