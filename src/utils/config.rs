// src/utils/config.rs

use log::{info, warn};
use std::env;

use crate::utils::constants::{
    DEFAULT_BAND_RADII_METERS, DEFAULT_CANDIDATE_COUNT, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG,
    DEFAULT_SPREAD_DEGREES,
};

/// Configuration for proximity surveys
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of houses generated per survey
    pub candidate_count: usize,
    /// Maximum displacement of a house from the address, in degrees
    pub spread_degrees: f64,
    /// Ascending band radii in meters; the first one is the headline count
    pub band_radii_meters: Vec<f64>,
    /// Fixed seed for reproducible surveys
    pub seed: Option<u64>,
    /// Fallback reference point when no address is given
    pub default_lat: f64,
    pub default_lng: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            spread_degrees: DEFAULT_SPREAD_DEGREES,
            band_radii_meters: DEFAULT_BAND_RADII_METERS.to_vec(),
            seed: None,
            default_lat: DEFAULT_CENTER_LAT,
            default_lng: DEFAULT_CENTER_LNG,
        }
    }
}

impl EngineConfig {
    /// Create engine configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let band_radii_meters = match env::var("PROXIMITY_BAND_RADII") {
            Ok(raw) => parse_radii(&raw).unwrap_or_else(|| {
                warn!(
                    "Ignoring malformed PROXIMITY_BAND_RADII '{}', using {:?}",
                    raw, defaults.band_radii_meters
                );
                defaults.band_radii_meters.clone()
            }),
            Err(_) => defaults.band_radii_meters.clone(),
        };

        Self {
            candidate_count: env::var("PROXIMITY_CANDIDATE_COUNT")
                .unwrap_or_else(|_| DEFAULT_CANDIDATE_COUNT.to_string())
                .parse()
                .unwrap_or(DEFAULT_CANDIDATE_COUNT),
            spread_degrees: env::var("PROXIMITY_SPREAD_DEGREES")
                .unwrap_or_else(|_| DEFAULT_SPREAD_DEGREES.to_string())
                .parse()
                .unwrap_or(DEFAULT_SPREAD_DEGREES),
            band_radii_meters,
            seed: env::var("PROXIMITY_SEED").ok().and_then(|s| s.parse().ok()),
            default_lat: env::var("PROXIMITY_DEFAULT_LAT")
                .unwrap_or_else(|_| DEFAULT_CENTER_LAT.to_string())
                .parse()
                .unwrap_or(DEFAULT_CENTER_LAT),
            default_lng: env::var("PROXIMITY_DEFAULT_LNG")
                .unwrap_or_else(|_| DEFAULT_CENTER_LNG.to_string())
                .parse()
                .unwrap_or(DEFAULT_CENTER_LNG),
        }
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        info!("📍 Proximity engine configuration");
        info!("   Houses per survey: {}", self.candidate_count);
        info!("   Spread: {}°", self.spread_degrees);
        info!("   Band radii (m): {:?}", self.band_radii_meters);
        match self.seed {
            Some(seed) => info!("   Seed: {} (reproducible)", seed),
            None => info!("   Seed: none (thread-local RNG)"),
        }
    }
}

/// Parse a comma-separated list of radii, e.g. "15000, 30000,45000".
pub fn parse_radii(raw: &str) -> Option<Vec<f64>> {
    let radii: Vec<f64> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if radii.is_empty() {
        None
    } else {
        Some(radii)
    }
}

/// Environment variable configuration example
pub fn print_env_config_example() {
    println!("# Proximity Engine Configuration");
    println!("# Set these environment variables (or put them in .env):");
    println!();
    println!("# Houses generated per survey (default: 100)");
    println!("export PROXIMITY_CANDIDATE_COUNT=100");
    println!();
    println!("# Maximum displacement from the address in degrees (default: 0.5)");
    println!("export PROXIMITY_SPREAD_DEGREES=0.5");
    println!();
    println!("# Ascending band radii in meters (default: 15000,30000,45000)");
    println!("export PROXIMITY_BAND_RADII=15000,30000,45000");
    println!();
    println!("# Fixed RNG seed for reproducible surveys (default: unset)");
    println!("export PROXIMITY_SEED=42");
    println!();
    println!("# Reference point used when no address is given (default: 43, -80)");
    println!("export PROXIMITY_DEFAULT_LAT=43");
    println!("export PROXIMITY_DEFAULT_LNG=-80");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.candidate_count, 100);
        assert_eq!(config.spread_degrees, 0.5);
        assert_eq!(config.band_radii_meters, vec![15_000.0, 30_000.0, 45_000.0]);
        assert_eq!(config.seed, None);
        assert_eq!(config.default_lat, 43.0);
        assert_eq!(config.default_lng, -80.0);
    }

    // Single test touches the environment so parallel tests don't race on it
    #[test]
    fn test_env_config() {
        env::set_var("PROXIMITY_CANDIDATE_COUNT", "25");
        env::set_var("PROXIMITY_SPREAD_DEGREES", "1.0");
        env::set_var("PROXIMITY_BAND_RADII", "1000, 2000,3000");
        env::set_var("PROXIMITY_SEED", "1234");
        env::set_var("PROXIMITY_DEFAULT_LAT", "51.5");
        env::set_var("PROXIMITY_DEFAULT_LNG", "-0.12");

        let config = EngineConfig::from_env();
        assert_eq!(config.candidate_count, 25);
        assert_eq!(config.spread_degrees, 1.0);
        assert_eq!(config.band_radii_meters, vec![1000.0, 2000.0, 3000.0]);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.default_lat, 51.5);
        assert_eq!(config.default_lng, -0.12);

        // Malformed values fall back to defaults
        env::set_var("PROXIMITY_CANDIDATE_COUNT", "lots");
        env::set_var("PROXIMITY_BAND_RADII", "10,abc");
        env::set_var("PROXIMITY_SEED", "-1");
        let config = EngineConfig::from_env();
        assert_eq!(config.candidate_count, 100);
        assert_eq!(config.band_radii_meters, vec![15_000.0, 30_000.0, 45_000.0]);
        assert_eq!(config.seed, None);

        // Clean up
        env::remove_var("PROXIMITY_CANDIDATE_COUNT");
        env::remove_var("PROXIMITY_SPREAD_DEGREES");
        env::remove_var("PROXIMITY_BAND_RADII");
        env::remove_var("PROXIMITY_SEED");
        env::remove_var("PROXIMITY_DEFAULT_LAT");
        env::remove_var("PROXIMITY_DEFAULT_LNG");
    }

    #[test]
    fn test_parse_radii() {
        assert_eq!(parse_radii("15000,30000"), Some(vec![15000.0, 30000.0]));
        assert_eq!(parse_radii(" 5 , 10 ,"), Some(vec![5.0, 10.0]));
        assert_eq!(parse_radii(""), None);
        assert_eq!(parse_radii("1,x"), None);
    }
}
