// src/resolver.rs
//! Address resolution seam. The live app geocodes through a places service;
//! here the service sits behind `AddressResolver` and an offline gazetteer
//! stands in for it.

use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{GeoError, GeoResult};
use crate::models::Coordinate;

pub trait AddressResolver {
    /// Turn a free-form address into the reference coordinate for a survey.
    fn resolve(&self, address: &str) -> GeoResult<Coordinate>;
}

/// Known addresses keyed by their normalized form.
#[derive(Debug, Clone, Default)]
pub struct GazetteerResolver {
    entries: HashMap<String, Coordinate>,
}

impl GazetteerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object mapping addresses to `{ "lat": .., "lng": .. }`.
    /// Two keys that normalize to the same address are rejected.
    pub fn from_json_str(raw: &str) -> GeoResult<Self> {
        let parsed: HashMap<String, Coordinate> =
            serde_json::from_str(raw).map_err(|e| GeoError::Gazetteer(e.to_string()))?;
        let mut resolver = Self::new();
        for (address, coordinate) in parsed {
            let key = normalize_address(&address);
            if resolver.entries.contains_key(&key) {
                return Err(GeoError::Gazetteer(format!(
                    "duplicate address '{}' (normalized to '{}')",
                    address, key
                )));
            }
            resolver.entries.insert(key, coordinate);
        }
        Ok(resolver)
    }

    pub fn from_file(path: &Path) -> GeoResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| GeoError::Gazetteer(format!("{}: {}", path.display(), e)))?;
        let resolver = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} gazetteer entries from {}",
            resolver.len(),
            path.display()
        );
        Ok(resolver)
    }

    pub fn insert(&mut self, address: &str, coordinate: Coordinate) {
        self.entries.insert(normalize_address(address), coordinate);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AddressResolver for GazetteerResolver {
    fn resolve(&self, address: &str) -> GeoResult<Coordinate> {
        let key = normalize_address(address);
        match self.entries.get(&key) {
            Some(coordinate) => {
                debug!("Resolved '{}' to {}", address, coordinate);
                Ok(*coordinate)
            }
            None => Err(GeoError::AddressNotFound(address.trim().to_string())),
        }
    }
}

/// Lowercase and collapse whitespace so "1 Main St" and " 1  main st " match.
fn normalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
