// src/proximity/bands.rs
use crate::error::{GeoError, GeoResult};
use crate::models::{CandidatePoint, RadiusBand};

/// Number of points whose distance is at most `radius_meters` (inclusive).
pub fn count_within_radius(points: &[CandidatePoint], radius_meters: f64) -> GeoResult<usize> {
    validate_radius(radius_meters)?;
    Ok(points
        .iter()
        .filter(|p| p.distance_meters() <= radius_meters)
        .count())
}

/// Count the points inside each radius. Circles are nested, so a point
/// within the first radius is counted again in every larger one.
pub fn classify_by_bands(points: &[CandidatePoint], radii: &[f64]) -> GeoResult<Vec<RadiusBand>> {
    if let Some(pair) = radii.windows(2).find(|w| w[1] < w[0]) {
        return Err(GeoError::invalid(format!(
            "band radii must be ascending ({} follows {})",
            pair[1], pair[0]
        )));
    }

    radii
        .iter()
        .map(|&radius_meters| {
            Ok(RadiusBand {
                radius_meters,
                count: count_within_radius(points, radius_meters)?,
            })
        })
        .collect()
}

fn validate_radius(radius_meters: f64) -> GeoResult<()> {
    if radius_meters.is_nan() || radius_meters < 0.0 {
        return Err(GeoError::invalid(format!(
            "radius must be a non-negative number of meters (got {})",
            radius_meters
        )));
    }
    Ok(())
}
