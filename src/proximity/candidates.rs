// src/proximity/candidates.rs
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GeoError, GeoResult};
use crate::models::{CandidatePoint, Coordinate};
use crate::proximity::distance::great_circle_distance_meters;
use crate::utils::constants::MAX_CANDIDATE_COUNT;

/// Generate `count` candidate points scattered around `reference`.
///
/// With `Some(seed)` the output is fully reproducible; with `None` the
/// thread-local generator is used.
pub fn generate_candidates(
    reference: Coordinate,
    count: usize,
    spread_degrees: f64,
    seed: Option<u64>,
) -> GeoResult<Vec<CandidatePoint>> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_candidates_with_rng(reference, count, spread_degrees, &mut rng)
        }
        None => generate_candidates_with_rng(
            reference,
            count,
            spread_degrees,
            &mut rand::thread_rng(),
        ),
    }
}

/// Same as [`generate_candidates`] but draws from a caller-supplied generator.
///
/// Each point picks one sign with equal probability, then moves latitude and
/// longitude away from the reference by independent uniform fractions of
/// `spread_degrees` in that direction.
pub fn generate_candidates_with_rng<R: Rng + ?Sized>(
    reference: Coordinate,
    count: usize,
    spread_degrees: f64,
    rng: &mut R,
) -> GeoResult<Vec<CandidatePoint>> {
    if count > MAX_CANDIDATE_COUNT {
        return Err(GeoError::invalid(format!(
            "count {} exceeds the maximum of {} houses",
            count, MAX_CANDIDATE_COUNT
        )));
    }
    validate_spread(&reference, spread_degrees)?;

    let mut candidates = Vec::with_capacity(count);
    for _ in 0..count {
        let direction = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        let lat_fraction: f64 = rng.gen();
        let lng_fraction: f64 = rng.gen();

        let latitude = reference.latitude() + direction * lat_fraction * spread_degrees;
        let longitude =
            wrap_longitude(reference.longitude() + direction * lng_fraction * spread_degrees);

        let location = Coordinate::new(latitude, longitude)?;
        let distance = great_circle_distance_meters(&reference, &location);
        candidates.push(CandidatePoint::new(location, distance));
    }

    debug!(
        "Generated {} candidates around {} (spread {}°)",
        candidates.len(),
        reference,
        spread_degrees
    );
    Ok(candidates)
}

fn validate_spread(reference: &Coordinate, spread_degrees: f64) -> GeoResult<()> {
    if !spread_degrees.is_finite() || spread_degrees < 0.0 {
        return Err(GeoError::invalid(format!(
            "spread must be a finite, non-negative number of degrees (got {})",
            spread_degrees
        )));
    }
    if reference.latitude().abs() + spread_degrees > 90.0 {
        return Err(GeoError::invalid(format!(
            "spread of {}° around latitude {} would cross a pole",
            spread_degrees,
            reference.latitude()
        )));
    }
    if spread_degrees > 180.0 {
        return Err(GeoError::invalid(format!(
            "spread of {}° exceeds half the globe",
            spread_degrees
        )));
    }
    Ok(())
}

/// Bring a longitude displaced by at most 180° back into [-180, 180].
fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}
