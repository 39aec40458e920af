// src/proximity/survey.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{GeoError, GeoResult};
use crate::models::{CandidatePoint, Coordinate, RadiusBand};
use crate::proximity::bands::{classify_by_bands, count_within_radius};
use crate::proximity::candidates::generate_candidates;
use crate::utils::config::EngineConfig;
use crate::utils::logging::SurveyLogger;

/// Houses generated around one address together with their band counts.
/// Counts are computed in the same call that generates the houses.
#[derive(Debug, Clone, Serialize)]
pub struct ProximitySurvey {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub reference: Coordinate,
    pub spread_degrees: f64,
    pub seed: Option<u64>,
    pub candidates: Vec<CandidatePoint>,
    pub bands: Vec<RadiusBand>,
}

impl ProximitySurvey {
    /// Count inside the first (smallest) band, if any bands were requested.
    pub fn primary_count(&self) -> Option<usize> {
        self.bands.first().map(|b| b.count)
    }

    /// Count for an ad-hoc radius against the same candidate set.
    pub fn count_within(&self, radius_meters: f64) -> GeoResult<usize> {
        count_within_radius(&self.candidates, radius_meters)
    }

    /// The candidate closest to the reference point.
    pub fn nearest(&self) -> Option<&CandidatePoint> {
        self.candidates
            .iter()
            .min_by(|a, b| a.distance_meters().total_cmp(&b.distance_meters()))
    }

    /// Select a candidate by marker index.
    pub fn candidate(&self, index: usize) -> GeoResult<&CandidatePoint> {
        self.candidates.get(index).ok_or_else(|| {
            GeoError::invalid(format!(
                "candidate index {} out of range (survey has {})",
                index,
                self.candidates.len()
            ))
        })
    }
}

pub struct ProximityEngine {
    config: EngineConfig,
}

impl ProximityEngine {
    pub fn new(config: EngineConfig) -> GeoResult<Self> {
        if !config.spread_degrees.is_finite() || config.spread_degrees < 0.0 {
            return Err(GeoError::invalid(format!(
                "configured spread {} is not a non-negative number",
                config.spread_degrees
            )));
        }
        // Surface bad radii at construction rather than on the first survey
        classify_by_bands(&[], &config.band_radii_meters)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate houses around `reference` and classify them into the
    /// configured bands. `seed` overrides the configured seed.
    pub fn survey(&self, reference: Coordinate, seed: Option<u64>) -> GeoResult<ProximitySurvey> {
        let seed = seed.or(self.config.seed);
        let run_id = Uuid::new_v4();
        let logger = SurveyLogger::new();
        logger.log_start(&run_id.to_string(), &reference, seed.is_some());

        let generation_details = format!(
            "{} houses, spread {}°",
            self.config.candidate_count, self.config.spread_degrees
        );
        logger.log_phase("Generating houses", Some(&generation_details));
        let candidates = generate_candidates(
            reference,
            self.config.candidate_count,
            self.config.spread_degrees,
            seed,
        )?;
        logger.log_candidates(&candidates);

        let band_details = format!("radii {:?}m", self.config.band_radii_meters);
        logger.log_phase("Classifying into bands", Some(&band_details));
        let bands = classify_by_bands(&candidates, &self.config.band_radii_meters)?;
        logger.log_bands(&bands, candidates.len());
        logger.log_complete(candidates.len());

        Ok(ProximitySurvey {
            run_id,
            generated_at: Utc::now(),
            reference,
            spread_degrees: self.config.spread_degrees,
            seed,
            candidates,
            bands,
        })
    }
}
