// src/utils/logging.rs - Logging helpers for proximity surveys
use log::info;
use std::time::Instant;

use crate::models::{CandidatePoint, Coordinate, RadiusBand};

const LABEL: &str = "PROXIMITY";
const EMOJI: &str = "📍";

#[derive(Clone)]
pub struct SurveyLogger {
    start_time: Instant,
}

impl Default for SurveyLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyLogger {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, run_id: &str, reference: &Coordinate, seeded: bool) {
        info!(
            "[{}] {} 🚀 Starting survey around {} (run ID: {}){}",
            LABEL,
            EMOJI,
            reference,
            run_id,
            if seeded { " with fixed seed" } else { "" }
        );
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        let msg = if let Some(details) = details {
            format!(
                "[{}] {} 🔄 Phase: {} - {} [+{:.3}s]",
                LABEL, EMOJI, phase, details, elapsed.as_secs_f32()
            )
        } else {
            format!(
                "[{}] {} 🔄 Phase: {} [+{:.3}s]",
                LABEL, EMOJI, phase, elapsed.as_secs_f32()
            )
        };
        info!("{}", msg);
    }

    pub fn log_candidates(&self, candidates: &[CandidatePoint]) {
        if candidates.is_empty() {
            info!("[{}] {} ✨ No houses generated", LABEL, EMOJI);
            return;
        }
        let (min, max) = candidates.iter().fold((f64::MAX, 0.0_f64), |(lo, hi), c| {
            (lo.min(c.distance_meters()), hi.max(c.distance_meters()))
        });
        info!(
            "[{}] {} 🏠 Generated {} houses, {:.0}m to {:.0}m from the address",
            LABEL,
            EMOJI,
            candidates.len(),
            min,
            max
        );
    }

    pub fn log_bands(&self, bands: &[RadiusBand], total: usize) {
        for band in bands {
            let percent = if total > 0 {
                (band.count as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            info!(
                "[{}] {} 🎯 Within {:.0}m: {} of {} houses ({:.1}%)",
                LABEL, EMOJI, band.radius_meters, band.count, total, percent
            );
        }
    }

    pub fn log_complete(&self, total: usize) {
        info!(
            "[{}] {} ✅ Survey of {} houses complete in {:.3}s",
            LABEL,
            EMOJI,
            total,
            self.start_time.elapsed().as_secs_f32()
        );
    }
}
