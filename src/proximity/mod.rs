pub mod bands;
pub mod candidates;
pub mod distance;
pub mod survey;

pub use bands::{classify_by_bands, count_within_radius};
pub use candidates::{generate_candidates, generate_candidates_with_rng};
pub use distance::great_circle_distance_meters;
pub use survey::{ProximityEngine, ProximitySurvey};
