pub mod directions;
pub mod error;
pub mod models;
pub mod proximity;
pub mod resolver;
pub mod utils;

pub use error::{GeoError, GeoResult};
pub use models::{CandidatePoint, Coordinate, RadiusBand};
