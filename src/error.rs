// src/error.rs
use thiserror::Error;

/// Errors surfaced by the proximity core and the address resolution seam.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Caller supplied a malformed value (out-of-range coordinate, bad radius, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The resolver had no entry for the requested address
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// Gazetteer file could not be read or parsed
    #[error("gazetteer error: {0}")]
    Gazetteer(String),
}

impl GeoError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type GeoResult<T> = std::result::Result<T, GeoError>;
