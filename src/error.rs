//! Error types for the geocell crate.

use thiserror::Error;

/// Errors raised by geocell value-type construction.
///
/// Most codec operations (`compute_box`, `children`, `adjacent`, ...) assume their
/// `&str` cell arguments are already valid geocells and do not return this type;
/// only construction of [`crate::Point`] and [`crate::Box`] does.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeocellError {
    /// A latitude/longitude pair fell outside `[-90, 90]` x `[-180, 180]`.
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// A box mutation would have produced `south > north`.
    #[error("invalid box edit: north={north}, south={south}")]
    InvalidBoxEdit { north: f64, south: f64 },

    /// A string was not a valid geocell: empty, or containing characters
    /// outside the `0-9a-f` alphabet.
    #[error("invalid cell: {0:?}")]
    InvalidCell(String),

    /// A [`crate::ProximityConfig`] had `max_results == 0`.
    #[error("max_results must be at least 1")]
    ZeroMaxResults,

    /// A [`crate::ProximityConfig`] had a negative `max_distance_m`.
    #[error("max_distance_m must be non-negative, got {0}")]
    NegativeMaxDistance(f64),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeocellError>;
