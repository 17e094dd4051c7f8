//! The validated geographic point value type.

use crate::error::{GeocellError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(latitude, longitude)` pair in decimal degrees.
///
/// `Point::new` enforces `latitude ∈ [-90, 90]` and `longitude ∈ [-180, 180]`;
/// there is no way to construct an out-of-range `Point`.
///
/// # Examples
///
/// ```rust
/// use geocell::Point;
///
/// let empire_state = Point::new(40.7484, -73.9857).unwrap();
/// assert_eq!(empire_state.lat(), 40.7484);
///
/// assert!(Point::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Creates a new point, validating both components.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GeocellError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
