//! The axis-aligned rectangle value type.

use crate::error::{GeocellError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle over the lat/lon grid, given by its four edges.
///
/// Construction canonicalizes `south`/`north` so that `south <= north` always
/// holds; `east`/`west` are left as given, so a box with `east < west` can
/// represent a band crossing the antimeridian (the codec in this crate does
/// not exploit that representation — see the crate's design notes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

impl Box {
    /// Creates a new box, canonicalizing `south <= north` and validating ranges.
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Result<Self> {
        let (south, north) = if south > north {
            (north, south)
        } else {
            (south, north)
        };
        for lat in [north, south] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(GeocellError::InvalidCoordinate { lat, lon: 0.0 });
            }
        }
        for lon in [east, west] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(GeocellError::InvalidCoordinate { lat: 0.0, lon });
            }
        }
        Ok(Self {
            north,
            east,
            south,
            west,
        })
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    /// The northeast corner.
    pub fn north_east(&self) -> Point {
        Point::new(self.north, self.east).expect("box corners are always valid points")
    }

    /// The southwest corner.
    pub fn south_west(&self) -> Point {
        Point::new(self.south, self.west).expect("box corners are always valid points")
    }

    /// Whether `point` lies within this box (ignoring antimeridian wrap).
    pub fn contains_point(&self, point: &Point) -> bool {
        point.lat() >= self.south
            && point.lat() <= self.north
            && point.lon() >= self.west
            && point.lon() <= self.east
    }

    /// Replaces the northern edge, failing if the result would have `south > north`.
    pub fn set_north(&mut self, north: f64) -> Result<()> {
        if north < self.south {
            return Err(GeocellError::InvalidBoxEdit {
                north,
                south: self.south,
            });
        }
        self.north = north;
        Ok(())
    }

    /// Replaces the southern edge, failing if the result would have `south > north`.
    pub fn set_south(&mut self, south: f64) -> Result<()> {
        if south > self.north {
            return Err(GeocellError::InvalidBoxEdit {
                north: self.north,
                south,
            });
        }
        self.south = south;
        Ok(())
    }
}

impl fmt::Display for Box {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.north, self.east, self.south, self.west
        )
    }
}
