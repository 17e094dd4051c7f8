//! # geocell - hierarchical geocell index and proximity search
//!
//! `geocell` turns latitude/longitude points into short, sortable strings
//! (geocells) that datastores without native spatial indexes can still
//! range-scan efficiently: prefix equality on a geocell string implies
//! containment in the rectangle it denotes, so a geocell column plus an
//! ordinary secondary index gets you bounding-box and proximity queries for
//! free.
//!
//! ## Quick Start
//!
//! ```rust
//! use geocell::{Point, compute, children};
//!
//! let times_square = Point::new(40.7580, -73.9855).unwrap();
//!
//! // Encode at a chosen resolution (1..=13, finer as resolution grows).
//! let cell = compute(times_square, 8);
//! assert_eq!(cell.len(), 8);
//!
//! // Every cell's 16 children subdivide it further.
//! assert_eq!(children(&cell).len(), 16);
//! ```
//!
//! ## Bounding-Box Queries
//!
//! ```rust
//! use geocell::{Box, geocells_for_bounding_box};
//!
//! let manhattan = Box::new(40.882, -73.907, 40.680, -74.019).unwrap();
//! let cells = geocells_for_bounding_box(&manhattan);
//! assert!(!cells.is_empty());
//! ```
//!
//! ## Proximity Search
//!
//! ```rust
//! use geocell::{Point, ProximityConfig, Located, proximity_fetch};
//!
//! #[derive(Clone, Copy)]
//! struct City { name: &'static str, point: Point }
//!
//! impl Located for City {
//!     type Id = &'static str;
//!     fn location(&self) -> Point { self.point }
//!     fn id(&self) -> &'static str { self.name }
//! }
//!
//! let cities = vec![
//!     City { name: "Newark", point: Point::new(40.7357, -74.1724).unwrap() },
//! ];
//!
//! let origin = Point::new(40.7580, -73.9855).unwrap();
//! let config = ProximityConfig::new().with_max_results(5);
//! let runner = |cells: &[String]| -> Vec<City> {
//!     cities.iter().copied()
//!         .filter(|c| cells.contains(&geocell::compute(c.point, cells[0].len())))
//!         .collect()
//! };
//! let nearest = proximity_fetch(origin, &config, &runner);
//! ```

pub mod bbox;
pub mod config;
pub mod distance;
pub mod edges;
pub mod error;
pub mod geocell;
pub mod grid;
pub mod merge;
pub mod point;
pub mod proximity;
pub mod query;
#[macro_use]
pub mod telemetry;

// Value types
pub use bbox::Box;
pub use point::Point;

// Errors
pub use error::{GeocellError, Result};

// Codec: point <-> cell, adjacency, children
pub use geocell::{
    adjacent, all_adjacents, children, compute, compute_box, contains_point, generate_cells,
    is_valid, Direction, ALPHABET, ALPHABET_SIZE, GRID, MAX_FEASIBLE_BBOX_CELLS, MAX_RESOLUTION,
};
pub use geocell::{EAST, NORTH, NORTHEAST, NORTHWEST, SOUTH, SOUTHEAST, SOUTHWEST, WEST};

// Grid geometry: collinearity, interpolation, bounding-box cover
pub use grid::{
    best_bbox_search_cells, collinear, common_prefix, interpolate, interpolation_count, CostFn,
    DefaultCost,
};

// Edge-distance utilities
pub use edges::{distance_sorted_edges, point_distance};

// Distance
pub use distance::{distance, EARTH_RADIUS_M};

// Merge helper
pub use merge::{merge_in_place, merge_in_place_distinct};

// Query integration: Located trait, bounding-box cell selection and filtering
pub use query::{filter_by_bounding_box, geocells_for_bounding_box};
pub use query::{geocells_for_bounding_box_with_cost, Located};

// Proximity search
pub use config::ProximityConfig;
pub use proximity::{proximity_fetch, proximity_fetch_with_limits, QueryRunner, Ranked};
pub use config::ConfigError;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports.
///
/// ```rust
/// use geocell::prelude::*;
///
/// let p = Point::new(40.7128, -74.0060).unwrap();
/// let cell = compute(p, 6);
/// assert_eq!(cell.len(), 6);
/// ```
pub mod prelude {
    pub use crate::{adjacent, children, compute, compute_box, generate_cells, is_valid};
    pub use crate::{best_bbox_search_cells, geocells_for_bounding_box};
    pub use crate::{distance, point_distance};
    pub use crate::{proximity_fetch, Located, ProximityConfig, QueryRunner, Ranked};
    pub use crate::{Box, GeocellError, Point, Result};
}
