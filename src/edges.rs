//! Edge-distance utilities over a set of cell bounding boxes.

use crate::bbox::Box as GeoBox;
use crate::distance;
use crate::geocell::{self, Direction, EAST, NORTH, SOUTH, WEST};
use crate::point::Point;

/// The rectangular hull of the boxes denoted by `cells`: northmost north
/// edge, easternmost east edge, southmost south edge, westernmost west edge.
fn hull(cells: &[String]) -> Option<GeoBox> {
    let mut boxes = cells.iter().map(|c| geocell::compute_box(c));
    let first = boxes.next()?;
    let (mut north, mut east, mut south, mut west) =
        (first.north(), first.east(), first.south(), first.west());
    for b in boxes {
        north = north.max(b.north());
        east = east.max(b.east());
        south = south.min(b.south());
        west = west.min(b.west());
    }
    Some(GeoBox::new(north, east, south, west).expect("hull of valid boxes is a valid box"))
}

/// Distances in meters from `point` to each of the four edges of the
/// rectangular hull of `cells`, sorted ascending and paired with the outward
/// direction of the edge each distance was measured to.
///
/// Returns two empty vectors if `cells` is empty. Each edge distance is the
/// great-circle distance from `point` to its projection onto that edge (a
/// point at the same longitude on the north/south edges, or the same
/// latitude on the east/west edges).
pub fn distance_sorted_edges(cells: &[String], point: Point) -> (Vec<Direction>, Vec<f64>) {
    let Some(hull) = hull(cells) else {
        return (Vec::new(), Vec::new());
    };

    let north_edge = Point::new(hull.north(), point.lon()).unwrap_or(point);
    let south_edge = Point::new(hull.south(), point.lon()).unwrap_or(point);
    let east_edge = Point::new(point.lat(), hull.east()).unwrap_or(point);
    let west_edge = Point::new(point.lat(), hull.west()).unwrap_or(point);

    let mut pairs = vec![
        (NORTH, distance::distance(point, north_edge)),
        (EAST, distance::distance(point, east_edge)),
        (SOUTH, distance::distance(point, south_edge)),
        (WEST, distance::distance(point, west_edge)),
    ];
    pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("distances are never NaN"));
    pairs.into_iter().unzip()
}

/// Distance in meters from `point` to the nearest edge of `bbox`.
///
/// `point` inside `bbox` on both axes returns `0.0`. A point inside on one
/// axis and outside on the other projects onto the pair of edges
/// perpendicular to the outside axis and returns the smaller of the two.
/// A point outside on both axes returns the distance to the nearest corner.
fn point_distance_to_box(point: Point, bbox: &GeoBox) -> f64 {
    let lat_inside = point.lat() >= bbox.south() && point.lat() <= bbox.north();
    let lon_inside = point.lon() >= bbox.west() && point.lon() <= bbox.east();

    match (lat_inside, lon_inside) {
        (true, true) => 0.0,
        (true, false) => {
            // Outside only in longitude: project onto the east/west edges.
            let east_edge = Point::new(point.lat(), bbox.east()).expect("edge point is valid");
            let west_edge = Point::new(point.lat(), bbox.west()).expect("edge point is valid");
            distance::distance(point, east_edge).min(distance::distance(point, west_edge))
        }
        (false, true) => {
            // Outside only in latitude: project onto the north/south edges.
            let north_edge = Point::new(bbox.north(), point.lon()).expect("edge point is valid");
            let south_edge = Point::new(bbox.south(), point.lon()).expect("edge point is valid");
            distance::distance(point, north_edge).min(distance::distance(point, south_edge))
        }
        (false, false) => {
            // Outside on both axes: nearest corner wins.
            let corners = [
                bbox.north_east(),
                bbox.south_west(),
                Point::new(bbox.north(), bbox.west()).expect("corner is valid"),
                Point::new(bbox.south(), bbox.east()).expect("corner is valid"),
            ];
            corners
                .iter()
                .map(|&c| distance::distance(point, c))
                .fold(f64::INFINITY, f64::min)
        }
    }
}

/// Distance in meters from `point` to the nearest edge of the rectangle
/// `cell` denotes (`0.0` if `point` lies inside or on the boundary).
pub fn point_distance(cell: &str, point: Point) -> f64 {
    point_distance_to_box(point, &geocell::compute_box(cell))
}
