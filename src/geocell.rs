//! Geocell codec: point <-> cell encoding, decoding, adjacency, and children.
//!
//! A cell is a nonempty string over the 16-symbol alphabet `0123456789abcdef`.
//! Its length (the *resolution*) determines which of the 16^resolution
//! rectangles of a fixed 4x4-per-level subdivision of the whole Earth it
//! denotes. See [`compute`] for the encoder and [`compute_box`] for its
//! inverse.

use crate::bbox::Box as GeoBox;
use crate::error::{GeocellError, Result};
use crate::point::Point;
use once_cell::sync::Lazy;
use smallvec::SmallVec;

/// A cell's 16 children, stack-allocated unless something downstream grows it.
pub type ChildCells = SmallVec<[String; ALPHABET_SIZE]>;

/// The `MAX_RESOLUTION` cells covering a single point, stack-allocated
/// unless something downstream grows it.
pub type CellPath = SmallVec<[String; MAX_RESOLUTION]>;

/// Per-axis subdivision factor: each cell splits into a 4x4 grid of children.
pub const GRID: usize = 4;
/// `GRID * GRID`, the size of the cell alphabet.
pub const ALPHABET_SIZE: usize = 16;
/// The deepest resolution this codec supports.
pub const MAX_RESOLUTION: usize = 13;
/// Cap on bounding-box cell-cover size before a resolution is considered infeasible.
pub const MAX_FEASIBLE_BBOX_CELLS: usize = 300;

/// The 16-symbol cell alphabet, in index order.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"0123456789abcdef";

/// A unit step `(dx, dy)` with `dx, dy` each in `{-1, 0, 1}`.
///
/// `dx = 1` is east, `dy = 1` is north. The all-zero direction is reserved for
/// internal use by the proximity search's initial state and is never returned
/// by [`all_adjacents`].
pub type Direction = (i8, i8);

pub const NORTH: Direction = (0, 1);
pub const SOUTH: Direction = (0, -1);
pub const EAST: Direction = (1, 0);
pub const WEST: Direction = (-1, 0);
pub const NORTHEAST: Direction = (1, 1);
pub const NORTHWEST: Direction = (-1, 1);
pub const SOUTHEAST: Direction = (1, -1);
pub const SOUTHWEST: Direction = (-1, -1);

/// Fixed order used by [`all_adjacents`].
const ALL_DIRECTIONS: [Direction; 8] = [
    NORTHWEST, NORTH, NORTHEAST, EAST, SOUTHEAST, SOUTH, SOUTHWEST, WEST,
];

/// ASCII byte -> alphabet index, or `-1` for bytes outside the alphabet.
///
/// A 16-entry table would suffice for the alphabet itself, but keying it by
/// the full ASCII byte value avoids re-deriving the digit/letter split on
/// every lookup.
static ALPHABET_INDEX: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut table = [-1i8; 256];
    for (i, &b) in ALPHABET.iter().enumerate() {
        table[b as usize] = i as i8;
    }
    table
});

fn char_index(b: u8) -> u8 {
    let idx = ALPHABET_INDEX[b as usize];
    debug_assert!(idx >= 0, "byte {b:#x} is not a geocell alphabet character");
    idx as u8
}

/// Maps a subdivision cell `(x, y)` (column, row; 0-indexed from the
/// southwest corner) to its alphabet character.
fn subdiv_char(x: u8, y: u8) -> u8 {
    let idx = ((y & 2) << 2) | ((x & 2) << 1) | ((y & 1) << 1) | (x & 1);
    ALPHABET[idx as usize]
}

/// Inverse of [`subdiv_char`].
fn subdiv_xy(index: u8) -> (u8, u8) {
    let x = ((index & 4) >> 1) | (index & 1);
    let y = ((index & 8) >> 2) | ((index & 2) >> 1);
    (x, y)
}

pub(crate) fn char_xy(b: u8) -> (u8, u8) {
    subdiv_xy(char_index(b))
}

/// Whether `cell` is nonempty and every character is in the cell alphabet.
pub fn is_valid(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| ALPHABET_INDEX[b as usize] >= 0)
}

/// Validates a cell string coming from outside the crate (a datastore key, a
/// deserialized request) before it is passed to [`compute_box`], [`children`],
/// or [`adjacent`], all of which assume a valid cell and only `debug_assert` it.
pub fn parse_cell(cell: &str) -> Result<String> {
    if is_valid(cell) {
        Ok(cell.to_string())
    } else {
        Err(GeocellError::InvalidCell(cell.to_string()))
    }
}

/// Encodes `point` into a cell of the given `resolution` (1..=13).
///
/// Points on a cell's upper or right boundary clamp into that cell rather
/// than the next one over, per the subdivision's `min(.., GRID - 1)` rule.
pub fn compute(point: Point, resolution: usize) -> String {
    debug_assert!((1..=MAX_RESOLUTION).contains(&resolution));
    let (mut north, mut east, mut south, mut west) = (90.0, 180.0, -90.0, -180.0);
    let mut cell = Vec::with_capacity(resolution);

    for _ in 0..resolution {
        let lon_span = east - west;
        let lat_span = north - south;
        let x = (((point.lon() - west) / lon_span) * GRID as f64) as usize;
        let y = (((point.lat() - south) / lat_span) * GRID as f64) as usize;
        let x = x.min(GRID - 1);
        let y = y.min(GRID - 1);
        cell.push(subdiv_char(x as u8, y as u8));

        let sub_lon = lon_span / GRID as f64;
        let sub_lat = lat_span / GRID as f64;
        let new_west = west + x as f64 * sub_lon;
        let new_south = south + y as f64 * sub_lat;
        west = new_west;
        east = new_west + sub_lon;
        south = new_south;
        north = new_south + sub_lat;
    }

    let cell = String::from_utf8(cell).expect("alphabet is ASCII");
    crate::trace_log!("compute({point}, {resolution}) = {cell}");
    cell
}

/// Decodes `cell` back to the rectangle it denotes.
pub fn compute_box(cell: &str) -> GeoBox {
    let (mut north, mut east, mut south, mut west) = (90.0, 180.0, -90.0, -180.0);

    for &b in cell.as_bytes() {
        let (x, y) = char_xy(b);
        let sub_lon = (east - west) / GRID as f64;
        let sub_lat = (north - south) / GRID as f64;
        let new_west = west + x as f64 * sub_lon;
        let new_south = south + y as f64 * sub_lat;
        west = new_west;
        east = new_west + sub_lon;
        south = new_south;
        north = new_south + sub_lat;
    }

    let b = GeoBox::new(north, east, south, west).expect("subdivided world box is always valid");
    crate::trace_log!("compute_box({cell:?}) = {b}");
    b
}

/// Whether `compute(point, cell.len()) == cell`.
pub fn contains_point(cell: &str, point: Point) -> bool {
    compute(point, cell.len()) == cell
}

/// The 16 immediate children of `cell`, in alphabet order.
///
/// Backed by a [`ChildCells`] so the common case (iterating or indexing the
/// fixed-size result) never touches the heap for the backing array itself,
/// only for the child strings.
pub fn children(cell: &str) -> ChildCells {
    ALPHABET
        .iter()
        .map(|&c| {
            let mut child = String::with_capacity(cell.len() + 1);
            child.push_str(cell);
            child.push(c as char);
            child
        })
        .collect()
}

/// The neighboring cell of `cell` in direction `dir`, or `None` if the step
/// would wrap across a pole (vertical wrap is undefined; horizontal wrap
/// around the globe is allowed and handled implicitly).
pub fn adjacent(cell: &str, dir: Direction) -> Option<String> {
    let (mut dx, mut dy) = dir;
    let mut bytes: Vec<u8> = cell.as_bytes().to_vec();

    for i in (0..bytes.len()).rev() {
        let (mut x, mut y) = char_xy(bytes[i]);

        match dx {
            -1 => {
                if x > 0 {
                    x -= 1;
                    dx = 0;
                } else {
                    x = GRID as u8 - 1;
                }
            }
            1 => {
                if x < GRID as u8 - 1 {
                    x += 1;
                    dx = 0;
                } else {
                    x = 0;
                }
            }
            _ => {}
        }

        match dy {
            -1 => {
                if y > 0 {
                    y -= 1;
                    dy = 0;
                } else {
                    y = GRID as u8 - 1;
                }
            }
            1 => {
                if y < GRID as u8 - 1 {
                    y += 1;
                    dy = 0;
                } else {
                    y = 0;
                }
            }
            _ => {}
        }

        bytes[i] = subdiv_char(x, y);

        if dx == 0 && dy == 0 {
            break;
        }
    }

    if dy != 0 {
        crate::trace_log!("adjacent({cell:?}, {dir:?}) wrapped past a pole, no such cell");
        return None;
    }
    Some(String::from_utf8(bytes).expect("alphabet is ASCII"))
}

/// The eight neighbors of `cell`, in the fixed order `NW, N, NE, E, SE, S, SW, W`.
pub fn all_adjacents(cell: &str) -> [Option<String>; 8] {
    let mut out: [Option<String>; 8] = Default::default();
    for (i, dir) in ALL_DIRECTIONS.iter().enumerate() {
        out[i] = adjacent(cell, *dir);
    }
    out
}

/// The `MAX_RESOLUTION` cells (resolutions `1..=MAX_RESOLUTION`) containing `point`.
pub fn generate_cells(point: Point) -> CellPath {
    (1..=MAX_RESOLUTION).map(|r| compute(point, r)).collect()
}
