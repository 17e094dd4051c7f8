//! Iterative k-nearest proximity search over a caller-owned datastore.
//!
//! The search grows a small cluster of same-resolution cells around the
//! query center — one cell, then a row or column of two, then the
//! surrounding 2x2 block — before ascending to the parent resolution and
//! repeating, each round doubling the effective search radius. A lower
//! bound on the distance to any entity outside the currently searched
//! cluster lets the loop stop as soon as no unexplored cell could possibly
//! improve on the current top-K.

use crate::config::ProximityConfig;
use crate::distance;
use crate::edges;
use crate::geocell::{self, Direction, EAST, MAX_RESOLUTION, NORTH, SOUTH, WEST};
use crate::grid::collinear;
use crate::merge;
use crate::point::Point;
use crate::query::Located;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Fetches candidate rows for a batch of cells at a single resolution.
///
/// Implemented for any `Fn(&[String]) -> Vec<E>` closure via a blanket impl,
/// so callers pass a closure that runs their own datastore query rather than
/// implementing a trait by hand.
pub trait QueryRunner<E> {
    fn fetch(&self, cells: &[String]) -> Vec<E>;
}

impl<E, F: Fn(&[String]) -> Vec<E>> QueryRunner<E> for F {
    fn fetch(&self, cells: &[String]) -> Vec<E> {
        self(cells)
    }
}

/// A result row paired with its great-circle distance from the query origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<E> {
    pub entity: E,
    pub distance_m: f64,
}

/// Finds the entities nearest to `origin`, fetching candidate rows through
/// `runner` one cluster of cells at a time, per `config`.
///
/// See the module documentation for the expansion strategy. Returns up to
/// `config.max_results()` entities sorted by ascending distance, each within
/// `config.max_distance_m()` if that cap is nonzero (`0.0` means unbounded).
pub fn proximity_fetch<E: Located>(
    origin: Point,
    config: &ProximityConfig,
    runner: &impl QueryRunner<E>,
) -> Vec<Ranked<E>> {
    let max_results = config.max_results();

    // Correlates this search's log lines without exposing any caller data.
    #[cfg(feature = "log")]
    let search_id = uuid::Uuid::new_v4();
    #[cfg(feature = "log")]
    crate::debug_log!(
        "proximity_fetch[{search_id}]: starting at {origin}, max_results={max_results}"
    );

    let mut results: Vec<Ranked<E>> = Vec::new();
    let mut searched: FxHashSet<String> = FxHashSet::default();
    let mut focus_cell = geocell::compute(origin, MAX_RESOLUTION);
    let mut current_cells: Vec<String> = vec![focus_cell.clone()];
    // Seed so the first iteration's lower-bound check never trips.
    let mut edge_dirs: Vec<Direction> = vec![(0, 0)];
    let mut edge_dists: Vec<f64> = vec![0.0];

    while !current_cells.is_empty() {
        let lb = edge_dists[0];
        if config.has_distance_cap() && lb > config.max_distance_m() {
            crate::debug_log!("proximity_fetch: lower bound {lb} exceeds max_distance, stopping");
            break;
        }

        let fresh: Vec<String> = current_cells
            .iter()
            .filter(|c| !searched.contains(*c))
            .cloned()
            .collect();
        let mut batch: Vec<Ranked<E>> = runner
            .fetch(&fresh)
            .into_iter()
            .map(|entity| {
                let distance_m = distance::distance(origin, entity.location());
                Ranked { entity, distance_m }
            })
            .collect();
        searched.extend(current_cells.iter().cloned());

        batch.sort_by(|a, b| {
            a.distance_m
                .partial_cmp(&b.distance_m)
                .unwrap_or(Ordering::Equal)
        });
        batch.truncate(max_results);

        merge::merge_in_place(
            &mut results,
            batch,
            |r: &Ranked<E>| r.entity.id(),
            |a, b| {
                a.distance_m
                    .partial_cmp(&b.distance_m)
                    .unwrap_or(Ordering::Equal)
            },
        );
        results.truncate(max_results);

        let boxes_edges = edges::distance_sorted_edges(&current_cells, origin);
        edge_dirs = boxes_edges.0;
        edge_dists = boxes_edges.1;

        crate::debug_log!(
            "proximity_fetch: current_cells={}, results={}, lower_bound={:?}",
            current_cells.len(),
            results.len(),
            edge_dists.first()
        );

        if results.is_empty() || current_cells.len() >= 3 {
            // The spec's steady-state cycle only ever reaches exactly 4 cells
            // here (a completed 2x2 block), but an asymmetric parent-boundary
            // crossing during the 1->2->4 growth can leave 3 distinct parents
            // after a truncation; treating that the same as "block complete"
            // keeps the loop making progress instead of getting stuck.
            focus_cell.pop();
            if focus_cell.is_empty() {
                break;
            }
            let mut parents: Vec<String> = current_cells
                .iter()
                .map(|c| c[..c.len() - 1].to_string())
                .collect();
            parents.sort();
            parents.dedup();
            current_cells = parents;
        } else if current_cells.len() == 1 {
            if let Some(neighbor) = geocell::adjacent(&current_cells[0], edge_dirs[0]) {
                current_cells.push(neighbor);
            } else {
                // Vertical wrap past a pole: nothing further to add this round.
                break;
            }
        } else if current_cells.len() == 2 {
            let axis = perpendicular_axis(&current_cells, &focus_cell, origin);
            let mut grew = false;
            for cell in current_cells.clone() {
                if let Some(neighbor) = geocell::adjacent(&cell, axis) {
                    current_cells.push(neighbor);
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        } else {
            // Unreachable: the branches above cover every count current_cells
            // can hold (1, 2, or >= 3), but a defensive exit beats a silent
            // infinite loop if that invariant is ever violated.
            break;
        }

        if results.len() >= max_results {
            if let Some(kth) = results.last() {
                if edge_dists[0] >= kth.distance_m {
                    break;
                }
            }
        }
    }

    if config.has_distance_cap() {
        let cap = config.max_distance_m();
        results.retain(|r| r.distance_m < cap);
    }
    results.truncate(max_results);
    results
}

/// Convenience entry point taking `max_results`/`max_distance_m` directly
/// rather than a pre-built [`ProximityConfig`].
pub fn proximity_fetch_with_limits<E: Located>(
    origin: Point,
    runner: &impl QueryRunner<E>,
    max_results: usize,
    max_distance_m: f64,
) -> Vec<Ranked<E>> {
    let config = ProximityConfig::new()
        .with_max_results(max_results)
        .with_max_distance_m(max_distance_m);
    proximity_fetch(origin, &config, runner)
}

/// Determines the direction to step the current two-cell cluster in to grow
/// it into a 2x2 block: perpendicular to the axis the pair already shares,
/// toward whichever side of `focus_cell` (not the pair's own hull) is closer
/// to `origin`.
fn perpendicular_axis(current_cells: &[String], focus_cell: &str, origin: Point) -> Direction {
    let same_column = collinear(&current_cells[0], &current_cells[1], true);
    let candidates: [Direction; 2] = if same_column {
        [EAST, WEST]
    } else {
        [NORTH, SOUTH]
    };

    let (focus_dirs, focus_dists) = edges::distance_sorted_edges(&[focus_cell.to_string()], origin);
    candidates
        .into_iter()
        .min_by(|a, b| {
            let da = focus_dirs
                .iter()
                .position(|d| d == a)
                .map(|i| focus_dists[i])
                .unwrap_or(f64::INFINITY);
            let db = focus_dirs
                .iter()
                .position(|d| d == b)
                .map(|i| focus_dists[i])
                .unwrap_or(f64::INFINITY);
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
        .expect("candidates is nonempty")
}
