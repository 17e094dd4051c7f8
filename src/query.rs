//! Indexing and filtering helpers that tie the codec to caller-owned rows.

use crate::bbox::Box as GeoBox;
use crate::geocell::{self, CellPath};
use crate::grid::{self, CostFn, DefaultCost};
use crate::point::Point;

/// A caller's row type that can report the point it should be indexed at and
/// a stable identity for deduplication.
///
/// Implemented by any caller type exposing a [`Point`] and an [`Id`]; the
/// index stores only cell strings, never entity data, so this is the sole
/// integration point between a caller's schema and the codec. `Id` backs the
/// merge-by-key dedup that [`crate::proximity::proximity_fetch`] performs
/// across overlapping cell batches.
///
/// [`Id`]: Located::Id
pub trait Located {
    /// A stable identifier, unique per entity, used to dedup results that
    /// the same entity's cells cause to be fetched more than once.
    type Id: Eq + std::hash::Hash + Clone;

    fn location(&self) -> Point;
    fn id(&self) -> Self::Id;
}

/// The full set of index cells `entity` should be written under, one per
/// resolution from `1` to [`geocell::MAX_RESOLUTION`].
///
/// This is a thin, entity-typed wrapper over [`geocell::generate_cells`],
/// kept separate so callers index via the `Located` trait rather than
/// reaching into the codec module directly.
pub fn generate_cells<E: Located>(entity: &E) -> CellPath {
    geocell::generate_cells(entity.location())
}

/// The cells a bounding-box query over `bbox` should scan, chosen by
/// [`grid::best_bbox_search_cells`] under the default cost function.
pub fn geocells_for_bounding_box(bbox: &GeoBox) -> Vec<String> {
    geocells_for_bounding_box_with_cost(bbox, &DefaultCost)
}

/// As [`geocells_for_bounding_box`], but with an explicit cost function for
/// trading off cell count against resolution.
pub fn geocells_for_bounding_box_with_cost(bbox: &GeoBox, cost: &impl CostFn) -> Vec<String> {
    grid::best_bbox_search_cells(bbox, cost)
}

/// Filters `rows` down to those whose location actually falls in `bbox`.
///
/// A bounding-box cell scan over-selects: the chosen cells' union is a
/// superset of `bbox`, so every caller must apply this (or an equivalent
/// check) after fetching candidate rows from its datastore.
pub fn filter_by_bounding_box<E: Located>(bbox: &GeoBox, rows: Vec<E>) -> Vec<E> {
    rows.into_iter()
        .filter(|e| bbox.contains_point(&e.location()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity(Point);

    impl Located for Entity {
        type Id = u64;

        fn location(&self) -> Point {
            self.0
        }

        fn id(&self) -> u64 {
            self.0.lat().to_bits() ^ self.0.lon().to_bits()
        }
    }

    #[test]
    fn generate_cells_produces_one_cell_per_resolution() {
        let e = Entity(Point::new(40.0, -74.0).unwrap());
        let cells = generate_cells(&e);
        assert_eq!(cells.len(), geocell::MAX_RESOLUTION);
    }

    #[test]
    fn geocells_for_bounding_box_is_nonempty() {
        let bbox = GeoBox::new(41.0, -73.0, 40.0, -74.0).unwrap();
        assert!(!geocells_for_bounding_box(&bbox).is_empty());
    }

    #[test]
    fn filter_by_bounding_box_drops_rows_outside_the_box() {
        let bbox = GeoBox::new(10.0, 10.0, 0.0, 0.0).unwrap();
        let rows = vec![
            Entity(Point::new(5.0, 5.0).unwrap()),
            Entity(Point::new(50.0, 50.0).unwrap()),
        ];
        let kept = filter_by_bounding_box(&bbox, rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0.lat(), 5.0);
    }
}
