use geocell::{
    best_bbox_search_cells, children, compute, compute_box, contains_point, distance,
    filter_by_bounding_box, geocells_for_bounding_box, is_valid, merge_in_place_distinct,
    point_distance, proximity_fetch, Box, DefaultCost, Located, Point, ProximityConfig,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Poi {
    name: &'static str,
    point: Point,
}

impl Located for Poi {
    type Id = &'static str;

    fn location(&self) -> Point {
        self.point
    }

    fn id(&self) -> &'static str {
        self.name
    }
}

fn manhattan_pois() -> Vec<Poi> {
    vec![
        Poi {
            name: "times_square",
            point: Point::new(40.7580, -73.9855).unwrap(),
        },
        Poi {
            name: "empire_state",
            point: Point::new(40.7484, -73.9857).unwrap(),
        },
        Poi {
            name: "central_park",
            point: Point::new(40.7829, -73.9654).unwrap(),
        },
        Poi {
            name: "wall_street",
            point: Point::new(40.7074, -74.0113).unwrap(),
        },
        Poi {
            name: "harlem",
            point: Point::new(40.8116, -73.9465).unwrap(),
        },
    ]
}

#[test]
fn test_cell_round_trip_at_every_resolution() {
    let p = Point::new(40.7128, -74.0060).unwrap();
    for resolution in 1..=geocell::MAX_RESOLUTION {
        let cell = compute(p, resolution);
        assert_eq!(cell.len(), resolution);
        assert!(is_valid(&cell));
        assert!(contains_point(&cell, p));
    }
}

#[test]
fn test_children_are_valid_and_prefixed() {
    let p = Point::new(0.0, 0.0).unwrap();
    let cell = compute(p, 5);
    let kids = children(&cell);
    assert_eq!(kids.len(), 16);
    for kid in &kids {
        assert!(kid.starts_with(&cell));
        assert!(is_valid(kid));
    }
}

#[test]
fn test_distance_between_known_cities() {
    let nyc = Point::new(40.7128, -74.0060).unwrap();
    let london = Point::new(51.5074, -0.1278).unwrap();
    let km = distance(nyc, london) / 1000.0;
    assert!((km - 5570.0).abs() / 5570.0 < 0.02);
}

#[test]
fn test_bounding_box_query_then_filter() {
    let manhattan = Box::new(40.8200, -73.9070, 40.6800, -74.0190).unwrap();
    let cells = best_bbox_search_cells(&manhattan, &DefaultCost);
    assert!(!cells.is_empty());

    let unfiltered = geocells_for_bounding_box(&manhattan);
    assert_eq!(unfiltered.len(), cells.len());

    let pois = manhattan_pois();
    let inside = filter_by_bounding_box(&manhattan, pois.clone());
    assert!(inside.iter().any(|p| p.name == "times_square"));
    assert!(inside.len() <= pois.len());
}

#[test]
fn test_point_distance_to_covering_cell() {
    let manhattan = Box::new(40.8200, -73.9070, 40.6800, -74.0190).unwrap();
    let cell = best_bbox_search_cells(&manhattan, &DefaultCost)
        .into_iter()
        .next()
        .unwrap();
    let cell_box = compute_box(&cell);

    let inside = Point::new(
        (cell_box.north() + cell_box.south()) / 2.0,
        (cell_box.east() + cell_box.west()) / 2.0,
    )
    .unwrap();
    assert_eq!(point_distance(&cell, inside), 0.0);

    let outside = Point::new(41.5, -73.98).unwrap();
    assert!(point_distance(&cell, outside) > 0.0);
}

#[test]
fn test_proximity_search_finds_nearest_manhattan_landmarks() {
    let origin = Point::new(40.7580, -73.9855).unwrap();
    let pois = manhattan_pois();
    let config = ProximityConfig::new().with_max_results(3);

    let runner = move |cells: &[String]| -> Vec<Poi> {
        let resolution = cells.first().map(|c| c.len()).unwrap_or(1);
        pois.iter()
            .copied()
            .filter(|p| cells.contains(&compute(p.point, resolution)))
            .collect()
    };

    let nearest = proximity_fetch(origin, &config, &runner);
    assert!(!nearest.is_empty());
    assert!(nearest.len() <= 3);
    assert_eq!(nearest[0].entity.name, "times_square");
    for window in nearest.windows(2) {
        assert!(window[0].distance_m <= window[1].distance_m);
    }
}

#[test]
fn test_proximity_search_respects_distance_cap() {
    let origin = Point::new(40.7580, -73.9855).unwrap();
    let pois = manhattan_pois();
    let config = ProximityConfig::new()
        .with_max_results(10)
        .with_max_distance_m(2000.0);

    let runner = move |cells: &[String]| -> Vec<Poi> {
        let resolution = cells.first().map(|c| c.len()).unwrap_or(1);
        pois.iter()
            .copied()
            .filter(|p| cells.contains(&compute(p.point, resolution)))
            .collect()
    };

    let nearest = proximity_fetch(origin, &config, &runner);
    for ranked in &nearest {
        assert!(ranked.distance_m <= 2000.0);
    }
}

#[test]
fn test_merge_in_place_distinct_combines_candidate_cell_sets() {
    let mut a = geocells_for_bounding_box(&Box::new(1.0, 1.0, 0.0, 0.0).unwrap());
    let b = geocells_for_bounding_box(&Box::new(1.0, 1.0, 0.0, 0.0).unwrap());
    let before = a.len();
    merge_in_place_distinct(&mut a, b);
    // merging a set with itself must not introduce duplicates
    assert_eq!(a.len(), before);
}
