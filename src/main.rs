use geocell::{
    best_bbox_search_cells, children, compute, distance, point_distance, proximity_fetch, Box,
    DefaultCost, Located, Point, ProximityConfig,
};

#[derive(Debug, Clone, Copy)]
struct City {
    name: &'static str,
    point: Point,
}

impl Located for City {
    type Id = &'static str;

    fn location(&self) -> Point {
        self.point
    }

    fn id(&self) -> &'static str {
        self.name
    }
}

fn main() -> Result<(), std::boxed::Box<dyn std::error::Error>> {
    let nyc = Point::new(40.7128, -74.0060)?;
    let london = Point::new(51.5074, -0.1278)?;
    let tokyo = Point::new(35.6762, 139.6503)?;

    println!("Geocell Spatial Demo");

    println!("\nCell Encoding:");
    let nyc_cell = compute(nyc, 8);
    let london_cell = compute(london, 8);
    let tokyo_cell = compute(tokyo, 8);
    println!("NYC cell (resolution 8): {nyc_cell}");
    println!("London cell (resolution 8): {london_cell}");
    println!("Tokyo cell (resolution 8): {tokyo_cell}");
    println!("NYC cell has {} children", children(&nyc_cell).len());

    println!("\nDistance Calculations:");
    println!("NYC to London: {:.0} km", distance(nyc, london) / 1000.0);
    println!("NYC to Tokyo: {:.0} km", distance(nyc, tokyo) / 1000.0);

    println!("\nBounding Box Query:");
    let manhattan = Box::new(40.8000, -73.9000, 40.7000, -74.0200)?;
    let cells = best_bbox_search_cells(&manhattan, &DefaultCost);
    println!(
        "Manhattan bounding box covered by {} cells at resolution {}",
        cells.len(),
        cells.first().map(|c| c.len()).unwrap_or(0)
    );

    let empire_state = Point::new(40.7484, -73.9857)?;
    let manhattan_cell = cells.first().cloned().unwrap_or_default();
    println!(
        "Empire State distance to a covering cell's edge: {:.0} m",
        point_distance(&manhattan_cell, empire_state)
    );

    println!("\nNearest Neighbor Search:");
    let cities = vec![
        City {
            name: "New York City",
            point: nyc,
        },
        City {
            name: "London",
            point: london,
        },
        City {
            name: "Tokyo",
            point: tokyo,
        },
        City {
            name: "Newark",
            point: Point::new(40.7357, -74.1724)?,
        },
    ];
    let origin = empire_state;
    let config = ProximityConfig::new().with_max_results(2);
    let runner = move |query_cells: &[String]| -> Vec<City> {
        let resolution = query_cells.first().map(|c| c.len()).unwrap_or(1);
        cities
            .iter()
            .copied()
            .filter(|c| query_cells.contains(&compute(c.point, resolution)))
            .collect()
    };
    let nearest = proximity_fetch(origin, &config, &runner);
    println!(
        "Found {} cities nearest to the Empire State Building",
        nearest.len()
    );
    for ranked in &nearest {
        println!(
            "  {} at distance: {:.0}m",
            ranked.entity.name, ranked.distance_m
        );
    }

    println!("\nSpatial demo completed successfully");
    Ok(())
}
