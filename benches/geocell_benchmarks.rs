use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geocell::{best_bbox_search_cells, compute, proximity_fetch, Box, DefaultCost, Located, Point,
    ProximityConfig};

#[derive(Clone, Copy)]
struct Poi {
    id: u32,
    point: Point,
}

impl Located for Poi {
    type Id = u32;

    fn location(&self) -> Point {
        self.point
    }

    fn id(&self) -> u32 {
        self.id
    }
}

fn benchmark_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let point = Point::new(40.7128, -74.0060).unwrap();

    for resolution in [4, 8, 13] {
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, &resolution| b.iter(|| compute(black_box(point), black_box(resolution))),
        );
    }
    group.finish();
}

fn benchmark_best_bbox_search_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_bbox_search_cells");
    let small = Box::new(40.76, -73.98, 40.75, -73.99).unwrap();
    let large = Box::new(45.0, -70.0, 35.0, -80.0).unwrap();

    group.bench_function("small_box", |b| {
        b.iter(|| best_bbox_search_cells(black_box(&small), &DefaultCost))
    });
    group.bench_function("large_box", |b| {
        b.iter(|| best_bbox_search_cells(black_box(&large), &DefaultCost))
    });
    group.finish();
}

fn benchmark_proximity_fetch(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_fetch");
    let origin = Point::new(40.7580, -73.9855).unwrap();
    let pois: Vec<Poi> = (0..1000)
        .map(|i| {
            let offset = (i as f64) * 0.0001;
            Poi {
                id: i,
                point: Point::new(40.7580 + offset, -73.9855 + offset).unwrap(),
            }
        })
        .collect();
    let config = ProximityConfig::new().with_max_results(10);

    group.bench_function("thousand_candidates", |b| {
        let pois = pois.clone();
        b.iter(|| {
            let runner = |cells: &[String]| -> Vec<Poi> {
                let resolution = cells.first().map(|c| c.len()).unwrap_or(1);
                pois.iter()
                    .copied()
                    .filter(|p| cells.contains(&compute(p.point, resolution)))
                    .collect()
            };
            proximity_fetch(black_box(origin), &config, &runner)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_compute,
    benchmark_best_bbox_search_cells,
    benchmark_proximity_fetch
);
criterion_main!(benches);
