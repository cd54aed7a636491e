use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pcbplace::geometry::geo_traits::CollidesWith;
use pcbplace::geometry::primitives::{Edge, Point, Rect};
use pcbplace::io::ext_repr::{ExtBoard, ExtInstance};
use pcbplace::io::import;
use pcbplace::search::{PlacementSearch, SearchPlan};
use pcbplace::util::SearchConfig;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, search_bench, plan_bench, sight_line_bench);

const BOARD_SIZES: [f64; 3] = [50.0, 75.0, 100.0];

/// Full search of the default instance, on boards of increasing size
fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in BOARD_SIZES {
        let mut ext_instance = ExtInstance::default();
        ext_instance.board = ExtBoard {
            width: size,
            height: size,
        };
        let instance = import(&ext_instance).unwrap();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut search = PlacementSearch::new(&instance, SearchConfig::default()).unwrap();
                black_box(search.solve().unwrap())
            })
        });
    }
    group.finish();
}

fn plan_bench(c: &mut Criterion) {
    let instance = import(&ExtInstance::default()).unwrap();
    let config = SearchConfig::default();
    c.bench_function("plan_compile", |b| {
        b.iter(|| black_box(SearchPlan::compile(&instance, &config).unwrap()))
    });
}

/// Segment versus rectangle tests with random segments crossing a 50x50 board
fn sight_line_bench(c: &mut Criterion) {
    const N_EDGES: usize = 1000;
    let keepout = Rect::try_new(20.0, 35.0, 25.0, 50.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut random_point = || Point(rng.random_range(0.0..50.0), rng.random_range(0.0..50.0));
    let edges = (0..N_EDGES)
        .map(|_| Edge::new(random_point(), random_point()))
        .collect::<Vec<_>>();

    c.bench_function("sight_line_1000", |b| {
        b.iter(|| {
            edges
                .iter()
                .filter(|e| keepout.collides_with(black_box(*e)))
                .count()
        })
    });
}
