use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use life_engine::{Grid, tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(size: usize, density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(42);
    let seed: Vec<Vec<bool>> = (0..size)
        .map(|_| (0..size).map(|_| rng.random_bool(density)).collect())
        .collect();
    Grid::new(size, size, Some(&seed)).unwrap()
}

fn bench_tick_soup(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_soup");

    for size in [64, 256, 1024] {
        let grid = random_grid(size, 0.2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(tick(black_box(grid))))
        });
    }

    group.finish();
}

fn bench_tick_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_sparse");

    // Same handful of live cells on ever larger boards: cost should stay flat.
    for size in [64, 1024, 4096] {
        let grid = Grid::from_cells(size, size, [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(tick(black_box(grid))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick_soup, bench_tick_sparse);
criterion_main!(benches);
