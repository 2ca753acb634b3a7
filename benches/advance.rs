use criterion::{black_box, criterion_group, criterion_main, Criterion};
use life_grid::Grid;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn advance<const W: usize, const H: usize>(c: &mut Criterion) {
    let mut grid = Grid::new(W, H).unwrap();
    grid.randomize(FILL_RATE, Some(SEED)).unwrap();
    c.bench_function(&format!("advance_{}x{}", W, H), |b| {
        b.iter(|| black_box(grid.advance()))
    });
}

fn randomize(c: &mut Criterion) {
    let mut grid = Grid::new(200, 150).unwrap();
    c.bench_function("randomize_200x150", |b| {
        b.iter(|| black_box(grid.randomize(FILL_RATE, Some(SEED))))
    });
}

criterion_group!(benches, advance<50, 40>, advance<200, 150>, randomize);
criterion_main!(benches);
