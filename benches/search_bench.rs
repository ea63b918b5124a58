use criterion::{criterion_group, criterion_main, Criterion};
use gridpath::{Algorithm, Cell, CellState, Grid, DEFAULT_GRID_SIZE};
use rand::prelude::*;
use std::hint::black_box;

fn maze_bench(c: &mut Criterion) {
    let size = DEFAULT_GRID_SIZE;
    let start = Cell::new(0, 0);
    let goal = Cell::new(size as i32 - 2, size as i32 - 2);
    let grid = Grid::generate_maze(size, start, Some(0)).unwrap();
    assert!(grid.reachable(start, goal));
    for algorithm in Algorithm::ALL {
        c.bench_function(format!("{size}x{size} maze, {algorithm}").as_str(), |b| {
            b.iter(|| black_box(algorithm.run(&grid, start, goal)))
        });
    }
}

fn scattered_walls_bench(c: &mut Criterion) {
    let size = DEFAULT_GRID_SIZE;
    let start = Cell::new(0, 0);
    let goal = Cell::new(size as i32 - 1, size as i32 - 1);
    let mut rng = StdRng::seed_from_u64(0);
    let mut rows = vec![vec![CellState::Open; size]; size];
    for row in rows.iter_mut() {
        for state in row.iter_mut() {
            if rng.gen_bool(0.3) {
                *state = CellState::Wall;
            }
        }
    }
    rows[0][0] = CellState::Open;
    rows[size - 1][size - 1] = CellState::Open;
    let grid = Grid::from_cells(&rows).unwrap();
    for algorithm in Algorithm::ALL {
        c.bench_function(
            format!("{size}x{size} scattered walls, {algorithm}").as_str(),
            |b| b.iter(|| black_box(algorithm.run(&grid, start, goal))),
        );
    }
}

criterion_group!(benches, maze_bench, scattered_walls_bench);
criterion_main!(benches);
