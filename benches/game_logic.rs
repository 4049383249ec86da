use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_sumstack::core::{Block, GameSnapshot, GameState, Grid};
use tui_sumstack::types::{BlockColor, BlockId, GameMode, GRID_COLS, GRID_ROWS};

fn bench_select_toggle(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.new_game(GameMode::Timed);
    let id = state.grid().blocks()[0].id;

    c.bench_function("select_toggle", |b| {
        b.iter(|| {
            // On then off leaves the state unchanged between iterations.
            state.select_block(black_box(id));
            state.select_block(black_box(id));
        })
    });
}

fn bench_compact(c: &mut Criterion) {
    c.bench_function("compact_sparse_grid", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Every other row occupied, all columns.
            let mut id = 1u32;
            for row in (0..GRID_ROWS).step_by(2) {
                for col in 0..GRID_COLS {
                    grid.push(Block::new(
                        BlockId::new(id),
                        5,
                        row,
                        col,
                        BlockColor::from_index(id),
                    ));
                    id += 1;
                }
            }
            grid.compact();
        })
    });
}

fn bench_inject_row(c: &mut Criterion) {
    c.bench_function("inject_row", |b| {
        b.iter(|| {
            let mut state = GameState::new(12345);
            state.new_game(GameMode::Timed);
            state.inject_row();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.new_game(GameMode::Classic);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_select_toggle,
    bench_compact,
    bench_inject_row,
    bench_snapshot
);
criterion_main!(benches);
