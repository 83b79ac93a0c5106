use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ferris_blocks::core::{Board, GameSnapshot, GameState};
use ferris_blocks::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !black_box(state.tick()) {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter_batched(
            || {
                let mut board = Board::standard();
                // Fill bottom 4 rows
                for y in 16..20 {
                    for x in 0..10 {
                        board.set(x, y, Some(PieceKind::I));
                    }
                }
                board
            },
            |mut board| black_box(board.clear_full_rows()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !black_box(state.drop()) {
                state.restart();
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.move_left());
            black_box(state.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.tick();
    state.tick();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
