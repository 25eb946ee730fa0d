use std::time::Duration;

use criterion::{black_box, Criterion};

use stonewall::board::perft::{parallel_perft, perft};
use stonewall::Board;

fn perft_start_pos(c: &mut Criterion) {
    let board = Board::start_pos();
    c.bench_function("Perft 3 Start Position", |b| {
        b.iter(|| black_box(perft(&board, 3)))
    });
    c.bench_function("Parallel Perft 4 Start Position", |b| {
        b.iter(|| black_box(parallel_perft(&board, 4)))
    });
}

fn perft_kiwipete(c: &mut Criterion) {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    c.bench_function("Perft 3 Kiwipete", |b| b.iter(|| black_box(perft(&board, 3))));
}

criterion_group!(name = perft_benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(100));
    targets = perft_start_pos, perft_kiwipete
);
