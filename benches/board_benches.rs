use std::time::Duration;

use criterion::{black_box, Criterion};

use stonewall::board::fen::ALL_FENS;
use stonewall::{BitMove, Board, Player};

pub const SEED: u64 = 5363310003543;

lazy_static! {
    pub static ref RAND_BOARDS: Vec<Board> = Board::random().pseudo_random(SEED).many(100);
}

fn bench_board_100_clone(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    c.bench_function("Board Clone 100", |b| {
        b.iter(|| {
            for board in RAND_BOARDS.iter() {
                black_box(board.clone());
            }
        })
    });
}

fn bench_find(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    c.bench_function("Board find King SQ", |b| {
        b.iter(|| {
            for board in RAND_BOARDS.iter() {
                black_box(board.king_sq(Player::Black));
            }
        })
    });
}

fn bench_apply_100_move(c: &mut Criterion) {
    lazy_static::initialize(&RAND_BOARDS);
    let board_move: Vec<(Board, BitMove)> = RAND_BOARDS
        .iter()
        .filter_map(|board| {
            let moves = board.generate_moves();
            moves.first().map(|m| (board.clone(), *m))
        })
        .collect();
    c.bench_function("Board Apply Undo 100 Move", |b| {
        let mut boards = board_move.clone();
        b.iter(|| {
            for (board, mv) in boards.iter_mut() {
                board.apply_move(*mv);
                black_box(&board);
                board.undo_move();
            }
        })
    });
}

fn bench_fen_round_trip(c: &mut Criterion) {
    c.bench_function("Board FEN Round Trip", |b| {
        b.iter(|| {
            for fen in ALL_FENS.iter() {
                let board = Board::from_fen(black_box(fen)).unwrap();
                black_box(board.fen());
            }
        })
    });
}

criterion_group!(name = board_benches;
    config = Criterion::default()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(20));
    targets = bench_board_100_clone, bench_find, bench_apply_100_move, bench_fen_round_trip
);
