#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate stonewall;

mod board_benches;
mod perft_benches;

criterion_main! {
    board_benches::board_benches,
    move_gen_benches::movegen_benches,
    perft_benches::perft_benches
}
