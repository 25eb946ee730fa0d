//! Zobrist keys for hashing a position.
//!
//! The keys come from a seeded generator, so every process hashes the same position to
//! the same value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::{PieceType, Player};

/// Seed for the Zobrist's pseudo-random number generator.
const ZOBRIST_SEED: u64 = 23_081;

/// Number of distinct castling-rights sets.
pub const ALL_CASTLING_RIGHTS: usize = 16;

struct ZobristKeys {
    piece_square: [[[u64; PIECE_TYPE_CNT]; PLAYER_CNT]; SQ_CNT],
    en_passant: [u64; FILE_CNT],
    castle: [u64; ALL_CASTLING_RIGHTS],
    side: u64,
}

lazy_static! {
    static ref KEYS: ZobristKeys = {
        let keys = gen_keys(ZOBRIST_SEED);
        debug!("zobrist keys initialized from seed {}", ZOBRIST_SEED);
        keys
    };
}

fn gen_keys(seed: u64) -> ZobristKeys {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys = ZobristKeys {
        piece_square: [[[0; PIECE_TYPE_CNT]; PLAYER_CNT]; SQ_CNT],
        en_passant: [0; FILE_CNT],
        castle: [0; ALL_CASTLING_RIGHTS],
        side: 0,
    };

    for sq_keys in keys.piece_square.iter_mut() {
        for player_keys in sq_keys.iter_mut() {
            // slot 0 (no piece) stays zero
            for key in player_keys.iter_mut().skip(1) {
                *key = rng.gen();
            }
        }
    }

    for key in keys.en_passant.iter_mut() {
        *key = rng.gen();
    }

    // The key of a set of rights is the xor of the keys of each single right in it.
    let singles: [u64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
    for (cr, key) in keys.castle.iter_mut().enumerate() {
        *key = (0..4)
            .filter(|bit| cr & (1 << bit) != 0)
            .fold(0, |acc, bit| acc ^ singles[bit]);
    }

    keys.side = rng.gen();
    keys
}

/// Forces construction of the keys.
pub fn init_zobrist() {
    lazy_static::initialize(&KEYS);
}

/// Key of a piece standing on a square.
#[inline(always)]
pub fn z_square(sq: SQ, player: Player, piece: PieceType) -> u64 {
    debug_assert!(sq.is_okay());
    KEYS.piece_square[sq.0 as usize][player.idx()][piece as usize]
}

/// Key of an en-passant target, which only depends on its file.
#[inline(always)]
pub fn z_ep(sq: SQ) -> u64 {
    debug_assert!(sq.is_okay());
    KEYS.en_passant[sq.file_idx_of_sq() as usize]
}

/// Key of a set of castling rights.
#[inline(always)]
pub fn z_castle(castle: u8) -> u64 {
    debug_assert!((castle as usize) < ALL_CASTLING_RIGHTS);
    KEYS.castle[castle as usize]
}

/// Key toggled whenever the side to move changes.
#[inline(always)]
pub fn z_side() -> u64 {
    KEYS.side
}
