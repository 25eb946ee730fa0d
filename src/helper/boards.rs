//! Lookup tables that depend only on geometry: leaper attacks, and the lines and spans
//! between pairs of squares.
//!
//! The tables are built on first use and never change afterwards, so any number of threads
//! may read them.

use crate::core::bitboard::BitBoard;
use crate::core::direction::{Direction, Increment};
use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::{Player, ALL_PLAYERS};

use super::rays::ray_attack;

/// File and rank offsets of the eight knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

type SqTable = [BitBoard; SQ_CNT];
type SqPairTable = [[BitBoard; SQ_CNT]; SQ_CNT];

struct LeaperTables {
    knight: SqTable,
    king: SqTable,
    pawn_attacks: [SqTable; PLAYER_CNT],
}

struct LineTables {
    line: Box<SqPairTable>,
    between: Box<SqPairTable>,
}

lazy_static! {
    static ref LEAPERS: LeaperTables = {
        let tables = LeaperTables {
            knight: gen_knight_moves(),
            king: gen_king_moves(),
            pawn_attacks: [
                gen_pawn_attacks(ALL_PLAYERS[0]),
                gen_pawn_attacks(ALL_PLAYERS[1]),
            ],
        };
        debug!("leaper attack tables initialized");
        tables
    };
    static ref LINES: LineTables = {
        let tables = gen_between_and_line_bbs();
        debug!("line and between tables initialized");
        tables
    };
}

/// Forces construction of the tables.
pub fn init_boards() {
    lazy_static::initialize(&LEAPERS);
    lazy_static::initialize(&LINES);
}

#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    LEAPERS.knight[sq.0 as usize]
}

#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    LEAPERS.king[sq.0 as usize]
}

/// Squares a pawn of `player` standing on `sq` attacks. For `Player::Both`, the squares
/// a pawn of either side would attack.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    match player {
        Player::Both => {
            LEAPERS.pawn_attacks[Player::White as usize][sq.0 as usize]
                | LEAPERS.pawn_attacks[Player::Black as usize][sq.0 as usize]
        }
        _ => LEAPERS.pawn_attacks[player.idx()][sq.0 as usize],
    }
}

/// The full line through both squares, edge to edge, or empty when they share none.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    LINES.line[sq_one.0 as usize][sq_two.0 as usize]
}

/// The squares strictly between two aligned squares, or empty.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    LINES.between[sq_one.0 as usize][sq_two.0 as usize]
}

/// Returns if three Squares are in the same diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    line_bb(s1, s2).contains(s3)
}

fn gen_knight_moves() -> SqTable {
    let mut table = [BitBoard(0); SQ_CNT];
    for sq in SQ::iter() {
        let file = sq.file_idx_of_sq() as i8;
        let rank = sq.rank_idx_of_sq() as i8;
        table[sq.0 as usize] = KNIGHT_JUMPS
            .iter()
            .filter_map(|&(df, dr)| SQ::from_coords(file + df, rank + dr))
            .fold(BitBoard(0), |bb, to| bb | to.to_bb());
    }
    table
}

fn gen_king_moves() -> SqTable {
    let mut table = [BitBoard(0); SQ_CNT];
    for sq in SQ::iter() {
        table[sq.0 as usize] = Increment::ALL
            .iter()
            .filter_map(|inc| sq.offset(*inc))
            .fold(BitBoard(0), |bb, to| bb | to.to_bb());
    }
    table
}

fn gen_pawn_attacks(player: Player) -> SqTable {
    let incs = match player {
        Player::Black => [Increment::SouthEast, Increment::SouthWest],
        _ => [Increment::NorthEast, Increment::NorthWest],
    };
    let mut table = [BitBoard(0); SQ_CNT];
    for sq in SQ::iter() {
        let bb = sq.to_bb();
        table[sq.0 as usize] = bb.shift(incs[0]) | bb.shift(incs[1]);
    }
    table
}

fn gen_between_and_line_bbs() -> LineTables {
    let mut line = Box::new([[BitBoard(0); SQ_CNT]; SQ_CNT]);
    let mut between = Box::new([[BitBoard(0); SQ_CNT]; SQ_CNT]);
    for a in SQ::iter() {
        for b in SQ::iter() {
            let dir = Direction::between(a, b);
            if dir == Direction::None {
                continue;
            }
            let (i, j) = (a.0 as usize, b.0 as usize);
            for inc in dir.increments() {
                let empty_ray = ray_attack(*inc, a, BitBoard(0));
                line[i][j] |= empty_ray;
                if empty_ray.contains(b) {
                    // stop the walk on b, then drop b itself
                    between[i][j] = ray_attack(*inc, a, b.to_bb()) & !b.to_bb();
                }
            }
            line[i][j] |= a.to_bb();
        }
    }
    LineTables { line, between }
}
