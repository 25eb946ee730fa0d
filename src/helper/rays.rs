//! Occupancy-dependent attacks of the sliding pieces.
//!
//! Every slider attack set is built by walking rays: from the source square, step one
//! `Increment` at a time, adding each square reached, and stop once the edge mask forbids
//! the next step or the square just reached is occupied. A blocker is part of the attack
//! set, since it may be captured.

use crate::core::bitboard::BitBoard;
use crate::core::direction::{Increment, BISHOP_INCREMENTS, ROOK_INCREMENTS};
use crate::core::sq::SQ;

/// Walks a single ray from `sq`, not including `sq` itself.
#[inline]
pub fn ray_attack(inc: Increment, sq: SQ, occupied: BitBoard) -> BitBoard {
    let mut attack = BitBoard(0);
    let mut cur = sq;
    while let Some(next) = cur.offset(inc) {
        let bit = next.to_bb();
        attack |= bit;
        if (occupied & bit).is_not_empty() {
            break;
        }
        cur = next;
    }
    attack
}

/// Walks every ray in `incs` independently and joins the results.
#[inline]
pub fn sliding_attack(incs: &[Increment], sq: SQ, occupied: BitBoard) -> BitBoard {
    incs.iter()
        .fold(BitBoard(0), |acc, inc| acc | ray_attack(*inc, sq, occupied))
}

#[inline(always)]
pub fn bishop_attacks(occupied: BitBoard, sq: SQ) -> BitBoard {
    sliding_attack(&BISHOP_INCREMENTS, sq, occupied)
}

#[inline(always)]
pub fn rook_attacks(occupied: BitBoard, sq: SQ) -> BitBoard {
    sliding_attack(&ROOK_INCREMENTS, sq, occupied)
}
