//! Free functions over the process-wide tables.
//!
//! Every function here builds the tables it reads on first use, so they may be called
//! from anywhere, on any thread, without setup. [`init_statics`] only moves that cost to
//! a moment of the caller's choosing.
//!
//! [`init_statics`]: fn.init_statics.html

use super::boards;
use super::rays;
use super::zobrist;

use crate::core::bitboard::BitBoard;
use crate::core::sq::SQ;
use crate::core::{PieceType, Player};

/// Builds every table now instead of on first use.
pub fn init_statics() {
    boards::init_boards();
    zobrist::init_zobrist();
}

// SLIDER FUNCTIONS

/// Bishop attacks from `sq`, stopping on (and including) the first occupied square of
/// each diagonal.
#[inline(always)]
pub fn bishop_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    rays::bishop_attacks(occupied, sq)
}

/// Rook attacks from `sq`, stopping on (and including) the first occupied square of
/// each rank and file.
#[inline(always)]
pub fn rook_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    rays::rook_attacks(occupied, sq)
}

#[inline(always)]
pub fn queen_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    rays::rook_attacks(occupied, sq) | rays::bishop_attacks(occupied, sq)
}

/// Squares attacked by a piece of `player` standing on `sq`, given an occupancy.
///
/// Pawns attack diagonally forward, which is why the player is needed. An empty
/// piece type attacks nothing.
#[inline]
pub fn attacks_from(piece: PieceType, sq: SQ, occupied: BitBoard, player: Player) -> BitBoard {
    match piece {
        PieceType::P => pawn_attacks_from(sq, player),
        PieceType::N => knight_moves(sq),
        PieceType::B => bishop_moves(occupied, sq),
        PieceType::R => rook_moves(occupied, sq),
        PieceType::Q => queen_moves(occupied, sq),
        PieceType::K => king_moves(sq),
        PieceType::None | PieceType::All => BitBoard(0),
    }
}

// BOARD FUNCTIONS

#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    boards::knight_moves(sq)
}

#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    boards::king_moves(sq)
}

/// Get the distance of two squares.
#[inline(always)]
pub fn distance_of_sqs(sq_one: SQ, sq_two: SQ) -> u8 {
    sq_one.distance(sq_two)
}

/// Get the line (diagonal / file / rank) `BitBoard` that two squares both exist on, if it exists.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    boards::line_bb(sq_one, sq_two)
}

/// Get the line (diagonal / file / rank) `BitBoard` between two squares, not including the squares, if it exists.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    boards::between_bb(sq_one, sq_two)
}

/// Pawn attacks `BitBoard` from a given square, per player.
/// Basically, given square x, returns the BitBoard of squares a pawn on x attacks.
/// `Player::Both` gives the attacks of a pawn of either side.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    boards::pawn_attacks_from(sq, player)
}

/// Returns if three Squares are in the same diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    boards::aligned(s1, s2, s3)
}

// ZOBRIST FUNCTIONS

#[inline(always)]
pub fn z_square(sq: SQ, player: Player, piece: PieceType) -> u64 {
    zobrist::z_square(sq, player, piece)
}

#[inline(always)]
pub fn z_ep(sq: SQ) -> u64 {
    zobrist::z_ep(sq)
}

#[inline(always)]
pub fn z_castle(castle: u8) -> u64 {
    zobrist::z_castle(castle)
}

#[inline(always)]
pub fn z_side() -> u64 {
    zobrist::z_side()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_is_rook_and_bishop() {
        init_statics();
        let occ = SQ::C3.to_bb() | SQ::E6.to_bb() | SQ::G4.to_bb();
        for sq in SQ::iter() {
            assert_eq!(
                queen_moves(occ, sq),
                rook_moves(occ, sq) | bishop_moves(occ, sq)
            );
        }
        assert_eq!(queen_moves(BitBoard(0), SQ::D4).count_bits(), 27);
    }

    #[test]
    fn dispatch_by_piece() {
        let occ = SQ::E4.to_bb();
        assert_eq!(
            attacks_from(PieceType::N, SQ::G1, occ, Player::White),
            SQ::E2.to_bb() | SQ::F3.to_bb() | SQ::H3.to_bb()
        );
        assert_eq!(
            attacks_from(PieceType::P, SQ::E4, occ, Player::Black),
            SQ::D3.to_bb() | SQ::F3.to_bb()
        );
        assert_eq!(attacks_from(PieceType::R, SQ::E1, occ, Player::White).count_bits(), 10);
        assert_eq!(attacks_from(PieceType::None, SQ::E1, occ, Player::White), BitBoard(0));
    }

    #[test]
    fn slider_attacks_stay_on_lines() {
        for sq in SQ::iter() {
            for to in queen_moves(BitBoard(0), sq) {
                assert!(line_bb(sq, to).contains(to));
                assert_eq!(between_bb(sq, to) & queen_moves(BitBoard(0), sq), between_bb(sq, to));
            }
        }
    }
}
