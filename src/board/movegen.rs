//! Module for generating moves from a `Board`. Allow for generating Legal and Pseudo-Legal moves
//! of various types.
//!
//! # Generation Types
//!
//! The Types of moves that can be generated from a [`Board`] are `All`, `Captures` and `Quiets`,
//! all derived from the [`GenTypes`] enum. Captures and quiets split the full list in two:
//! en-passant and capturing promotions are captures, castling and quiet promotions are quiets.
//!
//! # `Legal` vs. `PseudoLegal` Moves
//!
//! For the generation type, moves can either be generated to be Legal, Or Pseudo-Legal. A Legal
//! move is, for as the name implies, a legal move for the current side to play for a given position.
//! A Pseudo-Legal move obeys how the pieces move, but may leave the mover's own king attacked.
//! Castling is the exception: it is only generated when the king's path is safe.
//!
//! The legal list is the pseudo-legal list with the illegal moves removed, in the same order.
//!
//! # Ordering
//!
//! Moves come out in a fixed order: pawn pushes, double pushes, quiet promotions, capturing
//! promotions, pawn captures and en-passant, then knight, bishop, rook, queen and king moves
//! by ascending origin square (captures before quiet moves of each piece), then castling,
//! queen side first.
//!
//! # Examples
//!
//! Generating all pseudo-legal captures:
//!
//! ```
//! use stonewall::Board;
//! use stonewall::core::GenTypes;
//!
//! let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
//! let captures = board.generate_pseudolegal_moves_of_type(GenTypes::Captures);
//! assert_eq!(captures.len(), 1);
//! assert_eq!(captures[0].to_string(), "e4d5");
//! ```
//!
//! [`GenTypes`]: ../../core/enum.GenTypes.html
//! [`Board`]: ../struct.Board.html

use super::castle_rights::CastlePath;
use super::Board;

use crate::core::bitboard::BitBoard;
use crate::core::direction::Increment;
use crate::core::move_list::MoveList;
use crate::core::piece_move::BitMove;
use crate::core::sq::SQ;
use crate::core::*;
use crate::helper::prelude::*;

/// Determines the if the moves generated are `PseudoLegal` or `Legal` moves.
/// PseudoLegal moves require that a move's legality is determined before applying
/// to a `Board`.
pub trait Legality {
    /// Returns if the only legal moves should be generated.
    fn gen_legal() -> bool;
}

/// Dummy Struct to represent the generation of `Legal` Moves.
pub struct Legal {}

/// Dummy Struct to represent the generation of `PseudoLegal` Moves.
pub struct PseudoLegal {}

impl Legality for Legal {
    fn gen_legal() -> bool {
        true
    }
}

impl Legality for PseudoLegal {
    fn gen_legal() -> bool {
        false
    }
}

// Pieces moved by the same attack-and-mask rule, in generation order
const STANDARD_PIECES: [PieceType; 4] = [PieceType::N, PieceType::B, PieceType::R, PieceType::Q];

const PROMO_FLAGS: [u16; 4] = [
    BitMove::FLAG_PROMO_N,
    BitMove::FLAG_PROMO_B,
    BitMove::FLAG_PROMO_R,
    BitMove::FLAG_PROMO_Q,
];

const PROMO_CAP_FLAGS: [u16; 4] = [
    BitMove::FLAG_PROMO_CAP_N,
    BitMove::FLAG_PROMO_CAP_B,
    BitMove::FLAG_PROMO_CAP_R,
    BitMove::FLAG_PROMO_CAP_Q,
];

/// Public move generator.
///
/// This is a wrapper type around `InnerMoveGen`, allowing for a more friendly API
pub struct MoveGen {}

impl MoveGen {
    /// Returns `MoveList` of all moves for a given board, Legality & GenType.
    #[inline]
    pub fn generate<L: Legality>(chessboard: &Board, gen_type: GenTypes) -> MoveList {
        let mut movegen = InnerMoveGen::new(chessboard);
        movegen.generate_all::<L>(gen_type);
        movegen.list
    }
}

/// Structure to generate moves from. Stores the current state of the board, and other
/// references to help generating all possible moves. This structure shouldn't be used
/// normally.
struct InnerMoveGen<'a> {
    list: MoveList,
    board: &'a Board,
    us: Player,
    // Squares occupied by all
    occ: BitBoard,
    // squares occupied by player to move
    us_occ: BitBoard,
    // Squares occupied by the opposing player
    them_occ: BitBoard,
}

impl<'a> InnerMoveGen<'a> {
    fn new(chessboard: &'a Board) -> Self {
        let us = chessboard.turn();
        InnerMoveGen {
            list: MoveList::default(),
            board: chessboard,
            us,
            occ: chessboard.get_occupied(),
            us_occ: chessboard.get_occupied_player(us),
            them_occ: chessboard.get_occupied_player(!us),
        }
    }

    /// Generates every move of the type, in the documented order.
    fn generate_all<L: Legality>(&mut self, gen_type: GenTypes) {
        // target = bitboard of squares the generator should aim for
        let king_target: BitBoard = match gen_type {
            GenTypes::All => !self.us_occ,
            GenTypes::Captures => self.them_occ,
            GenTypes::Quiets => !self.occ,
        };

        // When in check, only the king may step outside the blocking or capturing squares.
        let mut target = king_target;
        if L::gen_legal() && self.board.in_check() {
            let checkers = self.board.checkers();
            if checkers.more_than_one() {
                target = BitBoard(0);
            } else {
                let ksq = self.board.king_sq(self.us);
                target &= between_bb(ksq, checkers.to_sq()) | checkers;
            }
        }

        self.generate_pawn_moves::<L>(gen_type, target);
        for piece in STANDARD_PIECES.iter() {
            self.moves_per_piece::<L>(*piece, target);
        }
        self.moves_per_piece::<L>(PieceType::K, king_target);

        if gen_type != GenTypes::Captures && !self.board.in_check() {
            self.castling_side::<L>(CastleType::QueenSide);
            self.castling_side::<L>(CastleType::KingSide);
        }
    }

    // Generates castling for a single side
    fn castling_side<L: Legality>(&mut self, side: CastleType) {
        let path = CastlePath::of(self.us, side);
        // Make sure we can castle AND the space between the king / rook is clear AND both
        // pieces stand on their squares
        if !self.board.can_castle(self.us, side)
            || self.board.castle_impeded(side)
            || self.board.king_sq(self.us) != path.king_from
            || self.board.piece_at_sq(path.rook_from) != Piece::make_lossy(self.us, PieceType::R)
        {
            return;
        }

        // The king may not leave, cross or land on an attacked square
        let mut king_path = between_bb(path.king_from, path.king_to)
            | path.king_from.to_bb()
            | path.king_to.to_bb();
        let attacked = king_path
            .any(|s| (self.board.attackers_to(s, self.occ) & self.them_occ).is_not_empty());
        if attacked {
            return;
        }

        let flag = match side {
            CastleType::KingSide => BitMove::FLAG_KING_CASTLE,
            CastleType::QueenSide => BitMove::FLAG_QUEEN_CASTLE,
        };
        self.check_and_add::<L>(BitMove::make(flag, path.king_from, path.king_to));
    }

    // Get the captures and non-captures for a piece
    fn moves_per_piece<L: Legality>(&mut self, piece: PieceType, target: BitBoard) {
        let piece_bb: BitBoard = self.board.piece_bb(self.us, piece);
        for src in piece_bb {
            let moves_bb: BitBoard =
                attacks_from(piece, src, self.occ, self.us) & !self.us_occ & target;
            let captures_bb: BitBoard = moves_bb & self.them_occ;
            let non_captures_bb: BitBoard = moves_bb & !self.them_occ;
            self.move_append_from_bb_flag::<L>(captures_bb, src, BitMove::FLAG_CAPTURE);
            self.move_append_from_bb_flag::<L>(non_captures_bb, src, BitMove::FLAG_QUIET);
        }
    }

    // Generate pawn moves
    fn generate_pawn_moves<L: Legality>(&mut self, gen_type: GenTypes, target: BitBoard) {
        let (rank_7, rank_3): (BitBoard, BitBoard) = match self.us {
            Player::Black => (BitBoard::RANK_2, BitBoard::RANK_6),
            _ => (BitBoard::RANK_7, BitBoard::RANK_3),
        };
        let up = self.us.pawn_push();
        let (up_west, up_east) = match self.us {
            Player::Black => (Increment::SouthWest, Increment::SouthEast),
            _ => (Increment::NorthWest, Increment::NorthEast),
        };

        let all_pawns: BitBoard = self.board.piece_bb(self.us, PieceType::P);
        let empty_squares: BitBoard = !self.occ;
        let enemies: BitBoard = self.them_occ & target;

        // separate these two for promotion moves and non promotions
        let pawns_rank_7: BitBoard = all_pawns & rank_7;
        let pawns_not_rank_7: BitBoard = all_pawns & !rank_7;

        // Single and Double Pawn Pushes
        if gen_type != GenTypes::Captures {
            let push_one: BitBoard = pawns_not_rank_7.shift(up) & empty_squares;
            let push_two: BitBoard = (push_one & rank_3).shift(up) & empty_squares & target;

            for dst in push_one & target {
                self.check_and_add::<L>(BitMove::make_quiet(back(dst, up), dst));
            }
            for dst in push_two {
                self.check_and_add::<L>(BitMove::make_pawn_push(back(back(dst, up), up), dst));
            }
        }

        // Promotions
        if pawns_rank_7.is_not_empty() {
            if gen_type != GenTypes::Captures {
                for dst in pawns_rank_7.shift(up) & empty_squares & target {
                    self.create_promos::<L>(&PROMO_FLAGS, back(dst, up), dst);
                }
            }
            if gen_type != GenTypes::Quiets {
                for dst in pawns_rank_7.shift(up_west) & enemies {
                    self.create_promos::<L>(&PROMO_CAP_FLAGS, back(dst, up_west), dst);
                }
                for dst in pawns_rank_7.shift(up_east) & enemies {
                    self.create_promos::<L>(&PROMO_CAP_FLAGS, back(dst, up_east), dst);
                }
            }
        }

        // Captures
        if gen_type != GenTypes::Quiets {
            for dst in pawns_not_rank_7.shift(up_west) & enemies {
                self.check_and_add::<L>(BitMove::make_capture(back(dst, up_west), dst));
            }
            for dst in pawns_not_rank_7.shift(up_east) & enemies {
                self.check_and_add::<L>(BitMove::make_capture(back(dst, up_east), dst));
            }

            if let Some(ep_sq) = self.board.ep_square() {
                debug_assert_eq!(self.us.relative_rank_of_sq(ep_sq), Rank::R6);
                // Left to the legality filter, as the capture empties two squares at once.
                for src in pawns_not_rank_7 & pawn_attacks_from(ep_sq, !self.us) {
                    self.check_and_add::<L>(BitMove::make_ep_capture(src, ep_sq));
                }
            }
        }
    }

    #[inline]
    fn create_promos<L: Legality>(&mut self, flags: &[u16; 4], src: SQ, dst: SQ) {
        for flag in flags.iter() {
            self.check_and_add::<L>(BitMove::make(*flag, src, dst));
        }
    }

    #[inline]
    fn move_append_from_bb_flag<L: Legality>(&mut self, bits: BitBoard, src: SQ, flag_bits: u16) {
        for dst in bits {
            self.check_and_add::<L>(BitMove::make(flag_bits, src, dst));
        }
    }

    /// Checks if the move is legal, and if so adds to the move list.
    #[inline]
    fn check_and_add<L: Legality>(&mut self, b_move: BitMove) {
        if !L::gen_legal() || self.board.legal_move(b_move) {
            self.list.push(b_move);
        }
    }
}

/// The square one step behind `sq`, against the increment. The step always stays on the
/// board, as `sq` was reached from there.
#[inline(always)]
fn back(sq: SQ, inc: Increment) -> SQ {
    SQ((sq.0 as i8 - inc.delta()) as u8)
}
