//! Contains the `BoardState` structure for the `Board`. Helps to preserve the previous state
//! of the board without needing to re-compute information.
//!
//! Each applied move pushes the state it replaces onto the board's history, and undoing a
//! move pops it back. As the [`BoardState`] is managed by the [`Board`], there is little need
//! for interacting directly with this module.
//!
//! [`BoardState`]: struct.BoardState.html
//! [`Board`]: ../struct.Board.html

use super::castle_rights::Castling;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::piece_move::BitMove;
use crate::core::sq::SQ;
use crate::core::*;

/// Holds useful information concerning the current state of the [`Board`].
///
/// Part of it can not be recovered from the pieces alone (castling rights, the en-passant
/// target, the counters), the rest is expensive to recompute (hash, check information).
///
/// [`Board`]: ../struct.Board.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardState {
    /// The castling rights for the current board.
    pub castling: Castling,
    /// Rule 50 for the current board. Tracks the plies since a capture or pawn move.
    pub rule_50: u32,
    /// How many plies have been played since the `Board` was created.
    pub ply: u32,
    /// If the last move was a double pawn push, the square the pawn passed over.
    pub ep_square: Option<SQ>,
    /// The Zobrist key of the board.
    pub zobrist: u64,
    /// The piece captured by the last move, `PieceType::None` if there was none.
    pub captured_piece: PieceType,
    /// A `BitBoard` of the current pieces giving check.
    pub checkers_bb: BitBoard,
    /// Per each player, `BitBoard` of pieces blocking an attack on a that player's king.
    /// This field can contain opponents pieces. E.g. a Black Pawn can block an attack of a white king
    /// if there is a queen (or some other sliding piece) on the same line.
    pub blockers_king: [BitBoard; PLAYER_CNT],
    /// Per each player, `BitBoard` of pieces currently pinning the opponent's king.
    //  e.g:, a Black Queen pinning a piece (of either side) to White's King
    pub pinners_king: [BitBoard; PLAYER_CNT],
    /// Array of BitBoards where for Each Piece, gives a spot the piece can move to where
    /// the opposing player's king would be in check.
    pub check_sqs: [BitBoard; PIECE_TYPE_CNT],
    /// The move that led to this state. `BitMove::null()` at the root, or after a null move.
    pub prev_move: BitMove,
}

impl BoardState {
    /// Constructs a blank `BoardState`.
    pub const fn blank() -> BoardState {
        BoardState {
            castling: Castling::empty_set(),
            rule_50: 0,
            ply: 0,
            ep_square: None,
            zobrist: 0,
            captured_piece: PieceType::None,
            checkers_bb: BitBoard(0),
            blockers_king: [BitBoard(0); PLAYER_CNT],
            pinners_king: [BitBoard(0); PLAYER_CNT],
            check_sqs: [BitBoard(0); PIECE_TYPE_CNT],
            prev_move: BitMove::null(),
        }
    }

    /// Constructs the starting point of the next state.
    ///
    /// Castling, the counters, the en-passant square and the hash are copied, to be modified
    /// by the move. Everything else is reset and must be generated.
    pub fn partial_clone(&self) -> BoardState {
        BoardState {
            castling: self.castling,
            rule_50: self.rule_50,
            ply: self.ply,
            ep_square: self.ep_square,
            zobrist: self.zobrist,
            ..BoardState::blank()
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::blank()
    }
}
