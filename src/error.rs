//! Errors returned at the boundary of the crate.
//!
//! Every parsing entry point (squares, FEN strings, long algebraic moves) reports failure
//! through [`BoardError`] instead of panicking. Corruption of the board's internal data is
//! not represented here: those are programming errors and panic.
//!
//! [`BoardError`]: enum.BoardError.html

use std::num;

use thiserror::Error;

use crate::core::{Piece, Player};

/// The top-level error of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate string that names no square.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    /// The aggregate `Player::Both` was asked to act as a side.
    #[error("Player::Both cannot act as a side to move")]
    InvalidPlayer,
    /// A move that is inconsistent with the current position.
    #[error("invalid move {mv:?}: {reason}")]
    InvalidMove { mv: String, reason: &'static str },
    /// A position or move string that could not be parsed.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] EncodingError),
}

impl BoardError {
    pub(crate) fn invalid_move<S: Into<String>>(mv: S, reason: &'static str) -> BoardError {
        BoardError::InvalidMove {
            mv: mv.into(),
            reason,
        }
    }
}

impl From<FenBuildError> for BoardError {
    fn from(err: FenBuildError) -> BoardError {
        BoardError::MalformedEncoding(EncodingError::Fen(err))
    }
}

/// Failure to decode one of the text encodings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{0}")]
    Fen(#[from] FenBuildError),
    #[error("unreadable move text: {0:?}")]
    Move(String),
}

/// Represents possible Errors encountered while building a `Board` from a fen string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenBuildError {
    #[error("invalid number of fen sections: {sections}, expected 6")]
    NotEnoughSections { sections: usize },
    #[error("invalid number of ranks: {ranks}, expected 8")]
    IncorrectRankAmounts { ranks: usize },
    #[error("invalid turn: {turn}, expected 'w' or 'b'")]
    UnrecognizedTurn { turn: String },
    #[error("unrecognized castling right: {c}")]
    UnrecognizedCastling { c: char },
    #[error("unreadable En-passant square: {ep}")]
    EPSquareUnreadable { ep: String },
    #[error("invalid En-passant square: {ep}")]
    EPSquareInvalid { ep: String },
    #[error("square number too small for rank, rank: {rank} square: {square}")]
    SquareSmallerRank { rank: usize, square: String },
    #[error("square number too large for rank, rank: {rank} square: {square}")]
    SquareLargerRank { rank: usize, square: String },
    #[error("unrecognized piece: {piece}")]
    UnrecognizedPiece { piece: char },
    #[error("unreadable move counter: {0}")]
    UnreadableMoves(num::ParseIntError),
    #[error("move counter out of range: {counter}")]
    MoveCounterOutOfRange { counter: u32 },
    #[error("incorrect number of kings for {player}: {num}")]
    IncorrectKingNum { player: Player, num: u8 },
    #[error("too many checking pieces: {num}")]
    IllegalNumCheckingPieces { num: u8 },
    #[error("these two pieces cannot check the king at the same time: {piece_1}, {piece_2}")]
    IllegalCheckState { piece_1: Piece, piece_2: Piece },
    #[error("the side not to move is in check")]
    OpponentInCheck,
    #[error("too many pawns for player: player: {player}, # pawns {num}")]
    TooManyPawns { player: Player, num: u8 },
    #[error("pawn on first or last row")]
    PawnOnLastRow,
}

impl From<num::ParseIntError> for FenBuildError {
    fn from(err: num::ParseIntError) -> FenBuildError {
        FenBuildError::UnreadableMoves(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_errors_become_malformed_encoding() {
        let err: BoardError = FenBuildError::PawnOnLastRow.into();
        match err {
            BoardError::MalformedEncoding(EncodingError::Fen(FenBuildError::PawnOnLastRow)) => {}
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn messages_name_the_input() {
        let err = BoardError::InvalidSquare("z9".to_string());
        assert!(err.to_string().contains("z9"));
        let err = BoardError::invalid_move("e2e5", "not a legal move");
        assert!(err.to_string().contains("e2e5"));
        assert!(err.to_string().contains("not a legal move"));
    }
}
