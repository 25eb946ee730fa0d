//! Contains a structure that maps from squares of a board to the piece at that square.

use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::*;
use crate::error::FenBuildError;

/// Struct to allow fast lookups for any square. Given a square, allows for determining if there
/// is a piece currently there, and if so, allows for determining it's color and type of piece.
///
/// Piece Locations is a BLIND structure, Providing a function of  |sq| -> |Piece AND/OR Player|
/// The reverse cannot be done Looking up squares from a piece / player.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PieceLocations {
    data: [Piece; SQ_CNT],
}

impl PieceLocations {
    /// Constructs a new `PieceLocations` with a default of no pieces on the board.
    pub const fn blank() -> PieceLocations {
        PieceLocations {
            data: [Piece::None; SQ_CNT],
        }
    }

    /// Places a given piece at a certain square.
    #[inline]
    pub fn place(&mut self, square: SQ, piece: Piece) {
        debug_assert!(square.is_okay());
        self.data[square.0 as usize] = piece;
    }

    /// Removes a Square.
    #[inline]
    pub fn remove(&mut self, square: SQ) {
        debug_assert!(square.is_okay());
        self.data[square.0 as usize] = Piece::None;
    }

    /// Returns the Piece at a `SQ`, which is `Piece::None` if the square is empty.
    #[inline(always)]
    pub fn piece_at(&self, square: SQ) -> Piece {
        self.data[square.0 as usize]
    }

    /// Returns the `Player` (if any) is occupying a `SQ`.
    #[inline]
    pub fn player_at(&self, square: SQ) -> Option<Player> {
        self.piece_at(square).player()
    }

    /// Returns if there is a `SQ` is occupied.
    #[inline]
    pub fn at_square(&self, square: SQ) -> bool {
        self.piece_at(square) != Piece::None
    }

    /// Returns the first square (if any) that a piece is at.
    #[inline]
    pub fn first_square(&self, piece: Piece) -> Option<SQ> {
        self.data.iter().position(|p| *p == piece).map(|i| SQ(i as u8))
    }

    /// Generates a `PieceLocations` from a partial fen. A partial fen is defined as the first part
    /// of a fen, where the piece positions are available, already split into its eight ranks.
    pub fn from_partial_fen(ranks: &[&str]) -> Result<PieceLocations, FenBuildError> {
        let mut loc = PieceLocations::blank();
        for (i, rank) in ranks.iter().enumerate() {
            let min_sq = (7 - i) * 8;
            let max_sq = min_sq + 7;
            let mut idx = min_sq;
            for ch in rank.chars() {
                if idx > max_sq {
                    return Err(FenBuildError::SquareLargerRank {
                        rank: i,
                        square: rank.to_string(),
                    });
                }

                if let Some(dig) = ch.to_digit(10) {
                    if dig == 0 || dig > 8 {
                        return Err(FenBuildError::UnrecognizedPiece { piece: ch });
                    }
                    idx += dig as usize;
                } else {
                    // if no space, then there is a piece here
                    let piece =
                        Piece::from_char(ch).ok_or(FenBuildError::UnrecognizedPiece { piece: ch })?;
                    loc.place(SQ(idx as u8), piece);
                    idx += 1;
                }
            }
            if idx < max_sq + 1 {
                return Err(FenBuildError::SquareSmallerRank {
                    rank: i,
                    square: rank.to_string(),
                });
            } else if idx > max_sq + 1 {
                return Err(FenBuildError::SquareLargerRank {
                    rank: i,
                    square: rank.to_string(),
                });
            }
        }
        Ok(loc)
    }

    /// Iterates over the occupied squares and their pieces, from a1 to h8.
    pub fn iter(&self) -> impl Iterator<Item = (SQ, Piece)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Piece::None)
            .map(|(i, p)| (SQ(i as u8), *p))
    }
}

impl Default for PieceLocations {
    fn default() -> Self {
        PieceLocations::blank()
    }
}
