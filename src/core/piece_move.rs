//! Module for the implementation and definition of a move to be played.
//!
//! We define a move as the struct `BitMove`. A move needs 16 bits to be stored, and
//! they are used as such:
//!
//! ```md,ignore
//! bits  0 - 5:  origin square (from 0 to 63)
//! bits  6 - 11: destination square (from 0 to 63)
//! bits 12 - 15: flag
//! ```
//!
//! The flags for a move are set as such:
//!
//! ```md,ignore
//! x??? --> Promotion bit
//! ?x?? --> Capture bit
//! ??xx --> flag Bit
//! ```
//!
//! More specifically, the flags correspond to the following bit patterns:
//!
//! ```md,ignore
//! 0000  ===> Quiet move
//! 0001  ===> Double Pawn Push
//! 0010  ===> King Castle
//! 0011  ===> Queen Castle
//! 0100  ===> Capture
//! 0101  ===> EP Capture
//! 0110  ===> (unused)
//! 0111  ===> (unused)
//! 1000  ===> Knight Promotion
//! 1001  ===> Bishop Promotion
//! 1010  ===> Rook   Promotion
//! 1011  ===> Queen  Promotion
//! 1100  ===> Knight Capture  Promotion
//! 1101  ===> Bishop Capture  Promotion
//! 1110  ===> Rook   Capture  Promotion
//! 1111  ===> Queen  Capture  Promotion
//! ```
//!
//! A castle is encoded as a move of the king, from its own square to the square it lands on,
//! so it prints in long algebraic notation as `e1g1`, `e8c8` and so on.
//!
//! A `BitMove` is only meaningful for the position that generated it. Apply moves to a board
//! only when they come from that board's move generation, or were checked against it.

use std::fmt;

use super::sq::SQ;
use super::*;

use crate::error::{BoardError, EncodingError};

const SRC_MASK: u16 = 0b0000_000000_111111;
const DST_MASK: u16 = 0b0000_111111_000000;
const PR_MASK: u16 = 0b1000_000000_000000;
const CP_MASK: u16 = 0b0100_000000_000000;

/// Represents a singular move.
///
/// A `BitMove` consists of 16 bits, all of which to include a source square, destination square,
/// and special move-flags to differentiate types of moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitMove {
    data: u16,
}

/// Selected Meta-Data to accompany each move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveFlag {
    /// The move is a promotion.
    Promotion {
        /// Marks the move as a capturing promotion.
        capture: bool,
        /// The piece that the move promotes to.
        prom: PieceType,
    },
    /// The move is a castle.
    Castle {
        /// Determines if the castle is a castle on the king side.
        king_side: bool,
    },
    /// The move is a double pawn push.
    DoublePawnPush,
    /// The move is a capturing move.
    Capture {
        /// Marks this move as an en-passant capture.
        ep_capture: bool,
    },
    /// The move is a quiet move. This means its not a capture, promotion, castle, or double-pawn push.
    QuietMove,
}

/// A Subset of `MoveFlag`, used to determine the overall classification of a move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveType {
    /// Not a castle, promotion, or en-passant.
    Normal,
    /// The move is castling move.
    Castle,
    /// The move is an en-passant capture.
    EnPassant,
    /// The move is a promotion.
    Promotion,
}

/// Pre-encoding of a move's information before it is compressed into a `BitMove`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PreMoveInfo {
    /// The square the moving piece originates from.
    pub src: SQ,
    /// The square the piece is moving to.
    pub dst: SQ,
    /// Marks the type of move. E.g, Promotion, Castle, Capture.
    pub flags: MoveFlag,
}

impl fmt::Display for BitMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.stringify())
    }
}

impl fmt::Debug for BitMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitMove({} flag={:04b})", self.stringify(), self.flag())
    }
}

// https://www.chessprogramming.org/Encoding_Moves
impl BitMove {
    pub const FLAG_QUIET: u16 = 0b0000;
    pub const FLAG_DOUBLE_PAWN: u16 = 0b0001;
    pub const FLAG_KING_CASTLE: u16 = 0b0010;
    pub const FLAG_QUEEN_CASTLE: u16 = 0b0011;
    pub const FLAG_CAPTURE: u16 = 0b0100;
    pub const FLAG_EP: u16 = 0b0101;
    pub const FLAG_PROMO_N: u16 = 0b1000;
    pub const FLAG_PROMO_B: u16 = 0b1001;
    pub const FLAG_PROMO_R: u16 = 0b1010;
    pub const FLAG_PROMO_Q: u16 = 0b1011;
    pub const FLAG_PROMO_CAP_N: u16 = 0b1100;
    pub const FLAG_PROMO_CAP_B: u16 = 0b1101;
    pub const FLAG_PROMO_CAP_R: u16 = 0b1110;
    pub const FLAG_PROMO_CAP_Q: u16 = 0b1111;

    /// Creates a new BitMove from raw bits.
    #[inline]
    pub const fn new(input: u16) -> BitMove {
        BitMove { data: input }
    }

    /// Makes a quiet `BitMove` from a source and destination square.
    #[inline(always)]
    pub const fn make_quiet(src: SQ, dst: SQ) -> BitMove {
        BitMove::make(BitMove::FLAG_QUIET, src, dst)
    }

    /// Makes a pawn-push `BitMove` from a source and destination square.
    #[inline(always)]
    pub const fn make_pawn_push(src: SQ, dst: SQ) -> BitMove {
        BitMove::make(BitMove::FLAG_DOUBLE_PAWN, src, dst)
    }

    /// Makes a non-enpassant capturing `BitMove` from a source and destination square.
    #[inline(always)]
    pub const fn make_capture(src: SQ, dst: SQ) -> BitMove {
        BitMove::make(BitMove::FLAG_CAPTURE, src, dst)
    }

    /// Makes an enpassant `BitMove` from a source and destination square.
    #[inline(always)]
    pub const fn make_ep_capture(src: SQ, dst: SQ) -> BitMove {
        BitMove::make(BitMove::FLAG_EP, src, dst)
    }

    /// Creates a `BitMove` from a source and destination square, as well as the current
    /// flag.
    #[inline(always)]
    pub const fn make(flag_bits: u16, src: SQ, dst: SQ) -> BitMove {
        BitMove {
            data: (flag_bits << 12) | src.0 as u16 | ((dst.0 as u16) << 6),
        }
    }

    /// Returns the promotion flag bits of a `PieceType`.
    #[inline(always)]
    fn promotion_piece_flag(piece: PieceType) -> u16 {
        match piece {
            PieceType::N => 0,
            PieceType::B => 1,
            PieceType::R => 2,
            _ => 3,
        }
    }

    /// Creates a BitMove from a `PreMoveInfo`.
    #[inline]
    pub fn init(info: PreMoveInfo) -> BitMove {
        let flag_bits: u16 = match info.flags {
            MoveFlag::Promotion { capture, prom } => {
                let cp_bit = if capture { 4 } else { 0 };
                BitMove::promotion_piece_flag(prom) + cp_bit + 8
            }
            MoveFlag::Capture { ep_capture: true } => BitMove::FLAG_EP,
            MoveFlag::Capture { ep_capture: false } => BitMove::FLAG_CAPTURE,
            MoveFlag::Castle { king_side: true } => BitMove::FLAG_KING_CASTLE,
            MoveFlag::Castle { king_side: false } => BitMove::FLAG_QUEEN_CASTLE,
            MoveFlag::DoublePawnPush => BitMove::FLAG_DOUBLE_PAWN,
            MoveFlag::QuietMove => BitMove::FLAG_QUIET,
        };
        BitMove::make(flag_bits, info.src, info.dst)
    }

    /// Creates a Null Move.
    ///
    /// A Null move is never a valid move to play. It is only useful to search, as a
    /// placeholder or as the "pass" of `Board::apply_null_move`.
    #[inline]
    pub const fn null() -> Self {
        BitMove { data: 0 }
    }

    /// Returns if a `BitMove` is a Null Move.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.data == 0
    }

    /// Returns if a `BitMove` captures an opponent's piece.
    #[inline(always)]
    pub const fn is_capture(self) -> bool {
        (self.data & CP_MASK) != 0
    }

    /// Returns if a `BitMove` is a Quiet Move, meaning it is not any of the following: a
    /// capture, promotion, castle, or double pawn push.
    #[inline(always)]
    pub const fn is_quiet_move(self) -> bool {
        self.flag() == 0
    }

    /// Returns if a `BitMove` is a promotion.
    #[inline(always)]
    pub const fn is_promo(self) -> bool {
        (self.data & PR_MASK) != 0
    }

    /// Returns the destination of a `BitMove`.
    #[inline(always)]
    pub const fn get_dest(self) -> SQ {
        SQ(((self.data & DST_MASK) >> 6) as u8)
    }

    /// Returns the source square of a `BitMove`.
    #[inline(always)]
    pub const fn get_src(self) -> SQ {
        SQ((self.data & SRC_MASK) as u8)
    }

    /// Returns if a `BitMove` is a castle.
    #[inline(always)]
    pub const fn is_castle(self) -> bool {
        (self.data >> 13) == 1
    }

    /// Returns if a `BitMove` is a Castle && it is a KingSide Castle.
    #[inline(always)]
    pub const fn is_king_castle(self) -> bool {
        self.flag() == BitMove::FLAG_KING_CASTLE
    }

    /// Returns if a `BitMove` is a Castle && it is a QueenSide Castle.
    #[inline(always)]
    pub const fn is_queen_castle(self) -> bool {
        self.flag() == BitMove::FLAG_QUEEN_CASTLE
    }

    /// Returns the side of a castle, if the move is one.
    #[inline]
    pub fn castle_type(self) -> Option<CastleType> {
        match self.flag() {
            BitMove::FLAG_KING_CASTLE => Some(CastleType::KingSide),
            BitMove::FLAG_QUEEN_CASTLE => Some(CastleType::QueenSide),
            _ => None,
        }
    }

    /// Returns if a `BitMove` is an enpassant capture.
    #[inline(always)]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == BitMove::FLAG_EP
    }

    /// Returns if a `BitMove` is a double pawn push.
    #[inline(always)]
    pub const fn is_double_push(self) -> bool {
        self.flag() == BitMove::FLAG_DOUBLE_PAWN
    }

    /// Returns the Promotion Piece of a `BitMove`, or `PieceType::None` if the move
    /// does not promote.
    #[inline(always)]
    pub fn promo_piece(self) -> PieceType {
        if !self.is_promo() {
            return PieceType::None;
        }
        match self.flag() & 0b0011 {
            0 => PieceType::N,
            1 => PieceType::B,
            2 => PieceType::R,
            _ => PieceType::Q,
        }
    }

    /// Returns the `MoveType` of a `BitMove`.
    #[inline(always)]
    pub fn move_type(self) -> MoveType {
        if self.is_castle() {
            MoveType::Castle
        } else if self.is_promo() {
            MoveType::Promotion
        } else if self.is_en_passant() {
            MoveType::EnPassant
        } else {
            MoveType::Normal
        }
    }

    /// Returns a String representation of a `BitMove` in long algebraic notation.
    ///
    /// Format goes "Source Square, Destination Square, (Promo Piece)". Moving a Queen from A1 to B8
    /// will stringify to "a1b8". If there is a pawn promotion involved, the piece promoted to will be
    /// appended to the end of the string, alike "a7a8q" in the case of a queen promotion.
    pub fn stringify(self) -> String {
        let mut s = format!("{}{}", self.get_src(), self.get_dest());
        if self.is_promo() {
            s.push(self.promo_piece().char_lower());
        }
        s
    }

    /// Splits long algebraic text into its origin, destination and promotion piece.
    ///
    /// Text of the wrong shape, or naming no square, is a `MalformedEncoding`. A fifth
    /// character that is not one of `n`, `b`, `r`, `q` is an `InvalidMove`. Whether the move
    /// is playable is for a board to decide.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::{BitMove, PieceType, SQ};
    ///
    /// assert_eq!(BitMove::parse_uci("e2e4").unwrap(), (SQ::E2, SQ::E4, None));
    /// assert_eq!(BitMove::parse_uci("a7a8Q").unwrap(), (SQ::A7, SQ::A8, Some(PieceType::Q)));
    /// assert!(BitMove::parse_uci("e2").is_err());
    /// assert!(BitMove::parse_uci("a7a8k").is_err());
    /// ```
    pub fn parse_uci(s: &str) -> Result<(SQ, SQ, Option<PieceType>), BoardError> {
        let text = s.trim();
        let malformed = || BoardError::MalformedEncoding(EncodingError::Move(s.to_string()));
        if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
            return Err(malformed());
        }
        let src: SQ = text[0..2].parse().map_err(|_| malformed())?;
        let dst: SQ = text[2..4].parse().map_err(|_| malformed())?;
        let prom = match text[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_char(c) {
                p @ PieceType::N | p @ PieceType::B | p @ PieceType::R | p @ PieceType::Q => {
                    Some(p)
                }
                _ => {
                    return Err(BoardError::invalid_move(
                        text,
                        "promotion piece must be one of n, b, r, q",
                    ))
                }
            },
        };
        Ok((src, dst, prom))
    }

    /// Returns the raw number representation of the move.
    #[inline(always)]
    pub const fn get_raw(self) -> u16 {
        self.data
    }

    /// Returns if the move has one of the two unused flags, and therefore is invalid.
    #[inline(always)]
    pub const fn incorrect_flag(self) -> bool {
        ((self.flag()) & 0b1110) == 0b0110
    }

    /// Returns the 4 bit flag of the `BitMove`.
    #[inline(always)]
    pub const fn flag(self) -> u16 {
        self.data >> 12
    }

    /// Returns if the to and from squares differ, as they do for every real move.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.get_dest().0 != self.get_src().0
    }
}
