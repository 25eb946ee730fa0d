//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a u8. The number of a `SQ` maps to the following
//! squares of a chessboard:
//!
//! ```md,ignore
//! 8 | 56 57 58 59 60 61 62 63
//! 7 | 48 49 50 51 52 53 54 55
//! 6 | 40 41 42 43 44 45 46 47
//! 5 | 32 33 34 35 36 37 38 39
//! 4 | 24 25 26 27 28 29 30 31
//! 3 | 16 17 18 19 20 21 22 23
//! 2 | 8  9  10 11 12 13 14 15
//! 1 | 0  1  2  3  4  5  6  7
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! Adding one to a square moves it a file to the east, adding eight a rank to the north.
//! Stepping off the board is never represented by an out-of-range `SQ`: [`SQ::offset`]
//! returns `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use stonewall::core::sq::*;
//! use stonewall::Increment;
//!
//! let h1 = SQ::H1;
//! let h2 = SQ::H2;
//!
//! assert_eq!(h1.distance(h2), 1);
//! assert_eq!(h1.file(), h2.file());
//! assert_eq!(h1.offset(Increment::North), Some(h2));
//! assert_eq!(h1.offset(Increment::East), None);
//! assert_eq!("h2".parse::<SQ>().unwrap(), h2);
//! ```
//!
//! [`SQ::offset`]: struct.SQ.html#method.offset

use super::bit_twiddles::diff;
use super::bitboard::BitBoard;
use super::direction::Increment;
use super::masks::*;
use super::*;

use crate::error::BoardError;

use std::fmt;
use std::ops::*;
use std::str::FromStr;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Eq, Ord, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl_bit_ops!(SQ, u8);

impl SQ {
    /// Returns if a `SQ` is within the legal bounds of a square,
    /// which is inclusively between 0 - 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Returns distance between this square and another square, counted in king steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::SQ;
    ///
    /// assert_eq!(SQ::A1.distance(SQ::A1), 0);
    /// assert_eq!(SQ::A1.distance(SQ::B2), 1);
    /// assert_eq!(SQ::A1.distance(SQ::B3), 2);
    /// ```
    #[inline]
    pub fn distance(self, sq_other: SQ) -> u8 {
        let x = diff(self.rank_idx_of_sq(), sq_other.rank_idx_of_sq());
        let y = diff(self.file_idx_of_sq(), sq_other.file_idx_of_sq());
        x.max(y)
    }

    /// Converts a `SQ` to it's `BitBoard` equivalent.
    #[inline(always)]
    pub fn to_bb(self) -> BitBoard {
        debug_assert!(self.is_okay());
        BitBoard(1_u64 << self.0)
    }

    /// Returns the `Rank` that a `SQ` lies on.
    #[inline(always)]
    pub fn rank(self) -> Rank {
        ALL_RANKS[self.rank_idx_of_sq() as usize]
    }

    /// Returns the `BitBoard` representation of a `Rank` that a `SQ` lies on.
    #[inline(always)]
    pub fn rank_bb(self) -> BitBoard {
        BitBoard(RANK_BB[self.rank_idx_of_sq() as usize])
    }

    /// Returns the rank index (number) of a `SQ`.
    #[inline(always)]
    pub const fn rank_idx_of_sq(self) -> u8 {
        (self.0 >> 3) & 0b0000_0111
    }

    /// Returns the `File` that a `SQ` lies on.
    #[inline(always)]
    pub fn file(self) -> File {
        ALL_FILES[self.file_idx_of_sq() as usize]
    }

    /// Returns the `BitBoard` representation of a `File` that a `SQ` lies on.
    #[inline(always)]
    pub fn file_bb(self) -> BitBoard {
        BitBoard(FILE_BB[self.file_idx_of_sq() as usize])
    }

    /// Returns the file index (number) of a `SQ`.
    #[inline(always)]
    pub const fn file_idx_of_sq(self) -> u8 {
        self.0 & 0b0000_0111
    }

    /// Creates a `SQ` from the designated File and Rank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{SQ,Rank,File};
    ///
    /// assert_eq!(SQ::F2, SQ::make(File::F, Rank::R2));
    /// ```
    #[inline(always)]
    pub fn make(file: File, rank: Rank) -> SQ {
        SQ(((rank as u8) << 3) + (file as u8))
    }

    /// Creates a `SQ` from signed file and rank indexes, if both lie on the board.
    #[inline]
    pub fn from_coords(file: i8, rank: i8) -> Option<SQ> {
        Some(SQ::make(File::from_index(file)?, Rank::from_index(rank)?))
    }

    /// Steps one `Increment` away from this square.
    ///
    /// Returns `None` when the step would leave the board, including when the raw index
    /// would stay in range but wrap onto another rank.
    #[inline]
    pub fn offset(self, inc: Increment) -> Option<SQ> {
        if (self.to_bb() & inc.edge()).is_not_empty() {
            None
        } else {
            Some(SQ((self.0 as i8 + inc.delta()) as u8))
        }
    }

    /// Flips the square's rank, so `SQ::A1` -> `SQ::A8`.
    #[inline(always)]
    pub fn flip(self) -> SQ {
        SQ(self.0 ^ 0b111000)
    }

    /// Returns if the `SQ` is a dark square.
    #[inline(always)]
    pub fn on_dark_square(self) -> bool {
        (self.to_bb() & BitBoard::DARK_SQUARES).is_not_empty()
    }

    /// Returns the castle rights lost when a piece leaves or arrives on this square.
    #[inline]
    pub fn castle_rights_mask(self) -> u8 {
        match self.0 {
            ROOK_WHITE_KSIDE_START => C_WHITE_K_MASK,
            ROOK_WHITE_QSIDE_START => C_WHITE_Q_MASK,
            ROOK_BLACK_KSIDE_START => C_BLACK_K_MASK,
            ROOK_BLACK_QSIDE_START => C_BLACK_Q_MASK,
            WHITE_KING_START => C_WHITE_K_MASK | C_WHITE_Q_MASK,
            BLACK_KING_START => C_BLACK_K_MASK | C_BLACK_Q_MASK,
            _ => 0,
        }
    }

    /// Iterates over every square, from `SQ::A1` to `SQ::H8` inclusive.
    #[inline]
    pub fn iter() -> impl Iterator<Item = SQ> {
        (0..SQ_CNT as u8).map(SQ)
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            f.pad(SQ_DISPLAY[self.0 as usize])
        } else {
            f.pad("-")
        }
    }
}

impl FromStr for SQ {
    type Err = BoardError;

    /// Parses a coordinate such as `"e4"` or `"E4"`.
    fn from_str(s: &str) -> Result<SQ, BoardError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => match (File::from_char(f), Rank::from_char(r)) {
                (Some(file), Some(rank)) => Ok(SQ::make(file, rank)),
                _ => Err(BoardError::InvalidSquare(s.to_string())),
            },
            _ => Err(BoardError::InvalidSquare(s.to_string())),
        }
    }
}

impl Shl<SQ> for BitBoard {
    type Output = BitBoard;

    #[inline(always)]
    fn shl(self, rhs: SQ) -> BitBoard {
        BitBoard((self.0).wrapping_shl(u32::from(rhs.0)))
    }
}

impl SQ {
    pub const A1: SQ = SQ(0);
    pub const B1: SQ = SQ(1);
    pub const C1: SQ = SQ(2);
    pub const D1: SQ = SQ(3);
    pub const E1: SQ = SQ(4);
    pub const F1: SQ = SQ(5);
    pub const G1: SQ = SQ(6);
    pub const H1: SQ = SQ(7);
    pub const A2: SQ = SQ(8);
    pub const B2: SQ = SQ(9);
    pub const C2: SQ = SQ(10);
    pub const D2: SQ = SQ(11);
    pub const E2: SQ = SQ(12);
    pub const F2: SQ = SQ(13);
    pub const G2: SQ = SQ(14);
    pub const H2: SQ = SQ(15);
    pub const A3: SQ = SQ(16);
    pub const B3: SQ = SQ(17);
    pub const C3: SQ = SQ(18);
    pub const D3: SQ = SQ(19);
    pub const E3: SQ = SQ(20);
    pub const F3: SQ = SQ(21);
    pub const G3: SQ = SQ(22);
    pub const H3: SQ = SQ(23);
    pub const A4: SQ = SQ(24);
    pub const B4: SQ = SQ(25);
    pub const C4: SQ = SQ(26);
    pub const D4: SQ = SQ(27);
    pub const E4: SQ = SQ(28);
    pub const F4: SQ = SQ(29);
    pub const G4: SQ = SQ(30);
    pub const H4: SQ = SQ(31);
    pub const A5: SQ = SQ(32);
    pub const B5: SQ = SQ(33);
    pub const C5: SQ = SQ(34);
    pub const D5: SQ = SQ(35);
    pub const E5: SQ = SQ(36);
    pub const F5: SQ = SQ(37);
    pub const G5: SQ = SQ(38);
    pub const H5: SQ = SQ(39);
    pub const A6: SQ = SQ(40);
    pub const B6: SQ = SQ(41);
    pub const C6: SQ = SQ(42);
    pub const D6: SQ = SQ(43);
    pub const E6: SQ = SQ(44);
    pub const F6: SQ = SQ(45);
    pub const G6: SQ = SQ(46);
    pub const H6: SQ = SQ(47);
    pub const A7: SQ = SQ(48);
    pub const B7: SQ = SQ(49);
    pub const C7: SQ = SQ(50);
    pub const D7: SQ = SQ(51);
    pub const E7: SQ = SQ(52);
    pub const F7: SQ = SQ(53);
    pub const G7: SQ = SQ(54);
    pub const H7: SQ = SQ(55);
    pub const A8: SQ = SQ(56);
    pub const B8: SQ = SQ(57);
    pub const C8: SQ = SQ(58);
    pub const D8: SQ = SQ(59);
    pub const E8: SQ = SQ(60);
    pub const F8: SQ = SQ(61);
    pub const G8: SQ = SQ(62);
    pub const H8: SQ = SQ(63);
}
