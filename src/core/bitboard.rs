//! Module containing the `BitBoard` and associated functions / constants.
//!
//! A [`BitBoard`] is a set of squares, where the index of each bit represents a square on
//! the Board. If it maps the white pawns and a pawn stands on B2, bit 9 is set.
//!
//! Each bit's index of a [`BitBoard`] maps to the following squares:
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
//! [`BitBoard`]: struct.BitBoard.html

use super::bit_twiddles::*;
use super::direction::Increment;
use super::masks::*;
use super::sq::SQ;

use std::fmt;
use std::ops::*;

/// A `BitBoard` is simply a 64 bit long integer where each
/// bit maps to a specific square. Used for mapping occupancy, where '1' represents
/// a piece being at that index's square, and a '0' represents a lack of a piece.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct BitBoard(pub u64);

impl_bit_ops!(BitBoard, u64);

impl BitBoard {
    /// BitBoard of File A.
    pub const FILE_A: BitBoard = BitBoard(FILE_A);
    /// BitBoard of File B.
    pub const FILE_B: BitBoard = BitBoard(FILE_B);
    /// BitBoard of File G.
    pub const FILE_G: BitBoard = BitBoard(FILE_G);
    /// BitBoard of File H.
    pub const FILE_H: BitBoard = BitBoard(FILE_H);
    /// BitBoard of Rank 1.
    pub const RANK_1: BitBoard = BitBoard(RANK_1);
    /// BitBoard of Rank 2.
    pub const RANK_2: BitBoard = BitBoard(RANK_2);
    /// BitBoard of Rank 3.
    pub const RANK_3: BitBoard = BitBoard(RANK_3);
    /// BitBoard of Rank 4.
    pub const RANK_4: BitBoard = BitBoard(RANK_4);
    /// BitBoard of Rank 5.
    pub const RANK_5: BitBoard = BitBoard(RANK_5);
    /// BitBoard of Rank 6.
    pub const RANK_6: BitBoard = BitBoard(RANK_6);
    /// BitBoard of Rank 7.
    pub const RANK_7: BitBoard = BitBoard(RANK_7);
    /// BitBoard of Rank 8.
    pub const RANK_8: BitBoard = BitBoard(RANK_8);

    /// BitBoard of all dark squares.
    pub const DARK_SQUARES: BitBoard = BitBoard(DARK_SQUARES);
    /// BitBoard of all light squares.
    pub const LIGHT_SQUARES: BitBoard = BitBoard(LIGHT_SQUARES);
    /// BitBoard of all squares.
    pub const ALL: BitBoard = BitBoard(!0);
    /// BitBoard of no squares.
    pub const EMPTY: BitBoard = BitBoard(0);

    /// Converts a `BitBoard` with exactly one bit to its square.
    #[inline(always)]
    pub fn to_sq(self) -> SQ {
        debug_assert_eq!(self.count_bits(), 1);
        SQ(bit_scan_forward(self.0))
    }

    /// Returns the number of bits in a `BitBoard`
    #[inline(always)]
    pub fn count_bits(self) -> u8 {
        popcount64(self.0)
    }

    /// Returns the `SQ` of the least significant bit.
    ///
    /// # Panic
    ///
    /// Will panic if the `BitBoard` is empty.
    #[inline(always)]
    pub fn bit_scan_forward(self) -> SQ {
        SQ(bit_scan_forward(self.0))
    }

    /// Returns the `SQ` of the most significant bit.
    ///
    /// # Panic
    ///
    /// Will panic if the `BitBoard` is empty.
    #[inline(always)]
    pub fn bit_scan_reverse(self) -> SQ {
        SQ(bit_scan_reverse(self.0))
    }

    /// Returns if there are more than 1 bits inside.
    #[inline(always)]
    pub fn more_than_one(self) -> bool {
        more_than_one(self.0)
    }

    /// Determines if the `BitBoard` is empty (contains no bits).
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Determines if the `BitBoard` is not empty (contains one or more bits).
    #[inline(always)]
    pub fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns if the square is a member of the set.
    #[inline(always)]
    pub fn contains(self, sq: SQ) -> bool {
        (self & sq.to_bb()).is_not_empty()
    }

    /// Returns the squares of this set that are not in `other`.
    #[inline(always)]
    pub fn without(self, other: BitBoard) -> BitBoard {
        self & !other
    }

    /// Returns the least significant bit as a BitBoard.
    #[inline(always)]
    pub fn lsb(self) -> BitBoard {
        BitBoard(lsb(self.0))
    }

    /// Returns the most significant bit as a BitBoard.
    #[inline(always)]
    pub fn msb(self) -> BitBoard {
        BitBoard(msb(self.0))
    }

    /// Returns the index (as a square) of the least significant bit and removes
    /// that bit from the `BitBoard`.
    ///
    /// # Panics
    ///
    /// Panics if the `BitBoard` is empty. See [`BitBoard::pop_some_lsb`] for a
    /// non-panicking version of the method.
    ///
    /// [`BitBoard::pop_some_lsb`]: struct.BitBoard.html#method.pop_some_lsb
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> SQ {
        let sq = self.bit_scan_forward();
        *self &= *self - 1;
        sq
    }

    /// Returns the least significant bit of a `BitBoard`, if it has any. If there is a bit to
    /// return, it removes that bit from itself.
    #[inline(always)]
    pub fn pop_some_lsb(&mut self) -> Option<SQ> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_lsb())
        }
    }

    /// Moves every square of the set one step along `inc`.
    ///
    /// Squares on the increment's edge are dropped before shifting, so nothing wraps from
    /// file H to file A (or back), and nothing falls past rank 1 or rank 8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{BitBoard, Increment, SQ};
    ///
    /// let bb = SQ::H4.to_bb() | SQ::D4.to_bb();
    /// assert_eq!(bb.shift(Increment::East), SQ::E4.to_bb());
    /// assert_eq!(bb.shift(Increment::NorthWest), SQ::G5.to_bb() | SQ::C5.to_bb());
    /// ```
    #[inline]
    pub fn shift(self, inc: Increment) -> BitBoard {
        let masked = self & !inc.edge();
        let delta = inc.delta();
        if delta > 0 {
            masked << delta as usize
        } else {
            masked >> (-delta) as usize
        }
    }
}

impl Iterator for BitBoard {
    type Item = SQ;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_some_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_bits() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitBoard {}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = &string_u64(reverse_bytes(self.0));
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sparse_boards(seed: u64, amount: usize) -> Vec<BitBoard> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..amount)
            .map(|_| BitBoard(rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()))
            .collect()
    }

    #[test]
    fn bb_pop_lsb() {
        for mut bb in sparse_boards(2264221, 100) {
            while bb.is_not_empty() {
                let total_pre = bb.count_bits();
                let lsb_sq = bb.pop_lsb();
                assert!(lsb_sq.is_okay());
                assert!(!bb.contains(lsb_sq));
                assert_eq!(bb.count_bits() + 1, total_pre);
            }
            assert_eq!(bb.pop_some_lsb(), None);
        }
    }

    #[test]
    fn iteration_is_ascending_and_exhaustive() {
        for bb in sparse_boards(99, 50) {
            let squares: Vec<SQ> = bb.collect();
            assert_eq!(squares.len(), bb.count_bits() as usize);
            assert!(squares.windows(2).all(|w| w[0] < w[1]));
            let rebuilt = squares.iter().fold(BitBoard(0), |acc, sq| acc | sq.to_bb());
            assert_eq!(rebuilt, bb);
        }
    }

    #[test]
    fn lsb_and_msb_extraction() {
        let bb = SQ::C3.to_bb() | SQ::F6.to_bb() | SQ::H1.to_bb();
        assert_eq!(bb.lsb(), SQ::H1.to_bb());
        assert_eq!(bb.msb(), SQ::F6.to_bb());
        assert_eq!(bb.bit_scan_forward(), SQ::H1);
        assert_eq!(bb.bit_scan_reverse(), SQ::F6);
        assert!(bb.more_than_one());
        assert!(!bb.lsb().more_than_one());
    }

    #[test]
    fn set_operations() {
        let a = BitBoard::RANK_1 | BitBoard::FILE_A;
        assert_eq!(a.count_bits(), 15);
        assert_eq!((BitBoard::RANK_1 & BitBoard::FILE_A), SQ::A1.to_bb());
        assert_eq!(BitBoard::RANK_1.without(BitBoard::FILE_A).count_bits(), 7);
        assert_eq!((!BitBoard::ALL), BitBoard::EMPTY);
        assert_eq!((BitBoard::LIGHT_SQUARES | BitBoard::DARK_SQUARES), BitBoard::ALL);
    }

    #[test]
    fn shifts_never_wrap() {
        for inc in Increment::ALL.iter() {
            let shifted = BitBoard::ALL.shift(*inc);
            assert_eq!(shifted.count_bits(), 64 - inc.edge().count_bits());
            for sq in SQ::iter() {
                let expected = match sq.offset(*inc) {
                    Some(to) => to.to_bb(),
                    None => BitBoard(0),
                };
                assert_eq!(sq.to_bb().shift(*inc), expected);
            }
        }
        assert_eq!(BitBoard::FILE_H.shift(Increment::East), BitBoard(0));
        assert_eq!(BitBoard::FILE_A.shift(Increment::West), BitBoard(0));
        assert_eq!(BitBoard::RANK_8.shift(Increment::North), BitBoard(0));
        assert_eq!(BitBoard::RANK_2.shift(Increment::South), BitBoard::RANK_1);
    }

    #[test]
    fn display_puts_a8_first() {
        let s = format!("{}", SQ::A8.to_bb() | SQ::H1.to_bb());
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "10000000");
        assert_eq!(lines[7], "00000001");
    }
}
