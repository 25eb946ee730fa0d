//! Lines of the board and the single steps along them.
//!
//! A [`Direction`] names one of the four kinds of line a slider travels along. Each
//! direction is travelled by two [`Increment`]s, one each way. An `Increment` is the signed
//! change in square index for one step, together with the edge mask of squares from which
//! that step would leave the board.
//!
//! ```md,ignore
//!   +7  +8  +9
//!   -1  sq  +1
//!   -9  -8  -7
//! ```
//!
//! [`Direction`]: enum.Direction.html
//! [`Increment`]: enum.Increment.html

use super::bitboard::BitBoard;
use super::masks::*;
use super::sq::SQ;

/// A line through the board.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    /// Horizontal, along a rank.
    AlongRank,
    /// Vertical, along a file.
    AlongFile,
    /// The diagonal running from a1 to h8.
    AlongA1H8,
    /// The diagonal running from h1 to a8.
    AlongH1A8,
    /// Two squares sharing no line.
    None,
}

/// One step along a `Direction`, as a change in square index.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(i8)]
pub enum Increment {
    East = 1,
    West = -1,
    North = 8,
    South = -8,
    NorthEast = 9,
    SouthWest = -9,
    NorthWest = 7,
    SouthEast = -7,
}

static RANK_INCREMENTS: [Increment; 2] = [Increment::East, Increment::West];
static FILE_INCREMENTS: [Increment; 2] = [Increment::North, Increment::South];
static A1H8_INCREMENTS: [Increment; 2] = [Increment::NorthEast, Increment::SouthWest];
static H1A8_INCREMENTS: [Increment; 2] = [Increment::NorthWest, Increment::SouthEast];

/// Increments a rook walks.
pub static ROOK_INCREMENTS: [Increment; 4] = [
    Increment::North,
    Increment::South,
    Increment::East,
    Increment::West,
];

/// Increments a bishop walks.
pub static BISHOP_INCREMENTS: [Increment; 4] = [
    Increment::NorthEast,
    Increment::SouthWest,
    Increment::NorthWest,
    Increment::SouthEast,
];

impl Direction {
    /// All four real directions.
    pub const ALL: [Direction; 4] = [
        Direction::AlongRank,
        Direction::AlongFile,
        Direction::AlongA1H8,
        Direction::AlongH1A8,
    ];

    /// The two increments travelling this direction, positive first. `Direction::None`
    /// has none.
    #[inline]
    pub fn increments(self) -> &'static [Increment] {
        match self {
            Direction::AlongRank => &RANK_INCREMENTS,
            Direction::AlongFile => &FILE_INCREMENTS,
            Direction::AlongA1H8 => &A1H8_INCREMENTS,
            Direction::AlongH1A8 => &H1A8_INCREMENTS,
            Direction::None => &[],
        }
    }

    /// Returns the line shared by two squares.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Direction, SQ};
    ///
    /// assert_eq!(Direction::between(SQ::A1, SQ::H8), Direction::AlongA1H8);
    /// assert_eq!(Direction::between(SQ::H1, SQ::A8), Direction::AlongH1A8);
    /// assert_eq!(Direction::between(SQ::C3, SQ::C7), Direction::AlongFile);
    /// assert_eq!(Direction::between(SQ::C3, SQ::D5), Direction::None);
    /// assert_eq!(Direction::between(SQ::C3, SQ::C3), Direction::None);
    /// ```
    pub fn between(a: SQ, b: SQ) -> Direction {
        if a == b {
            return Direction::None;
        }
        let df = i16::from(b.file_idx_of_sq()) - i16::from(a.file_idx_of_sq());
        let dr = i16::from(b.rank_idx_of_sq()) - i16::from(a.rank_idx_of_sq());
        if dr == 0 {
            Direction::AlongRank
        } else if df == 0 {
            Direction::AlongFile
        } else if df == dr {
            Direction::AlongA1H8
        } else if df == -dr {
            Direction::AlongH1A8
        } else {
            Direction::None
        }
    }

    /// Returns if the direction is a diagonal.
    #[inline(always)]
    pub fn is_diagonal(self) -> bool {
        self == Direction::AlongA1H8 || self == Direction::AlongH1A8
    }

    /// Returns if the direction is a rank or file.
    #[inline(always)]
    pub fn is_orthogonal(self) -> bool {
        self == Direction::AlongRank || self == Direction::AlongFile
    }
}

impl Increment {
    /// All eight increments.
    pub const ALL: [Increment; 8] = [
        Increment::North,
        Increment::NorthEast,
        Increment::East,
        Increment::SouthEast,
        Increment::South,
        Increment::SouthWest,
        Increment::West,
        Increment::NorthWest,
    ];

    /// The signed change in square index for one step.
    #[inline(always)]
    pub const fn delta(self) -> i8 {
        self as i8
    }

    /// The squares from which one step of this increment leaves the board.
    ///
    /// Masking a source set with the complement of this before shifting is what keeps
    /// east/west steps from wrapping onto the neighbouring rank.
    #[inline]
    pub fn edge(self) -> BitBoard {
        BitBoard(match self {
            Increment::East => FILE_H,
            Increment::West => FILE_A,
            Increment::North => RANK_8,
            Increment::South => RANK_1,
            Increment::NorthEast => FILE_H | RANK_8,
            Increment::SouthWest => FILE_A | RANK_1,
            Increment::NorthWest => FILE_A | RANK_8,
            Increment::SouthEast => FILE_H | RANK_1,
        })
    }

    /// The line this increment travels along.
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            Increment::East | Increment::West => Direction::AlongRank,
            Increment::North | Increment::South => Direction::AlongFile,
            Increment::NorthEast | Increment::SouthWest => Direction::AlongA1H8,
            Increment::NorthWest | Increment::SouthEast => Direction::AlongH1A8,
        }
    }

    /// The increment travelling the other way along the same line.
    #[inline]
    pub fn opposite(self) -> Increment {
        match self {
            Increment::East => Increment::West,
            Increment::West => Increment::East,
            Increment::North => Increment::South,
            Increment::South => Increment::North,
            Increment::NorthEast => Increment::SouthWest,
            Increment::SouthWest => Increment::NorthEast,
            Increment::NorthWest => Increment::SouthEast,
            Increment::SouthEast => Increment::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_belong_to_their_direction() {
        for dir in Direction::ALL.iter() {
            let incs = dir.increments();
            assert_eq!(incs.len(), 2);
            assert_eq!(incs[0].opposite(), incs[1]);
            assert!(incs[0].delta() > 0);
            for inc in incs {
                assert_eq!(inc.direction(), *dir);
                assert_eq!(inc.delta(), -inc.opposite().delta());
            }
        }
        assert!(Direction::None.increments().is_empty());
    }

    #[test]
    fn between_is_symmetric() {
        for a in SQ::iter() {
            for b in SQ::iter() {
                assert_eq!(Direction::between(a, b), Direction::between(b, a));
            }
        }
    }

    #[test]
    fn between_agrees_with_walking() {
        for a in SQ::iter() {
            for inc in Increment::ALL.iter() {
                let mut sq = a;
                while let Some(next) = sq.offset(*inc) {
                    assert_eq!(Direction::between(a, next), inc.direction());
                    sq = next;
                }
            }
        }
    }

    #[test]
    fn edges() {
        assert_eq!(Increment::East.edge().count_bits(), 8);
        assert_eq!(Increment::NorthEast.edge().count_bits(), 15);
        assert_eq!(Increment::SouthWest.edge().count_bits(), 15);
        assert!(Increment::NorthWest.edge().contains(SQ::A5));
        assert!(Increment::NorthWest.edge().contains(SQ::D8));
        assert!(!Increment::NorthWest.edge().contains(SQ::H5));
    }
}
