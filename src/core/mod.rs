//! Contains the components a chessboard is built from. This includes `SQ`, `BitBoard`,
//! `Direction`, `Increment`, `Player`, `PieceType`, `Piece`, `Rank`, `File` and `BitMove`.

#[macro_use]
mod macros;

pub mod bit_twiddles;
pub mod bitboard;
pub mod direction;
pub mod masks;
pub mod move_list;
pub mod piece_move;
pub mod score;
pub mod sq;

use self::bitboard::BitBoard;
use self::direction::Increment;
use self::masks::*;
use self::sq::SQ;

use crate::error::BoardError;

use std::fmt;
use std::ops::Not;

/// Array of all real piece types, from pawn to king.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

/// Array of both acting players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; PLAYER_CNT] = [Player::White, Player::Black];

/// Array of all `Files`s, indexed by their enum value.
pub static ALL_FILES: [File; FILE_CNT] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

/// Array of all `Rank`s, indexed by their enum value.
pub static ALL_RANKS: [Rank; RANK_CNT] = [
    Rank::R1,
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
];

/// The sides of a chessboard.
///
/// `White` and `Black` are the acting sides, and index every per-player array in the crate.
/// `Both` is the aggregate of the two: it is accepted by occupancy queries, but never moves.
///
/// # Examples
///
/// ```rust
/// use stonewall::core::Player;
/// use stonewall::BoardError;
///
/// assert_eq!(Player::White.acting(), Ok(Player::White));
/// assert_eq!(Player::Both.acting(), Err(BoardError::InvalidPlayer));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
    Both = 2,
}

impl Player {
    /// Returns the player if it is able to act as a side to move.
    #[inline]
    pub fn acting(self) -> Result<Player, BoardError> {
        match self {
            Player::Both => Err(BoardError::InvalidPlayer),
            p => Ok(p),
        }
    }

    /// Returns the other player. The aggregate stays the aggregate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::core::Player;
    ///
    /// let b = Player::Black;
    /// assert_eq!(b.other_player(), Player::White);
    /// ```
    #[inline(always)]
    pub fn other_player(self) -> Player {
        !self
    }

    /// Returns the index of an acting player into per-player arrays.
    #[inline(always)]
    pub fn idx(self) -> usize {
        debug_assert!(self != Player::Both);
        self as usize
    }

    /// Returns the square as seen from this player's side of the board.
    #[inline(always)]
    pub fn relative_square(self, sq: SQ) -> SQ {
        match self {
            Player::Black => sq.flip(),
            _ => sq,
        }
    }

    /// Gets the increment a pawn of this player advances by.
    #[inline(always)]
    pub fn pawn_push(self) -> Increment {
        match self {
            Player::Black => Increment::South,
            _ => Increment::North,
        }
    }

    /// Returns the relative rank of a rank in relation to a player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::core::{Player,Rank};
    ///
    /// assert_eq!(Player::White.relative_rank(Rank::R1), Rank::R1);
    /// assert_eq!(Player::Black.relative_rank(Rank::R8), Rank::R1);
    /// assert_eq!(Player::Black.relative_rank(Rank::R1), Rank::R8);
    /// ```
    #[inline]
    pub fn relative_rank(self, rank: Rank) -> Rank {
        match self {
            Player::Black => ALL_RANKS[7 - rank as usize],
            _ => rank,
        }
    }

    /// Returns the relative rank of a square in relation to a player.
    #[inline(always)]
    pub fn relative_rank_of_sq(self, sq: SQ) -> Rank {
        self.relative_rank(sq.rank())
    }
}

impl Not for Player {
    type Output = Player;

    #[inline(always)]
    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
            Player::Both => Player::Both,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Player::White => "White",
            Player::Black => "Black",
            Player::Both => "Both",
        })
    }
}

/// Types of move generating options.
///
/// `GenTypes::All` -> All available moves.
///
/// `GenTypes::Captures` -> All captures, including en-passant and capturing promotions.
///
/// `GenTypes::Quiets` -> All non captures, including castling and quiet promotions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenTypes {
    All,
    Captures,
    Quiets,
}

/// All possible Types of Pieces on a chessboard.
///
/// `PieceType::None` is the empty square. `PieceType::All` only sizes per-piece arrays and
/// never appears on a board. For a representation of pieces considering color as well,
/// see [`Piece`].
///
/// [`Piece`]: ./enum.Piece.html
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceType {
    None = 0,
    P = 1,
    N = 2,
    B = 3,
    R = 4,
    Q = 5,
    K = 6,
    All = 7,
}

impl PieceType {
    /// Returns the material value of a piece, in centipawns.
    ///
    /// The king's value is large enough to dominate any sum of the other pieces, yet fits an
    /// `i16`. Sums of values should be carried in a [`Value`].
    ///
    /// [`Value`]: score/type.Value.html
    #[inline]
    pub const fn value(self) -> i16 {
        match self {
            PieceType::P => 100,
            PieceType::N | PieceType::B => 325,
            PieceType::R => 500,
            PieceType::Q => 975,
            PieceType::K => 32000,
            _ => 0,
        }
    }

    /// Returns if the piece is `PieceType::None`
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == PieceType::None
    }

    /// Returns if the piece is not `PieceType::None`
    #[inline(always)]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Checks if the piece is actually real, as in the Piece is not `None` or `All`.
    #[inline(always)]
    pub fn is_real(self) -> bool {
        self != PieceType::None && self != PieceType::All
    }

    /// Reads a piece type from a character, ignoring case.
    ///
    /// The conversion is total: anything that is not a piece letter reads as
    /// `PieceType::None`, which callers check for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::core::PieceType;
    ///
    /// assert_eq!(PieceType::from_char('n'), PieceType::N);
    /// assert_eq!(PieceType::from_char('N'), PieceType::N);
    /// assert_eq!(PieceType::from_char('x'), PieceType::None);
    /// ```
    pub fn from_char(c: char) -> PieceType {
        match c.to_ascii_lowercase() {
            'p' => PieceType::P,
            'n' => PieceType::N,
            'b' => PieceType::B,
            'r' => PieceType::R,
            'q' => PieceType::Q,
            'k' => PieceType::K,
            _ => PieceType::None,
        }
    }

    /// Returns the character of a piece type, upper or lower case. The empty square is `'.'`.
    #[inline]
    pub fn char(self, upper: bool) -> char {
        let c = PIECE_DISPLAYS[upper as usize ^ 1][self as usize];
        if self == PieceType::All {
            '*'
        } else {
            c
        }
    }

    /// Return the lowercase character of a `PieceType`.
    #[inline(always)]
    pub fn char_lower(self) -> char {
        self.char(false)
    }

    /// Return the uppercase character of a `PieceType`.
    #[inline(always)]
    pub fn char_upper(self) -> char {
        self.char(true)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::P => "Pawn",
            PieceType::N => "Knight",
            PieceType::B => "Bishop",
            PieceType::R => "Rook",
            PieceType::Q => "Queen",
            PieceType::K => "King",
            PieceType::All => "All",
            PieceType::None => "",
        };
        f.pad(s)
    }
}

/// All possible pieces on a chessboard, for both colors.
///
/// The low three bits hold the `PieceType`, the fourth bit the `Player`.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    None = 0b0000,
    WhitePawn = 0b0001,
    WhiteKnight = 0b0010,
    WhiteBishop = 0b0011,
    WhiteRook = 0b0100,
    WhiteQueen = 0b0101,
    WhiteKing = 0b0110,
    BlackPawn = 0b1001,
    BlackKnight = 0b1010,
    BlackBishop = 0b1011,
    BlackRook = 0b1100,
    BlackQueen = 0b1101,
    BlackKing = 0b1110,
}

static ALL_PIECES: [[Piece; PIECE_TYPE_CNT]; PLAYER_CNT] = [
    [
        Piece::None,
        Piece::WhitePawn,
        Piece::WhiteKnight,
        Piece::WhiteBishop,
        Piece::WhiteRook,
        Piece::WhiteQueen,
        Piece::WhiteKing,
        Piece::None,
    ],
    [
        Piece::None,
        Piece::BlackPawn,
        Piece::BlackKnight,
        Piece::BlackBishop,
        Piece::BlackRook,
        Piece::BlackQueen,
        Piece::BlackKing,
        Piece::None,
    ],
];

impl Piece {
    /// Returns the `Player` of a piece, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::{Piece,Player};
    ///
    /// assert_eq!(Piece::BlackKnight.player(), Some(Player::Black));
    /// assert!(Piece::None.player().is_none());
    /// ```
    #[inline(always)]
    pub fn player(self) -> Option<Player> {
        match self {
            Piece::None => None,
            p if (p as u8) & 0b1000 == 0 => Some(Player::White),
            _ => Some(Player::Black),
        }
    }

    /// Returns the `PieceType`.
    #[inline(always)]
    pub fn type_of(self) -> PieceType {
        match self as u8 & 0b111 {
            1 => PieceType::P,
            2 => PieceType::N,
            3 => PieceType::B,
            4 => PieceType::R,
            5 => PieceType::Q,
            6 => PieceType::K,
            _ => PieceType::None,
        }
    }

    /// Returns the `Player` and `PieceType` of this piece, if any.
    #[inline(always)]
    pub fn player_piece(self) -> Option<(Player, PieceType)> {
        self.player().map(|p| (p, self.type_of()))
    }

    /// Creates a `Piece` from an acting `Player` and a `PieceType`.
    ///
    /// `PieceType::None` gives `Piece::None`. `PieceType::All` and `Player::Both` have no
    /// piece and give `None`.
    ///
    /// ```
    /// use stonewall::{Piece,PieceType,Player};
    ///
    /// assert_eq!(Piece::make(Player::Black, PieceType::N), Some(Piece::BlackKnight));
    /// assert_eq!(Piece::make(Player::Both, PieceType::N), None);
    /// ```
    #[inline]
    pub fn make(player: Player, piece_type: PieceType) -> Option<Piece> {
        match (player, piece_type) {
            (_, PieceType::All) | (Player::Both, _) => None,
            (p, pt) => Some(ALL_PIECES[p as usize][pt as usize]),
        }
    }

    /// Creates a `Piece` for a player and piece type already known to be real.
    #[inline(always)]
    pub(crate) fn make_lossy(player: Player, piece_type: PieceType) -> Piece {
        ALL_PIECES[player.idx()][piece_type as usize]
    }

    /// Reads a piece from its FEN character: uppercase for white, lowercase for black.
    pub fn from_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_char(c);
        if piece_type.is_none() {
            return None;
        }
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Piece::make(player, piece_type)
    }

    /// Returns the FEN character of a `Piece`. If the Piece is `Piece::None`, `None` will
    /// be returned.
    #[inline]
    pub fn character(self) -> Option<char> {
        self.player()
            .map(|p| PIECE_DISPLAYS[p as usize][self.type_of() as usize])
    }

    /// Returns the material value of the piece.
    #[inline(always)]
    pub fn value(self) -> i16 {
        self.type_of().value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.character() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "."),
        }
    }
}

/// Enum for the Files of a Chessboard.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Debug, Ord, PartialOrd, Eq, Hash)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Reads a file from its letter, ignoring case.
    pub fn from_char(c: char) -> Option<File> {
        match c.to_ascii_lowercase() {
            f @ 'a'..='h' => Some(ALL_FILES[(f as u8 - b'a') as usize]),
            _ => None,
        }
    }

    /// Returns the file for an index, if it lies on the board.
    #[inline]
    pub fn from_index(i: i8) -> Option<File> {
        if (0..8).contains(&i) {
            Some(ALL_FILES[i as usize])
        } else {
            None
        }
    }

    /// Returns the lowercase letter of the file.
    #[inline]
    pub fn to_char(self) -> char {
        FILE_DISPLAYS[self as usize]
    }

    /// Returns the distance to another `File`.
    #[inline]
    pub fn distance(self, other: File) -> u8 {
        bit_twiddles::diff(self as u8, other as u8)
    }

    /// Returns the file `BitBoard`.
    #[inline]
    pub fn bb(self) -> BitBoard {
        BitBoard(FILE_BB[self as usize])
    }
}

/// Enum for the Ranks of a Chessboard.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Reads a rank from its digit.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            r @ '1'..='8' => Some(ALL_RANKS[(r as u8 - b'1') as usize]),
            _ => None,
        }
    }

    /// Returns the rank for an index, if it lies on the board.
    #[inline]
    pub fn from_index(i: i8) -> Option<Rank> {
        if (0..8).contains(&i) {
            Some(ALL_RANKS[i as usize])
        } else {
            None
        }
    }

    /// Returns the digit of the rank.
    #[inline]
    pub fn to_char(self) -> char {
        RANK_DISPLAYS[self as usize]
    }

    /// Returns the distance to another `Rank`.
    #[inline]
    pub fn distance(self, other: Rank) -> u8 {
        bit_twiddles::diff(self as u8, other as u8)
    }

    /// Returns the rank `BitBoard`.
    #[inline]
    pub fn bb(self) -> BitBoard {
        BitBoard(RANK_BB[self as usize])
    }
}

/// Types of Castling available to a player.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum CastleType {
    KingSide = 0,
    QueenSide = 1,
}

/// Both castle types, indexed by their enum value.
pub const ALL_CASTLE_TYPES: [CastleType; CASTLING_SIDES] =
    [CastleType::KingSide, CastleType::QueenSide];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars_are_total() {
        for c in "pnbrqk".chars() {
            let pt = PieceType::from_char(c);
            assert!(pt.is_real());
            assert_eq!(pt.char(false), c);
            assert_eq!(pt.char(true), c.to_ascii_uppercase());
            assert_eq!(PieceType::from_char(c.to_ascii_uppercase()), pt);
        }
        for c in "xz1 -.".chars() {
            assert_eq!(PieceType::from_char(c), PieceType::None);
        }
        assert_eq!(PieceType::None.char(true), '.');
    }

    #[test]
    fn material_values() {
        assert_eq!(PieceType::P.value(), 100);
        assert_eq!(PieceType::N.value(), 325);
        assert_eq!(PieceType::B.value(), 325);
        assert_eq!(PieceType::R.value(), 500);
        assert_eq!(PieceType::Q.value(), 975);
        assert_eq!(PieceType::K.value(), 32000);
        assert_eq!(PieceType::None.value(), 0);
    }

    #[test]
    fn pieces_round_trip_through_chars() {
        for player in ALL_PLAYERS.iter() {
            for pt in ALL_PIECE_TYPES.iter() {
                let piece = Piece::make(*player, *pt).unwrap();
                assert_eq!(piece.player(), Some(*player));
                assert_eq!(piece.type_of(), *pt);
                let c = piece.character().unwrap();
                assert_eq!(Piece::from_char(c), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::None.character(), None);
    }

    #[test]
    fn players() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!Player::Both, Player::Both);
        assert_eq!(Player::Black.acting(), Ok(Player::Black));
        assert_eq!(Player::Both.acting(), Err(BoardError::InvalidPlayer));
        assert_eq!(Player::Black.relative_square(SQ::A1), SQ::A8);
        assert_eq!(Player::White.relative_square(SQ::C2), SQ::C2);
    }

    #[test]
    fn files_and_ranks_from_chars() {
        assert_eq!(File::from_char('C'), Some(File::C));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(Rank::from_char('8'), Some(Rank::R8));
        assert_eq!(Rank::from_char('9'), None);
        assert_eq!(File::from_index(-1), None);
        assert_eq!(Rank::from_index(7), Some(Rank::R8));
    }
}
