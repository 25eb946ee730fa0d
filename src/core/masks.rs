//! Masks and various other constants.

/// The total number of acting players on a chessboard.
pub const PLAYER_CNT: usize = 2;
/// The total number of piece type slots, including `PieceType::None` and `PieceType::All`.
pub const PIECE_TYPE_CNT: usize = 8;
/// The total number of squares on a chessboard.
pub const SQ_CNT: usize = 64;
/// The total number of files on a chessboard.
pub const FILE_CNT: usize = 8;
/// The total number of ranks on a chessboard.
pub const RANK_CNT: usize = 8;
/// The total number of sides a player can castle to.
pub const CASTLING_SIDES: usize = 2;
/// Upper bound on the number of legal moves in any reachable position.
pub const MAX_MOVES: usize = 256;

/// Bit representation of file A.
pub const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Bit representation of file B.
pub const FILE_B: u64 = FILE_A << 1;
/// Bit representation of file C.
pub const FILE_C: u64 = FILE_A << 2;
/// Bit representation of file D.
pub const FILE_D: u64 = FILE_A << 3;
/// Bit representation of file E.
pub const FILE_E: u64 = FILE_A << 4;
/// Bit representation of file F.
pub const FILE_F: u64 = FILE_A << 5;
/// Bit representation of file G.
pub const FILE_G: u64 = FILE_A << 6;
/// Bit representation of file H.
pub const FILE_H: u64 = FILE_A << 7;

/// Bit representation of rank 1.
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
/// Bit representation of rank 2.
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
/// Bit representation of rank 3.
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
/// Bit representation of rank 4.
pub const RANK_4: u64 = 0x0000_0000_FF00_0000;
/// Bit representation of rank 5.
pub const RANK_5: u64 = 0x0000_00FF_0000_0000;
/// Bit representation of rank 6.
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
/// Bit representation of rank 7.
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
/// Bit representation of rank 8.
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Bit representation of the dark squares.
pub const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
/// Bit representation of the light squares.
pub const LIGHT_SQUARES: u64 = !DARK_SQUARES;

/// Array of all files and their corresponding bits, indexed from
/// file A to file H.
pub static FILE_BB: [u64; FILE_CNT] = [
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H,
];

/// Array of all ranks and their corresponding bits, indexed from
/// rank 1 to rank 8.
pub static RANK_BB: [u64; RANK_CNT] = [
    RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
];

/// Starting square number of the white king.
pub const WHITE_KING_START: u8 = 4;
/// Starting square number of the black king.
pub const BLACK_KING_START: u8 = 60;

/// Starting square number of the black king-side rook.
pub const ROOK_BLACK_KSIDE_START: u8 = 63;
/// Starting square number of the black queen-side rook.
pub const ROOK_BLACK_QSIDE_START: u8 = 56;
/// Starting square number of the white king-side rook.
pub const ROOK_WHITE_KSIDE_START: u8 = 7;
/// Starting square number of the white queen-side rook.
pub const ROOK_WHITE_QSIDE_START: u8 = 0;

/// Castling right bit for a white king-side castle.
pub const C_WHITE_K_MASK: u8 = 0b0000_1000;
/// Castling right bit for a white queen-side castle.
pub const C_WHITE_Q_MASK: u8 = 0b0000_0100;
/// Castling right bit for a black king-side castle.
pub const C_BLACK_K_MASK: u8 = 0b0000_0010;
/// Castling right bit for a black queen-side castle.
pub const C_BLACK_Q_MASK: u8 = 0b0000_0001;

/// Starting rook squares, indexed by player and then by `CastleType`.
pub static CASTLING_ROOK_START: [[u8; CASTLING_SIDES]; PLAYER_CNT] = [
    [ROOK_WHITE_KSIDE_START, ROOK_WHITE_QSIDE_START],
    [ROOK_BLACK_KSIDE_START, ROOK_BLACK_QSIDE_START],
];

/// Squares the king lands on after castling, indexed by player and then by `CastleType`.
pub static CASTLING_KING_DEST: [[u8; CASTLING_SIDES]; PLAYER_CNT] = [[6, 2], [62, 58]];

/// Squares the rook lands on after castling, indexed by player and then by `CastleType`.
pub static CASTLING_ROOK_DEST: [[u8; CASTLING_SIDES]; PLAYER_CNT] = [[5, 3], [61, 59]];

/// Display order for squares: rank 8 first, each rank from file A to file H.
pub static SQ_DISPLAY_ORDER: [u8; SQ_CNT] = [
    56, 57, 58, 59, 60, 61, 62, 63, 48, 49, 50, 51, 52, 53, 54, 55, 40, 41, 42, 43, 44, 45, 46, 47,
    32, 33, 34, 35, 36, 37, 38, 39, 24, 25, 26, 27, 28, 29, 30, 31, 16, 17, 18, 19, 20, 21, 22, 23,
    8, 9, 10, 11, 12, 13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7,
];

/// Array mapping a square index to a string representation.
///
/// # Examples
///
/// ```
/// use stonewall::core::masks::SQ_DISPLAY;
///
/// assert_eq!(SQ_DISPLAY[0], "a1");
/// assert_eq!(SQ_DISPLAY[1], "b1");
/// assert_eq!(SQ_DISPLAY[8], "a2");
/// ```
pub static SQ_DISPLAY: [&str; SQ_CNT] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

/// Characters for each combination of player and piece.
///
/// White pieces are uppercase, black pieces lowercase.
pub static PIECE_DISPLAYS: [[char; PIECE_TYPE_CNT]; PLAYER_CNT] = [
    ['.', 'P', 'N', 'B', 'R', 'Q', 'K', '*'],
    ['.', 'p', 'n', 'b', 'r', 'q', 'k', '*'],
];

/// Characters for each file, index from file A to file H.
pub static FILE_DISPLAYS: [char; FILE_CNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Characters for each rank, index from rank 1 to rank 8.
pub static RANK_DISPLAYS: [char; RANK_CNT] = ['1', '2', '3', '4', '5', '6', '7', '8'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_and_files_have_eight_squares() {
        for bb in FILE_BB.iter().chain(RANK_BB.iter()) {
            assert_eq!(bb.count_ones(), 8);
        }
        assert_eq!(FILE_BB.iter().fold(0, |a, b| a | b), !0);
        assert_eq!(RANK_BB.iter().fold(0, |a, b| a | b), !0);
        assert_eq!(FILE_H, 0x8080_8080_8080_8080);
    }

    #[test]
    fn display_order_is_a_permutation() {
        let mut seen = 0u64;
        for sq in SQ_DISPLAY_ORDER.iter() {
            seen |= 1 << *sq;
        }
        assert_eq!(seen, !0);
    }
}
