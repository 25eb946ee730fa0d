//! Reading and writing positions in Forsyth-Edwards Notation.
//!
//! A FEN string has six whitespace separated sections:
//!
//! ```md
//! [Piece Placement] [Side to Move] [Castling Ability] [En Passant square] [Half moves] [Full moves]
//! ```
//!
//! The two counters may be left out, in which case they default to `0 1`.
//!
//! Besides being readable, a position must be reachable enough for move generation to make
//! sense of it: one king per side, no pawns on the back ranks, a plausible set of checkers,
//! and an en-passant square that a pawn could really have passed over.

use super::castle_rights::Castling;
use super::piece_locations::PieceLocations;
use super::Board;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::*;
use crate::error::{BoardError, FenBuildError};

/// The FEN of the starting position.
pub const OPENING_POS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A collection of valid positions, covering castling, en-passant, promotions, checks
/// and positions without legal moves.
pub static ALL_FENS: [&str; 12] = [
    OPENING_POS_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "8/8/3p4/KPp4r/1R3p1k/8/4P1P1/8 w - c6 0 2",
    "4k3/8/8/8/8/8/4q3/4K3 w - - 0 1",
    "4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1",
    "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
];

impl Board {
    /// Constructs a board from a FEN String.
    ///
    /// FEN stands for Forsyth-Edwards Notation, and is a way of representing a board through a
    /// string of characters. More information can be found on the [ChessWiki](https://chessprogramming.wikispaces.com/Forsyth-Edwards+Notation).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::MalformedEncoding` wrapping the [`FenBuildError`] describing the
    /// first problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    /// assert_eq!(board.count_all_pieces(), 32);
    ///
    /// assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_ok());
    /// assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
    /// ```
    ///
    /// [`FenBuildError`]: ../error/enum.FenBuildError.html
    pub fn from_fen(fen: &str) -> Result<Board, BoardError> {
        parse_fen(fen).map_err(|err| {
            warn!("rejected fen {:?}: {}", fen, err);
            BoardError::from(err)
        })
    }

    /// Creates a FEN String of the Given Board.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::Board;
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.fen(),"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    /// ```
    pub fn fen(&self) -> String {
        let mut s = String::with_capacity(90);
        for rank in ALL_RANKS.iter().rev() {
            let mut blanks = 0;
            for file in ALL_FILES.iter() {
                match self.piece_at_sq(SQ::make(*file, *rank)).character() {
                    Some(c) => {
                        if blanks != 0 {
                            s.push_str(&blanks.to_string());
                            blanks = 0;
                        }
                        s.push(c);
                    }
                    None => blanks += 1,
                }
            }
            if blanks != 0 {
                s.push_str(&blanks.to_string());
            }
            if *rank != Rank::R1 {
                s.push('/');
            }
        }

        s.push(' ');
        s.push(match self.turn() {
            Player::Black => 'b',
            _ => 'w',
        });
        s.push(' ');
        s.push_str(&self.castling().pretty_string());
        s.push(' ');
        match self.ep_square() {
            Some(ep) => s.push_str(&ep.to_string()),
            None => s.push('-'),
        }
        s.push_str(&format!(" {} {}", self.rule_50(), self.fullmove_number()));
        s
    }
}

fn parse_fen(fen: &str) -> Result<Board, FenBuildError> {
    let det_split: Vec<&str> = fen.split_whitespace().collect();

    // [ Piece Placement, Side to Move, Castling Ability, En Passant square, (Half moves, Full moves) ]
    if det_split.len() != 6 && det_split.len() != 4 {
        return Err(FenBuildError::NotEnoughSections {
            sections: det_split.len(),
        });
    }

    let b_rep: Vec<&str> = det_split[0].split('/').collect();
    if b_rep.len() != 8 {
        return Err(FenBuildError::IncorrectRankAmounts { ranks: b_rep.len() });
    }
    let piece_loc = PieceLocations::from_partial_fen(b_rep.as_slice())?;

    let turn = match det_split[1] {
        "w" => Player::White,
        "b" => Player::Black,
        other => {
            return Err(FenBuildError::UnrecognizedTurn {
                turn: other.to_string(),
            })
        }
    };

    let mut castling = Castling::empty_set();
    for c in det_split[2].chars() {
        castling.add_castling_char(c)?;
    }

    let ep_square = parse_ep_square(det_split[3])?;

    let (rule_50, fullmove) = if det_split.len() == 6 {
        let rule_50 = parse_move_counter(det_split[4])?;
        let fullmove = parse_move_counter(det_split[5])?;
        (rule_50, fullmove.max(1))
    } else {
        (0, 1)
    };
    // a full move is counted after each black move
    let mut half_moves = (fullmove - 1) * 2;
    if turn == Player::Black {
        half_moves += 1;
    }

    for player in ALL_PLAYERS.iter() {
        let king = Piece::make_lossy(*player, PieceType::K);
        let num = piece_loc.iter().filter(|(_, p)| *p == king).count() as u8;
        if num != 1 {
            return Err(FenBuildError::IncorrectKingNum {
                player: *player,
                num,
            });
        }
    }

    if let Some(ep) = ep_square {
        check_ep_square(&piece_loc, turn, ep)?;
    }

    let board = Board::from_parts(piece_loc, turn, castling, ep_square, rule_50, half_moves);
    is_valid_fen(board)
}

/// Reads the en-passant section, which is either `-` or a square on the third or sixth rank.
/// Largest halfmove clock or fullmove number a FEN may carry. Keeps the ply count far
/// from overflow however many moves are applied afterwards.
pub const MAX_MOVE_COUNTER: u32 = 1_000_000;

fn parse_move_counter(counter: &str) -> Result<u32, FenBuildError> {
    let value = counter.parse::<u32>()?;
    if value > MAX_MOVE_COUNTER {
        return Err(FenBuildError::MoveCounterOutOfRange { counter: value });
    }
    Ok(value)
}

fn parse_ep_square(ep: &str) -> Result<Option<SQ>, FenBuildError> {
    if ep == "-" {
        return Ok(None);
    }
    let unreadable = || FenBuildError::EPSquareUnreadable { ep: ep.to_string() };
    if ep.len() != 2 {
        return Err(unreadable());
    }
    let sq: SQ = ep.parse().map_err(|_| unreadable())?;
    match sq.rank() {
        Rank::R3 | Rank::R6 => Ok(Some(sq)),
        _ => Err(FenBuildError::EPSquareInvalid { ep: ep.to_string() }),
    }
}

/// The en-passant square must lie behind a pawn of the side that just moved, on the rank
/// that pawn passed over, with both squares it passed empty.
fn check_ep_square(loc: &PieceLocations, turn: Player, ep: SQ) -> Result<(), FenBuildError> {
    let them = !turn;
    let invalid = || FenBuildError::EPSquareInvalid { ep: ep.to_string() };
    if turn.relative_rank_of_sq(ep) != Rank::R6 || loc.at_square(ep) {
        return Err(invalid());
    }
    let pawn_sq = ep.offset(them.pawn_push()).ok_or_else(invalid)?;
    let start_sq = ep.offset(turn.pawn_push()).ok_or_else(invalid)?;
    if loc.piece_at(pawn_sq) != Piece::make_lossy(them, PieceType::P) || loc.at_square(start_sq) {
        return Err(invalid());
    }
    Ok(())
}

// https://chess.stackexchange.com/questions/1482/how-to-know-when-a-fen-position-is-legal
fn is_valid_fen(board: Board) -> Result<Board, FenBuildError> {
    let checks = board.checkers();
    let num_checks = checks.count_bits();
    if num_checks > 2 {
        return Err(FenBuildError::IllegalNumCheckingPieces { num: num_checks });
    }
    if num_checks == 2 {
        let sq_1bb = checks.lsb();
        let piece_1 = board.piece_at_sq(sq_1bb.to_sq());
        let piece_2 = board.piece_at_sq((checks & !sq_1bb).to_sq());
        if impossible_check_pair(piece_1.type_of(), piece_2.type_of()) {
            return Err(FenBuildError::IllegalCheckState { piece_1, piece_2 });
        }
    }

    let them = !board.turn();
    if board.square_attacked_by(board.king_sq(them), board.turn()) {
        return Err(FenBuildError::OpponentInCheck);
    }

    let back_ranks = BitBoard::RANK_1 | BitBoard::RANK_8;
    if (board.piece_bb_both_players(PieceType::P) & back_ranks).is_not_empty() {
        return Err(FenBuildError::PawnOnLastRow);
    }

    for player in ALL_PLAYERS.iter() {
        let pawns = board.count_piece(*player, PieceType::P);
        if pawns > FILE_CNT as u8 {
            return Err(FenBuildError::TooManyPawns {
                player: *player,
                num: pawns,
            });
        }
    }

    Ok(board)
}

/// Pairs of pieces that can never check a king at the same time.
fn impossible_check_pair(a: PieceType, b: PieceType) -> bool {
    let ordered = if (a as u8) <= (b as u8) { (a, b) } else { (b, a) };
    match ordered {
        (PieceType::P, PieceType::P)
        | (PieceType::P, PieceType::N)
        | (PieceType::P, PieceType::B)
        | (PieceType::N, PieceType::N)
        | (PieceType::B, PieceType::B) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodingError;

    fn fen_err(fen: &str) -> FenBuildError {
        match Board::from_fen(fen) {
            Err(BoardError::MalformedEncoding(EncodingError::Fen(err))) => err,
            other => panic!("expected a fen error for {:?}, got {:?}", fen, other),
        }
    }

    #[test]
    fn all_fens_round_trip() {
        for fen in ALL_FENS.iter() {
            let board = Board::from_fen(fen).unwrap();
            assert_eq!(&board.fen(), fen);
            assert!(board.is_okay().is_ok());
        }
    }

    #[test]
    fn short_fen_defaults_counters() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        assert_eq!(board.fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(board.moves_played(), 1);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn section_errors() {
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - - 0"),
            FenBuildError::NotEnoughSections { sections: 5 }
        );
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/4K3 w - - 0 1"),
            FenBuildError::IncorrectRankAmounts { ranks: 7 }
        );
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            FenBuildError::UnrecognizedTurn {
                turn: "x".to_string()
            }
        );
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w KX - 0 1"),
            FenBuildError::UnrecognizedCastling { c: 'X' }
        );
        assert!(matches!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            FenBuildError::UnreadableMoves(_)
        ));
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            FenBuildError::NotEnoughSections { sections: 7 }
        );
    }

    #[test]
    fn en_passant_errors() {
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
            FenBuildError::EPSquareUnreadable {
                ep: "e9".to_string()
            }
        );
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            FenBuildError::EPSquareInvalid {
                ep: "e4".to_string()
            }
        );
        // no pawn in front of the square
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/4K3 w - d6 0 1"),
            FenBuildError::EPSquareInvalid {
                ep: "d6".to_string()
            }
        );
        // right square, wrong side to move
        assert_eq!(
            fen_err("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            FenBuildError::EPSquareInvalid {
                ep: "d6".to_string()
            }
        );
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert_eq!(board.ep_square(), Some(SQ::D6));
    }

    #[test]
    fn piece_errors() {
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            FenBuildError::IncorrectKingNum {
                player: Player::White,
                num: 0
            }
        );
        assert_eq!(
            fen_err("4k2k/8/8/8/8/8/8/4K3 w - - 0 1"),
            FenBuildError::IncorrectKingNum {
                player: Player::Black,
                num: 2
            }
        );
        assert_eq!(
            fen_err("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            FenBuildError::PawnOnLastRow
        );
        assert_eq!(
            fen_err("4k3/pppppppp/p7/8/8/8/8/4K3 w - - 0 1"),
            FenBuildError::TooManyPawns {
                player: Player::Black,
                num: 9
            }
        );
    }

    #[test]
    fn check_errors() {
        // white to move, black king attacked by the e2 rook
        assert_eq!(
            fen_err("4k3/8/8/8/8/8/4R3/K7 w - - 0 1"),
            FenBuildError::OpponentInCheck
        );
        // two knights checking at once
        assert!(matches!(
            fen_err("4k3/8/8/8/8/3n1n2/8/4K3 w - - 0 1"),
            FenBuildError::IllegalCheckState { .. }
        ));
        // rook and knight may check together
        assert!(Board::from_fen("4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1").is_ok());
        assert!(impossible_check_pair(PieceType::B, PieceType::P));
        assert!(!impossible_check_pair(PieceType::B, PieceType::N));
    }
}
