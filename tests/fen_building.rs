extern crate stonewall;

use stonewall::board::fen::{ALL_FENS, OPENING_POS_FEN};
use stonewall::error::{EncodingError, FenBuildError};
use stonewall::{Board, BoardError, PieceType, Player, SQ};

fn fen_error(fen: &str) -> FenBuildError {
    match Board::from_fen(fen) {
        Err(BoardError::MalformedEncoding(EncodingError::Fen(e))) => e,
        other => panic!("expected a fen error for {}, got {:?}", fen, other),
    }
}

#[test]
fn basic_fen() {
    let board = Board::from_fen("k6r/1p2b3/8/8/8/8/P4KPP/1B5R w - - 0 3").unwrap();
    assert_eq!(board.count_piece(Player::White, PieceType::P), 3);
    assert_eq!(board.count_piece(Player::White, PieceType::N), 0);
    assert_eq!(board.count_piece(Player::White, PieceType::B), 1);
    assert_eq!(board.count_piece(Player::White, PieceType::R), 1);
    assert_eq!(board.count_piece(Player::White, PieceType::K), 1);
    assert_eq!(board.count_piece(Player::Black, PieceType::P), 1);
    assert_eq!(board.count_piece(Player::Black, PieceType::B), 1);
    assert_eq!(board.count_piece(Player::Black, PieceType::R), 1);
    assert_eq!(board.count_piece(Player::Black, PieceType::K), 1);
    assert_eq!(board.king_sq(Player::Black), SQ::A8);
    assert_eq!(board.fullmove_number(), 3);
    assert_eq!(board.moves_played(), 4);

    let board = Board::from_fen("8/2Q1pk2/nbpppppp/8/8/2K4N/PPPPPPPP/BBB2BBB w - - 0 10").unwrap();
    assert_eq!(board.count_piece(Player::White, PieceType::P), 8);
    assert_eq!(board.count_piece(Player::White, PieceType::B), 6);
    assert_eq!(board.count_piece(Player::Black, PieceType::P), 7);
    assert_eq!(board.count_all_pieces(), 27);
}

#[test]
fn all_fens() {
    for fen in ALL_FENS.iter() {
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(*fen, board.fen());
    }
}

#[test]
fn opening_fen_is_start_pos() {
    let board = Board::from_fen(OPENING_POS_FEN).unwrap();
    assert_eq!(board, Board::start_pos());
    assert_eq!(board.zobrist(), Board::start_pos().zobrist());
}

#[test]
fn rank8_zero_fen() {
    let fen = "8/2Q1pk2/nbpppppp/8/8/2K4N/PPPPPPPP/BBB2BBB w - - 0 10";
    let board = Board::from_fen(fen).unwrap();
    assert_eq!(fen, board.fen());
}

#[test]
fn four_section_fen() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
    assert_eq!(board.turn(), Player::Black);
    assert_eq!(board.fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
}

#[test]
fn malformed_fens() {
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - - 0"),
        FenBuildError::NotEnoughSections { sections: 5 }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/4K3 w - - 0 1"),
        FenBuildError::IncorrectRankAmounts { ranks: 7 }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 white - - 0 1"),
        FenBuildError::UnrecognizedTurn { .. }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w X - 0 1"),
        FenBuildError::UnrecognizedCastling { c: 'X' }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - z9 0 1"),
        FenBuildError::EPSquareUnreadable { .. }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - e6 0 1"),
        FenBuildError::EPSquareInvalid { .. }
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
        FenBuildError::UnreadableMoves(_)
    ));
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4KK2 w - - 0 1"),
        FenBuildError::IncorrectKingNum { player: Player::White, num: 2 }
    ));
}

#[test]
fn illegal_positions() {
    assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K2R b - - 0 1").is_ok());
    assert_eq!(
        fen_error("4k2R/8/8/8/8/8/8/4K3 w - - 0 1"),
        FenBuildError::OpponentInCheck
    );
    assert_eq!(
        fen_error("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"),
        FenBuildError::PawnOnLastRow
    );
}

#[test]
fn large_move_counters() {
    let fen = "4k3/8/8/8/8/8/8/4K3 b - - 0 40000";
    assert_eq!(Board::from_fen(fen).unwrap().fen(), fen);

    let fen = "4k3/8/8/8/8/8/8/4K3 w - - 40000 40000";
    let mut board = Board::from_fen(fen).unwrap();
    assert_eq!(board.rule_50(), 40000);
    assert_eq!(board.fullmove_number(), 40000);

    board.apply_uci_move("e1e2").unwrap();
    assert_eq!(board.fen(), "4k3/8/8/8/8/8/4K3/8 b - - 40001 40000");
    board.apply_uci_move("e8e7").unwrap();
    assert_eq!(board.fen(), "8/4k3/8/8/8/8/4K3/8 w - - 40002 40001");
    board.undo_move();
    board.undo_move();
    assert_eq!(board.fen(), fen);

    let max = "4k3/8/8/8/8/8/8/4K3 w - - 1000000 1000000";
    let mut board = Board::from_fen(max).unwrap();
    board.apply_null_move();
    board.apply_uci_move("e8d8").unwrap();
    assert_eq!(board.fullmove_number(), 1_000_001);
    board.undo_move();
    board.undo_null_move();
    assert_eq!(board.fen(), max);

    assert_eq!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - - 1000001 1"),
        FenBuildError::MoveCounterOutOfRange { counter: 1_000_001 }
    );
    assert_eq!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295"),
        FenBuildError::MoveCounterOutOfRange {
            counter: 4_294_967_295
        }
    );
    assert!(matches!(
        fen_error("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967296"),
        FenBuildError::UnreadableMoves(_)
    ));
}
