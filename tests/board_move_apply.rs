extern crate rand;
extern crate stonewall;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stonewall::board::fen::ALL_FENS;
use stonewall::core::GenTypes;
use stonewall::{BitMove, Board, BoardError, PieceType, Player, SQ};

#[test]
fn random_moves() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..8 {
        let mut chess_board = Board::start_pos();
        let mut moves = chess_board.generate_moves();
        let mut i = 0;
        while i < 60 && !moves.is_empty() {
            chess_board.apply_move(moves[rng.gen_range(0..moves.len())]);
            assert!(chess_board.is_okay().is_ok());
            moves = chess_board.generate_moves();
            i += 1;
        }
        assert_eq!(chess_board.moves_played(), i);
    }
}

#[test]
fn apply_undo_restores_every_field() {
    let mut rng = StdRng::seed_from_u64(42);
    for fen in ALL_FENS.iter() {
        let mut board = Board::from_fen(fen).unwrap();
        let start = board.clone();
        let mut played = 0;
        for _ in 0..30 {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            board.apply_move(moves[rng.gen_range(0..moves.len())]);
            played += 1;
        }
        for _ in 0..played {
            board.undo_move();
        }
        assert_eq!(board, start, "{}", fen);
    }
}

#[test]
fn apply_null_moves() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut chess_board = Board::start_pos();
    let mut moves = chess_board.generate_moves();
    let mut i = 0;
    while i < 70 && !moves.is_empty() {
        chess_board.apply_move(moves[rng.gen_range(0..moves.len())]);
        moves = chess_board.generate_moves();
        assert!(!chess_board.legal_move(BitMove::null()));
        if !chess_board.in_check() {
            let before = chess_board.clone();
            chess_board.apply_null_move();
            assert_ne!(chess_board.turn(), before.turn());
            assert_eq!(chess_board.ep_square(), None);
            chess_board.undo_null_move();
            assert_eq!(chess_board, before);
        }
        i += 1;
    }
}

#[test]
fn en_passant_round_trip() {
    let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    board.apply_uci_move("d7d5").unwrap();
    assert_eq!(board.ep_square(), Some(SQ::D6));
    assert_eq!(board.fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");

    let before = board.clone();
    let mv = board.apply_uci_move("e5d6").unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(board.piece_last_captured(), PieceType::P);
    assert_eq!(board.count_piece(Player::Black, PieceType::P), 0);
    assert_eq!(board.fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");

    board.undo_move();
    assert_eq!(board, before);
    assert_eq!(board.zobrist(), before.zobrist());
}

#[test]
fn castling_moves_rook_and_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = board.apply_uci_move("e1g1").unwrap();
    assert!(mv.is_castle());
    assert_eq!(board.fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

    board.apply_uci_move("e8c8").unwrap();
    assert_eq!(board.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");

    board.undo_move();
    board.undo_move();
    assert_eq!(board.fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
}

#[test]
fn rook_capture_clears_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    board.apply_uci_move("a1a8").unwrap();
    assert_eq!(board.fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");
}

#[test]
fn promotions_by_uci() {
    let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = board.apply_uci_move("a7b8n").unwrap();
    assert!(mv.is_promo() && mv.is_capture());
    assert_eq!(mv.promo_piece(), PieceType::N);
    assert_eq!(board.fen(), "1N2k3/8/8/8/8/8/8/4K3 b - - 0 1");
    board.undo_move();
    assert!(board.apply_uci_move("a7a8").is_err());
    assert!(board.apply_uci_move("a7a8k").is_err());
    board.apply_uci_move("a7a8q").unwrap();
    assert_eq!(board.count_piece(Player::White, PieceType::Q), 1);
}

#[test]
fn uci_errors() {
    let mut board = Board::start_pos();
    match board.apply_uci_move("e2") {
        Err(BoardError::MalformedEncoding(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
    match board.apply_uci_move("e2e5") {
        Err(BoardError::InvalidMove { .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(board, Board::start_pos());
}

#[test]
fn apply_as_player() {
    let mut board = Board::start_pos();
    let mv = BitMove::make_quiet(SQ::G1, SQ::F3);
    assert_eq!(board.apply_move_as(Player::Both, mv), Err(BoardError::InvalidPlayer));
    assert!(board.apply_move_as(Player::Black, mv).is_err());
    assert!(board.apply_move_as(Player::White, BitMove::make_quiet(SQ::G1, SQ::G3)).is_err());
    assert!(board.apply_move_as(Player::White, mv).is_ok());
    assert_eq!(board.turn(), Player::Black);
}

#[test]
fn replay_from_fen_and_moves() {
    let board = Board::from_fen_and_moves(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["e2e4", "c7c5", "g1f3"],
    )
    .unwrap();
    assert_eq!(
        board.fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
    assert_eq!(board.moves_played(), 3);
    assert!(Board::from_fen_and_moves(&board.fen(), &["e1e2"]).is_err());
}

#[test]
fn captures_only_capture() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut board = Board::start_pos();
    for _ in 0..40 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        for m in board.generate_moves_of_type(GenTypes::Captures).iter() {
            assert!(m.is_capture());
            assert!(m.is_en_passant() || board.piece_at_sq(m.get_dest()).player() == Some(!board.turn()));
        }
        board.apply_move(moves[rng.gen_range(0..moves.len())]);
    }
}
