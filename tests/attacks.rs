extern crate stonewall;

use stonewall::core::PieceType;
use stonewall::helper::prelude::*;
use stonewall::{BitBoard, Board, Player, SQ};

fn squares(bb: BitBoard) -> Vec<String> {
    bb.map(|s| s.to_string()).collect()
}

#[test]
fn knight_from_g1() {
    assert_eq!(squares(knight_moves(SQ::G1)), vec!["e2", "f3", "h3"]);
    assert_eq!(knight_moves(SQ::D4).count_bits(), 8);
    assert_eq!(knight_moves(SQ::A8).count_bits(), 2);
}

#[test]
fn king_edges() {
    assert_eq!(king_moves(SQ::A1).count_bits(), 3);
    assert_eq!(king_moves(SQ::E1).count_bits(), 5);
    assert_eq!(king_moves(SQ::E4).count_bits(), 8);
}

#[test]
fn sliders_on_empty_board() {
    let empty = BitBoard(0);
    assert_eq!(rook_moves(empty, SQ::A1).count_bits(), 14);
    assert_eq!(rook_moves(empty, SQ::D4).count_bits(), 14);
    assert_eq!(bishop_moves(empty, SQ::A1).count_bits(), 7);
    assert_eq!(bishop_moves(empty, SQ::D4).count_bits(), 13);
    assert_eq!(queen_moves(empty, SQ::D4).count_bits(), 27);
}

#[test]
fn sliders_stop_at_first_blocker() {
    let occ = SQ::A4.to_bb() | SQ::C1.to_bb();
    assert_eq!(squares(rook_moves(occ, SQ::A1)), vec!["b1", "c1", "a2", "a3", "a4"]);

    let occ = SQ::F6.to_bb();
    let bishop = bishop_moves(occ, SQ::D4);
    assert!(bishop.contains(SQ::F6));
    assert!(!bishop.contains(SQ::G7));
}

#[test]
fn pawn_attacks_by_player() {
    assert_eq!(squares(pawn_attacks_from(SQ::E4, Player::White)), vec!["d5", "f5"]);
    assert_eq!(squares(pawn_attacks_from(SQ::E4, Player::Black)), vec!["d3", "f3"]);
    assert_eq!(squares(pawn_attacks_from(SQ::A2, Player::White)), vec!["b3"]);
    assert!(pawn_attacks_from(SQ::H8, Player::White).is_empty());
}

#[test]
fn pawn_attacks_for_both_players() {
    assert_eq!(
        squares(pawn_attacks_from(SQ::E4, Player::Both)),
        vec!["d3", "f3", "d5", "f5"]
    );
    assert_eq!(squares(pawn_attacks_from(SQ::A1, Player::Both)), vec!["b2"]);
    assert_eq!(
        attacks_from(PieceType::P, SQ::H5, BitBoard(0), Player::Both),
        pawn_attacks_from(SQ::H5, Player::White) | pawn_attacks_from(SQ::H5, Player::Black)
    );
}

#[test]
fn lines_and_betweens() {
    assert_eq!(squares(between_bb(SQ::A1, SQ::D4)), vec!["b2", "c3"]);
    assert!(between_bb(SQ::A1, SQ::B3).is_empty());
    assert!(aligned(SQ::A1, SQ::C3, SQ::H8));
    assert!(!aligned(SQ::A1, SQ::C3, SQ::H7));
    assert_eq!(line_bb(SQ::A1, SQ::A5).count_bits(), 8);
    assert_eq!(distance_of_sqs(SQ::A1, SQ::H8), 7);
}

#[test]
fn board_attacks_follow_occupancy() {
    let board = Board::start_pos();
    assert_eq!(board.attacks_from(PieceType::R, SQ::A1).count_bits(), 2);
    assert_eq!(board.attacks_from(PieceType::N, SQ::G1).count_bits(), 3);
    assert!(board.square_attacked_by(SQ::F3, Player::White));
    assert!(!board.square_attacked_by(SQ::E4, Player::White));
    assert!(board.square_attacked_by(SQ::F6, Player::Black));
    let attackers = board.attackers_to(SQ::F3, board.get_occupied());
    assert_eq!(squares(attackers), vec!["g1", "e2", "g2"]);
}
