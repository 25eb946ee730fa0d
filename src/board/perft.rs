//! perft, or Performance Test, Move Path Enumeration, tests the correctness of move-generation.
//!
//! Use these functions on a [`Board`] to test that the correct amount of leaf nodes are created.
//!
//! [`Board`]: ../struct.Board.html

use rayon::prelude::*;

use super::Board;
use crate::core::move_list::MoveList;

/// Holds all information about the number of nodes counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerftNodes {
    /// Total number of nodes counted.
    pub nodes: u64,
    /// Number of capturing moves, including en-passant moves.
    pub captures: u64,
    /// Number of En-Passant moves.
    pub en_passant: u64,
    /// Number of Castles.
    pub castles: u64,
    /// The number of promotions
    pub promotions: u64,
    /// The number of checking moves.
    pub checks: u64,
    /// The number of moves resulting in a checkmate.
    pub checkmates: u64,
}

impl PerftNodes {
    /// Checks for the correct number of nodes in each category. If the results don't
    /// match, panics with an error-message containing the failed checks.
    #[allow(clippy::too_many_arguments)]
    pub fn check(
        &self,
        nodes: u64,
        captures: u64,
        en_passant: u64,
        castles: u64,
        promotions: u64,
        checks: u64,
        checkmates: u64,
    ) {
        let expected = PerftNodes {
            nodes,
            captures,
            en_passant,
            castles,
            promotions,
            checks,
            checkmates,
        };
        if *self != expected {
            panic!(
                "\n Perft did not return the correct results!\
                 \n total nodes {}, expected: {}\
                 \n captures {}, expected: {}\
                 \n en_passant {}, expected: {}\
                 \n castles {}, expected: {}\
                 \n promotions {}, expected: {}\
                 \n checks {}, expected: {}\
                 \n checkmates {}, expected: {}\n",
                self.nodes,
                nodes,
                self.captures,
                captures,
                self.en_passant,
                en_passant,
                self.castles,
                castles,
                self.promotions,
                promotions,
                self.checks,
                checks,
                self.checkmates,
                checkmates
            );
        }
    }
}

/// Returns the number of leaf nodes from generating moves to a certain depth.
///
/// # Examples
///
/// ```
/// use stonewall::Board;
/// use stonewall::board::perft::perft;
///
/// assert_eq!(perft(&Board::start_pos(), 2), 400);
/// ```
pub fn perft(board: &Board, depth: u16) -> u64 {
    if depth == 0 {
        1
    } else {
        let mut pos = board.clone();
        inner_perft(&mut pos, depth)
    }
}

/// Returns the count of all move types for the leaf nodes up to a certain depth.
pub fn perft_all(board: &Board, depth: u16) -> PerftNodes {
    let mut b = board.clone();
    let mut perft = PerftNodes::default();
    inner_perft_all(&mut b, depth, &mut perft);
    perft
}

/// Same count as [`perft`], with each root move searched on its own thread.
///
/// Every worker clones the board, so the result never depends on scheduling.
///
/// [`perft`]: fn.perft.html
pub fn parallel_perft(board: &Board, depth: u16) -> u64 {
    if depth <= 1 {
        return perft(board, depth);
    }
    let moves: MoveList = board.generate_moves();
    let count: u64 = moves
        .vec()
        .par_iter()
        .map_with(board.clone(), |b: &mut Board, mov| {
            b.apply_move(*mov);
            let count = inner_perft(b, depth - 1);
            b.undo_move();
            count
        })
        .sum();
    debug!("parallel perft at depth {} counted {} nodes", depth, count);
    count
}

fn inner_perft(board: &mut Board, depth: u16) -> u64 {
    let moves: MoveList = board.generate_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut count: u64 = 0;

    for mov in moves.iter() {
        board.apply_move(*mov);
        count += inner_perft(board, depth - 1);
        board.undo_move();
    }

    count
}

fn inner_perft_all(board: &mut Board, depth: u16, perft: &mut PerftNodes) {
    if depth == 0 {
        perft.nodes += 1;
        if board.in_check() {
            perft.checks += 1;
            if board.generate_moves().is_empty() {
                perft.checkmates += 1;
            }
        }
        return;
    }

    let moves: MoveList = board.generate_moves();
    for mov in moves.iter() {
        if depth == 1 {
            if mov.is_capture() {
                perft.captures += 1
            }
            if mov.is_en_passant() {
                perft.en_passant += 1
            }
            if mov.is_castle() {
                perft.castles += 1
            }
            if mov.is_promo() {
                perft.promotions += 1
            }
        }
        board.apply_move(*mov);
        inner_perft_all(board, depth - 1, perft);
        board.undo_move();
    }
}
