//! This module contains `Board`, the object representing the current state of a chessboard.
//! All modifications to the current state of the board is done through this object, as well as
//! gathering information about the current state of the board.
//!
//! This module also contains structures used by the board, such as [`CastlingRights`] for
//! determining castling rights throughout a game. Other utilities that may be of use
//! are [`PieceLocations`], which maps squares on a chessboard to pieces and players.
//!
//! [`CastlingRights`]: castle_rights/struct.Castling.html
//! [`PieceLocations`]: piece_locations/struct.PieceLocations.html

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::fmt;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::move_list::MoveList;
use crate::core::piece_move::{BitMove, MoveType};
use crate::core::score::{self, Value};
use crate::core::sq::SQ;
use crate::core::*;
use crate::error::BoardError;
use crate::helper::prelude::*;

use self::board_state::BoardState;
use self::castle_rights::{CastlePath, Castling};
use self::piece_locations::PieceLocations;

pub mod board_state;
pub mod castle_rights;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod piece_locations;

/// Back rank of the starting position, from file A to file H.
const BACK_RANK: [PieceType; FILE_CNT] = [
    PieceType::R,
    PieceType::N,
    PieceType::B,
    PieceType::Q,
    PieceType::K,
    PieceType::B,
    PieceType::N,
    PieceType::R,
];

/// Represents a Chessboard through a `Board`.
///
/// Board contains everything that needs to be known about the current state of the Game. It is used
/// by both Engines and Players / Bots alike.
///
/// Ideally, the Engine contains the original Representation of a board (owns the board), and utilizes
/// `Board::clone()` to send copies of a position to each thread.
///
/// # Examples
///
/// ```
/// use stonewall::Board;
///
/// let mut chessboard = Board::start_pos();
///
/// let moves = chessboard.generate_moves();
/// chessboard.apply_move(moves[0]);
///
/// let b2 = chessboard.clone();
/// assert_eq!(chessboard, b2);
/// assert_eq!(chessboard.moves_played(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    turn: Player,
    bbs: [[BitBoard; PIECE_TYPE_CNT]; PLAYER_CNT],
    occ: [BitBoard; PLAYER_CNT],
    occ_all: BitBoard,
    /// Plies since the first move of the game, counting those before the board was loaded.
    half_moves: u32,
    piece_counts: [[u8; PIECE_TYPE_CNT]; PLAYER_CNT],
    piece_locations: PieceLocations,
    /// Information of the current position.
    state: BoardState,
    /// The states replaced by each applied move, most recent last.
    history: Vec<BoardState>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board from the starting position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Board,Player};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.count_pieces_player(Player::White),16);
    /// ```
    pub fn start_pos() -> Board {
        let mut locations = PieceLocations::blank();
        for (file, pt) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            locations.place(SQ(file), Piece::make_lossy(Player::White, *pt));
            locations.place(SQ(file + 8), Piece::WhitePawn);
            locations.place(SQ(file + 48), Piece::BlackPawn);
            locations.place(SQ(file + 56), Piece::make_lossy(Player::Black, *pt));
        }
        Board::from_parts(
            locations,
            Player::White,
            Castling::all_castling(),
            None,
            0,
            0,
        )
    }

    /// Constructs a `RandBoard`, for generating random positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let board = Board::random().pseudo_random(2627288300002).one();
    /// assert!(board.moves_played() >= 1);
    /// ```
    pub fn random() -> RandBoard {
        RandBoard::default()
    }

    /// Assembles a board from the placement of its pieces and the remaining FEN fields.
    ///
    /// Every derived field (bitboards, counts, hash, check information) is generated here.
    /// Each side must have exactly one king.
    pub(crate) fn from_parts(
        piece_locations: PieceLocations,
        turn: Player,
        castling: Castling,
        ep_square: Option<SQ>,
        rule_50: u32,
        half_moves: u32,
    ) -> Board {
        let mut board = Board {
            turn,
            bbs: [[BitBoard(0); PIECE_TYPE_CNT]; PLAYER_CNT],
            occ: [BitBoard(0); PLAYER_CNT],
            occ_all: BitBoard(0),
            half_moves,
            piece_counts: [[0; PIECE_TYPE_CNT]; PLAYER_CNT],
            piece_locations,
            state: BoardState::blank(),
            history: Vec::new(),
        };
        board.state.castling = castling;
        board.state.ep_square = ep_square;
        board.state.rule_50 = rule_50;
        board.set_bitboards();
        board.state.zobrist = board.compute_zobrist();
        board.set_check_info();
        board
    }

    /// Fills the bitboards and piece counts from the mailbox.
    fn set_bitboards(&mut self) {
        for (sq, piece) in self.piece_locations.iter() {
            if let Some((player, piece_type)) = piece.player_piece() {
                let bb = sq.to_bb();
                self.bbs[player.idx()][piece_type as usize] |= bb;
                self.occ[player.idx()] |= bb;
                self.piece_counts[player.idx()][piece_type as usize] += 1;
            }
        }
        self.occ_all = self.occ[0] | self.occ[1];
    }

    /// Computes the zobrist key of the position from scratch.
    fn compute_zobrist(&self) -> u64 {
        let mut zob = self
            .piece_locations
            .iter()
            .filter_map(|(sq, piece)| piece.player_piece().map(|(p, pt)| z_square(sq, p, pt)))
            .fold(0, |acc, key| acc ^ key);
        if let Some(ep) = self.state.ep_square {
            zob ^= z_ep(ep);
        }
        zob ^= z_castle(self.state.castling.bits());
        if self.turn == Player::Black {
            zob ^= z_side();
        }
        zob
    }

    /// Applies a move to the Board.
    ///
    /// # Panics
    ///
    /// The supplied BitMove must be both a valid move for that position, as well as a
    /// valid [`BitMove`], Otherwise, a panic will occur. Valid BitMoves can be generated with
    /// [`Board::generate_moves()`], which guarantees that only Legal moves will be created.
    ///
    /// [`BitMove`]: ../core/piece_move/struct.BitMove.html
    /// [`Board::generate_moves()`]: #method.generate_moves
    pub fn apply_move(&mut self, bit_move: BitMove) {
        debug_assert!(bit_move.is_okay());
        let mut new_state = self.state.partial_clone();
        // Toggle the side to move
        let mut zob = self.state.zobrist ^ z_side();

        new_state.rule_50 += 1;
        new_state.ply += 1;
        new_state.prev_move = bit_move;

        let us = self.turn;
        let them = !us;
        let from = bit_move.get_src();
        let to = bit_move.get_dest();
        let piece = self.piece_locations.piece_at(from);
        let piece_type = piece.type_of();

        let captured = if bit_move.is_en_passant() {
            PieceType::P
        } else {
            self.piece_locations.piece_at(to).type_of()
        };

        debug_assert_eq!(piece.player(), Some(us));
        debug_assert_ne!(captured, PieceType::K);

        if let Some(side) = bit_move.castle_type() {
            debug_assert_eq!(piece_type, PieceType::K);
            let path = CastlePath::of(us, side);
            self.apply_castling(us, &path);
            zob ^= z_square(path.rook_from, us, PieceType::R)
                ^ z_square(path.rook_to, us, PieceType::R);
        } else if captured.is_some() {
            let cap_sq = if bit_move.is_en_passant() {
                debug_assert_eq!(piece_type, PieceType::P);
                debug_assert_eq!(Some(to), self.state.ep_square);
                SQ((to.0 as i8 - us.pawn_push().delta()) as u8)
            } else {
                to
            };
            self.remove_piece_c(captured, cap_sq, them);
            zob ^= z_square(cap_sq, them, captured);
            new_state.rule_50 = 0;
        }

        if !bit_move.is_castle() {
            self.move_piece_c(piece, from, to);
        }
        zob ^= z_square(from, us, piece_type) ^ z_square(to, us, piece_type);

        // Reset the en-passant square
        if let Some(ep) = self.state.ep_square {
            zob ^= z_ep(ep);
            new_state.ep_square = None;
        }

        // Update castling rights
        if !new_state.castling.no_castling() {
            let changed = new_state.castling.update_castling(to, from);
            zob ^= z_castle(changed);
        }

        if piece_type == PieceType::P {
            if from.distance(to) == 2 {
                // the square the pawn jumped over
                let ep_sq = SQ((from.0 + to.0) / 2);
                new_state.ep_square = Some(ep_sq);
                zob ^= z_ep(ep_sq);
            } else if bit_move.is_promo() {
                let promo = bit_move.promo_piece();
                self.remove_piece_c(PieceType::P, to, us);
                self.put_piece_c(Piece::make_lossy(us, promo), to);
                zob ^= z_square(to, us, PieceType::P) ^ z_square(to, us, promo);
            }
            new_state.rule_50 = 0;
        }

        new_state.captured_piece = captured;
        new_state.zobrist = zob;

        let prev_state = std::mem::replace(&mut self.state, new_state);
        self.history.push(prev_state);
        self.half_moves += 1;
        self.turn = them;

        self.set_check_info();
        trace!("applied {} ({} to move)", bit_move, self.turn);

        if cfg!(debug_assertions) {
            if let Err(err) = self.is_okay() {
                panic!("board corrupted after applying {}: {}\n{}", bit_move, err, self);
            }
        }
    }

    /// Applies a move for a specific player, checking that the move is playable first.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidPlayer` for `Player::Both`, and `BoardError::InvalidMove` when it is
    /// not that player's turn or the move is not legal in the current position.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::{Board, BitMove, BoardError, Player, SQ};
    ///
    /// let mut board = Board::start_pos();
    /// let mv = BitMove::make_pawn_push(SQ::E2, SQ::E4);
    /// assert_eq!(board.apply_move_as(Player::Both, mv), Err(BoardError::InvalidPlayer));
    /// assert!(board.apply_move_as(Player::Black, mv).is_err());
    /// assert!(board.apply_move_as(Player::White, mv).is_ok());
    /// ```
    pub fn apply_move_as(&mut self, player: Player, bit_move: BitMove) -> Result<(), BoardError> {
        let player = player.acting()?;
        if player != self.turn {
            return Err(BoardError::invalid_move(
                bit_move.stringify(),
                "it is not this player's turn",
            ));
        }
        if !self.generate_moves().contains(bit_move) {
            return Err(BoardError::invalid_move(
                bit_move.stringify(),
                "not a legal move in this position",
            ));
        }
        self.apply_move(bit_move);
        Ok(())
    }

    /// Applies a UCI move to the board. If the move is a valid string representing a UCI move,
    /// it is applied and returned. Otherwise the board is left untouched.
    ///
    /// # Errors
    ///
    /// `BoardError::MalformedEncoding` if the text is not a move at all, and
    /// `BoardError::InvalidMove` if it names no legal move of the position.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let mut board = Board::start_pos();
    /// assert!(board.apply_uci_move("e2e4").is_ok());
    /// assert!(board.apply_uci_move("e7e1").is_err());
    /// assert_eq!(board.moves_played(), 1);
    /// ```
    pub fn apply_uci_move(&mut self, uci_move: &str) -> Result<BitMove, BoardError> {
        let (src, dst, promo) = BitMove::parse_uci(uci_move).map_err(|err| {
            warn!("rejected move text {:?}: {}", uci_move, err);
            err
        })?;
        let promo = promo.unwrap_or(PieceType::None);
        let found = self
            .generate_moves()
            .iter()
            .find(|m| m.get_src() == src && m.get_dest() == dst && m.promo_piece() == promo)
            .copied();
        match found {
            Some(mv) => {
                self.apply_move(mv);
                Ok(mv)
            }
            None => {
                warn!("move {:?} is not legal in {}", uci_move, self.fen());
                Err(BoardError::invalid_move(
                    uci_move.trim(),
                    "not a legal move in this position",
                ))
            }
        }
    }

    /// Un-does the previously applied move, allowing the Board to return to it's most recently held state.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied since the board was created, or if the last move
    /// applied was a null move.
    pub fn undo_move(&mut self) {
        let prev_state = match self.history.pop() {
            Some(state) => state,
            None => panic!("undo_move called on a board without history"),
        };
        let undo_move = self.state.prev_move;
        assert!(
            !undo_move.is_null(),
            "undo_move called after a null move, use undo_null_move"
        );

        self.turn = !self.turn;
        let us = self.turn;
        let them = !us;
        let from = undo_move.get_src();
        let to = undo_move.get_dest();

        if let Some(side) = undo_move.castle_type() {
            self.remove_castling(us, &CastlePath::of(us, side));
        } else {
            if undo_move.is_promo() {
                self.remove_piece_c(undo_move.promo_piece(), to, us);
                self.put_piece_c(Piece::make_lossy(us, PieceType::P), to);
            }
            let piece = self.piece_locations.piece_at(to);
            self.move_piece_c(piece, to, from);

            let captured = self.state.captured_piece;
            if captured.is_some() {
                let cap_sq = if undo_move.is_en_passant() {
                    SQ((to.0 as i8 - us.pawn_push().delta()) as u8)
                } else {
                    to
                };
                self.put_piece_c(Piece::make_lossy(them, captured), cap_sq);
            }
        }

        self.state = prev_state;
        self.half_moves -= 1;
        trace!("undid {} ({} to move)", undo_move, self.turn);

        if cfg!(debug_assertions) {
            if let Err(err) = self.is_okay() {
                panic!("board corrupted after undoing {}: {}\n{}", undo_move, err, self);
            }
        }
    }

    /// Apply a "Null Move" to the board, essentially swapping the current turn of
    /// the board without moving any pieces.
    ///
    /// # Panics
    ///
    /// The side to move must not be in check, as passing would leave the king capturable.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::{Board, Player};
    ///
    /// let mut chessboard = Board::start_pos();
    /// let board_clone = chessboard.clone();
    ///
    /// chessboard.apply_null_move();
    /// assert_eq!(chessboard.turn(), Player::Black);
    /// assert_eq!(chessboard.moves_played(), 1);
    ///
    /// chessboard.undo_null_move();
    /// assert_eq!(chessboard, board_clone);
    /// ```
    pub fn apply_null_move(&mut self) {
        assert!(!self.in_check(), "null move applied while in check");

        let mut zob = self.state.zobrist ^ z_side();
        let mut new_state = self.state.partial_clone();
        new_state.rule_50 += 1;
        new_state.ply += 1;
        new_state.prev_move = BitMove::null();

        if let Some(ep) = self.state.ep_square {
            zob ^= z_ep(ep);
            new_state.ep_square = None;
        }
        new_state.zobrist = zob;

        let prev_state = std::mem::replace(&mut self.state, new_state);
        self.history.push(prev_state);
        self.half_moves += 1;
        self.turn = !self.turn;
        self.set_check_info();
        trace!("applied null move ({} to move)", self.turn);
    }

    /// Undo a "Null Move" to the Board, returning to the previous state.
    ///
    /// # Panics
    ///
    /// Panics if the last move applied was not a null move.
    pub fn undo_null_move(&mut self) {
        assert!(
            self.state.prev_move.is_null() && !self.history.is_empty(),
            "undo_null_move called without a null move to undo"
        );
        if let Some(prev_state) = self.history.pop() {
            self.state = prev_state;
        }
        self.half_moves -= 1;
        self.turn = !self.turn;
    }

    /// Get a List of legal `BitMove`s for the player whose turn it is to move.
    ///
    /// This method already takes into account if the Board is currently in check, and will return
    /// legal moves only.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let chessboard = Board::start_pos();
    /// let moves = chessboard.generate_moves();
    ///
    /// println!("There are {} possible legal moves.", moves.len());
    /// ```
    pub fn generate_moves(&self) -> MoveList {
        movegen::MoveGen::generate::<movegen::Legal>(self, GenTypes::All)
    }

    /// Get a List of all PseudoLegal `BitMove`s for the player whose turn it is to move.
    /// Works exactly the same as `Board::generate_moves()`, but doesn't guarantee that all
    /// the moves are legal for the current position. Moves need to be checked with a
    /// `Board::legal_move(move)` in order to be certain of a legal move.
    pub fn generate_pseudolegal_moves(&self) -> MoveList {
        movegen::MoveGen::generate::<movegen::PseudoLegal>(self, GenTypes::All)
    }

    /// Get a List of legal `BitMove`s for the player whose turn it is to move, of a
    /// certain type.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    /// use stonewall::core::GenTypes;
    ///
    /// let chessboard = Board::start_pos();
    /// let capturing_moves = chessboard.generate_moves_of_type(GenTypes::Captures);
    ///
    /// assert_eq!(capturing_moves.len(), 0); // no possible captures for the starting position
    /// ```
    pub fn generate_moves_of_type(&self, gen_type: GenTypes) -> MoveList {
        movegen::MoveGen::generate::<movegen::Legal>(self, gen_type)
    }

    /// Get a List of all PseudoLegal `BitMove`s for the player whose turn it is to move, of
    /// a certain type.
    pub fn generate_pseudolegal_moves_of_type(&self, gen_type: GenTypes) -> MoveList {
        movegen::MoveGen::generate::<movegen::PseudoLegal>(self, gen_type)
    }

    /// Creates a `Board` from a FEN string followed by moves in long algebraic notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    /// let board = Board::from_fen_and_moves(start, &["e2e4", "c7c5", "g1f3"]).unwrap();
    /// assert_eq!(board.fen(), "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2");
    /// ```
    pub fn from_fen_and_moves(fen: &str, moves: &[&str]) -> Result<Board, BoardError> {
        let mut board = Board::from_fen(fen)?;
        for mv in moves {
            board.apply_uci_move(mv)?;
        }
        Ok(board)
    }

    // ------- CASTLING & PIECE MOVEMENT -------

    fn apply_castling(&mut self, player: Player, path: &CastlePath) {
        let king = Piece::make_lossy(player, PieceType::K);
        let rook = Piece::make_lossy(player, PieceType::R);
        self.move_piece_c(king, path.king_from, path.king_to);
        self.move_piece_c(rook, path.rook_from, path.rook_to);
    }

    fn remove_castling(&mut self, player: Player, path: &CastlePath) {
        let king = Piece::make_lossy(player, PieceType::K);
        let rook = Piece::make_lossy(player, PieceType::R);
        self.move_piece_c(king, path.king_to, path.king_from);
        self.move_piece_c(rook, path.rook_to, path.rook_from);
    }

    /// Moves a piece between two squares, the destination being empty.
    fn move_piece_c(&mut self, piece: Piece, from: SQ, to: SQ) {
        debug_assert_ne!(from, to);
        debug_assert_eq!(self.piece_locations.piece_at(to), Piece::None);
        let comb_bb = from.to_bb() | to.to_bb();
        if let Some((player, piece_type)) = piece.player_piece() {
            self.occ_all ^= comb_bb;
            self.occ[player.idx()] ^= comb_bb;
            self.bbs[player.idx()][piece_type as usize] ^= comb_bb;
            self.piece_locations.remove(from);
            self.piece_locations.place(to, piece);
        }
    }

    /// Removes a piece from the board.
    fn remove_piece_c(&mut self, piece_type: PieceType, square: SQ, player: Player) {
        debug_assert_eq!(
            self.piece_locations.piece_at(square),
            Piece::make_lossy(player, piece_type)
        );
        let bb = square.to_bb();
        self.occ_all ^= bb;
        self.occ[player.idx()] ^= bb;
        self.bbs[player.idx()][piece_type as usize] ^= bb;
        self.piece_locations.remove(square);
        self.piece_counts[player.idx()][piece_type as usize] -= 1;
    }

    /// Places a piece on an empty square.
    fn put_piece_c(&mut self, piece: Piece, square: SQ) {
        debug_assert_eq!(self.piece_locations.piece_at(square), Piece::None);
        if let Some((player, piece_type)) = piece.player_piece() {
            let bb = square.to_bb();
            self.occ_all |= bb;
            self.occ[player.idx()] |= bb;
            self.bbs[player.idx()][piece_type as usize] |= bb;
            self.piece_locations.place(square, piece);
            self.piece_counts[player.idx()][piece_type as usize] += 1;
        }
    }

    // ------- CHECK INFORMATION -------

    /// Recomputes the checkers, blockers, pinners and checking squares of the current state.
    fn set_check_info(&mut self) {
        let us = self.turn;
        let them = !us;
        let our_ksq = self.king_sq(us);
        let their_ksq = self.king_sq(them);

        let checkers = self.attackers_to(our_ksq, self.occ_all) & self.get_occupied_player(them);
        let (white_blockers, black_pinners) = self.slider_blockers(
            self.get_occupied_player(Player::Black),
            self.king_sq(Player::White),
        );
        let (black_blockers, white_pinners) = self.slider_blockers(
            self.get_occupied_player(Player::White),
            self.king_sq(Player::Black),
        );

        let bishop_checks = bishop_moves(self.occ_all, their_ksq);
        let rook_checks = rook_moves(self.occ_all, their_ksq);

        let state = &mut self.state;
        state.checkers_bb = checkers;
        state.blockers_king[Player::White.idx()] = white_blockers;
        state.blockers_king[Player::Black.idx()] = black_blockers;
        state.pinners_king[Player::White.idx()] = white_pinners;
        state.pinners_king[Player::Black.idx()] = black_pinners;

        state.check_sqs[PieceType::P as usize] = pawn_attacks_from(their_ksq, them);
        state.check_sqs[PieceType::N as usize] = knight_moves(their_ksq);
        state.check_sqs[PieceType::B as usize] = bishop_checks;
        state.check_sqs[PieceType::R as usize] = rook_checks;
        state.check_sqs[PieceType::Q as usize] = bishop_checks | rook_checks;
        state.check_sqs[PieceType::K as usize] = BitBoard(0);
    }

    /// Returns the pieces standing alone between the square `s` and one of the `sliders`,
    /// and the sliders doing the pinning. A slider only pins if the lone piece in between
    /// belongs to the same side as the piece on `s`.
    pub fn slider_blockers(&self, sliders: BitBoard, s: SQ) -> (BitBoard, BitBoard) {
        let mut blockers = BitBoard(0);
        let mut pinners = BitBoard(0);
        let same_side = match self.player_at_sq(s) {
            Some(player) => self.get_occupied_player(player),
            None => BitBoard(0),
        };

        let snipers = sliders
            & ((rook_moves(BitBoard(0), s) & self.piece_two_bb_both_players(PieceType::R, PieceType::Q))
                | (bishop_moves(BitBoard(0), s)
                    & self.piece_two_bb_both_players(PieceType::B, PieceType::Q)));

        for sniper_sq in snipers {
            let b = between_bb(s, sniper_sq) & self.occ_all;
            if b.is_not_empty() && !b.more_than_one() {
                blockers |= b;
                if (b & same_side).is_not_empty() {
                    pinners |= sniper_sq.to_bb();
                }
            }
        }
        (blockers, pinners)
    }

    // ------- QUERIES -------

    /// Get the Player whose turn it is to move.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Board,Player};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.turn(), Player::White);
    /// ```
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Return the Zobrist Hash of the board.
    #[inline(always)]
    pub fn zobrist(&self) -> u64 {
        self.state.zobrist
    }

    /// Get the total number of moves played since the game started, counting the moves
    /// implied by the counters of a loaded FEN.
    ///
    /// ```
    /// use stonewall::Board;
    ///
    /// let mut chessboard = Board::start_pos();
    /// assert_eq!(chessboard.moves_played(), 0);
    ///
    /// let moves = chessboard.generate_moves();
    /// chessboard.apply_move(moves[0]);
    /// assert_eq!(chessboard.moves_played(), 1);
    /// ```
    #[inline(always)]
    pub fn moves_played(&self) -> u32 {
        self.half_moves
    }

    /// Get the number of plies applied to this board since it was created.
    #[inline(always)]
    pub fn ply(&self) -> u32 {
        self.state.ply
    }

    /// Get the current number of plies since a capture or pawn move.
    #[inline(always)]
    pub fn rule_50(&self) -> u32 {
        self.state.rule_50
    }

    /// The fullmove counter of the FEN, starting at 1 and incremented after Black moves.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.half_moves / 2 + 1
    }

    /// Return the en-passant target square, if the last move was a double pawn push.
    #[inline(always)]
    pub fn ep_square(&self) -> Option<SQ> {
        self.state.ep_square
    }

    /// Returns the current castling rights.
    #[inline(always)]
    pub fn castling(&self) -> Castling {
        self.state.castling
    }

    /// Returns the castling rights as their raw bits.
    #[inline(always)]
    pub fn castling_bits(&self) -> u8 {
        self.state.castling.bits()
    }

    /// Return the last move played, if any.
    #[inline]
    pub fn last_move(&self) -> Option<BitMove> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.state.prev_move)
        }
    }

    /// Returns the piece captured by the last move, `PieceType::None` if there was none.
    #[inline(always)]
    pub fn piece_last_captured(&self) -> PieceType {
        self.state.captured_piece
    }

    /// Gets the BitBoard of all pieces.
    #[inline(always)]
    pub fn get_occupied(&self) -> BitBoard {
        self.occ_all
    }

    /// Get the BitBoard of the squares occupied by the given player. `Player::Both` gives
    /// every occupied square.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Board,Player,BitBoard};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.get_occupied_player(Player::White).0, 0x000000000000FFFF);
    /// assert_eq!(chessboard.get_occupied_player(Player::Both), chessboard.get_occupied());
    /// ```
    #[inline(always)]
    pub fn get_occupied_player(&self, player: Player) -> BitBoard {
        match player {
            Player::Both => self.occ_all,
            p => self.occ[p.idx()],
        }
    }

    /// Returns a Bitboard consisting of only the squares occupied by the White Player.
    #[inline(always)]
    pub fn occupied_white(&self) -> BitBoard {
        self.occ[Player::White.idx()]
    }

    /// Returns a BitBoard consisting of only the squares occupied by the Black Player.
    #[inline(always)]
    pub fn occupied_black(&self) -> BitBoard {
        self.occ[Player::Black.idx()]
    }

    /// Returns the BitBoard of a piece type for a player. `Player::Both` unions the two
    /// sides, and `PieceType::All` gives the player's whole occupancy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Board,Player,PieceType};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.piece_bb(Player::White,PieceType::P).0, 0x000000000000FF00);
    /// assert_eq!(chessboard.piece_bb(Player::Both,PieceType::K).count_bits(), 2);
    /// ```
    #[inline]
    pub fn piece_bb(&self, player: Player, piece: PieceType) -> BitBoard {
        match (player, piece) {
            (_, PieceType::All) => self.get_occupied_player(player),
            (Player::Both, _) => self.piece_bb_both_players(piece),
            (p, pt) => self.bbs[p.idx()][pt as usize],
        }
    }

    /// Returns the combined BitBoard of both players for a given piece.
    #[inline(always)]
    pub fn piece_bb_both_players(&self, piece: PieceType) -> BitBoard {
        self.bbs[0][piece as usize] | self.bbs[1][piece as usize]
    }

    /// Returns the combined BitBoard of both players for two pieces.
    #[inline(always)]
    pub fn piece_two_bb_both_players(&self, piece: PieceType, piece2: PieceType) -> BitBoard {
        self.piece_bb_both_players(piece) | self.piece_bb_both_players(piece2)
    }

    /// Returns the BitBoard containing the locations of two given types of pieces for the given
    /// player.
    #[inline(always)]
    pub fn piece_two_bb(&self, piece: PieceType, piece2: PieceType, player: Player) -> BitBoard {
        self.piece_bb(player, piece) | self.piece_bb(player, piece2)
    }

    /// Get the BitBoard of the rooks and queens of a player.
    #[inline(always)]
    pub fn sliding_piece_bb(&self, player: Player) -> BitBoard {
        self.piece_two_bb(PieceType::R, PieceType::Q, player)
    }

    /// Get the BitBoard of the bishops and queens of a player.
    #[inline(always)]
    pub fn diagonal_piece_bb(&self, player: Player) -> BitBoard {
        self.piece_two_bb(PieceType::B, PieceType::Q, player)
    }

    /// Get the total number of pieces of the given piece and player. `Player::Both` counts
    /// the pieces of both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stonewall::{Board,Player,PieceType};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.count_piece(Player::White, PieceType::P), 8);
    /// assert_eq!(chessboard.count_piece(Player::Both, PieceType::N), 4);
    /// ```
    #[inline]
    pub fn count_piece(&self, player: Player, piece: PieceType) -> u8 {
        match (player, piece) {
            (_, PieceType::All) => self.count_pieces_player(player),
            (Player::Both, pt) => {
                self.piece_counts[0][pt as usize] + self.piece_counts[1][pt as usize]
            }
            (p, pt) => self.piece_counts[p.idx()][pt as usize],
        }
    }

    /// Get the total number of pieces a given player has.
    #[inline]
    pub fn count_pieces_player(&self, player: Player) -> u8 {
        self.get_occupied_player(player).count_bits()
    }

    /// Get the total number of pieces on the board.
    #[inline]
    pub fn count_all_pieces(&self) -> u8 {
        self.occ_all.count_bits()
    }

    /// Returns the Piece, if any, at the square.
    #[inline(always)]
    pub fn piece_at_sq(&self, sq: SQ) -> Piece {
        debug_assert!(sq.is_okay());
        self.piece_locations.piece_at(sq)
    }

    /// Returns the Player, if any, occupying the square.
    #[inline(always)]
    pub fn player_at_sq(&self, sq: SQ) -> Option<Player> {
        self.piece_locations.player_at(sq)
    }

    /// Returns the square of the King for a given player.
    #[inline(always)]
    pub fn king_sq(&self, player: Player) -> SQ {
        self.bbs[player.idx()][PieceType::K as usize].to_sq()
    }

    /// Returns the pinned pieces of the given player.
    ///
    /// Pinned is defined as pinned to the same players king
    #[inline(always)]
    pub fn pinned_pieces(&self, player: Player) -> BitBoard {
        self.state.blockers_king[player.idx()] & self.get_occupied_player(player)
    }

    /// Returns the pinned pieces for a given players king. Can contain piece of from both players,
    /// but all are guaranteed to be pinned to the given player's king.
    #[inline(always)]
    pub fn all_pinned_pieces(&self, player: Player) -> BitBoard {
        self.state.blockers_king[player.idx()]
    }

    /// Returns the pinning pieces of a given player.
    /// e.g, pieces that are pinning a piece to the opponent's king.
    #[inline(always)]
    pub fn pinning_pieces(&self, player: Player) -> BitBoard {
        self.state.pinners_king[player.idx()]
    }

    /// Return if a player has the possibility of castling for a given CastleType.
    /// This does not ensure a castling is possible for the player, just that the player
    /// has the castling-right available.
    #[inline(always)]
    pub fn can_castle(&self, player: Player, castle_type: CastleType) -> bool {
        self.state.castling.castle_rights(player, castle_type)
    }

    /// Check if the castle path is impeded for the current player. Does not assume that the
    /// current player has the ability to castle, whether by having the castling-rights to, or
    /// having the rook and king be in the correct square.
    #[inline]
    pub fn castle_impeded(&self, castle_type: CastleType) -> bool {
        let path = CastlePath::of(self.turn, castle_type);
        (between_bb(path.king_from, path.rook_from) & self.occ_all).is_not_empty()
    }

    /// Returns the material of a player: the sum of the values of its pieces, king
    /// included. `Player::Both` sums both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::{Board, Player};
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.material(Player::White), 32000 + 975 + 2 * 500 + 4 * 325 + 8 * 100);
    /// assert_eq!(board.material(Player::Both), 2 * board.material(Player::Black));
    /// ```
    pub fn material(&self, player: Player) -> Value {
        ALL_PIECE_TYPES
            .iter()
            .map(|pt| score::material(*pt, self.count_piece(player, *pt)))
            .sum()
    }

    /// Returns a BitBoard of the pieces currently giving check to the side to move.
    #[inline(always)]
    pub fn checkers(&self) -> BitBoard {
        self.state.checkers_bb
    }

    /// Returns if the current player is in check.
    #[inline(always)]
    pub fn in_check(&self) -> bool {
        self.state.checkers_bb.is_not_empty()
    }

    /// Returns if the current player is checkmated.
    pub fn checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    /// Returns if the current player has no legal moves while not being in check.
    pub fn stalemate(&self) -> bool {
        !self.in_check() && self.generate_moves().is_empty()
    }

    /// Returns the squares the given piece type attacks from a square, for the side to move,
    /// given the current occupancy.
    #[inline]
    pub fn attacks_from(&self, piece: PieceType, sq: SQ) -> BitBoard {
        attacks_from(piece, sq, self.occ_all, self.turn)
    }

    /// Returns a BitBoard of the pieces of both sides attacking a square, given an occupancy.
    pub fn attackers_to(&self, sq: SQ, occupied: BitBoard) -> BitBoard {
        (pawn_attacks_from(sq, Player::Black) & self.piece_bb(Player::White, PieceType::P))
            | (pawn_attacks_from(sq, Player::White) & self.piece_bb(Player::Black, PieceType::P))
            | (knight_moves(sq) & self.piece_bb_both_players(PieceType::N))
            | (rook_moves(occupied, sq) & self.piece_two_bb_both_players(PieceType::R, PieceType::Q))
            | (bishop_moves(occupied, sq)
                & self.piece_two_bb_both_players(PieceType::B, PieceType::Q))
            | (king_moves(sq) & self.piece_bb_both_players(PieceType::K))
    }

    /// Returns if a square is attacked by any piece of the given player.
    #[inline]
    pub fn square_attacked_by(&self, sq: SQ, player: Player) -> bool {
        (self.attackers_to(sq, self.occ_all) & self.get_occupied_player(player)).is_not_empty()
    }

    /// Returns the squares from which each piece type of the side to move would give check.
    #[inline(always)]
    pub fn check_squares(&self, piece: PieceType) -> BitBoard {
        self.state.check_sqs[piece as usize]
    }

    /// Pieces of the side to move that, by moving off their line, would check the opposing
    /// king.
    #[inline(always)]
    pub fn discovered_check_candidates(&self) -> BitBoard {
        self.state.blockers_king[(!self.turn).idx()] & self.get_occupied_player(self.turn)
    }

    // ------- MOVE TESTING -------

    /// Tests if a given pseudo-legal move is a legal. This is mostly for checking the legality of
    /// moves that were generated in a pseudo-legal fashion.
    ///
    /// # Panics
    ///
    /// The move must be pseudo-legal for the position. Use [`Board::pseudo_legal_move`] for
    /// moves of unknown origin.
    ///
    /// [`Board::pseudo_legal_move`]: #method.pseudo_legal_move
    pub fn legal_move(&self, m: BitMove) -> bool {
        if m.is_null() {
            return false;
        }
        let us = self.turn;
        let them = !us;
        let src = m.get_src();
        let src_bb = src.to_bb();
        let dst = m.get_dest();
        let ksq = self.king_sq(us);

        if m.is_en_passant() {
            let cap_sq = SQ((dst.0 as i8 - us.pawn_push().delta()) as u8);
            let occupied = (self.occ_all ^ src_bb ^ cap_sq.to_bb()) | dst.to_bb();
            let attackers = self.attackers_to(ksq, occupied)
                & self.get_occupied_player(them)
                & !cap_sq.to_bb();
            return attackers.is_empty();
        }

        if let Some(side) = m.castle_type() {
            if self.in_check() {
                return false;
            }
            let path = CastlePath::of(us, side);
            let mut span = between_bb(path.king_from, path.king_to) | path.king_to.to_bb();
            return span.all(|s| !self.square_attacked_by(s, them));
        }

        if src == ksq {
            let occupied = self.occ_all ^ src_bb;
            return (self.attackers_to(dst, occupied) & self.get_occupied_player(them)).is_empty();
        }

        let checkers = self.checkers();
        if checkers.more_than_one() {
            return false;
        }
        if checkers.is_not_empty() {
            let checker = checkers.to_sq();
            let evasion = between_bb(ksq, checker) | checkers;
            if !evasion.contains(dst) {
                return false;
            }
        }

        (self.pinned_pieces(us) & src_bb).is_empty() || aligned(src, dst, ksq)
    }

    /// Returns if a move is pseudo-legal for the current position: a move the generator
    /// would produce before the king-safety filter. Accepts any `BitMove`.
    pub fn pseudo_legal_move(&self, m: BitMove) -> bool {
        !m.is_null() && self.generate_pseudolegal_moves().contains(m)
    }

    /// Returns if a move is legal for the current position. Accepts any `BitMove`.
    pub fn is_legal(&self, m: BitMove) -> bool {
        self.pseudo_legal_move(m) && self.legal_move(m)
    }

    /// Returns if a legal move would give check to the opponent.
    pub fn gives_check(&self, m: BitMove) -> bool {
        let src = m.get_src();
        let dst = m.get_dest();
        let src_bb = src.to_bb();
        let us = self.turn;
        let opp_king_sq = self.king_sq(!us);
        let piece = self.piece_at_sq(src).type_of();

        // direct check
        if self.check_squares(piece).contains(dst) {
            return true;
        }

        // discovered check
        if (self.discovered_check_candidates() & src_bb).is_not_empty()
            && !aligned(src, dst, opp_king_sq)
        {
            return true;
        }

        match m.move_type() {
            MoveType::Normal => false,
            MoveType::Promotion => {
                let occupied = self.occ_all ^ src_bb;
                attacks_from(m.promo_piece(), dst, occupied, us).contains(opp_king_sq)
            }
            MoveType::EnPassant => {
                let cap_sq = SQ((dst.0 as i8 - us.pawn_push().delta()) as u8);
                let occupied = (self.occ_all ^ src_bb ^ cap_sq.to_bb()) | dst.to_bb();
                ((rook_moves(occupied, opp_king_sq) & self.sliding_piece_bb(us))
                    | (bishop_moves(occupied, opp_king_sq) & self.diagonal_piece_bb(us)))
                .is_not_empty()
            }
            MoveType::Castle => match m.castle_type() {
                Some(side) => {
                    let path = CastlePath::of(us, side);
                    let occupied = (self.occ_all ^ path.king_from.to_bb() ^ path.rook_from.to_bb())
                        | path.king_to.to_bb()
                        | path.rook_to.to_bb();
                    rook_moves(occupied, path.rook_to).contains(opp_king_sq)
                }
                None => false,
            },
        }
    }

    // ------- VALIDATION -------

    /// Checks the internal consistency of the board, returning a description of the first
    /// inconsistency found.
    ///
    /// This verifies that the piece bitboards are disjoint and agree with the occupancy and
    /// the mailbox, that each side has one king, and that the hash and checkers match a
    /// computation from scratch.
    pub fn is_okay(&self) -> Result<(), String> {
        let mut all = BitBoard(0);
        for player in ALL_PLAYERS.iter() {
            let mut side = BitBoard(0);
            for pt in ALL_PIECE_TYPES.iter() {
                let bb = self.bbs[player.idx()][*pt as usize];
                if (bb & side).is_not_empty() {
                    return Err(format!("{} {} bitboard overlaps other pieces", player, pt));
                }
                if bb.count_bits() != self.piece_counts[player.idx()][*pt as usize] {
                    return Err(format!("{} {} count out of sync", player, pt));
                }
                side |= bb;
            }
            if side != self.occ[player.idx()] {
                return Err(format!("{} occupancy out of sync", player));
            }
            if (side & all).is_not_empty() {
                return Err("the two sides overlap".to_string());
            }
            all |= side;
            let kings = self.bbs[player.idx()][PieceType::K as usize].count_bits();
            if kings != 1 {
                return Err(format!("{} has {} kings", player, kings));
            }
        }
        if all != self.occ_all {
            return Err("total occupancy out of sync".to_string());
        }

        for sq in SQ::iter() {
            let expected = match self.player_at_bitboards(sq) {
                Some((player, pt)) => Piece::make_lossy(player, pt),
                None => Piece::None,
            };
            if self.piece_locations.piece_at(sq) != expected {
                return Err(format!("mailbox disagrees with bitboards on {}", sq));
            }
        }

        if let Some(ep) = self.state.ep_square {
            let rank = ep.rank();
            if rank != Rank::R3 && rank != Rank::R6 {
                return Err(format!("en-passant square {} on a wrong rank", ep));
            }
        }

        if self.compute_zobrist() != self.state.zobrist {
            return Err("zobrist key out of sync".to_string());
        }

        let ksq = self.king_sq(self.turn);
        let checkers = self.attackers_to(ksq, self.occ_all) & self.get_occupied_player(!self.turn);
        if checkers != self.state.checkers_bb {
            return Err("checkers out of sync".to_string());
        }
        Ok(())
    }

    fn player_at_bitboards(&self, sq: SQ) -> Option<(Player, PieceType)> {
        for player in ALL_PLAYERS.iter() {
            for pt in ALL_PIECE_TYPES.iter() {
                if self.bbs[player.idx()][*pt as usize].contains(sq) {
                    return Some((*player, *pt));
                }
            }
        }
        None
    }

    /// Returns a prettified String of the current board, for quick display.
    ///
    /// Capital Letters represent White pieces, while lower case represents Black pieces.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 8);
        for sq in SQ_DISPLAY_ORDER.iter() {
            let op = self.piece_locations.piece_at(SQ(*sq));
            let char = op.character().unwrap_or('-');
            s.push(char);
            s.push(' ');
            if sq % 8 == 7 {
                s.push('\n');
            }
        }
        s
    }

    /// Prints a prettified representation of the board.
    pub fn pretty_print(&self) {
        println!("{}", self.pretty_string());
    }
}

#[derive(Eq, PartialEq)]
enum RandGen {
    InCheck,
    NoCheck,
    All,
}

/// Random [`Board`] generator, reached through [`Board::random`].
///
/// Positions are made by playing random legal moves from the starting position. Without
/// [`RandBoard::pseudo_random`] the moves are drawn from entropy.
///
/// # Examples
///
/// ```
/// use stonewall::Board;
///
/// let boards = Board::random().pseudo_random(9).min_moves(6).no_check().many(3);
/// assert_eq!(boards.len(), 3);
/// assert!(boards.iter().all(|b| !b.in_check() && b.moves_played() >= 6));
/// ```
///
/// [`Board`]: struct.Board.html
/// [`Board::random`]: struct.Board.html#method.random
/// [`RandBoard::pseudo_random`]: #method.pseudo_random
pub struct RandBoard {
    gen_type: RandGen,
    minimum_move: u32,
    rng: StdRng,
}

impl Default for RandBoard {
    fn default() -> Self {
        RandBoard {
            gen_type: RandGen::All,
            minimum_move: 1,
            rng: StdRng::from_entropy(),
        }
    }
}

/// Plies played before a random game is abandoned and restarted.
const RAND_MAX_PLIES: u32 = 100;

impl RandBoard {
    /// Creates a `Vec<Board>` full of `Boards` containing random positions. The
    /// `Vec` will be of size 'size'.
    pub fn many(mut self, size: usize) -> Vec<Board> {
        (0..size).map(|_| self.go()).collect()
    }

    /// Creates a singular `Board` with a random position.
    pub fn one(mut self) -> Board {
        self.go()
    }

    /// Turns PseudoRandom generation on. This allows for the same random `Board`s
    /// to be created from the same seed.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the minimum moves a randomly generated `Board` must contain.
    pub fn min_moves(mut self, moves: u16) -> Self {
        self.minimum_move = u32::from(moves).min(RAND_MAX_PLIES - 1);
        self
    }

    /// Guarantees that the boards returned are in check.
    pub fn in_check(mut self) -> Self {
        self.gen_type = RandGen::InCheck;
        self
    }

    /// Guarantees that the boards returned are not in check.
    pub fn no_check(mut self) -> Self {
        self.gen_type = RandGen::NoCheck;
        self
    }

    fn go(&mut self) -> Board {
        loop {
            let mut board = Board::start_pos();
            while board.moves_played() < RAND_MAX_PLIES {
                let moves = board.generate_moves();
                if moves.is_empty() {
                    break;
                }
                if self.accepts(&board) && self.rng.gen_ratio(1, 12) {
                    return board;
                }
                let mv = moves[self.rng.gen_range(0..moves.len())];
                board.apply_move(mv);
            }
        }
    }

    fn accepts(&self, board: &Board) -> bool {
        let gen = match self.gen_type {
            RandGen::All => true,
            RandGen::InCheck => board.in_check(),
            RandGen::NoCheck => !board.in_check(),
        };
        gen && board.moves_played() >= self.minimum_move
    }
}
