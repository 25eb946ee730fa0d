//! Board representation and legal move generation for chess engines.
//!
//! The crate is split into three layers:
//!
//! - [`core`]: squares, bitboards, directions, pieces, players and moves.
//! - [`helper`]: process-wide attack tables and Zobrist keys, built once on first use.
//! - [`board`]: the mutable [`Board`], with move application, undo, FEN and move generation.
//!
//! # Examples
//!
//! Creating a [`Board`] with the starting position and walking every legal move:
//!
//! ```
//! use stonewall::Board;
//!
//! let mut board = Board::start_pos();
//! let list = board.generate_moves();
//! assert_eq!(list.len(), 20);
//!
//! for mov in list.iter() {
//!     board.apply_move(*mov);
//!     assert!(!board.fen().is_empty());
//!     board.undo_move();
//! }
//! ```
//!
//! Positions can be loaded from FEN and moves applied in long algebraic notation:
//!
//! ```
//! use stonewall::Board;
//!
//! let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
//! board.apply_uci_move("e2e4").unwrap();
//! assert_eq!(board.fen(), "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
//! ```
//!
//! [`core`]: core/index.html
//! [`helper`]: helper/index.html
//! [`board`]: board/index.html
//! [`Board`]: board/struct.Board.html

#![allow(clippy::unreadable_literal)]
#![allow(clippy::inline_always)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod board;
pub mod core;
pub mod error;
pub mod helper;

#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::bitboard::BitBoard;
#[doc(no_inline)]
pub use crate::core::direction::{Direction, Increment};
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::piece_move::BitMove;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{File, Piece, PieceType, Player, Rank};
#[doc(no_inline)]
pub use crate::error::BoardError;
