//! Module for the `Castling` structure, which keeps track of the castling rights still
//! available to each player.
//!
//! At it's core, a [`Castling`] is a simple u8 which sets a bit for each right. A right only
//! records that neither the king nor the rook involved has moved: whether a castle is
//! playable right now also depends on the squares between them, and on attacks.
//!
//! [`Castling`]: struct.Castling.html

use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::*;
use crate::error::FenBuildError;

use std::fmt;

const ALL_CASTLING: u8 = 0b0000_1111;

bitflags! {
    /// The castling rights of both players.
    ///
    /// Keeps track of what sides are possible to castle from for each player.
    pub struct Castling: u8 {
        const WHITE_K      = C_WHITE_K_MASK; // White has King-side Castling ability
        const WHITE_Q      = C_WHITE_Q_MASK; // White has Queen-side Castling ability
        const BLACK_K      = C_BLACK_K_MASK; // Black has King-side Castling ability
        const BLACK_Q      = C_BLACK_Q_MASK; // Black has Queen-side Castling ability
        const WHITE_ALL    = Self::WHITE_K.bits // White can castle for both sides
                           | Self::WHITE_Q.bits;
        const BLACK_ALL    = Self::BLACK_K.bits // Black can castle for both sides
                           | Self::BLACK_Q.bits;
    }
}

impl Castling {
    /// Removes all castling possibility for a player. `Player::Both` removes every right.
    #[inline]
    pub fn remove_player_castling(&mut self, player: Player) {
        match player {
            Player::White => self.bits &= Self::BLACK_ALL.bits,
            Player::Black => self.bits &= Self::WHITE_ALL.bits,
            Player::Both => self.bits = 0,
        }
    }

    #[doc(hidden)]
    #[inline]
    pub const fn all_castling() -> Self {
        Castling { bits: ALL_CASTLING }
    }

    #[doc(hidden)]
    #[inline]
    pub const fn empty_set() -> Self {
        Castling { bits: 0 }
    }

    /// Returns the single right of a player for one side.
    #[inline]
    pub fn right_of(player: Player, side: CastleType) -> Castling {
        match (player, side) {
            (Player::White, CastleType::KingSide) => Castling::WHITE_K,
            (Player::White, CastleType::QueenSide) => Castling::WHITE_Q,
            (Player::Black, CastleType::KingSide) => Castling::BLACK_K,
            (Player::Black, CastleType::QueenSide) => Castling::BLACK_Q,
            (Player::Both, _) => Castling::empty_set(),
        }
    }

    /// Returns if a player can castle for a given side
    #[inline]
    pub fn castle_rights(self, player: Player, side: CastleType) -> bool {
        let right = Castling::right_of(player, side);
        !right.is_empty() && self.contains(right)
    }

    /// Returns the rights left to a single player.
    #[inline]
    pub fn player_can_castle(self, player: Player) -> Castling {
        match player {
            Player::White => self & Castling::WHITE_ALL,
            Player::Black => self & Castling::BLACK_ALL,
            Player::Both => self,
        }
    }

    /// Returns if both players have lost their ability to castle
    #[inline]
    pub fn no_castling(self) -> bool {
        self.is_empty()
    }

    /// Clears the rights lost by a piece leaving `from` or arriving on `to`, and returns
    /// the bits that were cleared.
    #[inline]
    pub fn update_castling(&mut self, to: SQ, from: SQ) -> u8 {
        let mask_change: u8 = to.castle_rights_mask() | from.castle_rights_mask();
        let to_return: u8 = self.bits & mask_change;
        self.bits &= !mask_change;
        to_return
    }

    /// Adds the Right to castle based on an `char`.
    ///
    /// ```md
    /// `K` -> Add White King-side Castling bit.
    /// `Q` -> Add White Queen-side Castling bit.
    /// `k` -> Add Black King-side Castling bit.
    /// `q` -> Add Black Queen-side Castling bit.
    /// `-` -> Do nothing.
    /// ```
    ///
    /// Any other character is an `UnrecognizedCastling` error.
    pub fn add_castling_char(&mut self, c: char) -> Result<(), FenBuildError> {
        self.bits |= match c {
            'K' => Castling::WHITE_K.bits,
            'Q' => Castling::WHITE_Q.bits,
            'k' => Castling::BLACK_K.bits,
            'q' => Castling::BLACK_Q.bits,
            '-' => 0,
            _ => return Err(FenBuildError::UnrecognizedCastling { c }),
        };
        Ok(())
    }

    /// Returns a pretty String representing the castling state
    ///
    /// Used for FEN Strings, with (`K` | `Q`) representing white castling abilities,
    /// and (`k` | `q`) representing black castling abilities. If there are no bits set,
    /// returns a String containing "-".
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            return "-".to_owned();
        }
        [
            (Castling::WHITE_K, 'K'),
            (Castling::WHITE_Q, 'Q'),
            (Castling::BLACK_K, 'k'),
            (Castling::BLACK_Q, 'q'),
        ]
        .iter()
        .filter(|(right, _)| self.contains(*right))
        .map(|(_, c)| *c)
        .collect()
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

/// The squares a castle passes through, for the player and side.
pub(crate) struct CastlePath {
    pub king_from: SQ,
    pub king_to: SQ,
    pub rook_from: SQ,
    pub rook_to: SQ,
}

impl CastlePath {
    #[inline]
    pub fn of(player: Player, side: CastleType) -> CastlePath {
        let p = player.idx();
        let s = side as usize;
        CastlePath {
            king_from: SQ(if p == 0 { WHITE_KING_START } else { BLACK_KING_START }),
            king_to: SQ(CASTLING_KING_DEST[p][s]),
            rook_from: SQ(CASTLING_ROOK_START[p][s]),
            rook_to: SQ(CASTLING_ROOK_DEST[p][s]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn const_test() {
        let c = Castling::all();
        let c_const = Castling::all_castling();
        assert_eq!(c, c_const);
    }

    #[test]
    fn chars_round_trip() {
        let mut c = Castling::empty_set();
        assert_eq!(c.pretty_string(), "-");
        for ch in "Kq".chars() {
            c.add_castling_char(ch).unwrap();
        }
        assert_eq!(c.to_string(), "Kq");
        assert!(c.castle_rights(Player::White, CastleType::KingSide));
        assert!(!c.castle_rights(Player::White, CastleType::QueenSide));
        assert!(!c.castle_rights(Player::Both, CastleType::KingSide));
        assert_eq!(
            c.add_castling_char('x'),
            Err(FenBuildError::UnrecognizedCastling { c: 'x' })
        );
    }

    #[test]
    fn rook_and_king_squares_clear_rights() {
        let mut c = Castling::all_castling();
        assert_eq!(c.update_castling(SQ::H8, SQ::H1), C_WHITE_K_MASK | C_BLACK_K_MASK);
        assert_eq!(c.to_string(), "Qq");
        assert_eq!(c.update_castling(SQ::E3, SQ::E2), 0);
        assert_eq!(c.update_castling(SQ::D8, SQ::E8), C_BLACK_Q_MASK);
        assert_eq!(c.to_string(), "Q");
        c.remove_player_castling(Player::Both);
        assert!(c.no_castling());
    }

    #[test]
    fn castle_paths() {
        let p = CastlePath::of(Player::Black, CastleType::QueenSide);
        assert_eq!(p.king_from, SQ::E8);
        assert_eq!(p.king_to, SQ::C8);
        assert_eq!(p.rook_from, SQ::A8);
        assert_eq!(p.rook_to, SQ::D8);
        assert_eq!(
            Castling::all_castling().player_can_castle(Player::White),
            Castling::WHITE_ALL
        );
    }
}
