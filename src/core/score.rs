//! Primitives for summing material.
//!
//! Piece values are stored as `i16`, but two kings alone already sum past `i16::MAX`, so
//! every aggregate is carried in a [`Value`].
//!
//! [`Value`]: type.Value.html

use super::PieceType;

/// Type for `i32` to hold the sum of one or more piece values.
pub type Value = i32;

pub const ZERO: Value = 0;

pub const PAWN: Value = PieceType::P.value() as Value;
pub const KNIGHT: Value = PieceType::N.value() as Value;
pub const BISHOP: Value = PieceType::B.value() as Value;
pub const ROOK: Value = PieceType::R.value() as Value;
pub const QUEEN: Value = PieceType::Q.value() as Value;
pub const KING: Value = PieceType::K.value() as Value;

/// Widens a single piece value.
#[inline(always)]
pub fn value_of(piece: PieceType) -> Value {
    Value::from(piece.value())
}

/// Sums the value of `count` pieces of a type.
#[inline]
pub fn material(piece: PieceType, count: u8) -> Value {
    value_of(piece) * Value::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_agree() {
        assert_eq!(value_of(PieceType::Q), QUEEN);
        assert_eq!(value_of(PieceType::None), ZERO);
        assert_eq!(KING, 32000);
    }

    #[test]
    fn king_pair_exceeds_i16() {
        let both_kings = material(PieceType::K, 2);
        assert_eq!(both_kings, 64000);
        assert!(both_kings > Value::from(i16::MAX));
    }
}
