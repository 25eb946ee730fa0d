//! Operator implementations for the single-field tuple structs wrapping integers.

/// Implements one binary operator and its assigning form, both against the wrapper
/// itself and against the raw integer.
macro_rules! impl_indv_bit_ops {
    ($t:ty, $b:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname for $t {
            type Output = $t;

            #[inline(always)]
            fn $fname(self, rhs: $t) -> $t {
                Self::from((self.0).$w(rhs.0))
            }
        }

        impl $ta_name for $t {
            #[inline(always)]
            fn $fa_name(&mut self, rhs: $t) {
                *self = Self::from((self.0).$w(rhs.0));
            }
        }

        impl $tname<$b> for $t {
            type Output = $t;

            #[inline(always)]
            fn $fname(self, rhs: $b) -> $t {
                Self::from((self.0).$w(rhs))
            }
        }

        impl $ta_name<$b> for $t {
            #[inline(always)]
            fn $fa_name(&mut self, rhs: $b) {
                *self = Self::from((self.0).$w(rhs));
            }
        }
    };
}

/// Implements `&`, `|`, `^`, `!`, wrapping `-`, the shifts by `usize`, and `From` in
/// both directions for a tuple struct around an unsigned integer.
macro_rules! impl_bit_ops {
    ($t:tt, $b:tt) => {
        impl From<$b> for $t {
            #[inline(always)]
            fn from(bit_type: $b) -> Self {
                $t(bit_type)
            }
        }

        impl From<$t> for $b {
            #[inline(always)]
            fn from(it: $t) -> Self {
                it.0
            }
        }

        impl_indv_bit_ops!($t, $b, BitOr, bitor, bitor, BitOrAssign, bitor_assign);
        impl_indv_bit_ops!($t, $b, BitAnd, bitand, bitand, BitAndAssign, bitand_assign);
        impl_indv_bit_ops!($t, $b, BitXor, bitxor, bitxor, BitXorAssign, bitxor_assign);
        impl_indv_bit_ops!($t, $b, Sub, sub, wrapping_sub, SubAssign, sub_assign);

        impl Shl<usize> for $t {
            type Output = $t;

            #[inline(always)]
            fn shl(self, rhs: usize) -> $t {
                $t((self.0).wrapping_shl(rhs as u32))
            }
        }

        impl Shr<usize> for $t {
            type Output = $t;

            #[inline(always)]
            fn shr(self, rhs: usize) -> $t {
                $t((self.0).wrapping_shr(rhs as u32))
            }
        }

        impl Not for $t {
            type Output = $t;

            #[inline(always)]
            fn not(self) -> $t {
                $t(!self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {

    use std::ops::*;

    macro_rules! test_bit_ops_impls {
        ($t:tt, $fi:expr, $si:expr, $opp:tt) => ({
            let c_a = $fi $opp $si;
            let c = $t::from($fi) $opp $t::from($si);
            assert_eq!(c.0, c_a);
            let c_raw = $t::from($fi) $opp $si;
            assert_eq!(c_raw.0, c_a);
        });
    }

    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    struct DummyBB(pub u64);

    impl_bit_ops!(DummyBB, u64);

    const BIT_CONSTS: [u64; 8] = [
        0xFE00C4D0,
        0x12F450012,
        0xFFFFFFFF,
        0x00000001,
        0xA0E34001,
        0xFF00_0000_0000_0000,
        0x412CBFFF,
        0,
    ];

    #[test]
    fn ops_match_raw_integer() {
        for bits in BIT_CONSTS.iter() {
            assert_eq!((!DummyBB::from(*bits)).0, !(*bits));
            for bits_2 in BIT_CONSTS.iter() {
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, ^);
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, |);
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, &);
                assert_eq!((DummyBB(*bits) - DummyBB(*bits_2)).0, bits.wrapping_sub(*bits_2));
            }
            for x in 0..64usize {
                assert_eq!((DummyBB(*bits) << x).0, *bits << x);
                assert_eq!((DummyBB(*bits) >> x).0, *bits >> x);
            }
        }
    }

    #[test]
    fn assigning_forms() {
        let mut d = DummyBB(0b1100);
        d |= DummyBB(0b0001);
        assert_eq!(d, DummyBB(0b1101));
        d &= 0b0101_u64;
        assert_eq!(d, DummyBB(0b0101));
        d ^= DummyBB(0b0001);
        assert_eq!(d, DummyBB(0b0100));
        d -= 1_u64;
        assert_eq!(d, DummyBB(0b0011));
        assert_eq!(u64::from(d), 0b0011);
    }
}
