//! Functions operating on the raw `u64` behind a `BitBoard`.
//!
//! All of these lower to single hardware instructions on targets that have them.

/// Counts the number of set bits.
#[inline(always)]
pub fn popcount64(x: u64) -> u8 {
    x.count_ones() as u8
}

/// Returns the index of the least significant set bit.
///
/// # Panics
///
/// Panics if `bits` is zero.
#[inline(always)]
pub fn bit_scan_forward(bits: u64) -> u8 {
    assert_ne!(bits, 0);
    bits.trailing_zeros() as u8
}

/// Returns the index of the most significant set bit.
///
/// # Panics
///
/// Panics if `bits` is zero.
#[inline(always)]
pub fn bit_scan_reverse(bits: u64) -> u8 {
    assert_ne!(bits, 0);
    63 - bits.leading_zeros() as u8
}

/// Returns if more than one bit is set.
#[inline(always)]
pub fn more_than_one(x: u64) -> bool {
    (x & (x.wrapping_sub(1))) != 0
}

/// Isolates the least significant bit. Zero stays zero.
#[inline(always)]
pub fn lsb(bits: u64) -> u64 {
    bits & bits.wrapping_neg()
}

/// Isolates the most significant bit. Zero stays zero.
#[inline(always)]
pub fn msb(bits: u64) -> u64 {
    if bits == 0 {
        0
    } else {
        1_u64 << (63 - bits.leading_zeros())
    }
}

/// Absolute difference of two bytes.
#[inline(always)]
pub fn diff(x: u8, y: u8) -> u8 {
    if x < y {
        y - x
    } else {
        x - y
    }
}

/// Mirrors every byte, so file A lands on the high bit of its rank.
#[inline]
pub fn reverse_bytes(b: u64) -> u64 {
    b.reverse_bits().swap_bytes()
}

/// Formats a u64 as eight lines of eight binary digits, highest byte first.
pub fn string_u64(input: u64) -> String {
    let format_in = format!("{:064b}", input);
    let mut s = String::with_capacity(72);
    for x in 0..8 {
        s += &format_in[x * 8..(x * 8) + 8];
        s += "\n";
    }
    s
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_bit_scan() {
        assert_eq!(bit_scan_forward(2), 1);
        assert_eq!(bit_scan_forward(32), 5);
        assert_eq!(bit_scan_forward(31), 0);
        assert_eq!(bit_scan_forward(0b110011100000010), 1);
        assert_eq!(bit_scan_reverse(0b110011100000010), 14);
        assert_eq!(bit_scan_reverse(1), 0);
        assert_eq!(bit_scan_reverse(1 << 63), 63);
    }

    #[test]
    #[should_panic]
    fn bit_scan_empty_panics() {
        bit_scan_forward(0);
    }

    #[test]
    fn lsb_msb() {
        assert_eq!(lsb(0b110011100000010), 0b10);
        assert_eq!(lsb(0b1), 0b1);
        assert_eq!(lsb(0), 0);
        assert_eq!(msb(0b0011), 0b0010);
        assert_eq!(msb(!0), 1 << 63);
        assert_eq!(msb(0), 0);
    }

    #[test]
    fn popcount_t() {
        assert_eq!(popcount64(0), 0);
        assert_eq!(popcount64(0b11111100000001), 7);
        assert_eq!(popcount64(0xFFFFFFFF), 32);
        assert!(more_than_one(0b101));
        assert!(!more_than_one(0b100));
        assert!(!more_than_one(0));
    }

    #[test]
    fn reversed_bytes_stay_in_place() {
        assert_eq!(reverse_bytes(0x01), 0x80);
        assert_eq!(reverse_bytes(0x0100), 0x8000);
        assert_eq!(reverse_bytes(0xFF00_0000_0000_0000), 0xFF00_0000_0000_0000);
    }

    #[test]
    fn string_layout() {
        let s = string_u64(0xFF);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[7], "11111111");
        assert_eq!(lines[0], "00000000");
    }
}
