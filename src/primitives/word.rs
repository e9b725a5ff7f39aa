//! 32-bit word helpers
//!
//! SHA-256 operates on 32-bit unsigned words read from and written to
//! bytes in **big-endian** (network) order. These helpers are the only
//! place where that byte order is decided.

/// Rotates `x` right by `n` bits, wrapping the low bits around.
///
/// `n` must be in `0..32`. All SHA-256 call sites use fixed literals in
/// `2..=25`.
#[inline(always)]
pub const fn rotate_right(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Reads a big-endian 32-bit word.
#[inline(always)]
pub const fn bytes_to_word(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Writes a 32-bit word as 4 big-endian bytes.
#[inline(always)]
pub const fn word_to_bytes(word: u32) -> [u8; 4] {
    word.to_be_bytes()
}

/// Reads `N` consecutive big-endian words from `bytes`.
///
/// Words beyond the end of `bytes` are left zero.
pub fn words_from_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut out = [0u32; N];

    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *slot = bytes_to_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_low_bits() {
        assert_eq!(rotate_right(0x0000_0001, 1), 0x8000_0000);
        assert_eq!(rotate_right(0x1234_5678, 8), 0x7812_3456);
        assert_eq!(rotate_right(0xdead_beef, 0), 0xdead_beef);
    }

    #[test]
    fn rotation_is_not_a_shift() {
        let x = 0x0000_00ffu32;
        assert_ne!(rotate_right(x, 4), x >> 4);
        assert_eq!(rotate_right(x, 4), 0xf000_000f);
    }

    #[test]
    fn byte_order_is_big_endian() {
        assert_eq!(bytes_to_word([0x00, 0xab, 0x12, 0xf3]), 0x00ab_12f3);
        assert_eq!(word_to_bytes(0x00ab_12f3), [0x00, 0xab, 0x12, 0xf3]);
    }

    #[test]
    fn word_conversion_round_trips() {
        for w in [0u32, 1, 0x8000_0000, 0x6a09_e667, u32::MAX] {
            assert_eq!(bytes_to_word(word_to_bytes(w)), w);
        }

        for b in [[0u8; 4], [0xff; 4], [0x80, 0, 0, 1], [1, 2, 3, 4]] {
            assert_eq!(word_to_bytes(bytes_to_word(b)), b);
        }
    }

    #[test]
    fn reads_word_arrays() {
        let words: [u32; 2] = words_from_bytes(&[0, 0, 0, 1, 0xff, 0, 0, 0]);
        assert_eq!(words, [1, 0xff00_0000]);
    }
}
