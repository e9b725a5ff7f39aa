//! SHA-256 message padding
//!
//! The padded message is the original message, one `0x80` byte, the
//! minimum number of zero bytes bringing the length to 56 mod 64, and the
//! original length in bits as a 64-bit big-endian integer.
//!
//! Lengths of 2⁶¹ bytes or more overflow the length field; the digest of
//! such a message is unspecified.

use super::BLOCK_LEN;

/// Returns the padded length for a message of `len` bytes.
///
/// Always a positive multiple of 64 and at least `len + 9`.
pub const fn padded_len(len: usize) -> usize {
    (len + 8) / BLOCK_LEN * BLOCK_LEN + BLOCK_LEN
}

/// Pads `data` to a whole number of 64-byte blocks.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let total = padded_len(data.len());
    let mut out = Vec::with_capacity(total);

    out.extend_from_slice(data);
    out.push(0x80);
    out.resize(total - 8, 0x00);

    let bit_len = (data.len() as u64).wrapping_mul(8);
    out.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(out.len() % BLOCK_LEN, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_one_block() {
        let p = pad(&[]);

        assert_eq!(p.len(), 64);
        assert_eq!(p[0], 0x80);
        assert!(p[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn length_field_holds_original_bit_count() {
        let p = pad(b"abc");

        assert_eq!(p.len(), 64);
        assert_eq!(&p[..4], &[b'a', b'b', b'c', 0x80]);
        assert_eq!(&p[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn block_boundaries() {
        assert_eq!(padded_len(0), 64);
        assert_eq!(padded_len(55), 64);
        assert_eq!(padded_len(56), 128);
        assert_eq!(padded_len(63), 128);
        assert_eq!(padded_len(64), 128);
        assert_eq!(padded_len(65), 128);
        assert_eq!(padded_len(119), 128);
        assert_eq!(padded_len(120), 192);
    }

    #[test]
    fn marker_directly_follows_message() {
        for len in [55usize, 56, 63, 64, 65] {
            let data = vec![0xffu8; len];
            let p = pad(&data);

            assert_eq!(p.len(), padded_len(len));
            assert_eq!(p[len], 0x80);
            assert!(p[len + 1..p.len() - 8].iter().all(|&b| b == 0));
            assert_eq!(&p[p.len() - 8..], &((len as u64) * 8).to_be_bytes());
        }
    }
}
