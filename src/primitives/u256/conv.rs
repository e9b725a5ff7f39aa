//! Conversions between `U256` and its word and byte representations.
//!
//! Both directions use big-endian order: word 0 and byte 0 are the most
//! significant.

use super::core::U256;
use crate::primitives::word::{word_to_bytes, words_from_bytes};

/// Splits a `U256` into 8 big-endian `u32` words.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        words_from_bytes(&value.0)
    }
}

/// Builds a `U256` from 8 big-endian `u32` words.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&word_to_bytes(word));
        }

        U256(out)
    }
}

impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Attempts to read a `U256` from a byte slice.
///
/// Fails unless the slice holds exactly 32 bytes.
impl TryFrom<&[u8]> for U256 {
    type Error = ();

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = value.try_into().map_err(|_| ())?;

        Ok(U256(bytes))
    }
}
