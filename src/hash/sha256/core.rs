//! SHA-256 core hashing functions
//!
//! This module implements the driver of the SHA-256 hash function as
//! defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a one-shot digest function for arbitrary-length input
//! - its lowercase hexadecimal rendering
//!
//! Every call starts from a fresh state. Nothing is shared between calls,
//! so the functions here may be used from any number of threads at once.

use tracing::trace;

use super::computations::{all_rounds, expand_schedule};
use super::padding::pad;
use super::{BLOCK_LEN, H256_INIT};
use crate::primitives::U256;

/// Compresses a single 512-bit message block.
///
/// Expands the block into its 64-word schedule, runs all 64 rounds, and
/// adds the result into `state`.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let w = expand_schedule(block);

    all_rounds(state, &w);
}

/// Hash state of one digest computation.
///
/// Created fresh for each message and consumed by `finish`.
struct Session {
    state: [u32; 8],
}

impl Session {
    fn new() -> Self {
        Self { state: H256_INIT }
    }

    /// Feeds a padded message through the compression function, in order.
    fn absorb(&mut self, padded: &[u8]) {
        let (blocks, rest) = padded.as_chunks::<BLOCK_LEN>();
        debug_assert!(rest.is_empty());

        for block in blocks {
            compress(block, &mut self.state);
        }
    }

    fn finish(self) -> U256 {
        U256::from(self.state)
    }
}

/// Computes the SHA-256 digest of the given input.
///
/// # Notes
/// - The message length is encoded as a 64-bit big-endian bit count.
///   Inputs of 2⁶¹ bytes or more are not supported.
/// - The state words are serialized big-endian.
pub fn sha256(input: &[u8]) -> U256 {
    let padded = pad(input);

    trace!(
        len = input.len(),
        blocks = padded.len() / BLOCK_LEN,
        "computing sha256"
    );

    let mut session = Session::new();
    session.absorb(&padded);
    session.finish()
}

/// Computes the SHA-256 digest of `message` as 64 lowercase hex digits.
///
/// ```
/// use sha256_reference::hash::hash;
///
/// assert_eq!(
///     hash(b"abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
pub fn hash(message: &[u8]) -> String {
    sha256(message).to_hex()
}
