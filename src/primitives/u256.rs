//! 256-bit digest value
//!
//! This module defines a fixed-size 256-bit value type (`U256`) used to
//! carry a finished SHA-256 digest.
//!
//! It is a **simple, explicit value type**, not a big-integer library. The
//! internal representation is big-endian, which matches the digest's byte
//! serialization and its hexadecimal rendering.

mod conv;
mod core;

pub use self::core::{ParseDigestError, U256};
