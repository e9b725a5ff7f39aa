//! Reference SHA-256 digest computation
//!
//! This crate computes the SHA-256 digest of an arbitrary byte sequence as
//! defined in FIPS 180-4, and renders it as a 64-character lowercase
//! hexadecimal string.
//!
//! The focus is on **clarity, bit-exactness, and auditability**. The hash
//! core is a pure function from bytes to digest: it performs no I/O, holds
//! no global mutable state, and every call owns its own hash state.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size building blocks: 32-bit word helpers (rotation and
//!   big-endian byte⇄word conversion) and the `U256` value type used to
//!   carry a finished digest.
//!
//! - `hash`
//!   The SHA-256 algorithm itself: message padding, schedule expansion,
//!   the 64-round compression function, and the digest driver exposing
//!   [`hash::sha256()`] and [`hash::hash()`].
//!
//! - `input`
//!   A thin shim reading a message from a configurable path. Missing or
//!   unreadable input is reported as an explicit [`input::InputError`],
//!   never hashed as an empty message.
//!
//! # Design goals
//!
//! - No heap allocations in the compression engine
//! - Explicit `u32` wraparound arithmetic everywhere
//! - Safe to call concurrently from any number of threads
//! - Clear separation between the hash core and the input shim
//!
//! # Known limitations
//!
//! SHA-256 encodes the message length as a 64-bit bit count. Messages of
//! 2⁶¹ bytes or more cannot be represented; their digest is unspecified.
//!
//! This crate is a reference digest computation, not a secrets-handling
//! primitive: no constant-time guarantees are made.

pub mod hash;
pub mod input;
pub mod primitives;
