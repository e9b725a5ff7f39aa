//! Primitive types
//!
//! This module defines the low-level primitives the hash core is built
//! from.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics:
//! - `word`: rotation and big-endian conversion of 32-bit words
//! - `U256`: a fixed-size 256-bit value, used to carry a SHA-256 digest

pub mod word;

mod u256;

/// Fixed-size 256-bit value holding a finished digest.
pub use u256::{ParseDigestError, U256};
