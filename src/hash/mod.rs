//! Hash algorithms exposed by the crate.
//!
//! Currently only SHA-256, as a pure-Rust implementation.

pub mod sha256;

/// Re-export of the SHA-256 convenience functions.
pub use sha256::core::{hash, sha256};
