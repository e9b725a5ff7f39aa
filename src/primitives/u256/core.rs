//! `U256` value type and its hexadecimal rendering and parsing.
//!
//! Hex output is always 64 digits: two per byte, most significant byte
//! first, so leading zero nibbles are kept.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

use thiserror::Error;

/// Fixed-size 256-bit value.
///
/// The value is stored as 32 bytes in **big-endian** order, exactly as a
/// SHA-256 digest is serialized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

/// Error returned when a hexadecimal digest string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDigestError {
    #[error("expected 64 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

impl U256 {
    /// Returns the big-endian bytes of the value.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Renders the value as 64 lowercase hexadecimal digits.
    ///
    /// Every byte contributes exactly two digits, so leading zero nibbles
    /// are preserved.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Parses 64 hexadecimal digits (either case) into a value.
    pub fn from_hex(s: &str) -> Result<Self, ParseDigestError> {
        if s.len() != 64 || !s.is_ascii() {
            let count = s.chars().count();

            if count != 64 {
                return Err(ParseDigestError::InvalidLength(count));
            }

            // 64 characters, but at least one of them is not ASCII.
            if let Some((position, digit)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
                return Err(ParseDigestError::InvalidDigit { digit, position });
            }
        }

        let digits = s.as_bytes();
        let mut out = [0u8; 32];

        for (i, (o, pair)) in out.iter_mut().zip(digits.chunks_exact(2)).enumerate() {
            let hi = nibble(pair[0], 2 * i)?;
            let lo = nibble(pair[1], 2 * i + 1)?;
            *o = (hi << 4) | lo;
        }

        Ok(U256(out))
    }
}

fn nibble(digit: u8, position: usize) -> Result<u8, ParseDigestError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ParseDigestError::InvalidDigit {
            digit: char::from(digit),
            position,
        }),
    }
}

impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}

impl Display for U256 {
    /// Formats the value as contiguous lowercase hexadecimal, the usual
    /// rendering of a SHA-256 digest.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
