//! Symmetric key material.
//!
//! This module defines the key types consumed by the block ciphers and
//! the parsing rules the command-line tools use to turn an argument into
//! key bytes. It provides a clear separation between **key material** and
//! the algorithms that operate on it: no encryption logic lives here.
//!
//! ## Accepted key arguments
//!
//! | Cipher | Hex form            | ASCII form                        |
//! |--------|---------------------|-----------------------------------|
//! | DES    | 16 hex digits       | 8 characters                      |
//! | AES    | 32, 48 or 64 digits | 16, 24 or 32 characters           |
//!
//! ASCII keys may be wrapped in single quotes (`'my key!'`) so that keys
//! containing spaces survive shells that do not treat single quotes as
//! grouping. A string that is valid hex of the right length is always
//! read as hex.

use thiserror::Error;

mod aes;
mod des;

pub use aes::AesKey;
pub use des::DesKey;

/// Error returned when a key argument cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The argument matches none of the accepted shapes.
    #[error("malformed key: expected {expected}")]
    Malformed {
        /// Human-readable description of the accepted shapes.
        expected: &'static str,
    },
}

/// Returns `true` if `s` is non-empty and made only of hex digits.
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strips one pair of surrounding single quotes, if present.
fn strip_quotes(s: &str) -> Option<&str> {
    s.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\''))
}

/// Decodes a key argument into raw bytes.
///
/// `hex_lengths` and `ascii_lengths` are the accepted lengths in
/// characters for each form.
pub(crate) fn decode_key_arg(
    arg: &str,
    hex_lengths: &[usize],
    ascii_lengths: &[usize],
    expected: &'static str,
) -> Result<Vec<u8>, KeyParseError> {
    if hex_lengths.contains(&arg.len()) && is_hex(arg) {
        return hex::decode(arg).map_err(|_| KeyParseError::Malformed { expected });
    }

    if ascii_lengths.contains(&arg.len()) {
        return Ok(arg.as_bytes().to_vec());
    }

    match strip_quotes(arg) {
        Some(inner) if ascii_lengths.contains(&inner.len()) => Ok(inner.as_bytes().to_vec()),
        _ => Err(KeyParseError::Malformed { expected }),
    }
}
