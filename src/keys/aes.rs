use std::fmt;
use std::str::FromStr;

use super::{KeyParseError, decode_key_arg};

/// An AES key of one of the three standard sizes.
///
/// The variant determines the number of rounds: 10 for 128-bit keys,
/// 12 for 192-bit keys and 14 for 256-bit keys.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AesKey {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

impl AesKey {
    /// Builds a key from a 16, 24 or 32 byte slice.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes.len() {
            16 => bytes.try_into().ok().map(AesKey::Aes128),
            24 => bytes.try_into().ok().map(AesKey::Aes192),
            32 => bytes.try_into().ok().map(AesKey::Aes256),
            _ => None,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AesKey::Aes128(k) => k,
            AesKey::Aes192(k) => k,
            AesKey::Aes256(k) => k,
        }
    }

    /// Key size in bits.
    pub fn bits(&self) -> usize {
        self.as_bytes().len() * 8
    }

    /// Key length in 32-bit words (Nk).
    pub fn words(&self) -> usize {
        self.as_bytes().len() / 4
    }

    /// Number of cipher rounds (Nr).
    pub fn rounds(&self) -> usize {
        self.words() + 6
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey::Aes{}(..)", self.bits())
    }
}

impl FromStr for AesKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "a 16, 24, or 32 byte hex or ascii sequence";

        let bytes = decode_key_arg(s, &[32, 48, 64], &[16, 24, 32], EXPECTED)?;
        AesKey::from_slice(&bytes).ok_or(KeyParseError::Malformed { expected: EXPECTED })
    }
}
