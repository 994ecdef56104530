use std::fmt;
use std::str::FromStr;

use super::{KeyParseError, decode_key_arg};
use crate::encryption::des::{KeyStrength, check_key};

/// A 64-bit DES key (56 key bits plus 8 parity bits).
///
/// The first key byte is the most significant byte of the value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DesKey(u64);

impl DesKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// The raw 64-bit key value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Classifies the key against the weak-key tables.
    pub fn strength(&self) -> KeyStrength {
        check_key(self.0)
    }
}

impl fmt::Debug for DesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DesKey(..)")
    }
}

impl From<u64> for DesKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for DesKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "an 8-byte hex or ascii sequence (16 hex digits or 8 characters)";

        let bytes = decode_key_arg(s, &[16], &[8], EXPECTED)?;
        let bytes: [u8; 8] = bytes
            .try_into()
            .map_err(|_| KeyParseError::Malformed { expected: EXPECTED })?;

        Ok(DesKey::from_bytes(bytes))
    }
}
