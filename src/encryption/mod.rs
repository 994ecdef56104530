//! Symmetric block ciphers.
//!
//! - [`aes`]: AES-128/192/256 (FIPS-197) with ECB and CBC modes.
//! - [`des`]: single DES (FIPS 46-3) with ECB and CBC modes and weak-key
//!   classification.
//!
//! Both engines operate in place on caller-owned buffers whose length must
//! be a multiple of the cipher block size. Each call builds its own
//! context (key schedule and chain value) and drops it on return; nothing
//! is shared between calls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod aes;
pub mod des;

/// The direction a cipher context runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encrypt,
    Decrypt,
}

/// Block cipher mode of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook: every block is transformed independently.
    Ecb,
    /// Cipher block chaining: every block is chained to the previous
    /// ciphertext block, starting from an initialization vector.
    Cbc,
}

/// Error returned when a mode argument is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    #[error("unrecognized mode {0:?} (expected ecb or cbc)")]
    Mode(String),
}

impl FromStr for Mode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            _ => Err(ParseOptionError::Mode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => f.write_str("ECB"),
            Mode::Cbc => f.write_str("CBC"),
        }
    }
}
