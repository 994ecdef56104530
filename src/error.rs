//! Error types shared by every engine in the crate.
//!
//! All failures are reported to the caller as a typed [`CipherError`];
//! nothing is retried and no buffer is silently left half-processed
//! without an error being returned.

use thiserror::Error;

use crate::encryption::des::KeyStrength;

/// Errors produced by the block ciphers, the file codec and SHA-512.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The buffer length is not a multiple of the cipher block size.
    #[error("input must be a multiple of {block_size} bytes (got {len} bytes)")]
    BadInput {
        /// Length of the rejected buffer.
        len: usize,
        /// Block size required by the cipher.
        block_size: usize,
    },

    /// The plaintext exceeds the 2^31 - 1 byte limit of the file format.
    #[error("input too large: {0} bytes (limit is 2147483647)")]
    TooBig(usize),

    /// A DES key matched a weak-key table under an enforcing policy.
    #[error("DES key rejected as {0}")]
    KeyTooWeak(KeyStrength),

    /// The decrypted length header is inconsistent with the ciphertext,
    /// or the ciphertext is too short to carry a header at all.
    #[error("the file is corrupt, incomplete, or was not produced by this tool")]
    CorruptFile,

    /// A non-final SHA-512 chunk was not a multiple of 128 bytes.
    #[error("SHA-512 chunk of {0} bytes is not a multiple of the 128-byte block size")]
    InvalidChunkSize(usize),
}
