//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 hash function as
//! defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a complete SHA-512 hashing function for arbitrary-length input
//! - an incremental API where the caller owns the hash state between
//!   chunks and signals the last chunk with the total message length

use log::trace;

use super::computations::all_rounds;
use super::{BLOCK_SIZE, DIGEST_SIZE, H512_INIT};
use crate::error::CipherError;
use crate::utils::bytes::{load_u64_be, words_to_be_bytes};

/// Compresses a single 1024-bit message block.
///
/// Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; BLOCK_SIZE], state: &mut [u64; 8]) {
    compress_slice(block, state);
}

#[inline(always)]
fn compress_slice(block: &[u8], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (i, slot) in w.iter_mut().enumerate() {
        *slot = load_u64_be(block, i * 8);
    }

    all_rounds(state, w);
}

/// Pads the final partial block and compresses it.
///
/// `tail` holds the message bytes after the last full block and
/// `total_len` the length of the whole message in bytes.
pub(crate) fn finish(state: &mut [u64; 8], tail: &[u8], total_len: u64) {
    let mut block = [0u8; BLOCK_SIZE];
    let rem = tail.len();

    // Copy remaining bytes and append the padding bit (0x80)
    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    // No room for the 128-bit length field: it goes in an extra block.
    if rem > 111 {
        compress(&block, state);
        block = [0; BLOCK_SIZE];
    }

    let bit_len = (total_len as u128) << 3;
    block[112..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, state);
}

/// Computes the SHA-512 hash of the given input.
///
/// # Notes
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The empty message still produces one padding block.
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut state = H512_INIT;

    let blocks = input.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();

    for block in blocks {
        compress_slice(block, &mut state);
    }

    finish(&mut state, tail, input.len() as u64);

    words_to_be_bytes(&state)
}

/// Hash state carried between calls to [`sha512_partial`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha512State([u64; 8]);

impl Sha512State {
    /// A fresh state holding the SHA-512 initial hash value.
    pub const fn new() -> Self {
        Self(H512_INIT)
    }

    /// The eight working hash words.
    pub fn words(&self) -> &[u64; 8] {
        &self.0
    }

    /// Serializes the state big-endian.
    ///
    /// Only meaningful after the final chunk has been processed.
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        words_to_be_bytes(&self.0)
    }
}

impl Default for Sha512State {
    fn default() -> Self {
        Self::new()
    }
}

/// Feeds one chunk of a message into `state`.
///
/// Without `total_len` the chunk is an intermediate one: it must be a
/// multiple of 128 bytes and every block is compressed into `state`.
///
/// With `total_len` (the length of the whole message, this chunk
/// included) the chunk is the last one: its full blocks are compressed,
/// the remainder is padded with the length field, and the digest is
/// returned.
///
/// # Errors
/// [`CipherError::InvalidChunkSize`] if an intermediate chunk is not
/// block-aligned, or if `total_len` implies that the bytes hashed before
/// this chunk were not block-aligned. `state` is not modified in that
/// case.
pub fn sha512_partial(
    state: &mut Sha512State,
    chunk: &[u8],
    total_len: Option<u64>,
) -> Result<Option<[u8; DIGEST_SIZE]>, CipherError> {
    let Some(total) = total_len else {
        if chunk.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidChunkSize(chunk.len()));
        }

        for block in chunk.chunks_exact(BLOCK_SIZE) {
            compress_slice(block, &mut state.0);
        }

        trace!("sha512: absorbed {} bytes", chunk.len());
        return Ok(None);
    };

    let prefix = total
        .checked_sub(chunk.len() as u64)
        .ok_or(CipherError::InvalidChunkSize(chunk.len()))?;

    if prefix % BLOCK_SIZE as u64 != 0 {
        return Err(CipherError::InvalidChunkSize(chunk.len()));
    }

    let blocks = chunk.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();

    for block in blocks {
        compress_slice(block, &mut state.0);
    }

    finish(&mut state.0, tail, total);

    trace!("sha512: finalized after {total} bytes");
    Ok(Some(state.digest()))
}
