//! The length header block.
//!
//! One cipher block placed before the data. All bytes are random except
//! the last four, which hold the plaintext length as a big-endian `u32`.
//! Lengths never exceed 2^31 - 1, so the top bit of that word is always
//! clear in a well-formed header.

use rand::RngCore;

use crate::utils::mask::MASK31;

/// Bytes of the header that carry the length.
pub const LENGTH_BYTES: usize = 4;

/// Fills `block` with random bytes and stores `len` in its last four.
///
/// # Panics
/// Panics if `block` is shorter than four bytes.
pub fn write<R: RngCore + ?Sized>(block: &mut [u8], len: u32, rng: &mut R) {
    rng.fill_bytes(block);
    let at = block.len() - LENGTH_BYTES;
    block[at..].copy_from_slice(&len.to_be_bytes());
}

/// Reads the stored length.
///
/// Returns `None` when the value cannot be a valid length.
pub fn read(block: &[u8]) -> Option<usize> {
    let at = block.len().checked_sub(LENGTH_BYTES)?;
    let mut word = [0u8; LENGTH_BYTES];
    word.copy_from_slice(&block[at..]);

    let len = u32::from_be_bytes(word) as u64;
    (len <= MASK31).then_some(len as usize)
}
