//! Streaming SHA-512.

use super::core::{compress, finish};
use super::{BLOCK_SIZE, DIGEST_SIZE, H512_INIT};
use crate::utils::bytes::words_to_be_bytes;

/// A SHA-512 hasher that accepts input in pieces of any size.
///
/// Bytes are buffered until a full 128-byte block is available; the
/// padding is only applied by [`Sha512::finalize`].
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    total: u64,
}

impl Sha512 {
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            total: 0,
        }
    }

    /// Absorbs `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total += data.len() as u64;

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let blocks = data.chunks_exact(BLOCK_SIZE);
        let tail = blocks.remainder();

        for block in blocks {
            let mut full = [0u8; BLOCK_SIZE];
            full.copy_from_slice(block);
            compress(&full, &mut self.state);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// Pads the message and returns the digest.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        finish(&mut self.state, &self.buffer[..self.buffered], self.total);
        words_to_be_bytes(&self.state)
    }

    /// Hashes `data` in one call.
    pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase hex, no separators.
pub fn to_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Lowercase hex with a space between every 8-byte word, the way
/// `sha512sum` prints digests.
pub fn format_digest(digest: &[u8]) -> String {
    digest
        .chunks(8)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}
