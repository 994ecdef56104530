//! AES key expansion.
//!
//! The expanded key is a sequence of 4-byte words `w[0..4 * (Nr + 1)]`.
//! The first `Nk` words are the key itself; every following word is the
//! XOR of the word `Nk` positions back with a transformed copy of the
//! previous word:
//!
//! - every `Nk`-th word: rotate left one byte, substitute through the
//!   S-box and XOR the round constant into the first byte;
//! - for 256-bit keys, the word four positions past each of those is
//!   substituted (without rotation);
//! - otherwise the previous word is used as is.
//!
//! Four consecutive words form one round key, one word per column.

use super::block::Block;
use super::tables::{RCON, SBOX};
use super::{MAX_ROUNDS, NB};
use crate::keys::AesKey;

/// Words in the longest (AES-256) expansion.
const MAX_WORDS: usize = NB * (MAX_ROUNDS + 1);

/// The round keys derived from one AES key.
///
/// Holds `Nr + 1` round keys (11, 13 or 15). Immutable once built.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    keys: [Block; MAX_ROUNDS + 1],
    rounds: usize,
}

impl KeySchedule {
    /// Expands `key` into its round keys.
    pub fn new(key: &AesKey) -> Self {
        let nk = key.words();
        let rounds = key.rounds();
        let total = NB * (rounds + 1);
        let bytes = key.as_bytes();

        let mut w = [[0u8; 4]; MAX_WORDS];

        for (word, chunk) in w.iter_mut().zip(bytes.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in nk..total {
            let mut temp = w[i - 1];

            if i % nk == 0 {
                temp.rotate_left(1);
                sub_word(&mut temp);
                temp[0] ^= RCON[i / nk - 1];
            } else if nk == 8 && (i - 4) % 8 == 0 {
                sub_word(&mut temp);
            }

            for (j, b) in temp.iter().enumerate() {
                w[i][j] = w[i - nk][j] ^ b;
            }
        }

        let mut keys = [Block::default(); MAX_ROUNDS + 1];
        for (round, key) in keys.iter_mut().take(rounds + 1).enumerate() {
            *key = Block::from_columns(&w[round * NB..(round + 1) * NB]);
        }

        Self { keys, rounds }
    }

    /// Number of cipher rounds (10, 12 or 14).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The round key for `round` (0 ..= `rounds()`).
    ///
    /// # Panics
    /// Panics if `round > rounds()`.
    pub fn round_key(&self, round: usize) -> &Block {
        assert!(round <= self.rounds, "round {round} out of range");
        &self.keys[round]
    }

    /// All round keys in order.
    pub fn round_keys(&self) -> &[Block] {
        &self.keys[..=self.rounds]
    }
}

#[inline(always)]
fn sub_word(word: &mut [u8; 4]) {
    for b in word.iter_mut() {
        *b = SBOX[*b as usize];
    }
}
