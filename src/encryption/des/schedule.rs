//! DES round subkeys.
//!
//! PC-1 selects 56 key bits (dropping parity), which are split into two
//! 28-bit halves. Before each round both halves rotate left by the round's
//! amount; PC-2 then selects the 48-bit subkey from the rejoined halves.

use super::ROUNDS;
use super::math::{join56, permute, rotl28, split56};
use super::tables::{PC1, PC2, ROTATIONS};
use crate::encryption::Action;

/// The 16 subkeys of one DES key, in the order they are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subkeys([u64; ROUNDS]);

impl Subkeys {
    /// Derives the subkeys in encryption order.
    pub fn new(key: u64) -> Self {
        let (mut c, mut d) = split56(permute(key, &PC1, 64));
        let mut keys = [0u64; ROUNDS];

        for (slot, &shift) in keys.iter_mut().zip(ROTATIONS.iter()) {
            c = rotl28(c, shift);
            d = rotl28(d, shift);
            *slot = permute(join56(c, d), &PC2, 56);
        }

        Self(keys)
    }

    /// Derives the subkeys in the order `action` consumes them:
    /// forward for encryption, reversed for decryption.
    pub fn for_action(key: u64, action: Action) -> Self {
        let mut keys = Self::new(key);
        if action == Action::Decrypt {
            keys.0.reverse();
        }
        keys
    }

    pub fn as_slice(&self) -> &[u64; ROUNDS] {
        &self.0
    }
}
