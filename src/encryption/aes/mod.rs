//! AES block cipher (FIPS-197).
//!
//! The implementation is split the same way the cipher is described in
//! the standard:
//!
//! - [`block`]: the 4×4 state matrix and its byte mapping
//! - `field`: GF(2^8) arithmetic used by MixColumns and the round constants
//! - `tables`: forward/inverse S-boxes and the round constant sequence
//! - [`schedule`]: key expansion into per-round keys
//! - `round`: SubBytes, ShiftRows, MixColumns, AddRoundKey and inverses
//! - [`core`]: ECB/CBC entry points over byte buffers
//!
//! Key material is represented by [`crate::keys::AesKey`], which selects
//! the number of rounds (10, 12 or 14).

pub mod block;
pub mod core;
pub(crate) mod field;
pub(crate) mod round;
pub mod schedule;
pub(crate) mod tables;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in a block.
pub(crate) const NB: usize = 4;

/// Largest number of rounds (AES-256).
pub(crate) const MAX_ROUNDS: usize = 14;

pub use block::Block;
pub use self::core::{decrypt, decrypt_cbc, encrypt, encrypt_cbc};
pub use schedule::KeySchedule;
