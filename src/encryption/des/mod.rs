//! DES block cipher (FIPS 46-3).
//!
//! Blocks and keys are handled as big-endian `u64` values; every bit
//! permutation uses the standard 1-indexed, MSB-first tables.
//!
//! - `tables`: permutation tables, S-boxes and the rotation schedule
//! - `math`: permutation, split/join and the Feistel round function
//! - [`schedule`]: the 16 round subkeys
//! - [`weak`]: weak-key tables, [`KeyStrength`] and the weak-key policy
//! - [`core`]: ECB/CBC entry points over byte buffers

pub mod core;
pub(crate) mod math;
pub mod schedule;
pub(crate) mod tables;
pub mod weak;

/// DES block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Number of Feistel rounds.
pub const ROUNDS: usize = 16;

pub use self::core::{
    decrypt, decrypt_cbc, decrypt_cbc_with_policy, decrypt_with_policy, encrypt, encrypt_cbc,
    encrypt_cbc_with_policy, encrypt_with_policy, transform_block,
};
pub use schedule::Subkeys;
pub use weak::{Enforcement, KeyStrength, WeakKeyPolicy, check_key};
