//! Block ciphers and SHA-512 from first principles
//!
//! This crate implements AES-128/192/256 and DES in ECB and CBC modes,
//! SHA-512 (one-shot, incremental and streaming), and the file framing
//! used by the `aes` and `des` command-line tools.
//!
//! The focus is on **clarity and bit-level fidelity** to the published
//! standards (FIPS-197, FIPS 46-3, FIPS 180-4) rather than on speed or
//! side-channel resistance.
//!
//! # Module overview
//!
//! - `utils`
//!   Low-level, non-cryptographic helpers: bit masks and big-endian word
//!   load/store.
//!
//! - `keys`
//!   Key material ([`keys::AesKey`], [`keys::DesKey`]) and the rules for
//!   parsing keys from command-line arguments. No cipher logic lives here.
//!
//! - `encryption`
//!   The AES and DES engines. Both operate in place on caller-owned
//!   buffers that must be a whole number of blocks, and build a fresh
//!   context per call. DES keys are checked against the weak-key tables
//!   under a [`encryption::des::WeakKeyPolicy`] chosen at compile time
//!   (see the `warn-weak-keys` and `allow-weak-keys` features).
//!
//! - `hash`
//!   SHA-512. The incremental API keeps the hash state in a caller-owned
//!   value so large files can be hashed chunk by chunk.
//!
//! - `codec`
//!   The on-disk format: an optional encrypted IV block, a length header
//!   block and the padded data. Randomness is supplied by the caller.
//!
//! # Errors
//!
//! Every fallible operation returns a [`CipherError`]. Nothing panics on
//! caller input and nothing is retried.

mod utils;

pub mod codec;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;

pub use error::CipherError;
