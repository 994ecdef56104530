//! Low-level, non-cryptographic helpers.
//!
//! Bit masks used by the DES bit permutations and byte/word conversion
//! helpers shared by every engine. Nothing in here knows about a specific
//! cipher; the engines build their own semantics on top.

pub(crate) mod bytes;
pub(crate) mod mask;
