//! Common bit masks.

/// Low 6 bits (one DES S-box input group).
pub(crate) const MASK6: u64 = 0x3F;

/// Low 28 bits (one DES key half).
pub(crate) const MASK28: u64 = 0x0FFF_FFFF;

/// Low 31 bits (largest plaintext length the file format can carry).
pub(crate) const MASK31: u64 = 0x7FFF_FFFF;

/// Low 32 bits (one DES block half).
pub(crate) const MASK32: u64 = 0xFFFF_FFFF;

/// Outer bit of a 6-bit S-box group.
pub(crate) const MASK6_MSB: u8 = 0x20;

/// Middle four bits of a 6-bit S-box group.
pub(crate) const MASK6_MIDDLE4: u8 = 0x1E;

/// Least significant bit.
pub(crate) const MASK_LSB: u8 = 0x01;
