//! Bit-level DES helpers.

use super::tables::{E, P, SBOXES};
use crate::utils::mask::{MASK6, MASK6_MIDDLE4, MASK6_MSB, MASK28, MASK32, MASK_LSB};

/// Applies a 1-indexed, MSB-first permutation table to the low
/// `input_bits` bits of `input`.
///
/// The output has `table.len()` bits, right-aligned.
#[inline(always)]
pub(crate) fn permute(input: u64, table: &[u8], input_bits: u32) -> u64 {
    table.iter().fold(0u64, |out, &pos| {
        (out << 1) | ((input >> (input_bits - pos as u32)) & 1)
    })
}

/// Splits a 64-bit block into its (left, right) 32-bit halves.
#[inline(always)]
pub(crate) fn split64(block: u64) -> (u64, u64) {
    (block >> 32, block & MASK32)
}

#[inline(always)]
pub(crate) fn join64(left: u64, right: u64) -> u64 {
    (left << 32) | (right & MASK32)
}

/// Splits a 56-bit key into its (C, D) 28-bit halves.
#[inline(always)]
pub(crate) fn split56(key: u64) -> (u64, u64) {
    ((key >> 28) & MASK28, key & MASK28)
}

#[inline(always)]
pub(crate) fn join56(c: u64, d: u64) -> u64 {
    ((c & MASK28) << 28) | (d & MASK28)
}

/// Rotates a 28-bit half left by `n`.
#[inline(always)]
pub(crate) fn rotl28(half: u64, n: u32) -> u64 {
    ((half << n) | (half >> (28 - n))) & MASK28
}

/// Returns 6-bit group `index` (0 = most significant) of a 48-bit value.
#[inline(always)]
fn group6(value: u64, index: usize) -> u8 {
    ((value >> (42 - 6 * index)) & MASK6) as u8
}

/// Outer two bits of a 6-bit group.
#[inline(always)]
fn sbox_row(group: u8) -> u8 {
    ((group & MASK6_MSB) >> 4) | (group & MASK_LSB)
}

/// Middle four bits of a 6-bit group.
#[inline(always)]
fn sbox_col(group: u8) -> u8 {
    (group & MASK6_MIDDLE4) >> 1
}

/// Runs a 48-bit value through the eight S-boxes, producing 32 bits.
pub(crate) fn substitute(value: u64) -> u64 {
    SBOXES.iter().enumerate().fold(0u64, |out, (i, sbox)| {
        let group = group6(value, i);
        let index = ((sbox_row(group) << 4) | sbox_col(group)) as usize;
        (out << 4) | sbox[index] as u64
    })
}

/// The Feistel function f(R, K).
#[inline(always)]
pub(crate) fn feistel(right: u64, subkey: u64) -> u64 {
    let expanded = permute(right, &E, 32);
    permute(substitute(expanded ^ subkey), &P, 32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryption::des::tables::{FP, IP};

    #[test]
    fn permute_identity_and_reverse() {
        let identity: Vec<u8> = (1..=8).collect();
        let reverse: Vec<u8> = (1..=8).rev().collect();

        assert_eq!(permute(0b1011_0001, &identity, 8), 0b1011_0001);
        assert_eq!(permute(0b1011_0001, &reverse, 8), 0b1000_1101);
    }

    #[test]
    fn initial_permutation_known_value() {
        // 0123456789ABCDEF -> CC00CCFFF0AAF0AA (classic worked example).
        assert_eq!(permute(0x0123_4567_89AB_CDEF, &IP, 64), 0xCC00_CCFF_F0AA_F0AA);
    }

    #[test]
    fn final_permutation_undoes_initial() {
        let block = 0xDEAD_BEEF_0BAD_F00D;
        assert_eq!(permute(permute(block, &IP, 64), &FP, 64), block);
    }

    #[test]
    fn expansion_known_value() {
        // R0 = F0AAF0AA expands to 7A15557A1555.
        assert_eq!(permute(0xF0AA_F0AA, &E, 32), 0x7A15_557A_1555);
    }

    #[test]
    fn sbox_indexing_uses_outer_and_inner_bits() {
        // Group 011011: row 01, column 1101 -> S1 gives 5.
        let group = 0b011011u8;
        assert_eq!(sbox_row(group), 1);
        assert_eq!(sbox_col(group), 13);
        assert_eq!(SBOXES[0][(1 << 4) | 13], 5);
    }

    #[test]
    fn substitution_known_value() {
        // K1 xor E(R0) = 6117BA866527 -> 5C82B597.
        assert_eq!(substitute(0x6117_BA86_6527), 0x5C82_B597);
    }

    #[test]
    fn feistel_known_value() {
        assert_eq!(feistel(0xF0AA_F0AA, 0x1B02_EFFC_7072), 0x234A_A9BB);
    }

    #[test]
    fn rotation_wraps_within_28_bits() {
        assert_eq!(rotl28(0x800_0000, 1), 1);
        assert_eq!(rotl28(0xC00_0000, 2), 3);
    }

    #[test]
    fn split_join() {
        let (l, r) = split64(0x0123_4567_89AB_CDEF);
        assert_eq!((l, r), (0x0123_4567, 0x89AB_CDEF));
        assert_eq!(join64(l, r), 0x0123_4567_89AB_CDEF);

        let (c, d) = split56(0x00F0_CCAA_F556_678F);
        assert_eq!((c, d), (0xF0C_CAAF, 0x556_678F));
        assert_eq!(join56(c, d), 0x00F0_CCAA_F556_678F);
    }
}
