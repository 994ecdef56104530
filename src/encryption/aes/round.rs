//! The four AES round transformations and their inverses.
//!
//! A full encryption is: AddRoundKey(0), then `Nr - 1` rounds of
//! SubBytes, ShiftRows, MixColumns, AddRoundKey, then a final round
//! without MixColumns. Decryption runs the inverse steps in reverse.

use super::block::Block;
use super::field::mul;
use super::schedule::KeySchedule;
use super::tables::{INV_SBOX, SBOX};

#[inline(always)]
pub(crate) fn sub_bytes(block: &mut Block) {
    for row in block.rows_mut() {
        for b in row.iter_mut() {
            *b = SBOX[*b as usize];
        }
    }
}

#[inline(always)]
pub(crate) fn inv_sub_bytes(block: &mut Block) {
    for row in block.rows_mut() {
        for b in row.iter_mut() {
            *b = INV_SBOX[*b as usize];
        }
    }
}

/// Row `r` rotates left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(block: &mut Block) {
    for (r, row) in block.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

#[inline(always)]
pub(crate) fn inv_shift_rows(block: &mut Block) {
    for (r, row) in block.rows_mut().iter_mut().enumerate() {
        row.rotate_right(r);
    }
}

/// Multiplies each column by the circulant matrix (2, 3, 1, 1).
#[inline(always)]
pub(crate) fn mix_columns(block: &mut Block) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = block.column(col);
        block.set_column(
            col,
            [
                mul(a0, 2) ^ mul(a1, 3) ^ a2 ^ a3,
                a0 ^ mul(a1, 2) ^ mul(a2, 3) ^ a3,
                a0 ^ a1 ^ mul(a2, 2) ^ mul(a3, 3),
                mul(a0, 3) ^ a1 ^ a2 ^ mul(a3, 2),
            ],
        );
    }
}

/// Multiplies each column by the circulant matrix (14, 11, 13, 9).
#[inline(always)]
pub(crate) fn inv_mix_columns(block: &mut Block) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = block.column(col);
        block.set_column(
            col,
            [
                mul(a0, 14) ^ mul(a1, 11) ^ mul(a2, 13) ^ mul(a3, 9),
                mul(a0, 9) ^ mul(a1, 14) ^ mul(a2, 11) ^ mul(a3, 13),
                mul(a0, 13) ^ mul(a1, 9) ^ mul(a2, 14) ^ mul(a3, 11),
                mul(a0, 11) ^ mul(a1, 13) ^ mul(a2, 9) ^ mul(a3, 14),
            ],
        );
    }
}

#[inline(always)]
pub(crate) fn add_round_key(block: &mut Block, key: &Block) {
    *block ^= key;
}

/// Encrypts one block in place.
pub fn encrypt_block(block: &mut Block, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    add_round_key(block, schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(block);
        shift_rows(block);
        mix_columns(block);
        add_round_key(block, schedule.round_key(round));
    }

    sub_bytes(block);
    shift_rows(block);
    add_round_key(block, schedule.round_key(rounds));
}

/// Decrypts one block in place.
pub fn decrypt_block(block: &mut Block, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    add_round_key(block, schedule.round_key(rounds));

    for round in (1..rounds).rev() {
        inv_shift_rows(block);
        inv_sub_bytes(block);
        add_round_key(block, schedule.round_key(round));
        inv_mix_columns(block);
    }

    inv_shift_rows(block);
    inv_sub_bytes(block);
    add_round_key(block, schedule.round_key(0));
}
