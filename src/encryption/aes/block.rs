//! The AES state matrix.
//!
//! AES views a 16-byte block as a 4×4 matrix of bytes filled **column by
//! column**: input byte `i` lands in row `i % 4`, column `i / 4`. Every
//! conversion between buffer and matrix goes through [`byte_position`].

use std::ops::{BitXor, BitXorAssign};

use super::BLOCK_SIZE;

/// Returns the `(row, column)` a buffer byte index maps to.
#[inline(always)]
pub const fn byte_position(index: usize) -> (usize, usize) {
    (index % 4, index / 4)
}

/// A single 128-bit AES block as a row-indexed 4×4 byte matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    state: [[u8; 4]; 4],
}

impl Block {
    /// Builds a block from 16 bytes in buffer order.
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut state = [[0u8; 4]; 4];
        for (i, &b) in bytes.iter().enumerate() {
            let (row, col) = byte_position(i);
            state[row][col] = b;
        }
        Self { state }
    }

    /// Reads the block starting at `offset` in `buf`.
    ///
    /// # Panics
    /// Panics if fewer than 16 bytes are available at `offset`.
    pub fn read(buf: &[u8], offset: usize) -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes.copy_from_slice(&buf[offset..offset + BLOCK_SIZE]);
        Self::from_bytes(&bytes)
    }

    /// Serializes the block back into buffer order.
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut bytes = [0u8; BLOCK_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            let (row, col) = byte_position(i);
            *b = self.state[row][col];
        }
        bytes
    }

    /// Writes the block into `buf` starting at `offset`.
    pub fn write(&self, buf: &mut [u8], offset: usize) {
        buf[offset..offset + BLOCK_SIZE].copy_from_slice(&self.to_bytes());
    }

    /// Builds a block from four key-schedule words, one per column.
    pub(crate) fn from_columns(columns: &[[u8; 4]]) -> Self {
        let mut state = [[0u8; 4]; 4];
        for (col, word) in columns.iter().take(4).enumerate() {
            for (row, &b) in word.iter().enumerate() {
                state[row][col] = b;
            }
        }
        Self { state }
    }

    /// Returns the byte at `(row, col)`.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.state[row][col]
    }

    #[inline(always)]
    pub(crate) fn column(&self, col: usize) -> [u8; 4] {
        [
            self.state[0][col],
            self.state[1][col],
            self.state[2][col],
            self.state[3][col],
        ]
    }

    #[inline(always)]
    pub(crate) fn set_column(&mut self, col: usize, word: [u8; 4]) {
        for (row, b) in word.into_iter().enumerate() {
            self.state[row][col] = b;
        }
    }

    #[inline(always)]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; 4]; 4] {
        &mut self.state
    }
}

impl BitXorAssign<&Block> for Block {
    fn bitxor_assign(&mut self, rhs: &Block) {
        for (row, other) in self.state.iter_mut().zip(rhs.state.iter()) {
            for (b, o) in row.iter_mut().zip(other) {
                *b ^= o;
            }
        }
    }
}

impl BitXor for Block {
    type Output = Block;

    fn bitxor(mut self, rhs: Block) -> Block {
        self ^= &rhs;
        self
    }
}
