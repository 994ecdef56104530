//! Big-endian word load/store helpers.
//!
//! These replace the byte-swapping the block ciphers would otherwise need:
//! DES blocks and SHA-512 words are always interpreted big-endian, whatever
//! the host byte order.

/// Reads a big-endian `u64` from `buf[offset..offset + 8]`.
///
/// # Panics
/// Panics if fewer than 8 bytes are available at `offset`. Callers only
/// use this after checking the buffer length.
#[inline(always)]
pub(crate) fn load_u64_be(buf: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_be_bytes(word)
}

/// Writes `value` big-endian into `buf[offset..offset + 8]`.
#[inline(always)]
pub(crate) fn store_u64_be(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Serializes a slice of words into a big-endian byte array.
pub(crate) fn words_to_be_bytes<const N: usize>(words: &[u64]) -> [u8; N] {
    let mut out = [0u8; N];
    for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_store_roundtrip_at_offset() {
        let mut buf = [0u8; 12];
        store_u64_be(&mut buf, 3, 0x0102_0304_0506_0708);
        assert_eq!(&buf[3..11], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(load_u64_be(&buf, 3), 0x0102_0304_0506_0708);
    }

    #[test]
    fn words_serialize_big_endian() {
        let out: [u8; 16] = words_to_be_bytes(&[0x0011_2233_4455_6677, 0x8899_aabb_ccdd_eeff]);
        assert_eq!(out[0], 0x00);
        assert_eq!(out[7], 0x77);
        assert_eq!(out[8], 0x88);
        assert_eq!(out[15], 0xff);
    }
}
