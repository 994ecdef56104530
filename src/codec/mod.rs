//! File framing for the block ciphers.
//!
//! A sealed message is laid out as:
//!
//! ```text
//! [encrypted IV]  CBC only, one block, ECB-encrypted with the key
//! [header]        one block: random bytes + plaintext length (u32 BE)
//! [data]          plaintext, final partial block filled with random bytes
//! ```
//!
//! The header and data are encrypted together, in ECB or in CBC chained
//! from the IV. A block-aligned plaintext gets no extra padding block.
//!
//! Randomness comes from the caller's [`RngCore`]; the cipher engines
//! themselves never generate any.

use std::ops::Range;

use log::debug;
use rand::RngCore;

use crate::encryption::{Action, Mode, aes, des};
use crate::error::CipherError;
use crate::keys::{AesKey, DesKey};
use crate::utils::bytes::load_u64_be;
use crate::utils::mask::MASK31;

pub mod header;

/// A block cipher the codec can frame messages for.
pub trait FramedCipher {
    const BLOCK_SIZE: usize;

    /// Runs the cipher in ECB mode over `data` in place.
    fn ecb(&self, data: &mut [u8], action: Action) -> Result<(), CipherError>;

    /// Runs the cipher in CBC mode over `data` in place.
    ///
    /// `iv` is exactly one block long.
    fn cbc(&self, data: &mut [u8], iv: &[u8], action: Action) -> Result<(), CipherError>;
}

impl FramedCipher for AesKey {
    const BLOCK_SIZE: usize = aes::BLOCK_SIZE;

    fn ecb(&self, data: &mut [u8], action: Action) -> Result<(), CipherError> {
        match action {
            Action::Encrypt => aes::encrypt(data, self),
            Action::Decrypt => aes::decrypt(data, self),
        }
    }

    fn cbc(&self, data: &mut [u8], iv: &[u8], action: Action) -> Result<(), CipherError> {
        let iv: &[u8; aes::BLOCK_SIZE] = iv.try_into().map_err(|_| CipherError::BadInput {
            len: iv.len(),
            block_size: aes::BLOCK_SIZE,
        })?;

        match action {
            Action::Encrypt => aes::encrypt_cbc(data, self, iv),
            Action::Decrypt => aes::decrypt_cbc(data, self, iv),
        }
    }
}

impl FramedCipher for DesKey {
    const BLOCK_SIZE: usize = des::BLOCK_SIZE;

    fn ecb(&self, data: &mut [u8], action: Action) -> Result<(), CipherError> {
        match action {
            Action::Encrypt => des::encrypt(data, self),
            Action::Decrypt => des::decrypt(data, self),
        }
    }

    fn cbc(&self, data: &mut [u8], iv: &[u8], action: Action) -> Result<(), CipherError> {
        if iv.len() != des::BLOCK_SIZE {
            return Err(CipherError::BadInput {
                len: iv.len(),
                block_size: des::BLOCK_SIZE,
            });
        }

        let iv = load_u64_be(iv, 0);
        match action {
            Action::Encrypt => des::encrypt_cbc(data, self, iv),
            Action::Decrypt => des::decrypt_cbc(data, self, iv),
        }
    }
}

/// Number of blocks in front of the header for `mode`.
fn prefix_len(mode: Mode, block_size: usize) -> usize {
    match mode {
        Mode::Ecb => 0,
        Mode::Cbc => block_size,
    }
}

/// Size of the sealed output for a plaintext of `len` bytes.
pub fn sealed_len(len: usize, block_size: usize, mode: Mode) -> usize {
    prefix_len(mode, block_size) + block_size + len.div_ceil(block_size) * block_size
}

/// Frames and encrypts `plaintext`.
///
/// # Errors
/// - [`CipherError::TooBig`] if `plaintext` is longer than 2^31 - 1 bytes
/// - any error the cipher reports for the key
pub fn seal<C, R>(
    plaintext: &[u8],
    key: &C,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<u8>, CipherError>
where
    C: FramedCipher,
    R: RngCore + ?Sized,
{
    let len = plaintext.len();
    if len as u64 > MASK31 {
        return Err(CipherError::TooBig(len));
    }

    let bs = C::BLOCK_SIZE;
    let mut out = vec![0u8; sealed_len(len, bs, mode)];
    let (iv, body) = out.split_at_mut(prefix_len(mode, bs));

    header::write(&mut body[..bs], len as u32, rng);
    body[bs..bs + len].copy_from_slice(plaintext);
    rng.fill_bytes(&mut body[bs + len..]);

    match mode {
        Mode::Ecb => key.ecb(body, Action::Encrypt)?,
        Mode::Cbc => {
            rng.fill_bytes(iv);
            key.cbc(body, iv, Action::Encrypt)?;
            key.ecb(iv, Action::Encrypt)?;
        }
    }

    debug!(
        "sealed {len} bytes into {} ({mode}, {} padding)",
        out.len(),
        out.len() - prefix_len(mode, bs) - bs - len
    );

    Ok(out)
}

/// Decrypts a sealed message in place.
///
/// Returns the range of `buf` holding the plaintext; everything outside
/// it (IV, header, padding) is left decrypted but meaningless.
///
/// # Errors
/// - [`CipherError::BadInput`] if `buf` is not a whole number of blocks
/// - [`CipherError::CorruptFile`] if `buf` is too short to hold a header,
///   or the header's length is invalid or larger than the data after it
pub fn open_in_place<C: FramedCipher>(
    buf: &mut [u8],
    key: &C,
    mode: Mode,
) -> Result<Range<usize>, CipherError> {
    let bs = C::BLOCK_SIZE;

    if buf.len() % bs != 0 {
        return Err(CipherError::BadInput {
            len: buf.len(),
            block_size: bs,
        });
    }

    let offset = prefix_len(mode, bs);
    if buf.len() < offset + bs {
        debug!("{} bytes cannot hold a {mode} header", buf.len());
        return Err(CipherError::CorruptFile);
    }

    let (iv, body) = buf.split_at_mut(offset);

    match mode {
        Mode::Ecb => key.ecb(body, Action::Decrypt)?,
        Mode::Cbc => {
            key.ecb(iv, Action::Decrypt)?;
            key.cbc(body, iv, Action::Decrypt)?;
        }
    }

    let available = body.len() - bs;
    let len = header::read(&body[..bs]).ok_or(CipherError::CorruptFile)?;

    if len > available {
        debug!("header claims {len} bytes but only {available} follow");
        return Err(CipherError::CorruptFile);
    }

    let start = offset + bs;
    Ok(start..start + len)
}

/// Decrypts a sealed message and returns the plaintext.
pub fn open<C: FramedCipher>(
    ciphertext: &[u8],
    key: &C,
    mode: Mode,
) -> Result<Vec<u8>, CipherError> {
    let mut buf = ciphertext.to_vec();
    let range = open_in_place(&mut buf, key, mode)?;

    buf.truncate(range.end);
    buf.drain(..range.start);
    Ok(buf)
}

pub fn seal_aes<R: RngCore + ?Sized>(
    plaintext: &[u8],
    key: &AesKey,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<u8>, CipherError> {
    seal(plaintext, key, mode, rng)
}

pub fn open_aes(ciphertext: &[u8], key: &AesKey, mode: Mode) -> Result<Vec<u8>, CipherError> {
    open(ciphertext, key, mode)
}

pub fn seal_des<R: RngCore + ?Sized>(
    plaintext: &[u8],
    key: &DesKey,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<u8>, CipherError> {
    seal(plaintext, key, mode, rng)
}

pub fn open_des(ciphertext: &[u8], key: &DesKey, mode: Mode) -> Result<Vec<u8>, CipherError> {
    open(ciphertext, key, mode)
}
