//! AES entry points over byte buffers.
//!
//! Every call builds a private context (the expanded key, the direction
//! and, for CBC, the chain value), runs it over the whole buffer in place
//! and drops it. Buffers must be a multiple of [`BLOCK_SIZE`] bytes.

use log::debug;

use super::BLOCK_SIZE;
use super::block::Block;
use super::round::{decrypt_block, encrypt_block};
use super::schedule::KeySchedule;
use crate::encryption::Action;
use crate::error::CipherError;
use crate::keys::AesKey;

struct Context {
    action: Action,
    schedule: KeySchedule,
    chain: Option<Block>,
}

impl Context {
    fn new(key: &AesKey, action: Action, iv: Option<&[u8; BLOCK_SIZE]>) -> Self {
        Self {
            action,
            schedule: KeySchedule::new(key),
            chain: iv.map(Block::from_bytes),
        }
    }

    fn run(&mut self, data: &mut [u8]) {
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = Block::read(chunk, 0);

            match (self.action, self.chain.as_mut()) {
                (Action::Encrypt, None) => encrypt_block(&mut block, &self.schedule),
                (Action::Decrypt, None) => decrypt_block(&mut block, &self.schedule),
                (Action::Encrypt, Some(chain)) => {
                    block ^= &*chain;
                    encrypt_block(&mut block, &self.schedule);
                    *chain = block;
                }
                (Action::Decrypt, Some(chain)) => {
                    let ciphertext = block;
                    decrypt_block(&mut block, &self.schedule);
                    block ^= &*chain;
                    *chain = ciphertext;
                }
            }

            block.write(chunk, 0);
        }
    }
}

fn check_len(data: &[u8]) -> Result<(), CipherError> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BadInput {
            len: data.len(),
            block_size: BLOCK_SIZE,
        });
    }
    Ok(())
}

fn process(
    data: &mut [u8],
    key: &AesKey,
    action: Action,
    iv: Option<&[u8; BLOCK_SIZE]>,
) -> Result<(), CipherError> {
    check_len(data)?;

    debug!(
        "AES-{} {:?} {} over {} bytes",
        key.bits(),
        action,
        if iv.is_some() { "CBC" } else { "ECB" },
        data.len()
    );

    Context::new(key, action, iv).run(data);
    Ok(())
}

/// Encrypts `data` in place in ECB mode.
///
/// # Errors
/// [`CipherError::BadInput`] if `data.len()` is not a multiple of 16.
/// The buffer is left untouched in that case.
pub fn encrypt(data: &mut [u8], key: &AesKey) -> Result<(), CipherError> {
    process(data, key, Action::Encrypt, None)
}

/// Decrypts `data` in place in ECB mode.
pub fn decrypt(data: &mut [u8], key: &AesKey) -> Result<(), CipherError> {
    process(data, key, Action::Decrypt, None)
}

/// Encrypts `data` in place in CBC mode, chaining from `iv`.
///
/// Each plaintext block is XORed with the previous ciphertext block
/// (the IV for the first block) before encryption.
pub fn encrypt_cbc(
    data: &mut [u8],
    key: &AesKey,
    iv: &[u8; BLOCK_SIZE],
) -> Result<(), CipherError> {
    process(data, key, Action::Encrypt, Some(iv))
}

/// Decrypts `data` in place in CBC mode, chaining from `iv`.
pub fn decrypt_cbc(
    data: &mut [u8],
    key: &AesKey,
    iv: &[u8; BLOCK_SIZE],
) -> Result<(), CipherError> {
    process(data, key, Action::Decrypt, Some(iv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_key_zero_block() {
        let mut data = [0u8; 16];
        encrypt(&mut data, &AesKey::Aes128([0; 16])).unwrap();
        assert_eq!(hex::encode(data), "66e94bd4ef8a2c3b884cfa59ca342b2e");
    }

    #[test]
    fn rejects_partial_blocks() {
        let mut data = [7u8; 17];
        let err = encrypt(&mut data, &AesKey::Aes128([0; 16])).unwrap_err();

        assert_eq!(
            err,
            CipherError::BadInput {
                len: 17,
                block_size: 16
            }
        );
        assert_eq!(data, [7u8; 17]);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut data: [u8; 0] = [];
        encrypt_cbc(&mut data, &AesKey::Aes256([1; 32]), &[0; 16]).unwrap();
    }

    #[test]
    fn ecb_repeats_identical_blocks() {
        let key = AesKey::Aes192([0x42; 24]);
        let mut data = [0x5au8; 32];
        encrypt(&mut data, &key).unwrap();
        assert_eq!(data[..16], data[16..]);
    }

    #[test]
    fn cbc_hides_identical_blocks() {
        let key = AesKey::Aes192([0x42; 24]);
        let mut data = [0x5au8; 32];
        encrypt_cbc(&mut data, &key, &[9; 16]).unwrap();
        assert_ne!(data[..16], data[16..]);

        decrypt_cbc(&mut data, &key, &[9; 16]).unwrap();
        assert_eq!(data, [0x5au8; 32]);
    }
}
