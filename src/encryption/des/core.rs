//! DES entry points over byte buffers.
//!
//! Every call checks the key against a [`WeakKeyPolicy`], derives the
//! subkeys for its direction and runs them over the buffer in place,
//! 8 bytes at a time. The plain functions use the compiled-in policy;
//! the `*_with_policy` variants take one explicitly.

use log::debug;

use super::BLOCK_SIZE;
use super::math::{feistel, join64, permute, split64};
use super::schedule::Subkeys;
use super::tables::{FP, IP};
use super::weak::WeakKeyPolicy;
use crate::encryption::Action;
use crate::error::CipherError;
use crate::keys::DesKey;
use crate::utils::bytes::{load_u64_be, store_u64_be};

/// Runs one 64-bit block through the 16 Feistel rounds.
///
/// Subkeys in encryption order encrypt; reversed subkeys decrypt.
pub fn transform_block(block: u64, subkeys: &Subkeys) -> u64 {
    let (mut left, mut right) = split64(permute(block, &IP, 64));

    for &k in subkeys.as_slice() {
        let next = left ^ feistel(right, k);
        left = right;
        right = next;
    }

    permute(join64(right, left), &FP, 64)
}

struct Context {
    action: Action,
    subkeys: Subkeys,
    chain: Option<u64>,
}

impl Context {
    fn run(&mut self, data: &mut [u8]) {
        for offset in (0..data.len()).step_by(BLOCK_SIZE) {
            let input = load_u64_be(data, offset);

            let output = match (self.action, self.chain.as_mut()) {
                (_, None) => transform_block(input, &self.subkeys),
                (Action::Encrypt, Some(chain)) => {
                    *chain = transform_block(input ^ *chain, &self.subkeys);
                    *chain
                }
                (Action::Decrypt, Some(chain)) => {
                    let plain = transform_block(input, &self.subkeys) ^ *chain;
                    *chain = input;
                    plain
                }
            };

            store_u64_be(data, offset, output);
        }
    }
}

fn process(
    data: &mut [u8],
    key: &DesKey,
    action: Action,
    iv: Option<u64>,
    policy: &WeakKeyPolicy,
) -> Result<(), CipherError> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BadInput {
            len: data.len(),
            block_size: BLOCK_SIZE,
        });
    }

    let strength = policy.evaluate(key.value())?;

    debug!(
        "DES {:?} {} over {} bytes (key {})",
        action,
        if iv.is_some() { "CBC" } else { "ECB" },
        data.len(),
        strength
    );

    let mut ctx = Context {
        action,
        subkeys: Subkeys::for_action(key.value(), action),
        chain: iv,
    };
    ctx.run(data);

    Ok(())
}

/// Encrypts `data` in place in ECB mode.
///
/// # Errors
/// - [`CipherError::BadInput`] if `data.len()` is not a multiple of 8
/// - [`CipherError::KeyTooWeak`] if the compiled policy rejects the key
pub fn encrypt(data: &mut [u8], key: &DesKey) -> Result<(), CipherError> {
    encrypt_with_policy(data, key, &WeakKeyPolicy::compiled())
}

/// Decrypts `data` in place in ECB mode.
pub fn decrypt(data: &mut [u8], key: &DesKey) -> Result<(), CipherError> {
    decrypt_with_policy(data, key, &WeakKeyPolicy::compiled())
}

/// Encrypts `data` in place in CBC mode, chaining from `iv`.
pub fn encrypt_cbc(data: &mut [u8], key: &DesKey, iv: u64) -> Result<(), CipherError> {
    encrypt_cbc_with_policy(data, key, iv, &WeakKeyPolicy::compiled())
}

/// Decrypts `data` in place in CBC mode, chaining from `iv`.
pub fn decrypt_cbc(data: &mut [u8], key: &DesKey, iv: u64) -> Result<(), CipherError> {
    decrypt_cbc_with_policy(data, key, iv, &WeakKeyPolicy::compiled())
}

pub fn encrypt_with_policy(
    data: &mut [u8],
    key: &DesKey,
    policy: &WeakKeyPolicy,
) -> Result<(), CipherError> {
    process(data, key, Action::Encrypt, None, policy)
}

pub fn decrypt_with_policy(
    data: &mut [u8],
    key: &DesKey,
    policy: &WeakKeyPolicy,
) -> Result<(), CipherError> {
    process(data, key, Action::Decrypt, None, policy)
}

pub fn encrypt_cbc_with_policy(
    data: &mut [u8],
    key: &DesKey,
    iv: u64,
    policy: &WeakKeyPolicy,
) -> Result<(), CipherError> {
    process(data, key, Action::Encrypt, Some(iv), policy)
}

pub fn decrypt_cbc_with_policy(
    data: &mut [u8],
    key: &DesKey,
    iv: u64,
    policy: &WeakKeyPolicy,
) -> Result<(), CipherError> {
    process(data, key, Action::Decrypt, Some(iv), policy)
}
