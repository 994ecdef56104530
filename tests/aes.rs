use blockcrypt::CipherError;
use blockcrypt::encryption::aes::{self, Block, KeySchedule};
use blockcrypt::keys::AesKey;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

fn key(s: &str) -> AesKey {
    AesKey::from_slice(&unhex(s)).unwrap()
}

fn iv(s: &str) -> [u8; 16] {
    unhex(s).try_into().unwrap()
}

// -------------------------------------------------------
// 1. FIPS-197 APPENDIX C
// -------------------------------------------------------

const PLAIN: &str = "00112233445566778899aabbccddeeff";

fn expect_ecb(key_hex: &str, cipher_hex: &str) {
    let key = key(key_hex);
    let mut data = unhex(PLAIN);

    aes::encrypt(&mut data, &key).unwrap();
    assert_eq!(hex::encode(&data), cipher_hex, "encrypt with {key_hex}");

    aes::decrypt(&mut data, &key).unwrap();
    assert_eq!(hex::encode(&data), PLAIN, "decrypt with {key_hex}");
}

#[test]
fn fips_197_aes128() {
    expect_ecb(
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    );
}

#[test]
fn fips_197_aes192() {
    expect_ecb(
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    );
}

#[test]
fn fips_197_aes256() {
    expect_ecb(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    );
}

// -------------------------------------------------------
// 2. KEY SCHEDULE
// -------------------------------------------------------

#[test]
fn zero_key_schedule_last_round() {
    let schedule = KeySchedule::new(&AesKey::Aes128([0; 16]));

    assert_eq!(schedule.rounds(), 10);
    assert_eq!(
        hex::encode(schedule.round_key(10).to_bytes()),
        "b4ef5bcb3e92e21123e951cf6f8f188e"
    );
}

#[test]
fn schedule_round_counts() {
    assert_eq!(KeySchedule::new(&AesKey::Aes192([0; 24])).rounds(), 12);
    assert_eq!(KeySchedule::new(&AesKey::Aes256([0; 32])).rounds(), 14);
}

// -------------------------------------------------------
// 3. SP 800-38A CBC VECTORS
// -------------------------------------------------------

const CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";
const CBC_PLAIN: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

fn expect_cbc(key_hex: &str, cipher_hex: &str) {
    let key = key(key_hex);
    let iv = iv(CBC_IV);
    let mut data = unhex(CBC_PLAIN);

    aes::encrypt_cbc(&mut data, &key, &iv).unwrap();
    assert_eq!(hex::encode(&data), cipher_hex);

    aes::decrypt_cbc(&mut data, &key, &iv).unwrap();
    assert_eq!(hex::encode(&data), CBC_PLAIN);
}

#[test]
fn sp800_38a_cbc_aes128() {
    expect_cbc(
        "2b7e151628aed2a6abf7158809cf4f3c",
        "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
    );
}

#[test]
fn sp800_38a_cbc_aes192() {
    expect_cbc(
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        "4f021db243bc633d7178183a9fa071e8b4d9ada9ad7dedf4e5e738763f69145a",
    );
}

#[test]
fn sp800_38a_cbc_aes256() {
    expect_cbc(
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        "f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d",
    );
}

// -------------------------------------------------------
// 4. RANDOMIZED ROUND TRIPS
// -------------------------------------------------------

fn random_key(rng: &mut StdRng) -> AesKey {
    match rng.gen_range(0..3) {
        0 => AesKey::Aes128(rng.r#gen()),
        1 => AesKey::Aes192(rng.r#gen()),
        _ => AesKey::Aes256(rng.r#gen()),
    }
}

#[test]
fn ecb_round_trip_random_keys() {
    let mut rng = StdRng::seed_from_u64(0xAE5);

    for _ in 0..64 {
        let key = random_key(&mut rng);
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let original = block;

        aes::encrypt(&mut block, &key).unwrap();
        assert_ne!(block, original);
        aes::decrypt(&mut block, &key).unwrap();
        assert_eq!(block, original);
    }
}

#[test]
fn cbc_round_trip_multi_block() {
    let mut rng = StdRng::seed_from_u64(0xCBC);

    for blocks in [1usize, 2, 7, 64] {
        let key = random_key(&mut rng);
        let iv: [u8; 16] = rng.r#gen();
        let mut data = vec![0u8; blocks * 16];
        rng.fill_bytes(&mut data);
        let original = data.clone();

        aes::encrypt_cbc(&mut data, &key, &iv).unwrap();
        aes::decrypt_cbc(&mut data, &key, &iv).unwrap();
        assert_eq!(data, original);
    }
}

#[test]
fn cbc_corruption_stays_local() {
    let key = AesKey::Aes128([0x2A; 16]);
    let iv = [0x17u8; 16];
    let original: Vec<u8> = (0..64).collect();

    let mut data = original.clone();
    aes::encrypt_cbc(&mut data, &key, &iv).unwrap();

    // Flip one bit in the second ciphertext block.
    data[20] ^= 0x01;
    aes::decrypt_cbc(&mut data, &key, &iv).unwrap();

    let changed: Vec<usize> = (0..4)
        .filter(|&b| data[b * 16..(b + 1) * 16] != original[b * 16..(b + 1) * 16])
        .collect();

    // Block 1 is garbled, block 2 has exactly the flipped bit.
    assert_eq!(changed, vec![1, 2]);
    assert_eq!(data[36], original[36] ^ 0x01);
    assert_eq!(data[32..36], original[32..36]);
    assert_eq!(data[37..48], original[37..48]);
}

// -------------------------------------------------------
// 5. ERRORS AND LAYOUT
// -------------------------------------------------------

#[test]
fn non_block_multiple_is_rejected() {
    for len in [1usize, 15, 17, 31] {
        let mut data = vec![0u8; len];
        assert_eq!(
            aes::decrypt(&mut data, &AesKey::Aes256([0; 32])),
            Err(CipherError::BadInput {
                len,
                block_size: 16
            })
        );
    }
}

#[test]
fn block_is_column_major() {
    let bytes: [u8; 16] = std::array::from_fn(|i| i as u8);
    let block = Block::from_bytes(&bytes);

    assert_eq!(block.get(1, 0), 1);
    assert_eq!(block.get(0, 1), 4);
    assert_eq!(block.to_bytes(), bytes);
}
