use blockcrypt::CipherError;
use blockcrypt::encryption::des::{
    self, KeyStrength, Subkeys, WeakKeyPolicy, check_key, transform_block,
};
use blockcrypt::keys::DesKey;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn expect_ecb(key: u64, plain: u64, cipher: u64) {
    let key = DesKey::new(key);
    let mut data = plain.to_be_bytes();

    des::encrypt(&mut data, &key).unwrap();
    assert_eq!(u64::from_be_bytes(data), cipher);

    des::decrypt(&mut data, &key).unwrap();
    assert_eq!(u64::from_be_bytes(data), plain);
}

// -------------------------------------------------------
// 1. KNOWN ANSWERS
// -------------------------------------------------------

#[test]
fn classic_worked_example() {
    expect_ecb(0x1334_5779_9BBC_DFF1, 0x0123_4567_89AB_CDEF, 0x85E8_1354_0F0A_B405);
}

#[test]
fn encrypts_to_zero() {
    expect_ecb(0x0E32_9232_EA6D_0D73, 0x8787_8787_8787_8787, 0);
}

#[test]
fn cbc_three_blocks() {
    let key = DesKey::new(0x1334_5779_9BBC_DFF1);
    let iv = 0x0011_2233_4455_6677;
    let mut data = *b"Now is the time for all ";

    des::encrypt_cbc(&mut data, &key, iv).unwrap();
    assert_eq!(
        hex::encode(data),
        "2d28aacdf80948c92a4ec61ea15d75f814348b5642d3b18c"
    );

    des::decrypt_cbc(&mut data, &key, iv).unwrap();
    assert_eq!(&data, b"Now is the time for all ");
}

// -------------------------------------------------------
// 2. ROUND TRIPS
// -------------------------------------------------------

fn random_strong_key(rng: &mut StdRng) -> DesKey {
    loop {
        let key = DesKey::new(rng.r#gen());
        if key.strength() == KeyStrength::NotWeak {
            return key;
        }
    }
}

#[test]
fn ecb_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(0xDE5);

    for _ in 0..128 {
        let key = random_strong_key(&mut rng);
        let block: u64 = rng.r#gen();
        let mut data = block.to_be_bytes();

        des::encrypt(&mut data, &key).unwrap();
        des::decrypt(&mut data, &key).unwrap();
        assert_eq!(u64::from_be_bytes(data), block);
    }
}

#[test]
fn cbc_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(0xDE5C);

    for blocks in [1usize, 3, 16] {
        let key = random_strong_key(&mut rng);
        let iv: u64 = rng.r#gen();
        let mut data = vec![0u8; blocks * 8];
        rng.fill_bytes(&mut data);
        let original = data.clone();

        des::encrypt_cbc(&mut data, &key, iv).unwrap();
        des::decrypt_cbc(&mut data, &key, iv).unwrap();
        assert_eq!(data, original);
    }
}

#[test]
fn reversed_subkeys_invert_the_block_transform() {
    let key = 0x0123_4567_89AB_CDEF;
    let forward = Subkeys::new(key);
    let mut backward = *forward.as_slice();
    backward.reverse();

    let ct = transform_block(0xCAFE_F00D_1234_5678, &forward);
    let pt = transform_block(
        ct,
        &Subkeys::for_action(key, blockcrypt::encryption::Action::Decrypt),
    );

    assert_eq!(pt, 0xCAFE_F00D_1234_5678);
    assert_eq!(
        Subkeys::for_action(key, blockcrypt::encryption::Action::Decrypt).as_slice(),
        &backward
    );
}

// -------------------------------------------------------
// 3. WEAK KEYS
// -------------------------------------------------------

#[test]
fn weak_key_table() {
    assert_eq!(check_key(0x0101_0101_0101_0101), KeyStrength::Weak);
    assert_eq!(check_key(0xFE01_FE01_FE01_FE01), KeyStrength::SemiWeak);
    assert_eq!(check_key(0xE0E0_0101_F1F1_0101), KeyStrength::PossiblyWeak);
    assert_eq!(check_key(0x0123_4567_89AB_CDEF), KeyStrength::NotWeak);
}

#[test]
fn semi_weak_pair_decrypts_each_other() {
    let a = DesKey::new(0x01FE_01FE_01FE_01FE);
    let b = DesKey::new(0xFE01_FE01_FE01_FE01);
    let mut data = *b"semiweak";

    des::encrypt_with_policy(&mut data, &a, &WeakKeyPolicy::ALLOW).unwrap();
    des::encrypt_with_policy(&mut data, &b, &WeakKeyPolicy::ALLOW).unwrap();
    assert_eq!(&data, b"semiweak");
}

#[test]
fn strict_policy_rejects_weak_key_for_every_entry_point() {
    let key = DesKey::new(0x1F1F_1F1F_0E0E_0E0E);
    let policy = WeakKeyPolicy::STRICT;
    let expected = Err(CipherError::KeyTooWeak(KeyStrength::Weak));
    let mut data = [0u8; 8];

    assert_eq!(des::encrypt_with_policy(&mut data, &key, &policy), expected);
    assert_eq!(des::decrypt_with_policy(&mut data, &key, &policy), expected);
    assert_eq!(des::encrypt_cbc_with_policy(&mut data, &key, 1, &policy), expected);
    assert_eq!(des::decrypt_cbc_with_policy(&mut data, &key, 1, &policy), expected);
}

#[test]
fn possibly_weak_key_is_usable_under_strict_policy() {
    let key = DesKey::new(0x1F1F_0101_0E0E_0101);
    let mut data = *b"possibly";

    des::encrypt_with_policy(&mut data, &key, &WeakKeyPolicy::STRICT).unwrap();
    des::decrypt_with_policy(&mut data, &key, &WeakKeyPolicy::STRICT).unwrap();
    assert_eq!(&data, b"possibly");
}

#[test]
fn bad_length() {
    let mut data = [0u8; 12];
    assert_eq!(
        des::encrypt(&mut data, &DesKey::new(0x1334_5779_9BBC_DFF1)),
        Err(CipherError::BadInput {
            len: 12,
            block_size: 8
        })
    );
}
