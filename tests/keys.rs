use blockcrypt::encryption::des::KeyStrength;
use blockcrypt::encryption::{Mode, ParseOptionError};
use blockcrypt::keys::{AesKey, DesKey, KeyParseError};

#[test]
fn aes_hex_keys_select_size() {
    let k128: AesKey = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
    let k192: AesKey = "000102030405060708090a0b0c0d0e0f1011121314151617".parse().unwrap();
    let k256: AesKey = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        .parse()
        .unwrap();

    assert_eq!(k128.bits(), 128);
    assert_eq!(k192.bits(), 192);
    assert_eq!(k256.bits(), 256);
    assert_eq!(k128.as_bytes()[15], 0x0f);
}

#[test]
fn aes_ascii_and_quoted_keys() {
    let plain: AesKey = "sixteen byte key".parse().unwrap();
    assert_eq!(plain, AesKey::Aes128(*b"sixteen byte key"));

    let quoted: AesKey = "'twenty-four byte key!!!!'".parse().unwrap();
    assert_eq!(quoted, AesKey::Aes192(*b"twenty-four byte key!!!!"));
}

#[test]
fn aes_rejects_odd_lengths() {
    assert!(matches!(
        "too short".parse::<AesKey>(),
        Err(KeyParseError::Malformed { .. })
    ));
    assert!("'unterminated quote".parse::<AesKey>().is_err());
}

#[test]
fn des_key_forms() {
    let hex: DesKey = "0E329232EA6D0D73".parse().unwrap();
    assert_eq!(hex.value(), 0x0E32_9232_EA6D_0D73);

    let ascii: DesKey = "12345678".parse().unwrap();
    assert_eq!(ascii, DesKey::from_bytes(*b"12345678"));

    assert!("0E329232EA6D0D7".parse::<DesKey>().is_err());
    assert!("0E329232EA6D0D7300".parse::<DesKey>().is_err());
}

#[test]
fn des_key_strength() {
    let weak: DesKey = "0101010101010101".parse().unwrap();
    assert_eq!(weak.strength(), KeyStrength::Weak);
}

#[test]
fn key_debug_output_is_redacted() {
    let aes: AesKey = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
    let des: DesKey = "133457799BBCDFF1".parse().unwrap();

    assert_eq!(format!("{aes:?}"), "AesKey::Aes128(..)");
    assert_eq!(format!("{des:?}"), "DesKey(..)");
}

#[test]
fn aes_key_sizes_select_round_counts() {
    assert_eq!(AesKey::Aes128([0; 16]).rounds(), 10);
    assert_eq!(AesKey::Aes192([0; 24]).rounds(), 12);
    assert_eq!(AesKey::Aes256([0; 32]).rounds(), 14);
}

#[test]
fn aes_from_slice_rejects_odd_lengths() {
    assert!(AesKey::from_slice(&[0; 15]).is_none());
    assert!(AesKey::from_slice(&[0; 20]).is_none());
    assert_eq!(AesKey::from_slice(&[7; 24]).map(|k| k.bits()), Some(192));
}

#[test]
fn hex_wins_over_ascii() {
    // 16 hex digits are also 16 ASCII characters.
    let key: AesKey = "00112233445566778899aabbccddeeff".parse().unwrap();
    assert_eq!(key.bits(), 128);
    assert_eq!(key.as_bytes()[15], 0xff);

    let key: DesKey = "0123456789abcdef".parse().unwrap();
    assert_eq!(key.value(), 0x0123_4567_89AB_CDEF);
}

#[test]
fn des_ascii_keys_are_big_endian() {
    let plain: DesKey = "ABCDEFGH".parse().unwrap();
    assert_eq!(plain.value(), u64::from_be_bytes(*b"ABCDEFGH"));

    let quoted: DesKey = "'pass wd!'".parse().unwrap();
    assert_eq!(quoted.value(), u64::from_be_bytes(*b"pass wd!"));

    assert!("short".parse::<DesKey>().is_err());
}

#[test]
fn modes_parse_case_insensitively() {
    assert_eq!("ECB".parse::<Mode>(), Ok(Mode::Ecb));
    assert_eq!("CbC".parse::<Mode>(), Ok(Mode::Cbc));
    assert_eq!(
        "ctr".parse::<Mode>(),
        Err(ParseOptionError::Mode("ctr".to_string()))
    );
    assert_eq!(Mode::Ecb.to_string(), "ECB");
}
