use blockcrypt::CipherError;
use blockcrypt::encryption::des::KeyStrength;

#[test]
fn bad_input_message() {
    let err = CipherError::BadInput {
        len: 7,
        block_size: 8,
    };
    assert_eq!(
        err.to_string(),
        "input must be a multiple of 8 bytes (got 7 bytes)"
    );
}

#[test]
fn key_too_weak_message() {
    let err = CipherError::KeyTooWeak(KeyStrength::SemiWeak);
    assert_eq!(err.to_string(), "DES key rejected as semi-weak");
}

#[test]
fn invalid_chunk_message_names_the_length() {
    let err = CipherError::InvalidChunkSize(100);
    assert!(err.to_string().contains("100 bytes"));
}

#[test]
fn errors_compare_by_variant_and_payload() {
    assert_eq!(CipherError::TooBig(1), CipherError::TooBig(1));
    assert_ne!(CipherError::TooBig(1), CipherError::TooBig(2));
    assert_ne!(CipherError::TooBig(1), CipherError::CorruptFile);
}
