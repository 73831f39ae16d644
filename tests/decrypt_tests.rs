//! tests/decrypt_tests.rs
//! Framed decryption: reference scenario, error paths and chunking independence

mod common;
use common::{
    framed, test_payload, CountingReader, InterruptingReader, SteppedReader,
    REFERENCE_CIPHERTEXT_HEX, REFERENCE_PLAINTEXT, TEST_KEYS, ZERO_IV, ZERO_KEY_128,
};

use sealed_model::aliases::Iv16;
use sealed_model::{
    decrypt, decrypt_sized, decrypt_stream, decrypt_with, encrypt, DecryptError,
    DecryptOptions, Padding,
};
use std::io::Cursor;

fn seal(plaintext: &[u8], key: &[u8], padding: Padding) -> Vec<u8> {
    let iv = Iv16::new(core::array::from_fn(|i| (i as u8).wrapping_mul(17)));
    let mut sealed = Vec::new();
    encrypt(Cursor::new(plaintext), &mut sealed, key, &iv, padding).unwrap();
    sealed
}

// —————————————————————————————————————————————————————————————————————————————
// 1. Reference scenario
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn zero_key_zero_iv_reference_block() {
    let ciphertext = hex::decode(REFERENCE_CIPHERTEXT_HEX).unwrap();
    let source = framed(&ZERO_IV, &ciphertext);

    let plaintext = decrypt(Cursor::new(source), &ZERO_KEY_128).unwrap();
    assert_eq!(plaintext.expose_secret().as_slice(), REFERENCE_PLAINTEXT);
}

#[test]
fn iv_only_source_yields_empty_plaintext() {
    let plaintext = decrypt(Cursor::new(ZERO_IV), &ZERO_KEY_128).unwrap();
    assert!(plaintext.expose_secret().is_empty());
}

// —————————————————————————————————————————————————————————————————————————————
// 2. Error paths
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn source_shorter_than_one_block_is_truncated() {
    for len in [0usize, 1, 8, 15] {
        let err = decrypt(Cursor::new(vec![0u8; len]), &ZERO_KEY_128).unwrap_err();
        match err {
            DecryptError::TruncatedInput { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, len);
            }
            other => panic!("expected TruncatedInput for {len} bytes, got {other:?}"),
        }
    }
}

#[test]
fn invalid_key_size_is_rejected_before_reading_source() {
    let ciphertext = hex::decode(REFERENCE_CIPHERTEXT_HEX).unwrap();
    let source = framed(&ZERO_IV, &ciphertext);

    for len in [0usize, 1, 15, 17, 20, 31, 33, 48] {
        let key = vec![0x11u8; len];
        let mut reader = CountingReader::new(Cursor::new(&source));
        let err = decrypt(&mut reader, &key).unwrap_err();

        assert!(
            matches!(err, DecryptError::InvalidKeySize(n) if n == len),
            "key of {len} bytes: got {err:?}"
        );
        assert_eq!(reader.consumed, 0, "source was read for a {len}-byte key");
    }
}

#[test]
fn unaligned_ciphertext_is_rejected() {
    let mut source = framed(&ZERO_IV, &hex::decode(REFERENCE_CIPHERTEXT_HEX).unwrap());
    source.extend_from_slice(&[0xAA; 5]);

    let err = decrypt(Cursor::new(source), &ZERO_KEY_128).unwrap_err();
    assert!(matches!(err, DecryptError::UnalignedCiphertext { trailing: 5 }));
}

#[test]
fn pkcs7_mode_rejects_garbage_final_block() {
    // The reference plaintext ends in 'F' (0x46): not valid PKCS#7
    let source = framed(&ZERO_IV, &hex::decode(REFERENCE_CIPHERTEXT_HEX).unwrap());
    let options = DecryptOptions {
        padding: Padding::Pkcs7,
        ..DecryptOptions::default()
    };

    let err = decrypt_with(Cursor::new(source), &ZERO_KEY_128, &options).unwrap_err();
    assert!(matches!(err, DecryptError::InvalidPadding(_)));
}

#[test]
fn pkcs7_mode_rejects_iv_only_source() {
    let options = DecryptOptions {
        padding: Padding::Pkcs7,
        ..DecryptOptions::default()
    };
    let err = decrypt_with(Cursor::new(ZERO_IV), &ZERO_KEY_128, &options).unwrap_err();
    assert!(matches!(err, DecryptError::InvalidPadding(_)));
}

#[test]
fn wrong_key_is_not_detected() {
    // No authentication: a wrong key silently yields different bytes
    let plaintext = test_payload(64);
    let sealed = seal(&plaintext, TEST_KEYS[0], Padding::None);

    let wrong = decrypt(Cursor::new(sealed), b"fedcba9876543210").unwrap();
    assert_eq!(wrong.expose_secret().len(), plaintext.len());
    assert_ne!(wrong.expose_secret().as_slice(), plaintext.as_slice());
}

// —————————————————————————————————————————————————————————————————————————————
// 3. Determinism and chunking independence
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn output_is_independent_of_source_read_sizes() {
    let plaintext = test_payload(16 * 150);
    let sealed = seal(&plaintext, TEST_KEYS[2], Padding::None);

    let reference = decrypt(Cursor::new(&sealed), TEST_KEYS[2]).unwrap();
    assert_eq!(reference.expose_secret().as_slice(), plaintext.as_slice());

    for step in [1usize, 3, 7, 15, 16, 17, 33, 1000, 1024, 4096] {
        let out = decrypt(SteppedReader::new(&sealed, step), TEST_KEYS[2]).unwrap();
        assert_eq!(
            out.expose_secret(),
            reference.expose_secret(),
            "source step {step} changed the plaintext"
        );
    }
}

#[test]
fn output_is_independent_of_internal_chunk_size() {
    let plaintext = test_payload(16 * 77);
    let sealed = seal(&plaintext, TEST_KEYS[1], Padding::None);

    for chunk_size in [1usize, 5, 16, 100, 1024, 65536] {
        let options = DecryptOptions {
            chunk_size,
            ..DecryptOptions::default()
        };
        let out = decrypt_with(Cursor::new(&sealed), TEST_KEYS[1], &options).unwrap();
        assert_eq!(
            out.expose_secret().as_slice(),
            plaintext.as_slice(),
            "chunk size {chunk_size} changed the plaintext"
        );
    }
}

#[test]
fn interrupted_reads_are_retried() {
    // 5-byte steps: interruptions land inside the IV and mid-ciphertext
    let source = framed(&ZERO_IV, &hex::decode(REFERENCE_CIPHERTEXT_HEX).unwrap());
    let mut reader = InterruptingReader::new(&source, 5);
    let plaintext = decrypt(&mut reader, &ZERO_KEY_128).unwrap();

    assert_eq!(plaintext.expose_secret().as_slice(), REFERENCE_PLAINTEXT);
    assert!(reader.interruptions >= 4, "only {} interruptions", reader.interruptions);

    let payload = test_payload(16 * 40);
    let sealed = seal(&payload, TEST_KEYS[2], Padding::Pkcs7);
    let options = DecryptOptions {
        padding: Padding::Pkcs7,
        chunk_size: 7,
    };
    let mut reader = InterruptingReader::new(&sealed, 3);
    let out = decrypt_with(&mut reader, TEST_KEYS[2], &options).unwrap();
    assert_eq!(out.expose_secret().as_slice(), payload.as_slice());
}

#[test]
fn oversized_chunk_size_is_clamped() {
    let plaintext = test_payload(16 * 5);
    let sealed = seal(&plaintext, TEST_KEYS[0], Padding::None);
    let options = DecryptOptions {
        chunk_size: usize::MAX,
        ..DecryptOptions::default()
    };
    let out = decrypt_with(Cursor::new(&sealed), TEST_KEYS[0], &options).unwrap();
    assert_eq!(out.expose_secret().as_slice(), plaintext.as_slice());
}

#[test]
fn repeated_decryption_is_deterministic() {
    let sealed = seal(&test_payload(16 * 9), TEST_KEYS[0], Padding::None);
    let a = decrypt(Cursor::new(&sealed), TEST_KEYS[0]).unwrap();
    let b = decrypt(Cursor::new(&sealed), TEST_KEYS[0]).unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());
}

// —————————————————————————————————————————————————————————————————————————————
// 4. Streaming API
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn decrypt_stream_reports_bytes_written() {
    let plaintext = test_payload(1000);
    let sealed = seal(&plaintext, TEST_KEYS[2], Padding::Pkcs7);
    let options = DecryptOptions {
        padding: Padding::Pkcs7,
        chunk_size: 64,
    };

    let mut out = Vec::new();
    let written = decrypt_stream(Cursor::new(&sealed), &mut out, TEST_KEYS[2], &options).unwrap();

    assert_eq!(written, 1000);
    assert_eq!(out, plaintext);
}

#[test]
fn decrypt_sized_keeps_the_reserved_buffer() {
    let plaintext = test_payload(16 * 64);
    let sealed = seal(&plaintext, TEST_KEYS[1], Padding::None);
    let capacity = sealed.len() - 16;

    let out = decrypt_sized(
        Cursor::new(&sealed),
        TEST_KEYS[1],
        &DecryptOptions::default(),
        capacity,
    )
    .unwrap();

    assert_eq!(out.expose_secret().as_slice(), plaintext.as_slice());
    assert!(out.expose_secret().capacity() >= capacity);
}

#[test]
fn decrypt_sized_reports_errors_like_decrypt_with() {
    let mut sealed = seal(&test_payload(32), TEST_KEYS[0], Padding::None);
    sealed.push(0);

    let err = decrypt_sized(
        Cursor::new(&sealed),
        TEST_KEYS[0],
        &DecryptOptions::default(),
        sealed.len(),
    )
    .unwrap_err();
    assert!(matches!(err, DecryptError::UnalignedCiphertext { trailing: 1 }));
}
