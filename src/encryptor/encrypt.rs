//! src/encryptor/encrypt.rs
//! Framed encryption: writes `IV ‖ AES-CBC(plaintext)`

use crate::aliases::Iv16;
use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::EncryptionSchedule;
use crate::encryptor::stream::encrypt_stream;
use crate::encryptor::write::write_iv;
use crate::error::EncryptError;
use crate::padding::Padding;
use std::io::{Read, Write};

/// Seal `input` into `output` with the given key and IV.
///
/// Produces exactly the layout [`decrypt`](crate::decrypt) consumes. Returns the total number
/// of bytes written, IV included. The key is validated before anything is written.
pub fn encrypt<R, W>(
    mut input: R,
    mut output: W,
    key: &[u8],
    iv: &Iv16,
    padding: Padding,
) -> Result<u64, EncryptError>
where
    R: Read,
    W: Write,
{
    let cipher = EncryptionSchedule::new(key)?;

    write_iv(&mut output, iv)?;
    let ciphertext_len = encrypt_stream(&mut input, &mut output, iv, &cipher, padding)?;

    tracing::debug!(
        key_bits = cipher.key_bits(),
        ciphertext_bytes = ciphertext_len,
        %padding,
        "plaintext sealed"
    );
    Ok(AES_BLOCK_SIZE as u64 + ciphertext_len)
}

/// Seal `input` under a fresh random IV.
#[cfg(feature = "rand")]
pub fn encrypt_with_random_iv<R, W>(
    input: R,
    output: W,
    key: &[u8],
    padding: Padding,
) -> Result<u64, EncryptError>
where
    R: Read,
    W: Write,
{
    let iv = crate::crypto::rng::random_iv();
    encrypt(input, output, key, &iv, padding)
}
