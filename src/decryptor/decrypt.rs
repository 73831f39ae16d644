//! src/decryptor/decrypt.rs
//! Framed decryption: IV prefix followed by AES-CBC ciphertext

use crate::aliases::PlainText;
use crate::consts::DEFAULT_READ_CHUNK_SIZE;
use crate::crypto::DecryptionSchedule;
use crate::decryptor::read::read_iv;
use crate::decryptor::stream::decrypt_ciphertext_stream;
use crate::error::DecryptError;
use crate::padding::Padding;
use secure_gate::Zeroize;
use std::io::{self, ErrorKind, Read, Write};

/// Knobs for [`decrypt_with`] and [`decrypt_stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptOptions {
    /// Treatment of the final plaintext block.
    pub padding: Padding,
    /// Bytes requested from the source per read. Does not affect the output.
    pub chunk_size: usize,
}

impl Default for DecryptOptions {
    fn default() -> Self {
        Self {
            padding: Padding::None,
            chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// Decrypt a sealed stream (`IV ‖ ciphertext`) into memory with default options.
///
/// The key length selects AES-128, AES-192 or AES-256. A key of any other length fails
/// with [`DecryptError::InvalidKeySize`] before `source` is read.
///
/// # Example
///
/// ```
/// use sealed_model::decrypt;
/// use std::io::Cursor;
///
/// let mut sealed = vec![0u8; 16]; // all-zero IV
/// sealed.extend_from_slice(&[
///     0x42, 0xcc, 0xf9, 0x1e, 0x2b, 0x45, 0xe1, 0x7f,
///     0xb6, 0x0d, 0x5e, 0x3c, 0xc2, 0x1e, 0xc4, 0xc4,
/// ]);
///
/// let plaintext = decrypt(Cursor::new(sealed), &[0u8; 16])?;
/// assert_eq!(plaintext.expose_secret().as_slice(), b"0123456789ABCDEF");
/// # Ok::<(), sealed_model::DecryptError>(())
/// ```
pub fn decrypt<R>(source: R, key: &[u8]) -> Result<PlainText, DecryptError>
where
    R: Read,
{
    decrypt_with(source, key, &DecryptOptions::default())
}

/// Decrypt a sealed stream into memory.
///
/// The plaintext buffer grows as blocks arrive, and each reallocation leaves the old buffer
/// unwiped. Use [`decrypt_sized`] when the ciphertext length is known.
pub fn decrypt_with<R>(
    source: R,
    key: &[u8],
    options: &DecryptOptions,
) -> Result<PlainText, DecryptError>
where
    R: Read,
{
    decrypt_sized(source, key, options, 0)
}

/// Decrypt a sealed stream into a buffer of `capacity` bytes reserved up front.
///
/// With `capacity` at least the ciphertext length (source length minus the IV) the buffer is
/// never reallocated. On error the partial plaintext is wiped before it is dropped.
pub fn decrypt_sized<R>(
    source: R,
    key: &[u8],
    options: &DecryptOptions,
    capacity: usize,
) -> Result<PlainText, DecryptError>
where
    R: Read,
{
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity).map_err(|e| {
        DecryptError::Io(io::Error::new(ErrorKind::OutOfMemory, e.to_string()))
    })?;
    let mut plaintext = PlainText::new(buffer);

    let result = decrypt_stream(source, plaintext.expose_secret_mut(), key, options);
    if let Err(e) = result {
        plaintext.expose_secret_mut().zeroize();
        return Err(e);
    }
    Ok(plaintext)
}

/// Decrypt a sealed stream, writing plaintext to `output` as blocks complete.
///
/// Memory use stays constant regardless of input size. Returns the number of plaintext
/// bytes written. On error, `output` may already hold a prefix of the plaintext.
pub fn decrypt_stream<R, W>(
    mut source: R,
    mut output: W,
    key: &[u8],
    options: &DecryptOptions,
) -> Result<u64, DecryptError>
where
    R: Read,
    W: Write,
{
    let cipher = DecryptionSchedule::new(key)?;
    let iv = read_iv(&mut source)?;
    tracing::debug!(
        key_bits = cipher.key_bits(),
        padding = %options.padding,
        "IV read, decrypting ciphertext"
    );

    decrypt_ciphertext_stream(
        &mut source,
        &mut output,
        &iv,
        &cipher,
        options.padding,
        options.chunk_size,
    )
}
