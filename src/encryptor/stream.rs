//! src/encryptor/stream.rs
//! AES-CBC streaming encryption, the inverse of the framed decryptor

use crate::aliases::{Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::EncryptionSchedule;
use crate::error::EncryptError;
use crate::padding::{pkcs7_pad, Padding};
use crate::utils::{read_full, xor_blocks};
use aes::Block as AesBlock;
use std::io::{Read, Write};

/// Encrypt `source` block by block into `destination` (ciphertext only, no IV).
///
/// Returns the number of ciphertext bytes written. With [`Padding::None`] a source whose
/// length is not a multiple of 16 fails with [`EncryptError::UnalignedPlaintext`] once the
/// short block is reached; blocks before it have already been written.
#[inline(always)]
pub fn encrypt_stream<R, W>(
    mut source: R,
    mut destination: W,
    iv: &Iv16,
    cipher: &EncryptionSchedule,
    padding: Padding,
) -> Result<u64, EncryptError>
where
    R: Read,
    W: Write,
{
    let mut prev_block = Block16::new(*iv.expose_secret());
    let mut plaintext_block = Block16::new([0u8; AES_BLOCK_SIZE]);
    let mut xor_output = Block16::new([0u8; AES_BLOCK_SIZE]);
    let mut written = 0u64;

    loop {
        let n = read_full(&mut source, plaintext_block.expose_secret_mut())?;

        let is_final = n < AES_BLOCK_SIZE;
        if is_final {
            match padding {
                Padding::None if n == 0 => break,
                Padding::None => return Err(EncryptError::UnalignedPlaintext { trailing: n }),
                Padding::Pkcs7 => pkcs7_pad(plaintext_block.expose_secret_mut(), n),
            }
        }

        xor_blocks(
            plaintext_block.expose_secret(),
            prev_block.expose_secret(),
            xor_output.expose_secret_mut(),
        );

        let mut aes_block = AesBlock::from(*xor_output.expose_secret());
        cipher.encrypt_block(&mut aes_block);

        destination.write_all(aes_block.as_slice())?;
        prev_block
            .expose_secret_mut()
            .copy_from_slice(aes_block.as_slice());
        written += AES_BLOCK_SIZE as u64;

        if is_final {
            break;
        }
    }

    Ok(written)
}
