// src/decryptor/stream/mod.rs
pub(crate) mod context;
pub(crate) mod trailer;

use crate::aliases::Iv16;
use crate::crypto::DecryptionSchedule;
use crate::error::DecryptError;
use crate::padding::Padding;
use context::DecryptionContext;
use std::io::{Read, Write};
use trailer::write_final_block;

/// Decrypt the ciphertext that follows the IV, streaming plaintext into `output`.
///
/// Returns the number of plaintext bytes written.
#[inline(always)]
pub fn decrypt_ciphertext_stream<R, W>(
    mut input_reader: R,
    mut output_writer: W,
    initial_vector: &Iv16,
    cipher: &DecryptionSchedule,
    padding: Padding,
    chunk_size: usize,
) -> Result<u64, DecryptError>
where
    R: Read,
    W: Write,
{
    let mut ctx = DecryptionContext::new_with_iv(initial_vector);
    ctx.decrypt_cbc_loop(&mut input_reader, &mut output_writer, cipher, chunk_size)?;
    write_final_block(&mut ctx, &mut output_writer, padding)?;

    tracing::debug!(
        blocks = ctx.blocks_decrypted,
        plaintext_bytes = ctx.bytes_written,
        "ciphertext stream decrypted"
    );
    Ok(ctx.bytes_written)
}
