//! src/decryptor/stream/trailer.rs
//! End-of-stream processing: alignment check and final block writing

use crate::consts::AES_BLOCK_SIZE;
use crate::decryptor::stream::context::DecryptionContext;
use crate::error::DecryptError;
use crate::padding::{pkcs7_unpadded_len, Padding};
use std::io::Write;

/// Reject ciphertext that ended in the middle of a block.
#[inline(always)]
pub fn ensure_block_aligned(ctx: &DecryptionContext) -> Result<(), DecryptError> {
    if ctx.carry_len != 0 {
        return Err(DecryptError::UnalignedCiphertext {
            trailing: ctx.carry_len,
        });
    }
    Ok(())
}

/// Write the held-back final block verbatim (no padding).
#[inline(always)]
pub fn write_final_raw<W: Write>(
    ctx: &mut DecryptionContext,
    output: &mut W,
) -> Result<(), DecryptError> {
    if ctx.need_write_plaintext {
        output.write_all(ctx.plaintext_block.expose_secret())?;
        ctx.bytes_written += AES_BLOCK_SIZE as u64;
        ctx.need_write_plaintext = false;
    }
    Ok(())
}

/// Validate and strip PKCS#7 padding from the held-back final block.
#[inline(always)]
pub fn write_final_pkcs7<W: Write>(
    ctx: &mut DecryptionContext,
    output: &mut W,
) -> Result<(), DecryptError> {
    if !ctx.need_write_plaintext {
        return Err(DecryptError::InvalidPadding(
            "missing final padded block".into(),
        ));
    }

    let len = pkcs7_unpadded_len(ctx.plaintext_block.expose_secret())?;
    output.write_all(&ctx.plaintext_block.expose_secret()[..len])?;
    ctx.bytes_written += len as u64;
    ctx.need_write_plaintext = false;
    Ok(())
}

/// Finish the stream according to the padding mode.
pub fn write_final_block<W: Write>(
    ctx: &mut DecryptionContext,
    output: &mut W,
    padding: Padding,
) -> Result<(), DecryptError> {
    ensure_block_aligned(ctx)?;
    match padding {
        Padding::None => write_final_raw(ctx, output),
        Padding::Pkcs7 => write_final_pkcs7(ctx, output),
    }
}
