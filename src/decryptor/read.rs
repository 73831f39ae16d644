//! src/decryptor/read.rs
//! IV-prefix reading for sealed model streams

use crate::aliases::{Iv16, SpanBuffer};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::DecryptError;
use crate::utils::read_full;
use std::io::Read;

/// Read exactly `N` bytes into a secure stack buffer.
///
/// A source that ends early yields [`DecryptError::TruncatedInput`] carrying the number
/// of bytes that were available.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<SpanBuffer<N>, DecryptError>
where
    R: Read,
{
    let mut buf = SpanBuffer::new([0u8; N]);
    let actual = read_full(reader, buf.expose_secret_mut())?;
    if actual < N {
        return Err(DecryptError::TruncatedInput {
            expected: N,
            actual,
        });
    }
    Ok(buf)
}

/// Read the one-block IV that prefixes every sealed model file.
#[inline(always)]
pub fn read_iv<R>(reader: &mut R) -> Result<Iv16, DecryptError>
where
    R: Read,
{
    read_exact_span::<_, AES_BLOCK_SIZE>(reader)
}
