//! src/encryptor/write.rs
//! Framing write helpers

use crate::aliases::Iv16;
use crate::error::EncryptError;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), EncryptError> {
    writer.write_all(data).map_err(EncryptError::Io)
}

/// The IV is written in the clear as the first block of the file.
#[inline]
pub fn write_iv<W: Write>(writer: &mut W, iv: &Iv16) -> Result<(), EncryptError> {
    write_octets(writer, iv.expose_secret())
}
