//! # Key File Loading
//!
//! The key file holds raw key material as its first whitespace-delimited token. Nothing
//! else is interpreted: no PEM armour, no encoding, no derivation. The token's byte length
//! selects the AES variant later, in [`DecryptionSchedule`](crate::crypto::DecryptionSchedule).

use crate::aliases::KeyMaterial;
use crate::consts::MAX_KEY_SIZE;
use crate::error::{DecryptError, LoaderError};
use secure_gate::Zeroize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read the first whitespace-delimited token from `reader`.
///
/// Leading ASCII whitespace is skipped; reading stops at the first whitespace byte after the
/// token or at end-of-stream. An empty token is reported as [`DecryptError::InvalidKeySize`]
/// with length 0, and so is a token longer than [`MAX_KEY_SIZE`], with its full length.
///
/// The key buffer is allocated once at [`MAX_KEY_SIZE`] bytes and never grows. It is wiped
/// on every error path.
pub fn read_key_token<R: Read>(reader: R) -> Result<KeyMaterial, DecryptError> {
    let mut key = KeyMaterial::new(Vec::with_capacity(MAX_KEY_SIZE));

    let filled = fill_token(reader, key.expose_secret_mut());
    match filled {
        Ok(len) if len > 0 && len == key.expose_secret().len() => Ok(key),
        Ok(len) => {
            key.expose_secret_mut().zeroize();
            Err(DecryptError::InvalidKeySize(len))
        }
        Err(e) => {
            key.expose_secret_mut().zeroize();
            Err(DecryptError::Io(e))
        }
    }
}

/// Push at most `MAX_KEY_SIZE` token bytes into `buf`; returns the full token length.
fn fill_token<R: Read>(reader: R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut len = 0;
    for byte in reader.bytes() {
        let byte = byte?;
        if byte.is_ascii_whitespace() {
            if len == 0 {
                continue;
            }
            break;
        }
        if buf.len() < MAX_KEY_SIZE {
            buf.push(byte);
        }
        len += 1;
    }
    Ok(len)
}

/// Open `path` and read its key token. The file handle is closed before returning.
pub fn load_key(path: &Path) -> Result<KeyMaterial, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_key_token(BufReader::new(file))?)
}
