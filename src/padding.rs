//! # Final-Block Padding
//!
//! Sealed model files carry no padding by default: the ciphertext after the IV is a whole
//! number of blocks and the plaintext is returned verbatim. [`Padding::Pkcs7`] is opt-in
//! for files produced with PKCS#7 padding. Neither mode authenticates the ciphertext.

use crate::consts::AES_BLOCK_SIZE;
use crate::error::DecryptError;
use secure_gate::SecureConversionsExt;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How the final plaintext block is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Block-aligned plaintext, emitted as decrypted.
    #[default]
    None,
    /// PKCS#7: the final block ends with `n` bytes of value `n` (1..=16).
    Pkcs7,
}

impl FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Padding::None),
            "pkcs7" => Ok(Padding::Pkcs7),
            other => Err(format!("unknown padding '{other}' (expected none or pkcs7)")),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::None => f.write_str("none"),
            Padding::Pkcs7 => f.write_str("pkcs7"),
        }
    }
}

/// Number of message bytes in a PKCS#7-padded final block.
///
/// The padding bytes are compared in constant time once the padding value is in range.
pub fn pkcs7_unpadded_len(block: &[u8; AES_BLOCK_SIZE]) -> Result<usize, DecryptError> {
    let padding = block[AES_BLOCK_SIZE - 1];

    if padding == 0 || padding as usize > AES_BLOCK_SIZE {
        return Err(DecryptError::InvalidPadding(format!(
            "padding value {padding} out of range"
        )));
    }

    // Constant-time comparison of the padding bytes against their expected value
    let start = AES_BLOCK_SIZE - padding as usize;
    let expected = [padding; AES_BLOCK_SIZE];
    if !block[start..].ct_eq(&expected[start..]) {
        return Err(DecryptError::InvalidPadding("corrupt PKCS#7 padding".into()));
    }

    Ok(start)
}

/// Fill `block[filled..]` with PKCS#7 padding. `filled` must be below the block size.
pub fn pkcs7_pad(block: &mut [u8; AES_BLOCK_SIZE], filled: usize) {
    let pad = (AES_BLOCK_SIZE - filled) as u8;
    block[filled..].fill(pad);
}
