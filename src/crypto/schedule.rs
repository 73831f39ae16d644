//! src/crypto/schedule.rs
//! AES key schedules, selected by key length.
//!
//! Decryption always uses the cipher's dedicated decryption schedule (`AesNNNDec`);
//! encryption uses `AesNNNEnc`. The two are never mixed.

use crate::error::KeySetupError;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Aes192Dec, Aes192Enc, Aes256Dec, Aes256Enc, Block as AesBlock};
use std::fmt;

/// Expanded decryption round keys for AES-128, AES-192 or AES-256.
pub enum DecryptionSchedule {
    Aes128(Aes128Dec),
    Aes192(Aes192Dec),
    Aes256(Aes256Dec),
}

impl DecryptionSchedule {
    /// Derive the decryption schedule. The key length selects the AES variant.
    pub fn new(key: &[u8]) -> Result<Self, KeySetupError> {
        let schedule = match key.len() {
            16 => Aes128Dec::new_from_slice(key).map(Self::Aes128),
            24 => Aes192Dec::new_from_slice(key).map(Self::Aes192),
            32 => Aes256Dec::new_from_slice(key).map(Self::Aes256),
            other => return Err(KeySetupError::InvalidKeySize(other)),
        };
        schedule.map_err(|e| KeySetupError::CipherSetupFailed(e.to_string()))
    }

    #[inline(always)]
    pub fn decrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(cipher) => cipher.decrypt_block(block),
            Self::Aes192(cipher) => cipher.decrypt_block(block),
            Self::Aes256(cipher) => cipher.decrypt_block(block),
        }
    }

    pub fn key_bits(&self) -> usize {
        match self {
            Self::Aes128(_) => 128,
            Self::Aes192(_) => 192,
            Self::Aes256(_) => 256,
        }
    }
}

impl fmt::Debug for DecryptionSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecryptionSchedule(AES-{})", self.key_bits())
    }
}

/// Expanded encryption round keys for AES-128, AES-192 or AES-256.
pub enum EncryptionSchedule {
    Aes128(Aes128Enc),
    Aes192(Aes192Enc),
    Aes256(Aes256Enc),
}

impl EncryptionSchedule {
    pub fn new(key: &[u8]) -> Result<Self, KeySetupError> {
        let schedule = match key.len() {
            16 => Aes128Enc::new_from_slice(key).map(Self::Aes128),
            24 => Aes192Enc::new_from_slice(key).map(Self::Aes192),
            32 => Aes256Enc::new_from_slice(key).map(Self::Aes256),
            other => return Err(KeySetupError::InvalidKeySize(other)),
        };
        schedule.map_err(|e| KeySetupError::CipherSetupFailed(e.to_string()))
    }

    #[inline(always)]
    pub fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block),
            Self::Aes192(cipher) => cipher.encrypt_block(block),
            Self::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }

    pub fn key_bits(&self) -> usize {
        match self {
            Self::Aes128(_) => 128,
            Self::Aes192(_) => 192,
            Self::Aes256(_) => 256,
        }
    }
}

impl fmt::Debug for EncryptionSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptionSchedule(AES-{})", self.key_bits())
    }
}
