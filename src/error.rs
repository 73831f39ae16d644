//! # Error Types
//!
//! One error enum per layer. The cipher layers ([`DecryptError`], [`EncryptError`]) know
//! nothing about files or sinks; [`LoaderError`] wraps them together with file-open,
//! configuration and model-sink failures. Every error is terminal: nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Key schedule construction failure, shared by both cipher directions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeySetupError {
    /// Key length is not one of 16, 24 or 32 bytes.
    #[error("invalid key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    /// The block cipher rejected the key.
    #[error("cipher setup failed: {0}")]
    CipherSetupFailed(String),
}

/// The error type for decrypting an IV-framed CBC stream.
#[derive(Error, Debug)]
pub enum DecryptError {
    /// Reading the source or writing plaintext failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source ended before a full IV block was read.
    #[error("truncated input: expected {expected}-byte IV, got {actual} bytes")]
    TruncatedInput { expected: usize, actual: usize },

    /// Key length is not accepted by the cipher.
    #[error("invalid key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    /// The cipher rejected the key.
    #[error("cipher setup failed: {0}")]
    CipherSetupFailed(String),

    /// Ciphertext length after the IV is not a multiple of the block size.
    #[error("ciphertext is not block-aligned: {trailing} trailing bytes")]
    UnalignedCiphertext { trailing: usize },

    /// PKCS#7 padding was requested but the final block does not carry valid padding.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),
}

impl From<KeySetupError> for DecryptError {
    fn from(err: KeySetupError) -> Self {
        match err {
            KeySetupError::InvalidKeySize(len) => DecryptError::InvalidKeySize(len),
            KeySetupError::CipherSetupFailed(msg) => DecryptError::CipherSetupFailed(msg),
        }
    }
}

/// The error type for producing an IV-framed CBC stream.
#[derive(Error, Debug)]
pub enum EncryptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    #[error("cipher setup failed: {0}")]
    CipherSetupFailed(String),

    /// Plaintext is not block-aligned and no padding was requested.
    #[error("plaintext is not block-aligned: {trailing} trailing bytes (use PKCS#7 padding)")]
    UnalignedPlaintext { trailing: usize },
}

impl From<KeySetupError> for EncryptError {
    fn from(err: KeySetupError) -> Self {
        match err {
            KeySetupError::InvalidKeySize(len) => EncryptError::InvalidKeySize(len),
            KeySetupError::CipherSetupFailed(msg) => EncryptError::CipherSetupFailed(msg),
        }
    }
}

/// Failure reported by a [`ModelSink`](crate::sink::ModelSink).
#[derive(Error, Debug)]
pub enum ModelError {
    /// The sink refused the plaintext (e.g. the runtime could not load it).
    #[error("model rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for loading a sealed model into a sink.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The model file or the key file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decryption failed: {0}")]
    Decrypt(#[from] DecryptError),

    #[error("model sink failed: {0}")]
    ModelSink(#[from] ModelError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
