//! # Sealed Model Loader
//!
//! Two stages joined by a byte buffer: the framed decryptor turns the model file into a
//! [`PlainText`](crate::aliases::PlainText), then a [`ModelSink`] takes ownership of it.
//! The decryption stage has no dependency on any model runtime.

use crate::config::LoaderConfig;
use crate::consts::AES_BLOCK_SIZE;
use crate::decryptor::decrypt_sized;
use crate::error::LoaderError;
use crate::key::load_key;
use crate::sink::ModelSink;
use secure_gate::{SecureConversionsExt, Zeroize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub plaintext_bytes: usize,
    pub key_bits: usize,
    /// Hex SHA-256 of the plaintext handed to the sink.
    pub sha256: String,
}

#[derive(Debug, Clone)]
pub struct SecureModelLoader {
    config: LoaderConfig,
}

impl SecureModelLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Decrypt the configured model and hand it to `sink`.
    ///
    /// Both files are opened before anything is read and closed on every exit path. The key
    /// is wiped once decryption finishes, and the plaintext buffer is sized from the model
    /// file up front.
    /// The sink is only invoked once decryption has fully succeeded.
    pub fn load<S>(&self, sink: &mut S) -> Result<LoadReport, LoaderError>
    where
        S: ModelSink + ?Sized,
    {
        let span = tracing::info_span!(
            "load_model",
            model = %self.config.model_path.display(),
            key = %self.config.key_path.display(),
        );
        let _enter = span.enter();

        let result = self.load_inner(sink);
        match &result {
            Ok(report) => tracing::info!(
                bytes = report.plaintext_bytes,
                key_bits = report.key_bits,
                sha256 = %report.sha256,
                "model handed to sink"
            ),
            Err(e) => tracing::error!(error = %e, "model load failed"),
        }
        result
    }

    fn load_inner<S>(&self, sink: &mut S) -> Result<LoadReport, LoaderError>
    where
        S: ModelSink + ?Sized,
    {
        self.config.validate()?;

        let model_file = open_file(&self.config.model_path)?;
        let mut key = load_key(&self.config.key_path)?;
        tracing::debug!(key_len = key.expose_secret().len(), "key loaded");

        // Plaintext never exceeds the ciphertext, so this capacity is never outgrown
        let capacity = model_file
            .metadata()
            .map(|meta| meta.len().saturating_sub(AES_BLOCK_SIZE as u64))
            .ok()
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(0);

        let result = decrypt_sized(
            BufReader::new(model_file),
            key.expose_secret(),
            &self.config.decrypt_options(),
            capacity,
        );
        let key_bits = key.expose_secret().len() * 8;
        key.expose_secret_mut().zeroize();
        let plaintext = result?;

        let report = LoadReport {
            plaintext_bytes: plaintext.expose_secret().len(),
            key_bits,
            sha256: Sha256::digest(plaintext.expose_secret()).as_slice().to_hex(),
        };

        sink.accept(plaintext)?;
        Ok(report)
    }
}

fn open_file(path: &Path) -> Result<File, LoaderError> {
    File::open(path).map_err(|source| LoaderError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
