//! # Model Sinks
//!
//! A [`ModelSink`] receives the decrypted model bytes. It is the boundary to whatever
//! model-serving runtime consumes them; the decryptor knows nothing about model formats.
//! A sink error is reported to the caller as-is and never retried.

use crate::aliases::PlainText;
use crate::error::ModelError;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Consumer of decrypted model bytes.
pub trait ModelSink {
    fn accept(&mut self, plaintext: PlainText) -> Result<(), ModelError>;
}

impl<F> ModelSink for F
where
    F: FnMut(PlainText) -> Result<(), ModelError>,
{
    fn accept(&mut self, plaintext: PlainText) -> Result<(), ModelError> {
        self(plaintext)
    }
}

/// Writes the plaintext to a file for an external runtime to pick up.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSink for FileSink {
    fn accept(&mut self, plaintext: PlainText) -> Result<(), ModelError> {
        let mut file = File::create(&self.path)?;
        file.write_all(plaintext.expose_secret())?;
        file.sync_all()?;
        tracing::debug!(path = %self.path.display(), "plaintext written");
        Ok(())
    }
}

/// Keeps the plaintext in memory.
#[derive(Default)]
pub struct MemorySink {
    model: Option<PlainText>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&PlainText> {
        self.model.as_ref()
    }

    pub fn into_model(self) -> Option<PlainText> {
        self.model
    }
}

impl ModelSink for MemorySink {
    fn accept(&mut self, plaintext: PlainText) -> Result<(), ModelError> {
        self.model = Some(plaintext);
        Ok(())
    }
}

/// Accepts and drops the plaintext; a dry run that only proves decryption succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl ModelSink for DiscardSink {
    fn accept(&mut self, _plaintext: PlainText) -> Result<(), ModelError> {
        Ok(())
    }
}
