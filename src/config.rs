//! # Loader Configuration
//!
//! Paths and options are passed in explicitly rather than baked into the entry point.
//! A [`LoaderConfig`] comes from [`Default`] (the historical `model.enc` / `key.pem` pair),
//! from a TOML file, or from either of those with CLI overrides applied on top.
//!
//! ```toml
//! model_path = "models/classifier.enc"
//! key_path = "/run/secrets/model.key"
//! output_path = "models/classifier.bin"   # optional
//! padding = "pkcs7"                       # "none" (default) or "pkcs7"
//! read_chunk_size = 4096
//! ```

use crate::consts::{
    DEFAULT_KEY_PATH, DEFAULT_MODEL_PATH, DEFAULT_READ_CHUNK_SIZE, MAX_READ_CHUNK_SIZE,
};
use crate::decryptor::DecryptOptions;
use crate::error::ConfigError;
use crate::padding::Padding;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Sealed model: IV followed by AES-CBC ciphertext.
    pub model_path: PathBuf,
    /// Key file: raw key as the first whitespace-delimited token.
    pub key_path: PathBuf,
    /// Where the CLI writes the decrypted model. `None` means decrypt-only.
    pub output_path: Option<PathBuf>,
    pub padding: Padding,
    pub read_chunk_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            key_path: PathBuf::from(DEFAULT_KEY_PATH),
            output_path: None,
            padding: Padding::None,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Parse and validate a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "read_chunk_size must be greater than zero".into(),
            ));
        }
        if self.read_chunk_size > MAX_READ_CHUNK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "read_chunk_size {} exceeds the {MAX_READ_CHUNK_SIZE}-byte limit",
                self.read_chunk_size
            )));
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("model_path is empty".into()));
        }
        if self.key_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("key_path is empty".into()));
        }
        Ok(())
    }

    pub fn decrypt_options(&self) -> DecryptOptions {
        DecryptOptions {
            padding: self.padding,
            chunk_size: self.read_chunk_size,
        }
    }
}
