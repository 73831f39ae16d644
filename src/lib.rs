// src/lib.rs

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod key;
pub mod loader;
pub mod padding;
pub mod sink;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_sized, decrypt_stream, decrypt_with, DecryptOptions};
pub use encryptor::encrypt;
#[cfg(feature = "rand")]
pub use encryptor::encrypt_with_random_iv;
pub use error::{ConfigError, DecryptError, EncryptError, LoaderError, ModelError};

pub use aliases::{Iv16, KeyMaterial, PlainText};
#[cfg(feature = "rand")]
pub use crypto::rng::random_iv;
pub use config::LoaderConfig;
pub use key::{load_key, read_key_token};
pub use loader::{LoadReport, SecureModelLoader};
pub use padding::Padding;
pub use sink::{DiscardSink, FileSink, MemorySink, ModelSink};
