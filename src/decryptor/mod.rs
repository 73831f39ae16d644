// src/decryptor/mod.rs

//! Framed decryption facade.
//!
//! Core API: `decrypt(source, key)?` returns the whole plaintext.
//! Streaming: `decrypt_stream(source, writer, key, &options)?` for constant memory.
//! Helpers: `read_iv`, `decrypt_ciphertext_stream` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_sized, decrypt_stream, decrypt_with, DecryptOptions};
pub use read::{read_exact_span, read_iv};
pub use stream::decrypt_ciphertext_stream;
