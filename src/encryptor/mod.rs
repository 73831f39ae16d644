// src/encryptor/mod.rs

//! Framed encryption facade.
//!
//! Core API: `encrypt(src, dst, key, &iv, padding)?` writes a sealed stream.
//! Utility: `write_octets(writer, bytes)?` for raw writes.

pub(crate) mod encrypt;
pub(crate) mod stream;
pub(crate) mod write;

pub use encrypt::encrypt;
#[cfg(feature = "rand")]
pub use encrypt::encrypt_with_random_iv;
pub use stream::encrypt_stream;
pub use write::{write_iv, write_octets};
