//! # Constants
//!
//! Block geometry, accepted key sizes and the default file locations.

/// AES block size in bytes. The IV prefix is exactly one block.
pub const AES_BLOCK_SIZE: usize = 16;

/// Default number of bytes requested from the source per read.
///
/// Reads are buffered to block boundaries internally, so any non-zero value
/// produces identical plaintext.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Largest accepted read chunk size (16 MiB). The read buffer is allocated up front.
pub const MAX_READ_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Key lengths accepted by the cipher: AES-128, AES-192 and AES-256.
pub const ACCEPTED_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Longest accepted key, in bytes.
pub const MAX_KEY_SIZE: usize = 32;

/// Model ciphertext loaded when no path is configured.
pub const DEFAULT_MODEL_PATH: &str = "model.enc";

/// Key file loaded when no path is configured.
pub const DEFAULT_KEY_PATH: &str = "key.pem";
