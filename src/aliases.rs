//! # Secure-Gate Type Aliases
//!
//! Every buffer that holds key material, chaining state or plaintext is wrapped in a
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate) type: `Debug` is redacted and the
//! bytes can only be read through an explicit `.expose_secret()`.
//!
//! The wrappers do not wipe themselves on drop. Key material and partially decrypted
//! plaintext are wiped explicitly with [`secure_gate::Zeroize`] where they are discarded.
//!
//! ## Fixed-Size Buffers
//! - [`SpanBuffer<N>`] - generic secure stack buffer
//! - [`Block16`] - one AES block (ciphertext, plaintext or CBC chaining state)
//! - [`Iv16`] - the initialization vector prefix of a sealed model file
//!
//! ## Dynamic Secrets
//! - [`KeyMaterial`] - raw key bytes as read from the key file
//! - [`PlainText`] - the decrypted model, handed to a [`ModelSink`](crate::sink::ModelSink)
//!
//! ## Random Secret Generators
//! - [`RandomIv16`] - fresh 16-byte IVs from the OS RNG (`rand` feature)

use secure_gate::{dynamic_alias, fixed_alias};
#[cfg(feature = "rand")]
use secure_gate::random_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Block16, 16); // one AES block
fixed_alias!(Iv16, 16); // IV prefix / initial chaining block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(KeyMaterial, Vec<u8>);
dynamic_alias!(PlainText, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Random secrets
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(feature = "rand")]
random_alias!(RandomIv16, 16);
