// src/crypto/rng.rs
//! Fresh IVs from the operating system RNG.

use crate::aliases::{Iv16, RandomIv16};
use secure_gate::SecureRandomExt;

/// Draw a random IV. Every sealed file must get its own.
///
/// # Panics
///
/// Panics if the OS RNG fails, as [`SecureRandomExt::new`] does.
#[inline(always)]
pub fn random_iv() -> Iv16 {
    Iv16::new(*RandomIv16::new().expose_secret())
}
