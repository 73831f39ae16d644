// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! AES key schedules for both CBC directions, and OS-backed IV generation.

#[cfg(feature = "rand")]
pub mod rng;
pub mod schedule;

pub use schedule::{DecryptionSchedule, EncryptionSchedule};
