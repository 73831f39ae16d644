//! tests/common.rs
//! Common constants and utilities shared across test files

use std::io::{self, Read};

/// All-zero AES-128 key used by the reference scenario
#[allow(dead_code)] // Used across multiple test files
pub const ZERO_KEY_128: [u8; 16] = [0u8; 16];

/// All-zero IV used by the reference scenario
#[allow(dead_code)]
pub const ZERO_IV: [u8; 16] = [0u8; 16];

/// Plaintext block of the reference scenario
#[allow(dead_code)]
pub const REFERENCE_PLAINTEXT: &[u8; 16] = b"0123456789ABCDEF";

/// AES-128-CBC of `REFERENCE_PLAINTEXT` under `ZERO_KEY_128` / `ZERO_IV`
#[allow(dead_code)]
pub const REFERENCE_CIPHERTEXT_HEX: &str = "42ccf91e2b45e17fb60d5e3cc21ec4c4";

/// Keys for every accepted AES variant
#[allow(dead_code)]
pub const TEST_KEYS: &[&[u8]] = &[
    b"0123456789abcdef",
    b"0123456789abcdef01234567",
    b"0123456789abcdef0123456789abcdef",
];

/// Deterministic non-trivial test payload of `len` bytes
#[allow(dead_code)]
pub fn test_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// `IV ‖ ciphertext` framing for hand-built vectors
#[allow(dead_code)]
pub fn framed(iv: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = iv.to_vec();
    out.extend_from_slice(ciphertext);
    out
}

/// Reader that returns at most `step` bytes per `read` call
#[allow(dead_code)]
pub struct SteppedReader<'a> {
    data: &'a [u8],
    step: usize,
}

#[allow(dead_code)]
impl<'a> SteppedReader<'a> {
    pub fn new(data: &'a [u8], step: usize) -> Self {
        Self { data, step }
    }
}

impl Read for SteppedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that counts how many bytes were pulled from it
#[allow(dead_code)]
pub struct CountingReader<R> {
    inner: R,
    pub consumed: usize,
}

#[allow(dead_code)]
impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n;
        Ok(n)
    }
}

/// Reader that fails every other `read` with `ErrorKind::Interrupted`, otherwise
/// returning at most `step` bytes
#[allow(dead_code)]
pub struct InterruptingReader<'a> {
    data: &'a [u8],
    step: usize,
    interrupt_next: bool,
    pub interruptions: usize,
}

#[allow(dead_code)]
impl<'a> InterruptingReader<'a> {
    pub fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step,
            interrupt_next: true,
            interruptions: 0,
        }
    }
}

impl Read for InterruptingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next && !self.data.is_empty() {
            self.interrupt_next = false;
            self.interruptions += 1;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
