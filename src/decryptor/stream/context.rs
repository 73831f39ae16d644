//! # Decryption Context
//!
//! CBC chaining state for streaming decryption. Reads of any size are accepted: bytes are
//! staged in a one-block carry buffer and only whole blocks reach the cipher, so the output
//! does not depend on how the source splits its reads.
//!
//! The most recent plaintext block is held back until the next block arrives (or the stream
//! ends), so the final block can be post-processed by [`trailer`](super::trailer).

use crate::aliases::{Block16, Iv16};
use crate::consts::{AES_BLOCK_SIZE, MAX_READ_CHUNK_SIZE};
use crate::crypto::DecryptionSchedule;
use crate::error::DecryptError;
use crate::utils::xor_blocks;
use aes::Block as AesBlock;
use std::io::{ErrorKind, Read, Write};

pub struct DecryptionContext {
    pub chain_block: Block16,
    pub carry: Block16,
    pub carry_len: usize,
    pub plaintext_block: Block16,
    pub need_write_plaintext: bool,
    pub blocks_decrypted: u64,
    pub bytes_written: u64,
}

impl DecryptionContext {
    #[inline(always)]
    pub fn new_with_iv(iv: &Iv16) -> Self {
        Self {
            chain_block: Block16::new(*iv.expose_secret()),
            carry: Block16::new([0u8; AES_BLOCK_SIZE]),
            carry_len: 0,
            plaintext_block: Block16::new([0u8; AES_BLOCK_SIZE]),
            need_write_plaintext: false,
            blocks_decrypted: 0,
            bytes_written: 0,
        }
    }

    /// Read `input` to end-of-stream in reads of at most `chunk_size` bytes.
    ///
    /// `chunk_size` is clamped to `1..=MAX_READ_CHUNK_SIZE`.
    #[inline(always)]
    pub fn decrypt_cbc_loop<R, W>(
        &mut self,
        input: &mut R,
        output: &mut W,
        cipher: &DecryptionSchedule,
        chunk_size: usize,
    ) -> Result<(), DecryptError>
    where
        R: Read,
        W: Write,
    {
        let mut chunk = vec![0u8; chunk_size.clamp(1, MAX_READ_CHUNK_SIZE)];
        loop {
            let n = match input.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecryptError::Io(e)),
            };
            self.absorb(&chunk[..n], output, cipher)?;
        }
        Ok(())
    }

    /// Feed ciphertext bytes; every completed block is decrypted.
    pub fn absorb<W: Write>(
        &mut self,
        mut input: &[u8],
        output: &mut W,
        cipher: &DecryptionSchedule,
    ) -> Result<(), DecryptError> {
        if self.carry_len > 0 {
            let take = (AES_BLOCK_SIZE - self.carry_len).min(input.len());
            self.carry.expose_secret_mut()[self.carry_len..self.carry_len + take]
                .copy_from_slice(&input[..take]);
            self.carry_len += take;
            input = &input[take..];

            if self.carry_len < AES_BLOCK_SIZE {
                return Ok(());
            }
            let block = *self.carry.expose_secret();
            self.carry_len = 0;
            self.decrypt_block(block, output, cipher)?;
        }

        let mut blocks = input.chunks_exact(AES_BLOCK_SIZE);
        for chunk in &mut blocks {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.decrypt_block(block, output, cipher)?;
        }

        let rest = blocks.remainder();
        self.carry.expose_secret_mut()[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();
        Ok(())
    }

    #[inline(always)]
    fn decrypt_block<W: Write>(
        &mut self,
        ciphertext: [u8; AES_BLOCK_SIZE],
        output: &mut W,
        cipher: &DecryptionSchedule,
    ) -> Result<(), DecryptError> {
        if self.need_write_plaintext {
            output.write_all(self.plaintext_block.expose_secret())?;
            self.bytes_written += AES_BLOCK_SIZE as u64;
        }

        let mut aes_block = AesBlock::from(ciphertext);
        cipher.decrypt_block(&mut aes_block);
        xor_blocks(
            aes_block.as_slice(),
            self.chain_block.expose_secret(),
            self.plaintext_block.expose_secret_mut(),
        );

        *self.chain_block.expose_secret_mut() = ciphertext;
        self.need_write_plaintext = true;
        self.blocks_decrypted += 1;
        Ok(())
    }
}
