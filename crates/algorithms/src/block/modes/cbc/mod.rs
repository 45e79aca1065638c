//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. The chaining register
//! survives across calls, so a message split over several calls produces
//! the same output as a single call (NIST SP 800-38A).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{finish, xor_in_place};
use crate::block::{self, BlockPrimitive, KeySchedule};
use crate::error::{validate, Result};
use camellia_api::{Block, KeyBits, BLOCK_SIZE};

/// CBC chaining register
///
/// Holds the IV until the first block is processed, then the last
/// ciphertext block produced or consumed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CbcState {
    register: Block,
}

impl CbcState {
    pub(crate) fn new(iv: &[u8]) -> Result<Self> {
        validate::iv(iv.len())?;
        let mut register = [0u8; BLOCK_SIZE];
        register.copy_from_slice(iv);
        Ok(Self { register })
    }

    /// Current register contents
    pub fn register(&self) -> &Block {
        &self.register
    }

    /// Encrypt a whole number of blocks, advancing the register on success
    pub(crate) fn encrypt<P: BlockPrimitive>(
        &mut self,
        bits: KeyBits,
        schedule: &KeySchedule<P>,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        validate::block_multiple("CBC plaintext", plaintext.len())?;

        let mut out = Zeroizing::new(Vec::with_capacity(plaintext.len()));
        let mut prev = Zeroizing::new(self.register);

        for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
            // XOR plaintext block with the previous ciphertext block (or IV)
            let mut block = Zeroizing::new(*prev);
            xor_in_place(&mut block[..], chunk);

            // Encrypt; the result is both output and the next chaining value
            *prev = block::encrypt_block(bits, schedule, &block[..])?;
            out.extend_from_slice(&prev[..]);
        }

        // Commit the register only once every block succeeded
        self.register = *prev;
        Ok(finish(out))
    }

    /// Decrypt a whole number of blocks, advancing the register on success
    pub(crate) fn decrypt<P: BlockPrimitive>(
        &mut self,
        bits: KeyBits,
        schedule: &KeySchedule<P>,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        validate::block_multiple("CBC ciphertext", ciphertext.len())?;

        let mut out = Zeroizing::new(Vec::with_capacity(ciphertext.len()));
        let mut prev = Zeroizing::new(self.register);

        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            // Decrypt, then XOR with the previous ciphertext block (or IV)
            let mut block = Zeroizing::new(block::decrypt_block(bits, schedule, chunk)?);
            xor_in_place(&mut block[..], &prev[..]);
            out.extend_from_slice(&block[..]);

            // Save current ciphertext block for the next iteration
            prev.copy_from_slice(chunk);
        }

        self.register = *prev;
        Ok(finish(out))
    }
}

impl core::fmt::Debug for CbcState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CbcState([REDACTED])")
    }
}
