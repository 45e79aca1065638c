//! Counter block generators

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use camellia_params::utils::symmetric::{CTR_PREFIX_SIZE, CTR_SEQUENCE_SIZE};
use camellia_api::BLOCK_SIZE;

/// Source of counter blocks for CTR mode
///
/// Called once per 16-byte segment. Every block handed out must be fresh for
/// the key in use; the engine checks only the length.
pub trait CounterGenerator: Send {
    /// Produce the next counter block
    fn next_block(&mut self) -> Result<Vec<u8>>;
}

/// Any `FnMut() -> Vec<u8>` closure is a counter generator
impl<F> CounterGenerator for F
where
    F: FnMut() -> Vec<u8> + Send,
{
    fn next_block(&mut self) -> Result<Vec<u8>> {
        Ok(self())
    }
}

/// Counter blocks of the form `prefix(12) || sequence(u32, big-endian)`
///
/// With `prefix = nonce(4) || iv(8)` this is the RFC 5528 layout. The
/// sequence starts at 1 and fails with `CounterExhausted` rather than
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonceCounter {
    prefix: [u8; CTR_PREFIX_SIZE],
    next: Option<u32>,
}

impl NonceCounter {
    /// Counter over `prefix` starting at sequence number 1
    pub fn new(prefix: [u8; CTR_PREFIX_SIZE]) -> Self {
        Self::with_initial(prefix, 1)
    }

    /// RFC 5528 counter from a 4-byte nonce and an 8-byte IV
    pub fn from_nonce_iv(nonce: [u8; 4], iv: [u8; 8]) -> Self {
        let mut prefix = [0u8; CTR_PREFIX_SIZE];
        prefix[..4].copy_from_slice(&nonce);
        prefix[4..].copy_from_slice(&iv);
        Self::new(prefix)
    }

    /// Counter over `prefix` starting at `sequence`
    pub fn with_initial(prefix: [u8; CTR_PREFIX_SIZE], sequence: u32) -> Self {
        Self {
            prefix,
            next: Some(sequence),
        }
    }

    /// Counter with a random prefix
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut prefix = [0u8; CTR_PREFIX_SIZE];
        rng.fill_bytes(&mut prefix);
        Self::new(prefix)
    }

    /// Fixed part of every counter block
    pub fn prefix(&self) -> &[u8; CTR_PREFIX_SIZE] {
        &self.prefix
    }

    /// Sequence number the next block will carry, `None` once exhausted
    pub fn next_sequence(&self) -> Option<u32> {
        self.next
    }
}

impl CounterGenerator for NonceCounter {
    fn next_block(&mut self) -> Result<Vec<u8>> {
        let sequence = self.next.ok_or(Error::CounterExhausted)?;

        let mut block = Vec::with_capacity(BLOCK_SIZE);
        block.extend_from_slice(&self.prefix);
        block.resize(CTR_PREFIX_SIZE + CTR_SEQUENCE_SIZE, 0);
        BigEndian::write_u32(&mut block[CTR_PREFIX_SIZE..], sequence);

        self.next = sequence.checked_add(1);
        Ok(block)
    }
}
