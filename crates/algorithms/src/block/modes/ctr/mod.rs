//! Counter (CTR) mode
//!
//! The key schedule encrypts a stream of counter blocks and the result is
//! XORed with the data, so encryption and decryption are the same
//! operation. Input may be any length. Keystream left over from a short
//! final segment is kept and consumed first by the next call, which makes
//! the output independent of how the caller chunks the data.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use zeroize::Zeroizing;

use super::{finish, xor_in_place};
use crate::block::{self, BlockPrimitive, KeySchedule};
use crate::error::{validate, Result};
use camellia_api::{KeyBits, BLOCK_SIZE};

mod counter;

pub use counter::{CounterGenerator, NonceCounter};

/// CTR chaining state: the counter source and any buffered keystream
pub struct CtrState {
    counter: Box<dyn CounterGenerator>,
    keystream: Zeroizing<Vec<u8>>,
}

impl CtrState {
    pub(crate) fn new(counter: Box<dyn CounterGenerator>) -> Self {
        Self {
            counter,
            keystream: Zeroizing::new(Vec::new()),
        }
    }

    /// Keystream bytes carried over from the previous call
    pub fn buffered(&self) -> usize {
        self.keystream.len()
    }

    /// XOR `data` with keystream
    ///
    /// The buffered keystream is replaced only on success. Counter blocks
    /// drawn before a failure are not returned to the generator.
    pub(crate) fn apply<P: BlockPrimitive>(
        &mut self,
        bits: KeyBits,
        schedule: &KeySchedule<P>,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        let mut out = Zeroizing::new(data.to_vec());

        // Use up keystream left from the previous call first
        let buffered = self.keystream.len().min(data.len());
        xor_in_place(&mut out[..buffered], &self.keystream[..buffered]);
        let mut carry = Zeroizing::new(self.keystream[buffered..].to_vec());

        for segment in out[buffered..].chunks_mut(BLOCK_SIZE) {
            // One fresh counter block per segment
            let counter_block = Zeroizing::new(self.counter.next_block()?);
            validate::counter_block(counter_block.len())?;

            // Encrypt the counter block to get the keystream
            let keystream = Zeroizing::new(block::encrypt_block(bits, schedule, &counter_block)?);
            xor_in_place(segment, &keystream[..]);

            // Short final segment: keep the unused tail for the next call
            if segment.len() < BLOCK_SIZE {
                carry = Zeroizing::new(keystream[segment.len()..].to_vec());
            }
        }

        self.keystream = carry;
        Ok(finish(out))
    }
}

impl core::fmt::Debug for CtrState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrState")
            .field("buffered", &self.keystream.len())
            .finish_non_exhaustive()
    }
}
