//! Electronic codebook (ECB) mode
//!
//! Each block is transformed independently under the same key schedule.
//! There is no chaining state, so identical plaintext blocks produce
//! identical ciphertext blocks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::finish;
use crate::block::{self, BlockPrimitive, KeySchedule};
use crate::error::{validate, Result};
use camellia_api::{Direction, KeyBits, BLOCK_SIZE};

/// Transform a whole number of blocks
pub(crate) fn process<P: BlockPrimitive>(
    bits: KeyBits,
    schedule: &KeySchedule<P>,
    direction: Direction,
    data: &[u8],
) -> Result<Vec<u8>> {
    let context = match direction {
        Direction::Encrypt => "ECB plaintext",
        Direction::Decrypt => "ECB ciphertext",
    };
    validate::block_multiple(context, data.len())?;

    let mut out = Zeroizing::new(Vec::with_capacity(data.len()));
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let block = match direction {
            Direction::Encrypt => block::encrypt_block(bits, schedule, chunk)?,
            Direction::Decrypt => block::decrypt_block(bits, schedule, chunk)?,
        };
        out.extend_from_slice(&block);
    }

    Ok(finish(out))
}
