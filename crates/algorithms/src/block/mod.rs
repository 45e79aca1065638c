//! Block primitive boundary and key schedule derivation
//!
//! A [`BlockPrimitive`] turns exactly one 16-byte block into another under a
//! pre-expanded key table. Everything above this layer (modes, self-test)
//! talks to the primitive only through [`KeySchedule`] and the
//! [`encrypt_block`] / [`decrypt_block`] adapters, which check the block
//! length and the key bit-length before the primitive runs.

use core::fmt;
use core::marker::PhantomData;
use zeroize::Zeroize;

use crate::error::{validate, BlockResult, Error, KeyResult, Result};
use crate::selftest::{KnownAnswer, SelfTestStatus};
use camellia_api::{Block, KeyBits};

pub mod camellia;
pub mod modes;

pub use camellia::{Camellia, CamelliaKeyTable};
pub use modes::{CipherSession, CounterGenerator, NonceCounter, SessionParams, SessionState};

/// Single-block cipher primitive
///
/// Implementations are stateless markers; every call receives the key table
/// it should use. The key bit-length is passed alongside the table so that
/// the primitive can pick its round count without inspecting the table.
pub trait BlockPrimitive: Send + Sync + 'static {
    /// Expanded key material
    type KeyTable: AsRef<[u8]> + Zeroize + Clone + Send + Sync;

    /// Name used in logs and self-test failures
    fn name() -> &'static str;

    /// Expand a raw key of `bits.key_len()` bytes
    fn expand_key(bits: KeyBits, raw_key: &[u8]) -> Result<Self::KeyTable>;

    /// Encrypt exactly one block
    fn encrypt_block(bits: KeyBits, table: &Self::KeyTable, input: &[u8]) -> Result<Block>;

    /// Decrypt exactly one block
    fn decrypt_block(bits: KeyBits, table: &Self::KeyTable, input: &[u8]) -> Result<Block>;

    /// Known-answer vectors checked before the first session is served
    fn known_answers() -> &'static [KnownAnswer];

    /// Process-wide record of the self-test outcome
    fn self_test_status() -> &'static SelfTestStatus;
}

/// Expanded key bound to the bit-length it was derived for
///
/// The table is wiped when the schedule is dropped. It is never mutated
/// after derivation, so a schedule can be shared across threads by reference.
pub struct KeySchedule<P: BlockPrimitive = Camellia> {
    table: P::KeyTable,
    bits: KeyBits,
    _primitive: PhantomData<P>,
}

impl<P: BlockPrimitive> KeySchedule<P> {
    /// Derive a schedule from a raw 16, 24 or 32-byte key
    pub fn derive(raw_key: &[u8]) -> KeyResult<Self> {
        validate::key_length(raw_key.len())?;
        let bits = KeyBits::from_key_len(raw_key.len())?;
        let table = P::expand_key(bits, raw_key)?;

        Ok(Self {
            table,
            bits,
            _primitive: PhantomData,
        })
    }

    /// Bit-length the schedule was derived for
    pub fn bits(&self) -> KeyBits {
        self.bits
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &P::KeyTable {
        &self.table
    }
}

impl<P: BlockPrimitive> Drop for KeySchedule<P> {
    fn drop(&mut self) {
        self.table.zeroize();
    }
}

impl<P: BlockPrimitive> fmt::Debug for KeySchedule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("primitive", &P::name())
            .field("bits", &self.bits)
            .field("table", &"[REDACTED]")
            .finish()
    }
}

#[inline]
fn check_bits<P: BlockPrimitive>(bits: KeyBits, schedule: &KeySchedule<P>) -> Result<()> {
    if bits != schedule.bits {
        return Err(Error::KeyScheduleMismatch {
            expected: bits.bits() as usize,
            actual: schedule.bits.bits() as usize,
        });
    }
    Ok(())
}

/// Derive a key schedule for `P`
pub fn derive<P: BlockPrimitive>(raw_key: &[u8]) -> KeyResult<KeySchedule<P>> {
    KeySchedule::derive(raw_key)
}

/// Encrypt one block, checking `bits` against the schedule first
pub fn encrypt_block<P: BlockPrimitive>(
    bits: KeyBits,
    schedule: &KeySchedule<P>,
    input: &[u8],
) -> BlockResult<Block> {
    check_bits(bits, schedule)?;
    validate::block("block encryption input", input.len())?;
    P::encrypt_block(bits, &schedule.table, input)
}

/// Decrypt one block, checking `bits` against the schedule first
pub fn decrypt_block<P: BlockPrimitive>(
    bits: KeyBits,
    schedule: &KeySchedule<P>,
    input: &[u8],
) -> BlockResult<Block> {
    check_bits(bits, schedule)?;
    validate::block("block decryption input", input.len())?;
    P::decrypt_block(bits, &schedule.table, input)
}

/// Raw-bit-length variant of [`encrypt_block`]
///
/// Rejects anything other than 128, 192 or 256 with `InvalidKeyLength`.
pub fn encrypt_block_bits<P: BlockPrimitive>(
    bits: u32,
    schedule: &KeySchedule<P>,
    input: &[u8],
) -> BlockResult<Block> {
    encrypt_block(KeyBits::from_bits(bits)?, schedule, input)
}

/// Raw-bit-length variant of [`decrypt_block`]
pub fn decrypt_block_bits<P: BlockPrimitive>(
    bits: u32,
    schedule: &KeySchedule<P>,
    input: &[u8],
) -> BlockResult<Block> {
    decrypt_block(KeyBits::from_bits(bits)?, schedule, input)
}
