//! Camellia block cipher
//!
//! 128-bit block cipher with 128, 192 and 256-bit keys (RFC 3713). Keys of
//! 128 bits run 18 Feistel rounds, longer keys run 24, with FL/FL⁻¹ layers
//! after every sixth round.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockPrimitive;
use crate::error::{validate, Error, Result};
use crate::selftest::{vectors, KnownAnswer, SelfTestStatus};
use camellia_api::{Block, KeyBits, BLOCK_SIZE};
use camellia_params::utils::symmetric::CAMELLIA_TABLE_SIZE;

mod rounds;

static CAMELLIA_SELF_TEST: SelfTestStatus = SelfTestStatus::new();

/// Camellia primitive
#[derive(Debug, Clone, Copy, Default)]
pub struct Camellia;

/// Flat table of 8-byte Camellia subkeys
///
/// Always 34 subkeys long; 128-bit keys leave the last 8 unused (zero).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CamelliaKeyTable {
    subkeys: [u8; CAMELLIA_TABLE_SIZE],
}

impl AsRef<[u8]> for CamelliaKeyTable {
    fn as_ref(&self) -> &[u8] {
        &self.subkeys
    }
}

impl fmt::Debug for CamelliaKeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CamelliaKeyTable([REDACTED])")
    }
}

fn to_block(context: &'static str, input: &[u8]) -> Result<Block> {
    validate::block(context, input.len())?;
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(input);
    Ok(block)
}

impl BlockPrimitive for Camellia {
    type KeyTable = CamelliaKeyTable;

    fn name() -> &'static str {
        "Camellia"
    }

    fn expand_key(bits: KeyBits, raw_key: &[u8]) -> Result<CamelliaKeyTable> {
        if raw_key.len() != bits.key_len() {
            return Err(Error::InvalidKeyLength {
                bits: raw_key.len() * 8,
            });
        }

        let mut table = CamelliaKeyTable {
            subkeys: [0u8; CAMELLIA_TABLE_SIZE],
        };
        rounds::expand(bits, raw_key, &mut table.subkeys);
        Ok(table)
    }

    fn encrypt_block(bits: KeyBits, table: &CamelliaKeyTable, input: &[u8]) -> Result<Block> {
        let block = to_block("Camellia encryption input", input)?;
        Ok(rounds::crypt(false, bits, &table.subkeys, &block))
    }

    fn decrypt_block(bits: KeyBits, table: &CamelliaKeyTable, input: &[u8]) -> Result<Block> {
        let block = to_block("Camellia decryption input", input)?;
        Ok(rounds::crypt(true, bits, &table.subkeys, &block))
    }

    fn known_answers() -> &'static [KnownAnswer] {
        &vectors::CAMELLIA
    }

    fn self_test_status() -> &'static SelfTestStatus {
        &CAMELLIA_SELF_TEST
    }
}
