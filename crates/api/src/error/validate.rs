//! Validation utilities shared by the engine layers

use super::{Error, Result};
use camellia_params::utils::symmetric::{CAMELLIA_BLOCK_SIZE, CAMELLIA_KEY_SIZES};

/// Validate a raw key length in bytes
#[inline(always)]
pub fn key_length(len: usize) -> Result<()> {
    if !CAMELLIA_KEY_SIZES.contains(&len) {
        return Err(Error::InvalidKeyLength { bits: len * 8 });
    }
    Ok(())
}

/// Validate that a slice holds exactly one block
#[inline(always)]
pub fn block(context: &'static str, actual: usize) -> Result<()> {
    if actual != CAMELLIA_BLOCK_SIZE {
        return Err(Error::InvalidBlockLength { context, actual });
    }
    Ok(())
}

/// Validate that an input is a whole number of blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize) -> Result<()> {
    if actual % CAMELLIA_BLOCK_SIZE != 0 {
        return Err(Error::InvalidInputLength { context, actual });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv(actual: usize) -> Result<()> {
    if actual != CAMELLIA_BLOCK_SIZE {
        return Err(Error::InvalidIvLength { actual });
    }
    Ok(())
}

/// Validate a counter block returned by a counter generator
#[inline(always)]
pub fn counter_block(actual: usize) -> Result<()> {
    if actual != CAMELLIA_BLOCK_SIZE {
        return Err(Error::InvalidCounterLength { actual });
    }
    Ok(())
}

/// Validate that a parameter is absent for a mode that does not use it
#[inline(always)]
pub fn absent(present: bool, mode: &'static str, parameter: &'static str) -> Result<()> {
    if present {
        return Err(Error::UnexpectedParameter { mode, parameter });
    }
    Ok(())
}
